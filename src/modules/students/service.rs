//! Student timetable pages: decode, fetch, gate, place.

use crate::modules::map_rpc_error;
use crate::modules::students::model::{BlockedTimetableView, StudentPage, StudentTimetableView};
use crate::state::AppState;
use campusgrid_core::{AppError, semester_views};
use campusgrid_ident::ResourceType;
use campusgrid_models::{
    PrivacyLevel, TimetableGrid, ViewerIdentity, ViewerPrivacy, Visibility, evaluate_visibility,
};
use tracing::{info, instrument, warn};

pub struct StudentService;

impl StudentService {
    /// Builds a student's timetable page, subject to their privacy level.
    ///
    /// `viewer` is `None` for anonymous visits. Non-blocked, non-owner
    /// visits are recorded off the request path; a tracking failure never
    /// blocks the response.
    #[instrument(skip(state, viewer), fields(viewer_present = viewer.is_some()))]
    pub async fn timetable_page(
        state: &AppState,
        encoded_id: &str,
        semester: &str,
        viewer: Option<&ViewerIdentity>,
    ) -> Result<StudentPage, AppError> {
        let student_id = state
            .codec
            .decode(encoded_id, ResourceType::Student)
            .map_err(|e| {
                warn!(error = %e, "rejecting encoded student id");
                AppError::invalid_identifier()
            })?;

        let timetable = state
            .rpc
            .get_student_timetable(&student_id, semester)
            .await
            .map_err(map_rpc_error)?;

        let target_level = state.privacy.get_level(&student_id).await?;
        let viewer_privacy = match viewer {
            None => None,
            Some(v) => {
                let is_owner = v.is_owner_of(&timetable.student_id);
                // The gate only consults the viewer's own level for
                // non-owner visits to mutual targets.
                let own_level = if !is_owner && target_level == PrivacyLevel::Mutual {
                    state.privacy.get_level(&v.student_id).await?
                } else {
                    PrivacyLevel::default()
                };
                Some(ViewerPrivacy {
                    is_owner,
                    own_level,
                })
            }
        };

        if let Visibility::Blocked(reason) = evaluate_visibility(target_level, viewer_privacy.as_ref())
        {
            return Ok(StudentPage::Blocked(BlockedTimetableView {
                name: timetable.name,
                deputy: timetable.deputy,
                class_name: timetable.class_name,
                reason,
                message: reason.message().to_string(),
            }));
        }

        if let Some(v) = viewer {
            if !v.is_owner_of(&timetable.student_id) {
                let visitors = state.visitors.clone();
                let host_id = timetable.student_id.clone();
                let visitor = v.clone();
                tokio::spawn(async move {
                    if let Err(e) = visitors.record_visit(&host_id, &visitor).await {
                        warn!(error = %e, "visitor trail write failed");
                    }
                });
            }
        }
        {
            let visitors = state.visitors.clone();
            let host_id = timetable.student_id.clone();
            let viewer = viewer.cloned();
            tokio::spawn(async move {
                if let Err(e) = visitors.incr_count(&host_id, viewer.as_ref()).await {
                    warn!(error = %e, "visitor counter write failed");
                }
            });
        }

        let semesters = semester_views(semester, &timetable.semesters);
        Ok(StudentPage::Visible(StudentTimetableView {
            name: timetable.name,
            student_id_encoded: timetable.student_id_encoded,
            deputy: timetable.deputy,
            class_name: timetable.class_name,
            semester: semester.to_string(),
            semesters,
            grid: TimetableGrid::place(timetable.courses),
        }))
    }

    /// Changes the viewer's own privacy level.
    #[instrument(skip(state, viewer), fields(viewer = %viewer.student_id))]
    pub async fn update_privacy_level(
        state: &AppState,
        viewer: &ViewerIdentity,
        stored_level: u8,
    ) -> Result<PrivacyLevel, AppError> {
        let level = PrivacyLevel::from_stored(stored_level).ok_or_else(|| {
            AppError::bad_request(anyhow::anyhow!("privacy level must be 0, 1 or 2"))
        })?;

        state.privacy.set_level(&viewer.student_id, level).await?;
        info!(level = stored_level, "privacy level updated");
        Ok(level)
    }
}
