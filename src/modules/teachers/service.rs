//! Teacher timetable pages.

use crate::modules::map_rpc_error;
use crate::modules::teachers::model::TeacherTimetableView;
use crate::state::AppState;
use campusgrid_core::{AppError, semester_views};
use campusgrid_ident::ResourceType;
use campusgrid_models::TimetableGrid;
use tracing::{instrument, warn};

pub struct TeacherService;

impl TeacherService {
    /// Builds a teacher's timetable page. Teacher pages carry no privacy
    /// gate; only students own a privacy level.
    #[instrument(skip(state))]
    pub async fn timetable_page(
        state: &AppState,
        encoded_id: &str,
        semester: &str,
    ) -> Result<TeacherTimetableView, AppError> {
        let teacher_id = state
            .codec
            .decode(encoded_id, ResourceType::Teacher)
            .map_err(|e| {
                warn!(error = %e, "rejecting encoded teacher id");
                AppError::invalid_identifier()
            })?;

        let timetable = state
            .rpc
            .get_teacher_timetable(&teacher_id, semester)
            .await
            .map_err(map_rpc_error)?;

        let semesters = semester_views(semester, &timetable.semesters);
        Ok(TeacherTimetableView {
            name: timetable.name,
            teacher_id_encoded: timetable.teacher_id_encoded,
            title: timetable.title,
            unit: timetable.unit,
            semester: semester.to_string(),
            semesters,
            grid: TimetableGrid::place(timetable.courses),
        })
    }
}
