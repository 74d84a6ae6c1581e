//! Course detail pages.

use crate::modules::courses::model::CourseDetailView;
use crate::modules::map_rpc_error;
use crate::state::AppState;
use campusgrid_core::AppError;
use campusgrid_ident::ResourceType;
use tracing::{instrument, warn};

pub struct CourseService;

impl CourseService {
    /// Builds a course's detail page, enrolled students included.
    #[instrument(skip(state))]
    pub async fn detail_page(
        state: &AppState,
        encoded_id: &str,
        semester: &str,
    ) -> Result<CourseDetailView, AppError> {
        let course_id = state
            .codec
            .decode(encoded_id, ResourceType::Course)
            .map_err(|e| {
                warn!(error = %e, "rejecting encoded course id");
                AppError::invalid_identifier()
            })?;

        let course = state
            .rpc
            .get_course(semester, &course_id)
            .await
            .map_err(map_rpc_error)?;

        Ok(CourseDetailView {
            semester: semester.to_string(),
            day: course.lesson.day(),
            slot: course.lesson.slot(),
            teachers_display: course.display_teachers(),
            course,
        })
    }
}
