//! Classroom timetable pages.

use crate::modules::classrooms::model::ClassroomTimetableView;
use crate::modules::map_rpc_error;
use crate::state::AppState;
use campusgrid_core::{AppError, semester_views};
use campusgrid_ident::ResourceType;
use campusgrid_models::TimetableGrid;
use tracing::{instrument, warn};

pub struct ClassroomService;

impl ClassroomService {
    /// Builds a classroom's occupancy page.
    #[instrument(skip(state))]
    pub async fn timetable_page(
        state: &AppState,
        encoded_id: &str,
        semester: &str,
    ) -> Result<ClassroomTimetableView, AppError> {
        let room_id = state
            .codec
            .decode(encoded_id, ResourceType::Classroom)
            .map_err(|e| {
                warn!(error = %e, "rejecting encoded classroom id");
                AppError::invalid_identifier()
            })?;

        let timetable = state
            .rpc
            .get_classroom_timetable(semester, &room_id)
            .await
            .map_err(map_rpc_error)?;

        let semesters = semester_views(semester, &timetable.semesters);
        Ok(ClassroomTimetableView {
            name: timetable.name,
            room_id_encoded: timetable.room_id_encoded,
            building: timetable.building,
            campus: timetable.campus,
            semester: semester.to_string(),
            semesters,
            grid: TimetableGrid::place(timetable.courses),
        })
    }
}
