//! Classroom timetable page views.

use campusgrid_core::SemesterView;
use campusgrid_models::TimetableGrid;
use serde::Serialize;
use utoipa::ToSchema;

/// A classroom's occupancy page, placed on the grid.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ClassroomTimetableView {
    pub name: String,
    pub room_id_encoded: String,
    pub building: String,
    pub campus: String,
    /// The semester this page shows.
    pub semester: String,
    /// Semester switcher entries, current one flagged. Built from the
    /// upstream availability list, not from the display-only `semester`
    /// field the upstream also reports.
    pub semesters: Vec<SemesterView>,
    pub grid: TimetableGrid,
}
