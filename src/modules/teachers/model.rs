//! Teacher timetable page views.

use campusgrid_core::SemesterView;
use campusgrid_models::TimetableGrid;
use serde::Serialize;
use utoipa::ToSchema;

/// A teacher's timetable page, placed on the grid.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TeacherTimetableView {
    pub name: String,
    pub teacher_id_encoded: String,
    pub title: String,
    /// Unit (school/department) the teacher belongs to.
    pub unit: String,
    /// The semester this page shows.
    pub semester: String,
    /// Semester switcher entries, current one flagged.
    pub semesters: Vec<SemesterView>,
    pub grid: TimetableGrid,
}
