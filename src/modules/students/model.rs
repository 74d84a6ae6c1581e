//! Student timetable page views.

use campusgrid_core::SemesterView;
use campusgrid_models::{BlockReason, PrivacyLevel, TimetableGrid};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A student's timetable page, placed on the grid.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StudentTimetableView {
    pub name: String,
    pub student_id_encoded: String,
    /// Faculty the student belongs to.
    pub deputy: String,
    pub class_name: String,
    /// The semester this page shows.
    pub semester: String,
    /// Semester switcher entries, current one flagged.
    pub semesters: Vec<SemesterView>,
    pub grid: TimetableGrid,
}

/// What a blocked viewer gets instead of the timetable.
///
/// Identity fields stay so the page can still say whose timetable it is;
/// course data never leaves the service for a blocked view.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BlockedTimetableView {
    pub name: String,
    pub deputy: String,
    pub class_name: String,
    pub reason: BlockReason,
    pub message: String,
}

/// Outcome of a student timetable page request.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(untagged)]
pub enum StudentPage {
    Visible(StudentTimetableView),
    Blocked(BlockedTimetableView),
}

/// Request to change the caller's own privacy level.
#[derive(Debug, Deserialize, ToSchema)]
pub struct PrivacyUpdateRequest {
    /// Stored level: 0 public, 1 mutual, 2 private.
    pub level: u8,
}

/// The privacy level now in effect.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PrivacyUpdateView {
    pub level: PrivacyLevel,
}
