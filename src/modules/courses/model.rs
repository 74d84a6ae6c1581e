//! Course detail page views.

use campusgrid_models::CourseDetail;
use serde::Serialize;
use utoipa::ToSchema;

/// A course's detail page.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CourseDetailView {
    /// The semester this page shows.
    pub semester: String,
    /// Weekday of the course's meeting, 1 = Monday.
    pub day: u8,
    /// Grid slot of the meeting within the six-slot half-day scheme.
    pub slot: u8,
    /// All teachers joined for display, e.g. `张三教授、李四讲师`.
    pub teachers_display: String,
    pub course: CourseDetail,
}
