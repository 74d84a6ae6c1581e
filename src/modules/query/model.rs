//! Query request and navigation decision models.

use campusgrid_models::{SearchClassroomItem, SearchStudentItem, SearchTeacherItem};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// The all-in-one search box input.
#[derive(Debug, Deserialize, Validate, ToSchema, IntoParams)]
pub struct QueryParams {
    /// Free-text keyword: a name, a student/staff number or a classroom.
    #[validate(length(min = 1, message = "keyword must not be empty"))]
    pub id: String,
}

/// Where a query should take the user.
///
/// Exactly one decision is produced per query. `Redirect` carries the
/// ready-made target URL so the front end never assembles paths from raw
/// parts.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum NavigationDecision {
    /// A single unambiguous match.
    Redirect {
        /// Resource kind: `student`, `teacher` or `classroom`.
        resource: String,
        encoded_id: String,
        semester: String,
        url: String,
    },

    /// A single match that has no timetable data in any semester.
    NoSemester { name: String },

    /// Several classrooms share the keyword; the user picks one.
    ClassroomChoice {
        keyword: String,
        classrooms: Vec<SearchClassroomItem>,
    },

    /// Several people share the keyword; the user picks one.
    PeopleChoice {
        keyword: String,
        students: Vec<SearchStudentItem>,
        teachers: Vec<SearchTeacherItem>,
    },

    /// Nothing matched.
    NotFound { message: String },
}
