//! # Campusgrid Models
//!
//! Domain records and the logic that produces them for the Campusgrid API.
//!
//! The upstream directory service speaks a loosely-shaped JSON dialect:
//! renamed fields (`student_code`, `class`), nested lists, duplicate
//! entries. This crate normalizes those payloads into typed records with
//! embedded [`campusgrid_ident`] handles, and hosts the pure domain logic
//! built on top of them:
//!
//! - [`search`]: search result records and their mapper
//! - [`timetable`]: course/timetable records and their mappers
//! - [`course`]: course detail records and their mapper
//! - [`lesson`]: the compact weekday/period lesson code
//! - [`grid`]: the day x slot timetable grid builder
//! - [`privacy`]: the per-student visibility gate
//! - [`viewer`]: the identity of the person looking at a page
//!
//! Every mapper is a builder function `from_payload(value, codec)` invoked
//! bottom-up: sub-records are built before the record embedding them.
//! Missing required fields fail fast with a [`SchemaError`]; unknown
//! fields are dropped with a warning, never passed deeper in.

pub mod course;
pub mod error;
pub mod grid;
pub mod lesson;
pub mod privacy;
pub mod search;
pub mod timetable;
pub mod viewer;

// Re-export commonly used types at crate root
pub use course::{CourseDetail, CourseStudentItem, CourseTeacherItem};
pub use error::SchemaError;
pub use grid::{GridCell, TimetableGrid};
pub use lesson::Lesson;
pub use privacy::{BlockReason, PrivacyLevel, ViewerPrivacy, Visibility, evaluate_visibility};
pub use search::{SearchClassroomItem, SearchResult, SearchStudentItem, SearchTeacherItem};
pub use timetable::{
    ClassroomTimetable, CourseRecord, StudentTimetable, TeacherRef, TeacherTimetable,
};
pub use viewer::ViewerIdentity;
