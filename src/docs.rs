use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::classrooms::model::ClassroomTimetableView;
use crate::modules::courses::model::CourseDetailView;
use crate::modules::query::controller::ErrorResponse;
use crate::modules::query::model::{NavigationDecision, QueryParams};
use crate::modules::students::model::{
    BlockedTimetableView, PrivacyUpdateRequest, PrivacyUpdateView, StudentTimetableView,
};
use crate::modules::teachers::model::TeacherTimetableView;
use campusgrid_core::SemesterView;
use campusgrid_models::{
    BlockReason, CourseDetail, CourseRecord, CourseStudentItem, CourseTeacherItem, GridCell,
    PrivacyLevel, SearchClassroomItem, SearchStudentItem, SearchTeacherItem, TeacherRef,
    TimetableGrid,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::query::controller::query,
        crate::modules::query::controller::query_post,
        crate::modules::students::controller::get_student_timetable,
        crate::modules::students::controller::update_privacy_level,
        crate::modules::teachers::controller::get_teacher_timetable,
        crate::modules::classrooms::controller::get_classroom_timetable,
        crate::modules::courses::controller::get_course_detail,
    ),
    components(
        schemas(
            QueryParams,
            NavigationDecision,
            SearchStudentItem,
            SearchTeacherItem,
            SearchClassroomItem,
            StudentTimetableView,
            BlockedTimetableView,
            BlockReason,
            PrivacyUpdateRequest,
            PrivacyUpdateView,
            PrivacyLevel,
            TeacherTimetableView,
            ClassroomTimetableView,
            CourseDetailView,
            CourseDetail,
            CourseTeacherItem,
            CourseStudentItem,
            CourseRecord,
            TeacherRef,
            TimetableGrid,
            GridCell,
            SemesterView,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Query", description = "All-in-one search resolution"),
        (name = "Students", description = "Privacy-gated student timetable pages"),
        (name = "Teachers", description = "Teacher timetable pages"),
        (name = "Classrooms", description = "Classroom occupancy pages"),
        (name = "Courses", description = "Course detail pages")
    ),
    info(
        title = "Campusgrid API",
        version = "0.1.0",
        description = "A campus directory and timetable lookup service built with Rust, Axum and Redis.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
