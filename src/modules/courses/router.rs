use crate::modules::courses::controller::get_course_detail;
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn init_courses_router() -> Router<AppState> {
    Router::new().route("/{encoded_id}/{semester}", get(get_course_detail))
}
