use crate::modules::teachers::controller::get_teacher_timetable;
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn init_teachers_router() -> Router<AppState> {
    Router::new().route("/{encoded_id}/{semester}", get(get_teacher_timetable))
}
