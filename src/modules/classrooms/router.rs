use crate::modules::classrooms::controller::get_classroom_timetable;
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn init_classrooms_router() -> Router<AppState> {
    Router::new().route("/{encoded_id}/{semester}", get(get_classroom_timetable))
}
