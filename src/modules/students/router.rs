use crate::modules::students::controller::{get_student_timetable, update_privacy_level};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, put},
};

pub fn init_students_router() -> Router<AppState> {
    Router::new()
        .route("/privacy", put(update_privacy_level))
        .route("/{encoded_id}/{semester}", get(get_student_timetable))
}
