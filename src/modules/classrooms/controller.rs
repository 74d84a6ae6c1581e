use crate::modules::classrooms::model::ClassroomTimetableView;
use crate::modules::classrooms::service::ClassroomService;
use crate::modules::query::controller::ErrorResponse;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
};
use campusgrid_core::{AppError, is_valid_semester};
use tracing::instrument;

#[utoipa::path(
    get,
    path = "/api/classroom/{encoded_id}/{semester}",
    params(
        ("encoded_id" = String, Path, description = "Encoded classroom identifier"),
        ("semester" = String, Path, description = "Semester, e.g. 2019-2020-1")
    ),
    responses(
        (status = 200, description = "Classroom occupancy page", body = ClassroomTimetableView),
        (status = 400, description = "Malformed semester", body = ErrorResponse),
        (status = 404, description = "Invalid identifier or no data", body = ErrorResponse),
        (status = 502, description = "Directory service unavailable", body = ErrorResponse)
    ),
    tag = "Classrooms"
)]
#[instrument(skip(state))]
pub async fn get_classroom_timetable(
    State(state): State<AppState>,
    Path((encoded_id, semester)): Path<(String, String)>,
) -> Result<Json<ClassroomTimetableView>, AppError> {
    if !is_valid_semester(&semester) {
        return Err(AppError::bad_request(anyhow::anyhow!(
            "semester must look like 2019-2020-1"
        )));
    }

    let view = ClassroomService::timetable_page(&state, &encoded_id, &semester).await?;
    Ok(Json(view))
}
