use crate::modules::query::controller::ErrorResponse;
use crate::modules::teachers::model::TeacherTimetableView;
use crate::modules::teachers::service::TeacherService;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
};
use campusgrid_core::{AppError, is_valid_semester};
use tracing::instrument;

#[utoipa::path(
    get,
    path = "/api/teacher/{encoded_id}/{semester}",
    params(
        ("encoded_id" = String, Path, description = "Encoded teacher identifier"),
        ("semester" = String, Path, description = "Semester, e.g. 2019-2020-1")
    ),
    responses(
        (status = 200, description = "Teacher timetable page", body = TeacherTimetableView),
        (status = 400, description = "Malformed semester", body = ErrorResponse),
        (status = 404, description = "Invalid identifier or no data", body = ErrorResponse),
        (status = 502, description = "Directory service unavailable", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn get_teacher_timetable(
    State(state): State<AppState>,
    Path((encoded_id, semester)): Path<(String, String)>,
) -> Result<Json<TeacherTimetableView>, AppError> {
    if !is_valid_semester(&semester) {
        return Err(AppError::bad_request(anyhow::anyhow!(
            "semester must look like 2019-2020-1"
        )));
    }

    let view = TeacherService::timetable_page(&state, &encoded_id, &semester).await?;
    Ok(Json(view))
}
