use crate::modules::courses::model::CourseDetailView;
use crate::modules::courses::service::CourseService;
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
    path = "/api/course/{encoded_id}/{semester}",
    params(
        ("encoded_id" = String, Path, description = "Encoded course identifier"),
        ("semester" = String, Path, description = "Semester, e.g. 2019-2020-1")
    ),
    responses(
        (status = 200, description = "Course detail page", body = CourseDetailView),
        (status = 400, description = "Malformed semester", body = ErrorResponse),
        (status = 404, description = "Invalid identifier or no data", body = ErrorResponse),
        (status = 502, description = "Directory service unavailable", body = ErrorResponse)
    ),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn get_course_detail(
    State(state): State<AppState>,
    Path((encoded_id, semester)): Path<(String, String)>,
) -> Result<Json<CourseDetailView>, AppError> {
    if !is_valid_semester(&semester) {
        return Err(AppError::bad_request(anyhow::anyhow!(
            "semester must look like 2019-2020-1"
        )));
    }

    let view = CourseService::detail_page(&state, &encoded_id, &semester).await?;
    Ok(Json(view))
}
