use crate::middleware::viewer::OptionalViewer;
use crate::modules::query::controller::ErrorResponse;
use crate::modules::students::model::{
    BlockedTimetableView, PrivacyUpdateRequest, PrivacyUpdateView, StudentPage,
    StudentTimetableView,
};
use crate::modules::students::service::StudentService;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use campusgrid_core::{AppError, is_valid_semester};
use tracing::instrument;

#[utoipa::path(
    get,
    path = "/api/student/{encoded_id}/{semester}",
    params(
        ("encoded_id" = String, Path, description = "Encoded student identifier"),
        ("semester" = String, Path, description = "Semester, e.g. 2019-2020-1")
    ),
    responses(
        (status = 200, description = "Student timetable page", body = StudentTimetableView),
        (status = 400, description = "Malformed semester", body = ErrorResponse),
        (status = 403, description = "Blocked by the student's privacy level", body = BlockedTimetableView),
        (status = 404, description = "Invalid identifier or no data", body = ErrorResponse),
        (status = 502, description = "Directory service unavailable", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Students"
)]
#[instrument(skip(state, viewer))]
pub async fn get_student_timetable(
    State(state): State<AppState>,
    Path((encoded_id, semester)): Path<(String, String)>,
    OptionalViewer(viewer): OptionalViewer,
) -> Result<Response, AppError> {
    if !is_valid_semester(&semester) {
        return Err(AppError::bad_request(anyhow::anyhow!(
            "semester must look like 2019-2020-1"
        )));
    }

    let page =
        StudentService::timetable_page(&state, &encoded_id, &semester, viewer.as_ref()).await?;
    Ok(match page {
        StudentPage::Visible(view) => Json(view).into_response(),
        StudentPage::Blocked(view) => (StatusCode::FORBIDDEN, Json(view)).into_response(),
    })
}

#[utoipa::path(
    put,
    path = "/api/student/privacy",
    request_body = PrivacyUpdateRequest,
    responses(
        (status = 200, description = "Privacy level updated", body = PrivacyUpdateView),
        (status = 400, description = "Unknown privacy level", body = ErrorResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Students"
)]
#[instrument(skip(state, viewer))]
pub async fn update_privacy_level(
    State(state): State<AppState>,
    OptionalViewer(viewer): OptionalViewer,
    Json(request): Json<PrivacyUpdateRequest>,
) -> Result<Json<PrivacyUpdateView>, AppError> {
    let viewer = viewer.ok_or_else(|| {
        AppError::unauthorized(anyhow::anyhow!("log in to change privacy settings"))
    })?;

    let level = StudentService::update_privacy_level(&state, &viewer, request.level).await?;
    Ok(Json(PrivacyUpdateView { level }))
}
