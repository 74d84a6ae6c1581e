use crate::modules::query::model::{NavigationDecision, QueryParams};
use crate::modules::query::service::QueryService;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Query, State},
};
use campusgrid_core::AppError;
use tracing::instrument;
use utoipa::ToSchema;
use validator::Validate;

#[derive(ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[utoipa::path(
    get,
    path = "/api/query",
    params(
        QueryParams
    ),
    responses(
        (status = 200, description = "Navigation decision for the keyword", body = NavigationDecision),
        (status = 400, description = "Empty keyword", body = ErrorResponse),
        (status = 502, description = "Directory service unavailable", body = ErrorResponse)
    ),
    tag = "Query"
)]
#[instrument(skip(state))]
pub async fn query(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Result<Json<NavigationDecision>, AppError> {
    params
        .validate()
        .map_err(|e| AppError::bad_request(anyhow::anyhow!("validation failed: {}", e)))?;

    let decision = QueryService::resolve(&state, &params.id).await?;
    Ok(Json(decision))
}

#[utoipa::path(
    post,
    path = "/api/query",
    request_body = QueryParams,
    responses(
        (status = 200, description = "Navigation decision for the keyword", body = NavigationDecision),
        (status = 400, description = "Empty keyword", body = ErrorResponse),
        (status = 502, description = "Directory service unavailable", body = ErrorResponse)
    ),
    tag = "Query"
)]
#[instrument(skip(state))]
pub async fn query_post(
    State(state): State<AppState>,
    Json(params): Json<QueryParams>,
) -> Result<Json<NavigationDecision>, AppError> {
    params
        .validate()
        .map_err(|e| AppError::bad_request(anyhow::anyhow!("validation failed: {}", e)))?;

    let decision = QueryService::resolve(&state, &params.id).await?;
    Ok(Json(decision))
}
