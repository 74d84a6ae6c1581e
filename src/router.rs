use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::modules::classrooms::router::init_classrooms_router;
use crate::modules::courses::router::init_courses_router;
use crate::modules::query::router::init_query_router;
use crate::modules::students::router::init_students_router;
use crate::modules::teachers::router::init_teachers_router;
use crate::state::AppState;
use axum::{Json, Router, middleware, routing::get};
use serde_json::json;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(health))
        .nest(
            "/api",
            Router::new()
                .nest("/query", init_query_router())
                .nest("/student", init_students_router())
                .nest("/teacher", init_teachers_router())
                .nest("/classroom", init_classrooms_router())
                .nest("/course", init_courses_router()),
        )
        .with_state(state)
        // Read-only public API, no credentials involved in CORS requests.
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(logging_middleware))
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
