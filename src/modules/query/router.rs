use crate::modules::query::controller::{query, query_post};
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn init_query_router() -> Router<AppState> {
    Router::new().route("/", get(query).post(query_post))
}
