//! Application error type with HTTP response conversion.
//!
//! Domain crates (`campusgrid-ident`, `campusgrid-models`, `campusgrid-rpc`,
//! `campusgrid-cache`) expose their own `thiserror` enums. At the HTTP
//! boundary every failure is folded into [`AppError`], which carries a
//! status code and a sanitized message. Upstream payloads, raw ids and
//! decode diagnostics never reach the response body; the detailed cause
//! stays in the log.

use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: Error,
}

impl AppError {
    pub fn new<E>(status: StatusCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            error: err.into(),
        }
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::NOT_FOUND, err)
    }

    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::BAD_REQUEST, err)
    }

    pub fn unauthorized<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::UNAUTHORIZED, err)
    }

    /// Generic response for a malformed, tampered or mistyped encoded
    /// identifier. The decode diagnostic is logged by the caller, never
    /// surfaced.
    pub fn invalid_identifier() -> Self {
        Self::not_found(anyhow::anyhow!("invalid identifier"))
    }

    /// Generic response for an upstream directory-service failure.
    pub fn upstream<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        let err = err.into();
        error!(error = %err, "upstream call failed");
        Self::new(
            StatusCode::BAD_GATEWAY,
            anyhow::anyhow!("the directory service is unavailable, try again later"),
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.error.to_string()
        }));

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}
