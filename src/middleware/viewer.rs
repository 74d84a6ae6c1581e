//! Optional viewer-identity extraction.
//!
//! The session layer issues a signed token after the (external) login
//! flow; this extractor decodes it back into a [`ViewerIdentity`] and
//! hands the services an explicit `Option` — the core never reaches into
//! ambient session state. A missing, expired or invalid token simply
//! means an anonymous viewer, never a rejection.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use campusgrid_config::SessionConfig;
use campusgrid_core::AppError;
use campusgrid_models::ViewerIdentity;
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use tracing::debug;

use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct ViewerClaims {
    /// Raw student id of the viewer.
    pub sub: String,
    pub sub_encoded: String,
    pub name: String,
    pub exp: usize,
    pub iat: usize,
}

/// Issues a viewer session token.
pub fn issue_viewer_token(
    viewer: &ViewerIdentity,
    config: &SessionConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;
    let claims = ViewerClaims {
        sub: viewer.student_id.clone(),
        sub_encoded: viewer.student_id_encoded.clone(),
        name: viewer.name.clone(),
        exp: now + config.token_expiry as usize,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow::anyhow!("failed to create viewer token: {e}")))
}

/// Decodes a viewer session token; `None` for anything invalid.
pub fn decode_viewer_token(token: &str, config: &SessionConfig) -> Option<ViewerIdentity> {
    decode::<ViewerClaims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| ViewerIdentity {
        student_id: data.claims.sub,
        student_id_encoded: data.claims.sub_encoded,
        name: data.claims.name,
    })
    .map_err(|e| {
        debug!(error = %e, "ignoring invalid viewer token");
        e
    })
    .ok()
}

/// Extractor for the viewer identity, if any.
#[derive(Debug, Clone)]
pub struct OptionalViewer(pub Option<ViewerIdentity>);

impl FromRequestParts<AppState> for OptionalViewer {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "));

        let viewer =
            token.and_then(|token| decode_viewer_token(token, &state.session_config));

        Ok(OptionalViewer(viewer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SessionConfig {
        SessionConfig {
            secret: "test_secret_key_for_testing_purposes".to_string(),
            token_expiry: 3600,
        }
    }

    fn test_viewer() -> ViewerIdentity {
        ViewerIdentity {
            student_id: "3901160407".to_string(),
            student_id_encoded: "opaque-handle".to_string(),
            name: "Wang".to_string(),
        }
    }

    #[test]
    fn test_token_round_trip() {
        let config = test_config();
        let token = issue_viewer_token(&test_viewer(), &config).unwrap();
        let decoded = decode_viewer_token(&token, &config).unwrap();
        assert_eq!(decoded, test_viewer());
    }

    #[test]
    fn test_invalid_token_is_anonymous() {
        let config = test_config();
        assert!(decode_viewer_token("not-a-token", &config).is_none());
    }

    #[test]
    fn test_wrong_secret_is_anonymous() {
        let config = test_config();
        let token = issue_viewer_token(&test_viewer(), &config).unwrap();

        let other = SessionConfig {
            secret: "some-other-secret".to_string(),
            token_expiry: 3600,
        };
        assert!(decode_viewer_token(&token, &other).is_none());
    }
}
