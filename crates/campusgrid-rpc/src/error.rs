//! Upstream call error type.

use campusgrid_models::SchemaError;

/// Error type for upstream directory-service calls.
///
/// Carries enough context to diagnose (endpoint, status) but the raw
/// upstream payload is never captured, so it cannot leak into logs or
/// responses.
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    /// Transport failure that persisted after the single retry.
    #[error("transport failure calling {endpoint}: {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The upstream answered, but not with the success sentinel.
    #[error("{endpoint} returned non-success status `{status}`")]
    BadStatus {
        endpoint: &'static str,
        status: String,
    },

    /// The upstream answered successfully with a payload the mapper
    /// rejects.
    #[error(transparent)]
    Schema(#[from] SchemaError),
}
