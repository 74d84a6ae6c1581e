//! Mapper error type and payload diagnostics.

use serde_json::{Map, Value};
use tracing::warn;

/// Error type for upstream payload mapping.
///
/// A `SchemaError` is fatal for the request that triggered it: a record is
/// either mapped completely or not at all. The messages name upstream
/// record kinds, not internal field names, and are only ever logged — the
/// user sees a generic upstream-error response.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("upstream {record} payload is not in the expected shape: {source}")]
    Payload {
        record: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("upstream {record} payload carries invalid lesson code `{code}`")]
    Lesson { record: &'static str, code: String },
}

impl SchemaError {
    pub(crate) fn payload(record: &'static str, source: serde_json::Error) -> Self {
        Self::Payload { record, source }
    }
}

/// Logs and drops fields the schema does not declare.
///
/// The upstream service occasionally grows new fields; those must never
/// break mapping, but they should be visible in the logs.
pub(crate) fn warn_unknown_fields(record: &'static str, extra: &Map<String, Value>) {
    for field in extra.keys() {
        warn!(record, field = %field, "dropping unexpected upstream field");
    }
}
