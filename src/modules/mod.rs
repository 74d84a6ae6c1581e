pub mod classrooms;
pub mod courses;
pub mod query;
pub mod students;
pub mod teachers;

use campusgrid_core::AppError;
use campusgrid_rpc::RpcError;
use tracing::warn;

/// Maps an upstream call failure to its user-facing response.
///
/// A non-success application status means the resource has no data (the
/// upstream uses it as its not-found signal); everything else is a
/// gateway-level failure.
pub(crate) fn map_rpc_error(err: RpcError) -> AppError {
    match err {
        RpcError::BadStatus { endpoint, status } => {
            warn!(endpoint, status, "upstream reported non-success status");
            AppError::not_found(anyhow::anyhow!("no data found for this resource"))
        }
        other => AppError::upstream(other),
    }
}
