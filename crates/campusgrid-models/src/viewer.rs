//! Viewer identity.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The logged-in person looking at a page, if any.
///
/// The identity is supplied explicitly by the caller (the session layer
/// decodes it from the viewer's token); the core never reaches into
/// ambient session state. An absent identity means an anonymous visit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ViewerIdentity {
    /// Raw student id, internal use only.
    pub student_id: String,
    /// Encoded handle, safe to echo back to the client.
    pub student_id_encoded: String,
    pub name: String,
}

impl ViewerIdentity {
    /// Whether this viewer is the student a page belongs to.
    pub fn is_owner_of(&self, student_id: &str) -> bool {
        self.student_id == student_id
    }
}
