use std::env;

/// Secret key material for the identifier codec.
///
/// Changing the secret invalidates every handle in circulation, so the
/// value must be stable per deployment.
#[derive(Clone, Debug)]
pub struct IdentConfig {
    pub secret: String,
}

impl IdentConfig {
    pub fn from_env() -> Self {
        Self {
            secret: env::var("IDENT_SECRET")
                .unwrap_or_else(|_| "ident-secret-change-in-production".to_string()),
        }
    }
}
