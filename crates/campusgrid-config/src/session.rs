use std::env;

/// Viewer session token settings.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub secret: String,
    pub token_expiry: i64,
}

impl SessionConfig {
    pub fn from_env() -> Self {
        Self {
            secret: env::var("SESSION_SECRET")
                .unwrap_or_else(|_| "session-secret-change-in-production".to_string()),
            token_expiry: env::var("SESSION_TOKEN_EXPIRY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(604800), // 7 days
        }
    }
}
