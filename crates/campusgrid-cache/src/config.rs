//! Redis store configuration.

use std::env;
use std::time::Duration;

/// Connection settings for the privacy and visitor stores.
#[derive(Clone, Debug)]
pub struct RedisConfig {
    pub url: String,
    /// How long a recent-visitor trail is retained.
    pub visitor_ttl: Duration,
}

impl RedisConfig {
    /// Loads the configuration from `REDIS_URL` and `VISITOR_TTL_SECS`.
    pub fn from_env() -> Self {
        Self {
            url: env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string()),
            visitor_ttl: Duration::from_secs(
                env::var("VISITOR_TTL_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(14 * 24 * 3600), // two weeks
            ),
        }
    }
}
