use std::env;
use std::time::Duration;

/// Upstream directory/timetable service settings.
#[derive(Clone, Debug)]
pub struct ApiServerConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ApiServerConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("API_SERVER_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8008".to_string()),
            timeout: Duration::from_secs(
                env::var("API_SERVER_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(10),
            ),
        }
    }
}
