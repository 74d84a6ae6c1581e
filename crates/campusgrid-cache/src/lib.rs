//! # Campusgrid Cache
//!
//! Redis-backed external stores for the Campusgrid API.
//!
//! The core itself persists nothing; the two stateful collaborators live
//! here:
//!
//! - [`privacy`]: per-student privacy levels, read synchronously before a
//!   timetable is shown
//! - [`visitors`]: visit trails and visitor counters, written
//!   fire-and-forget after a visible page view
//!
//! Both stores are eventually-consistent collaborators accessed without
//! client-side locking.

pub mod config;
pub mod keys;
pub mod privacy;
pub mod visitors;

use redis::{Client, aio::ConnectionManager};

// Re-export commonly used types at crate root
pub use config::RedisConfig;
pub use privacy::PrivacyStore;
pub use visitors::VisitorStore;

/// Error type for store operations.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("redis connection error: {0}")]
    Connection(#[from] redis::RedisError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Opens a managed redis connection for the stores.
pub async fn connect(redis_url: &str) -> Result<ConnectionManager, CacheError> {
    let client = Client::open(redis_url)?;
    Ok(ConnectionManager::new(client).await?)
}
