//! Privacy-level store.

use crate::{CacheError, keys};
use campusgrid_models::PrivacyLevel;
use redis::{AsyncCommands, aio::ConnectionManager};
use tracing::{instrument, warn};

/// Read/write access to per-student privacy levels.
///
/// Levels are stored as their integer representation. A student without a
/// stored level is public, which is also what an unreadable value falls
/// back to after a warning.
#[derive(Clone)]
pub struct PrivacyStore {
    conn: ConnectionManager,
}

impl std::fmt::Debug for PrivacyStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrivacyStore").finish_non_exhaustive()
    }
}

impl PrivacyStore {
    pub fn new(conn: ConnectionManager) -> Self {
        Self { conn }
    }

    /// Gets a student's privacy level, defaulting to public.
    #[instrument(skip(self))]
    pub async fn get_level(&self, student_id: &str) -> Result<PrivacyLevel, CacheError> {
        let mut conn = self.conn.clone();
        let stored: Option<u8> = conn.get(keys::privacy_level(student_id)).await?;

        Ok(match stored {
            None => PrivacyLevel::default(),
            Some(value) => PrivacyLevel::from_stored(value).unwrap_or_else(|| {
                warn!(stored = value, "unknown stored privacy level, treating as public");
                PrivacyLevel::default()
            }),
        })
    }

    /// Sets a student's privacy level.
    #[instrument(skip(self))]
    pub async fn set_level(
        &self,
        student_id: &str,
        level: PrivacyLevel,
    ) -> Result<(), CacheError> {
        let mut conn = self.conn.clone();
        conn.set::<_, _, ()>(keys::privacy_level(student_id), level.as_stored())
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connect;

    // Integration tests require a running redis instance.

    #[tokio::test]
    #[ignore = "requires Redis"]
    async fn test_level_round_trip_and_default() {
        let conn = connect("redis://localhost:6379").await.unwrap();
        let store = PrivacyStore::new(conn);

        assert_eq!(
            store.get_level("privacy-test-unknown").await.unwrap(),
            PrivacyLevel::Public
        );

        store
            .set_level("privacy-test-known", PrivacyLevel::Mutual)
            .await
            .unwrap();
        assert_eq!(
            store.get_level("privacy-test-known").await.unwrap(),
            PrivacyLevel::Mutual
        );
    }
}
