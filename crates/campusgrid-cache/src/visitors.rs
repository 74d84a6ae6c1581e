//! Visitor tracking store.
//!
//! Both operations here are fire-and-forget from the page flow's point of
//! view: the caller spawns them and a failure is logged, never surfaced.

use crate::{CacheError, keys};
use campusgrid_models::ViewerIdentity;
use redis::{AsyncCommands, aio::ConnectionManager};
use serde::Serialize;
use std::time::Duration;
use tracing::instrument;

#[derive(Serialize)]
struct VisitorEntry<'a> {
    student_id_encoded: &'a str,
    name: &'a str,
}

/// Records who visited whose timetable, and how often.
#[derive(Clone)]
pub struct VisitorStore {
    conn: ConnectionManager,
    trail_ttl: Duration,
}

impl std::fmt::Debug for VisitorStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VisitorStore")
            .field("trail_ttl", &self.trail_ttl)
            .finish_non_exhaustive()
    }
}

impl VisitorStore {
    pub fn new(conn: ConnectionManager, trail_ttl: Duration) -> Self {
        Self { conn, trail_ttl }
    }

    /// Leaves a trail entry for a logged-in visit to someone else's page.
    ///
    /// Keyed by the visitor's raw id, so repeated visits overwrite rather
    /// than accumulate. Only the encoded id and display name are stored.
    #[instrument(skip(self, visitor), fields(visitor = %visitor.student_id))]
    pub async fn record_visit(
        &self,
        host_id: &str,
        visitor: &ViewerIdentity,
    ) -> Result<(), CacheError> {
        let mut conn = self.conn.clone();
        let key = keys::visitor_trail(host_id);
        let entry = serde_json::to_string(&VisitorEntry {
            student_id_encoded: &visitor.student_id_encoded,
            name: &visitor.name,
        })?;

        conn.hset::<_, _, _, ()>(&key, &visitor.student_id, entry)
            .await?;
        conn.expire::<_, ()>(&key, self.trail_ttl.as_secs() as i64)
            .await?;
        Ok(())
    }

    /// Increments the page-view counter of a student's timetable.
    ///
    /// Anonymous viewers count too; a student viewing their own page does
    /// not.
    #[instrument(skip(self, viewer))]
    pub async fn incr_count(
        &self,
        host_id: &str,
        viewer: Option<&ViewerIdentity>,
    ) -> Result<u64, CacheError> {
        if viewer.is_some_and(|v| v.is_owner_of(host_id)) {
            let mut conn = self.conn.clone();
            let current: Option<u64> = conn.get(keys::visitor_count(host_id)).await?;
            return Ok(current.unwrap_or(0));
        }

        let mut conn = self.conn.clone();
        Ok(conn.incr(keys::visitor_count(host_id), 1u64).await?)
    }
}
