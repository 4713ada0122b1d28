//! Projection result store.
//!
//! A career projection is computed by one request and read back by a later,
//! separate request (the results page). Instead of a process-global "latest
//! result" slot, each result is stored under a fresh id with a TTL, so
//! concurrent clients never observe each other's data.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::analysis::projection::CareerProjection;

#[derive(Debug, Clone)]
struct StoredProjection {
    projection: CareerProjection,
    expires_at: DateTime<Utc>,
}

/// Keyed, expiring in-memory store for career projection results.
#[derive(Clone)]
pub struct ProjectionStore {
    ttl: Duration,
    inner: Arc<Mutex<HashMap<Uuid, StoredProjection>>>,
}

impl ProjectionStore {
    pub fn new(ttl_secs: i64) -> Self {
        Self {
            ttl: Duration::seconds(ttl_secs),
            inner: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Stores `projection` under a fresh id and returns that id.
    /// Expired entries are purged on every insert, so the map stays bounded
    /// by the request rate within one TTL window.
    pub async fn insert(&self, projection: CareerProjection) -> Uuid {
        let id = Uuid::new_v4();
        let now = Utc::now();
        let mut entries = self.inner.lock().await;
        entries.retain(|_, stored| now < stored.expires_at);
        entries.insert(
            id,
            StoredProjection {
                projection,
                expires_at: now + self.ttl,
            },
        );
        id
    }

    /// Fetches a stored projection. Returns `None` for unknown or expired ids.
    pub async fn get(&self, id: &Uuid) -> Option<CareerProjection> {
        let entries = self.inner.lock().await;
        entries
            .get(id)
            .filter(|stored| Utc::now() < stored.expires_at)
            .map(|stored| stored.projection.clone())
    }
}
