//! In-memory active route store.

use std::collections::HashMap;

use chrono::Utc;
use parking_lot::RwLock;
use tracing::debug;

use super::{ActiveRoute, ActiveRouteStore};
use crate::models::RouteResult;

/// [`ActiveRouteStore`] backed by a `RwLock`-guarded map.
///
/// Each publish swaps the whole record under the write lock, so concurrent
/// fetches see either the old or the new record in full. Suitable for a
/// single-process dispatcher; swap in another [`ActiveRouteStore`]
/// implementation for shared storage.
///
/// # Examples
///
/// ```
/// use dispatch_routing::models::RouteResult;
/// use dispatch_routing::store::{ActiveRouteStore, InMemoryActiveRouteStore};
///
/// let store = InMemoryActiveRouteStore::new();
/// assert!(store.fetch("t-1", Some("d-1")).is_placeholder());
///
/// store.publish("t-1", "d-1", RouteResult::empty());
/// assert!(!store.fetch("t-1", Some("d-1")).is_placeholder());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryActiveRouteStore {
    records: RwLock<HashMap<(String, String), ActiveRoute>>,
}

impl InMemoryActiveRouteStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ActiveRouteStore for InMemoryActiveRouteStore {
    fn publish(&self, tenant_id: &str, driver_id: &str, route: RouteResult) -> ActiveRoute {
        let record = ActiveRoute {
            tenant_id: tenant_id.to_string(),
            driver_id: driver_id.to_string(),
            route,
            published_at: Some(Utc::now()),
        };
        self.records.write().insert(
            (tenant_id.to_string(), driver_id.to_string()),
            record.clone(),
        );
        debug!(tenant_id, driver_id, "published active route");
        record
    }

    fn fetch(&self, tenant_id: &str, driver_id: Option<&str>) -> ActiveRoute {
        let records = self.records.read();
        match driver_id {
            Some(driver) => records
                .get(&(tenant_id.to_string(), driver.to_string()))
                .cloned()
                .unwrap_or_else(|| ActiveRoute::placeholder(tenant_id, Some(driver))),
            None => records
                .values()
                .filter(|r| r.tenant_id == tenant_id)
                .max_by_key(|r| r.published_at)
                .cloned()
                .unwrap_or_else(|| ActiveRoute::placeholder(tenant_id, None)),
        }
    }
}
