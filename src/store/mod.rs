//! Active route publishing and retrieval.
//!
//! A driver's *active route* is the most recently published itinerary for a
//! `(tenant, driver)` pair. Publishing replaces the prior record wholesale
//! (last-writer-wins, no merge, no history); fetching an unpublished key
//! returns an empty-stops placeholder rather than an error.
//!
//! The store is a seam: [`ActiveRouteStore`] keeps the backing technology
//! (in-memory map, external KV store, relational table) swappable.
//! [`InMemoryActiveRouteStore`] is the bundled implementation.

mod memory;

pub use memory::InMemoryActiveRouteStore;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::RouteResult;

/// The published route record for one `(tenant, driver)` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveRoute {
    /// Owning tenant.
    pub tenant_id: String,
    /// Driver the route was published for. Empty on a tenant-level
    /// placeholder.
    pub driver_id: String,
    /// The published itinerary.
    pub route: RouteResult,
    /// When the record was published; `None` on the placeholder.
    pub published_at: Option<DateTime<Utc>>,
}

impl ActiveRoute {
    /// The empty-stops placeholder returned when nothing has been
    /// published for the requested key.
    pub fn placeholder(tenant_id: &str, driver_id: Option<&str>) -> Self {
        Self {
            tenant_id: tenant_id.to_string(),
            driver_id: driver_id.unwrap_or_default().to_string(),
            route: RouteResult::empty(),
            published_at: None,
        }
    }

    /// Returns `true` if this record is the unpublished placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.published_at.is_none()
    }
}

/// Keyed upsert/fetch of the latest published route per `(tenant, driver)`.
///
/// `publish` must be atomic with respect to concurrent `publish`/`fetch`
/// on the same key: a fetch observes either the fully-old or the fully-new
/// record, never a partial write. Concurrent publishes to one key settle
/// last-writer-wins. There is no delete; records are superseded, never
/// removed.
pub trait ActiveRouteStore: Send + Sync {
    /// Replaces (or creates) the active route for the key and returns the
    /// stored record.
    fn publish(&self, tenant_id: &str, driver_id: &str, route: RouteResult) -> ActiveRoute;

    /// Returns the latest record for the driver, or, when `driver_id` is
    /// `None`, the most recently published record across all of the
    /// tenant's drivers. Falls back to [`ActiveRoute::placeholder`].
    fn fetch(&self, tenant_id: &str, driver_id: Option<&str>) -> ActiveRoute;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_is_empty() {
        let p = ActiveRoute::placeholder("t-1", Some("d-1"));
        assert!(p.is_placeholder());
        assert!(p.route.is_empty());
        assert_eq!(p.tenant_id, "t-1");
        assert_eq!(p.driver_id, "d-1");
    }

    #[test]
    fn test_placeholder_without_driver() {
        let p = ActiveRoute::placeholder("t-1", None);
        assert!(p.driver_id.is_empty());
    }
}
