use std::sync::Arc;

use dashmap::DashMap;
use uuid::Uuid;

use crate::models::StockSeries;

/// Per-session slot for the one live stock series. Concurrent sessions get
/// separate slots, so two clients can never trample each other's data.
#[derive(Clone)]
pub struct SessionCache {
    inner: Arc<DashMap<Uuid, StockSeries>>,
}

impl SessionCache {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(DashMap::new()),
        }
    }

    /// Clone of the session's cached series, if it has fetched one.
    pub fn get(&self, session: Uuid) -> Option<StockSeries> {
        self.inner.get(&session).map(|entry| entry.value().clone())
    }

    /// Replace the session's series wholesale.
    pub fn put(&self, session: Uuid, series: StockSeries) {
        self.inner.insert(session, series);
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl Default for SessionCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(name: &str) -> StockSeries {
        StockSeries::from_bars(name, &[])
    }

    #[test]
    fn test_cache_is_empty_until_first_put() {
        let cache = SessionCache::new();
        let session = Uuid::new_v4();
        assert!(cache.get(session).is_none());

        cache.put(session, series("BBRI"));
        assert_eq!(cache.get(session).unwrap().name, "BBRI");
    }

    #[test]
    fn test_put_replaces_previous_series() {
        let cache = SessionCache::new();
        let session = Uuid::new_v4();
        cache.put(session, series("BBRI"));
        cache.put(session, series("TLKM"));
        assert_eq!(cache.get(session).unwrap().name, "TLKM");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_sessions_do_not_share_a_slot() {
        let cache = SessionCache::new();
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        cache.put(first, series("BBRI"));
        assert!(cache.get(second).is_none());
    }
}
