//! Static universe lookups: station and system locations, jump graphs.
//!
//! These never change while the process runs, so they survive order
//! invalidation. Misses are cached too.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::domain::{JumpGraph, LocationId, RegionId, SolarSystemId};

/// Memo table that remembers absent values as well as present ones.
struct Memo<K, V> {
    entries: RwLock<HashMap<K, Option<V>>>,
}

impl<K, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl<K: Copy + Eq + Hash, V: Clone> Memo<K, V> {
    fn get_or_insert_with(&self, key: K, resolve: impl FnOnce() -> Option<V>) -> Option<V> {
        if let Some(value) = self.entries.read().get(&key) {
            return value.clone();
        }
        let value = resolve();
        self.entries.write().insert(key, value.clone());
        value
    }

    fn len(&self) -> usize {
        self.entries.read().len()
    }
}

/// Station → solar system, solar system → region and region → jump graph.
#[derive(Default)]
pub struct LocationCache {
    systems: Memo<LocationId, SolarSystemId>,
    regions: Memo<SolarSystemId, RegionId>,
    graphs: Memo<RegionId, Arc<JumpGraph>>,
}

impl LocationCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Solar system of a station, resolving on first use.
    pub fn solar_system(
        &self,
        station_id: LocationId,
        resolve: impl FnOnce() -> Option<SolarSystemId>,
    ) -> Option<SolarSystemId> {
        self.systems.get_or_insert_with(station_id, resolve)
    }

    /// Region of a solar system, resolving on first use.
    pub fn region(
        &self,
        solar_system_id: SolarSystemId,
        resolve: impl FnOnce() -> Option<RegionId>,
    ) -> Option<RegionId> {
        self.regions.get_or_insert_with(solar_system_id, resolve)
    }

    /// Jump graph of a region, resolving on first use.
    pub fn jump_graph(
        &self,
        region_id: RegionId,
        resolve: impl FnOnce() -> Option<JumpGraph>,
    ) -> Option<Arc<JumpGraph>> {
        self.graphs
            .get_or_insert_with(region_id, || resolve().map(Arc::new))
    }

    /// Number of regions whose graph lookup has been made.
    #[must_use]
    pub fn graph_count(&self) -> usize {
        self.graphs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn resolves_once_including_misses() {
        let cache = LocationCache::new();
        let calls = Cell::new(0);

        for _ in 0..3 {
            let system = cache.solar_system(LocationId::new(1), || {
                calls.set(calls.get() + 1);
                None
            });
            assert!(system.is_none());
        }

        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn graph_is_shared() {
        let cache = LocationCache::new();
        let first = cache.jump_graph(RegionId::new(1), || Some(JumpGraph::new()));
        let second = cache.jump_graph(RegionId::new(1), || None);

        assert!(Arc::ptr_eq(&first.unwrap(), &second.unwrap()));
        assert_eq!(cache.graph_count(), 1);
    }
}
