//! Memoized best-price lookups, invalidated wholesale.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::domain::{ExternalOrder, LocationId, RegionId, TypeId};

/// Cache key for station-scoped lookups.
pub type StationKey = (TypeId, LocationId);

/// Cache key for region-scoped lookups.
pub type RegionKey = (TypeId, RegionId);

/// Shared list of orders for one (type, region) pair.
pub type OrderList = Arc<[Arc<ExternalOrder>]>;

/// Best sell and buy orders per (type, station) plus the buy orders of each
/// (type, region).
///
/// Every map is derived from stored orders, so [`PriceCache::invalidate`]
/// clears all three together. There is no partial invalidation.
#[derive(Default)]
pub struct PriceCache {
    sell: RwLock<HashMap<StationKey, Arc<ExternalOrder>>>,
    buy: RwLock<HashMap<StationKey, Arc<ExternalOrder>>>,
    region_orders: RwLock<HashMap<RegionKey, OrderList>>,
}

impl PriceCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached best sell order.
    #[must_use]
    pub fn sell(&self, key: StationKey) -> Option<Arc<ExternalOrder>> {
        self.sell.read().get(&key).cloned()
    }

    /// Store the best sell order for a key.
    pub fn insert_sell(&self, key: StationKey, order: Arc<ExternalOrder>) {
        self.sell.write().insert(key, order);
    }

    /// Cached best reachable buy order.
    #[must_use]
    pub fn buy(&self, key: StationKey) -> Option<Arc<ExternalOrder>> {
        self.buy.read().get(&key).cloned()
    }

    /// Store the best reachable buy order for a key, replacing any previous
    /// value.
    pub fn insert_buy(&self, key: StationKey, order: Arc<ExternalOrder>) {
        self.buy.write().insert(key, order);
    }

    /// Cached buy orders of a region.
    #[must_use]
    pub fn region_orders(&self, key: RegionKey) -> Option<OrderList> {
        self.region_orders.read().get(&key).cloned()
    }

    /// Store the buy orders of a region.
    pub fn insert_region_orders(&self, key: RegionKey, orders: OrderList) {
        self.region_orders.write().insert(key, orders);
    }

    /// Drop every cached entry.
    pub fn invalidate(&self) {
        self.sell.write().clear();
        self.buy.write().clear();
        self.region_orders.write().clear();
    }

    /// Total number of cached entries across all maps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sell.read().len() + self.buy.read().len() + self.region_orders.read().len()
    }

    /// Returns true if nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OrderSide;
    use rust_decimal_macros::dec;

    fn key() -> StationKey {
        (TypeId::new(34), LocationId::new(60_003_760))
    }

    #[test]
    fn stores_and_returns_shared_orders() {
        let cache = PriceCache::new();
        let order = Arc::new(
            ExternalOrder::builder(OrderSide::Sell, TypeId::new(34), LocationId::new(60_003_760))
                .price(dec!(5))
                .build(),
        );

        cache.insert_sell(key(), Arc::clone(&order));

        let cached = cache.sell(key()).unwrap();
        assert!(Arc::ptr_eq(&cached, &order));
        assert!(cache.buy(key()).is_none());
    }

    #[test]
    fn invalidate_clears_every_map() {
        let cache = PriceCache::new();
        let sentinel = Arc::new(ExternalOrder::sentinel());

        cache.insert_sell(key(), Arc::clone(&sentinel));
        cache.insert_buy(key(), Arc::clone(&sentinel));
        cache.insert_region_orders((TypeId::new(34), RegionId::new(1)), Arc::from(vec![sentinel]));
        assert_eq!(cache.len(), 3);

        cache.invalidate();

        assert!(cache.is_empty());
        assert!(cache.region_orders((TypeId::new(34), RegionId::new(1))).is_none());
    }
}
