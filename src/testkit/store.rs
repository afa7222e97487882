//! Order stores for exercising the caching layer.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::adapter::outbound::memory::MemoryOrderStore;
use crate::domain::{ExternalOrder, LocationId, RegionId, TypeId};
use crate::error::{Error, Result};
use crate::port::{OrderStore, TypeLocationPairs};

/// Wraps a [`MemoryOrderStore`] and counts finder calls.
#[derive(Default)]
pub struct CountingStore {
    inner: MemoryOrderStore,
    sell_queries: AtomicUsize,
    buy_queries: AtomicUsize,
}

impl CountingStore {
    /// Create a store holding `orders`.
    pub fn with_orders(orders: &[ExternalOrder]) -> Arc<Self> {
        let store = Self::default();
        // The in-memory store never fails.
        let _ = store.inner.batch_store(orders);
        Arc::new(store)
    }

    /// Number of `find_sell_by_type_and_station` calls.
    pub fn sell_queries(&self) -> usize {
        self.sell_queries.load(Ordering::SeqCst)
    }

    /// Number of `find_buy_by_type_and_region` calls.
    pub fn buy_queries(&self) -> usize {
        self.buy_queries.load(Ordering::SeqCst)
    }
}

impl OrderStore for CountingStore {
    fn find_sell_by_type_and_station(
        &self,
        type_id: TypeId,
        station_id: LocationId,
    ) -> Result<Arc<ExternalOrder>> {
        self.sell_queries.fetch_add(1, Ordering::SeqCst);
        self.inner.find_sell_by_type_and_station(type_id, station_id)
    }

    fn find_buy_by_type_and_region(
        &self,
        type_id: TypeId,
        region_id: RegionId,
    ) -> Result<Vec<Arc<ExternalOrder>>> {
        self.buy_queries.fetch_add(1, Ordering::SeqCst);
        self.inner.find_buy_by_type_and_region(type_id, region_id)
    }

    fn remove_obsolete(&self, pairs: &TypeLocationPairs) -> Result<()> {
        self.inner.remove_obsolete(pairs)
    }

    fn batch_store(&self, orders: &[ExternalOrder]) -> Result<()> {
        self.inner.batch_store(orders)
    }
}

/// A store whose every call fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingStore;

impl FailingStore {
    fn failure() -> Error {
        Error::Store("connection lost".to_string())
    }
}

impl OrderStore for FailingStore {
    fn find_sell_by_type_and_station(&self, _: TypeId, _: LocationId) -> Result<Arc<ExternalOrder>> {
        Err(Self::failure())
    }

    fn find_buy_by_type_and_region(
        &self,
        _: TypeId,
        _: RegionId,
    ) -> Result<Vec<Arc<ExternalOrder>>> {
        Err(Self::failure())
    }

    fn remove_obsolete(&self, _: &TypeLocationPairs) -> Result<()> {
        Err(Self::failure())
    }

    fn batch_store(&self, _: &[ExternalOrder]) -> Result<()> {
        Err(Self::failure())
    }
}
