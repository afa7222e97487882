//! In-memory order store.
//!
//! Holds imported orders grouped by (type, location), the same granularity
//! imports replace them at.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::domain::{DomainError, ExternalOrder, LocationId, OrderSide, RegionId, TypeId};
use crate::error::Result;
use crate::port::{OrderStore, TypeLocationPairs};

/// Order store backed by a map of (type, location) to orders.
///
/// Implements the [`OrderStore`] trait for snapshots and tests.
#[derive(Default)]
pub struct MemoryOrderStore {
    orders: RwLock<HashMap<(TypeId, LocationId), Vec<Arc<ExternalOrder>>>>,
}

impl MemoryOrderStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sell orders for a type at a station, cheapest first.
    #[must_use]
    pub fn sell_orders(&self, type_id: TypeId, station_id: LocationId) -> Vec<Arc<ExternalOrder>> {
        let mut orders: Vec<_> = self
            .orders
            .read()
            .get(&(type_id, station_id))
            .into_iter()
            .flatten()
            .filter(|order| order.side() == OrderSide::Sell)
            .cloned()
            .collect();
        orders.sort_by(|a, b| a.price().cmp(&b.price()));
        orders
    }

    /// Total number of stored orders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.read().values().map(Vec::len).sum()
    }

    /// Returns true if the store holds no orders.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl OrderStore for MemoryOrderStore {
    fn find_sell_by_type_and_station(
        &self,
        type_id: TypeId,
        station_id: LocationId,
    ) -> Result<Arc<ExternalOrder>> {
        self.sell_orders(type_id, station_id)
            .into_iter()
            .next()
            .ok_or_else(|| {
                DomainError::not_found("sell order", format!("type {type_id} at {station_id}"))
                    .into()
            })
    }

    fn find_buy_by_type_and_region(
        &self,
        type_id: TypeId,
        region_id: RegionId,
    ) -> Result<Vec<Arc<ExternalOrder>>> {
        let mut orders: Vec<_> = self
            .orders
            .read()
            .iter()
            .filter(|((stored_type, _), _)| *stored_type == type_id)
            .flat_map(|(_, orders)| orders.iter())
            .filter(|order| order.side() == OrderSide::Buy && order.region_id() == region_id)
            .cloned()
            .collect();
        orders.sort_by(|a, b| b.price().cmp(&a.price()));
        Ok(orders)
    }

    fn remove_obsolete(&self, pairs: &TypeLocationPairs) -> Result<()> {
        let mut orders = self.orders.write();
        for pair in pairs {
            orders.remove(pair);
        }
        Ok(())
    }

    fn batch_store(&self, batch: &[ExternalOrder]) -> Result<()> {
        let mut orders = self.orders.write();
        for order in batch {
            orders
                .entry(order.type_location())
                .or_default()
                .push(Arc::new(order.clone()));
        }
        Ok(())
    }
}
