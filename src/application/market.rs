//! Caching market data provider.
//!
//! Answers "best sell here" and "best buy reachable from here" questions over
//! the order store, memoizing every answer until the order set changes.
//!
//! Absence is never an error at this level: a lookup without a usable order
//! yields the shared sentinel order (price zero). Callers that must tell
//! "no order" apart from "free" use [`MarketDataProvider::try_type_sell_price`].

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::cache::{LocationCache, OrderList, PriceCache};
use crate::domain::{
    ExternalOrder, JumpGraph, JumpRange, LocationId, RegionId, SolarSystemId, TypeId,
};
use crate::error::Result;
use crate::port::{JumpGraphProvider, LocationResolver, OrderStore, TypeLocationPairs};

/// Caching front for the order store and the static universe data.
pub struct MarketDataProvider {
    store: Arc<dyn OrderStore>,
    locations: Arc<dyn LocationResolver>,
    jumps: Arc<dyn JumpGraphProvider>,
    prices: PriceCache,
    universe: LocationCache,
    sentinel: Arc<ExternalOrder>,
}

impl MarketDataProvider {
    /// Create a provider over the given collaborators.
    pub fn new(
        store: Arc<dyn OrderStore>,
        locations: Arc<dyn LocationResolver>,
        jumps: Arc<dyn JumpGraphProvider>,
    ) -> Self {
        Self {
            store,
            locations,
            jumps,
            prices: PriceCache::new(),
            universe: LocationCache::new(),
            sentinel: Arc::new(ExternalOrder::sentinel()),
        }
    }

    /// The shared "no order" value returned for unmatched lookups.
    #[must_use]
    pub fn sentinel(&self) -> Arc<ExternalOrder> {
        Arc::clone(&self.sentinel)
    }

    /// Price cache, for inspection.
    #[must_use]
    pub fn price_cache(&self) -> &PriceCache {
        &self.prices
    }

    /// Best sell order for a type at a station.
    ///
    /// Sell orders are only ever bought from where they sit, so no range
    /// search is involved. A missing order is cached as the sentinel.
    pub fn type_sell_price(&self, type_id: TypeId, station_id: LocationId) -> Arc<ExternalOrder> {
        let key = (type_id, station_id);
        if let Some(order) = self.prices.sell(key) {
            return order;
        }

        let order = match self.store.find_sell_by_type_and_station(type_id, station_id) {
            Ok(order) => order,
            Err(err) if err.is_not_found() => {
                debug!(type_id = %type_id, station_id = %station_id, "No sell order at station");
                self.sentinel()
            }
            Err(err) => {
                warn!(
                    type_id = %type_id,
                    station_id = %station_id,
                    error = %err,
                    "Sell order lookup failed"
                );
                self.sentinel()
            }
        };

        self.prices.insert_sell(key, Arc::clone(&order));
        order
    }

    /// Best sell order for a type at a station, surfacing absence.
    ///
    /// Found orders are cached as in [`MarketDataProvider::type_sell_price`];
    /// a not-found result is returned to the caller and left uncached.
    pub fn try_type_sell_price(
        &self,
        type_id: TypeId,
        station_id: LocationId,
    ) -> Result<Arc<ExternalOrder>> {
        let key = (type_id, station_id);
        if let Some(order) = self.prices.sell(key) {
            if !order.is_sentinel() {
                return Ok(order);
            }
        }

        let order = self.store.find_sell_by_type_and_station(type_id, station_id)?;
        self.prices.insert_sell(key, Arc::clone(&order));
        Ok(order)
    }

    /// Best buy order for a type that can be filled from a station.
    ///
    /// Station-only orders match when they sit at the station itself. Ranged
    /// orders match when their solar system is within range of the station's
    /// solar system. Stations that cannot be placed, or regions without a
    /// jump graph, yield the sentinel.
    pub fn type_buy_price(&self, type_id: TypeId, station_id: LocationId) -> Arc<ExternalOrder> {
        let key = (type_id, station_id);
        if let Some(order) = self.prices.buy(key) {
            return order;
        }

        // Unresolvable keys are memoized through this entry.
        self.prices.insert_buy(key, self.sentinel());

        let Some((system, region, graph)) = self.reachability_context(station_id) else {
            return self.sentinel();
        };

        let mut best = self.sentinel();
        for order in self.external_orders(type_id, region).iter() {
            if order.price() <= best.price() {
                continue;
            }
            if !Self::is_reachable(&graph, order, station_id, system) {
                continue;
            }

            best = Arc::clone(order);
            self.prices.insert_buy(key, Arc::clone(&best));
        }

        debug!(
            type_id = %type_id,
            station_id = %station_id,
            price = %best.price(),
            "Resolved best buy price"
        );
        best
    }

    /// Every buy order for a type that can be filled from a station, best
    /// price first.
    ///
    /// Uses one search from the station's system for all candidates. Not
    /// memoized.
    pub fn reachable_buy_orders(
        &self,
        type_id: TypeId,
        station_id: LocationId,
    ) -> Vec<Arc<ExternalOrder>> {
        let Some((system, region, graph)) = self.reachability_context(station_id) else {
            return Vec::new();
        };

        let orders = self.external_orders(type_id, region);
        let max_range = orders
            .iter()
            .filter_map(|order| match order.range() {
                JumpRange::Jumps(n) => Some(n),
                JumpRange::Station => None,
            })
            .max()
            .unwrap_or(0);
        let distances = graph.distances_from(system, max_range);

        let mut reachable: Vec<_> = orders
            .iter()
            .filter(|order| match order.range() {
                JumpRange::Station => order.location_id() == station_id,
                JumpRange::Jumps(range) => distances
                    .get(&order.solar_system_id())
                    .is_some_and(|&distance| distance <= range),
            })
            .cloned()
            .collect();
        reachable.sort_by(|a, b| b.price().cmp(&a.price()));
        reachable
    }

    /// Buy orders for a type anywhere in a region, cached per (type, region).
    ///
    /// Store failures are logged and read as an empty region; they are not
    /// cached.
    pub fn external_orders(&self, type_id: TypeId, region_id: RegionId) -> OrderList {
        let key = (type_id, region_id);
        if let Some(orders) = self.prices.region_orders(key) {
            return orders;
        }

        match self.store.find_buy_by_type_and_region(type_id, region_id) {
            Ok(orders) => {
                debug!(
                    type_id = %type_id,
                    region_id = %region_id,
                    count = orders.len(),
                    "Loaded region buy orders"
                );
                let orders: OrderList = orders.into();
                self.prices.insert_region_orders(key, Arc::clone(&orders));
                orders
            }
            Err(err) => {
                warn!(
                    type_id = %type_id,
                    region_id = %region_id,
                    error = %err,
                    "Buy order lookup failed"
                );
                Arc::from(Vec::new())
            }
        }
    }

    /// Replace stored orders and drop every derived price.
    ///
    /// Caches are cleared before the store changes, then obsolete records
    /// for every (type, location) pair in the batch are removed and the new
    /// orders stored.
    pub fn update_external_orders(&self, orders: &[ExternalOrder]) -> Result<()> {
        let pairs: TypeLocationPairs = orders.iter().map(ExternalOrder::type_location).collect();

        self.clear_external_order_caches();
        self.store.remove_obsolete(&pairs)?;
        self.store.batch_store(orders)?;

        info!(
            orders = orders.len(),
            pairs = pairs.len(),
            "External orders updated"
        );
        Ok(())
    }

    /// Drop cached sell prices, buy prices and region order lists.
    ///
    /// Location and jump graph lookups are kept.
    pub fn clear_external_order_caches(&self) {
        self.prices.invalidate();
        info!("External order caches cleared");
    }

    /// Solar system of a station, cached.
    pub fn station_solar_system(&self, station_id: LocationId) -> Option<SolarSystemId> {
        self.universe
            .solar_system(station_id, || self.locations.solar_system_of(station_id))
            .filter(|system| !system.is_unknown())
    }

    /// Region of a solar system, cached.
    pub fn solar_system_region(&self, solar_system_id: SolarSystemId) -> Option<RegionId> {
        self.universe
            .region(solar_system_id, || self.locations.region_of(solar_system_id))
            .filter(|region| !region.is_unknown())
    }

    /// Jump graph of a region, cached for the lifetime of the provider.
    pub fn jump_graph(&self, region_id: RegionId) -> Option<Arc<JumpGraph>> {
        self.universe
            .jump_graph(region_id, || self.jumps.adjacency_for(region_id))
    }

    fn reachability_context(
        &self,
        station_id: LocationId,
    ) -> Option<(SolarSystemId, RegionId, Arc<JumpGraph>)> {
        let Some(system) = self.station_solar_system(station_id) else {
            debug!(station_id = %station_id, "Station has no known solar system");
            return None;
        };
        let Some(region) = self.solar_system_region(system) else {
            debug!(solar_system_id = %system, "Solar system has no known region");
            return None;
        };
        let Some(graph) = self.jump_graph(region) else {
            debug!(region_id = %region, "Region has no jump graph");
            return None;
        };
        Some((system, region, graph))
    }

    fn is_reachable(
        graph: &JumpGraph,
        order: &ExternalOrder,
        station_id: LocationId,
        system: SolarSystemId,
    ) -> bool {
        match order.range() {
            JumpRange::Station => order.location_id() == station_id,
            JumpRange::Jumps(range) => graph.is_within(system, order.solar_system_id(), range),
        }
    }
}
