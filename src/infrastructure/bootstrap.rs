//! Composition root: wires a market snapshot into the price engine.

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::adapter::outbound::memory::{MemoryOrderStore, StaticNameFetcher};
use crate::adapter::outbound::snapshot::MarketSnapshot;
use crate::application::MarketDataProvider;
use crate::error::Result;
use crate::port::OrderStore;

/// A loaded market: order store, caching provider and name table.
pub struct Market {
    /// Backing order store, shared with the provider.
    pub store: Arc<MemoryOrderStore>,
    /// Caching price engine over the store.
    pub provider: MarketDataProvider,
    /// Names known to the snapshot.
    pub names: StaticNameFetcher,
}

impl Market {
    /// Build a market from a parsed snapshot.
    ///
    /// Orders are imported through the provider so the store and caches go
    /// through the same update path as a live import.
    pub fn from_snapshot(snapshot: &MarketSnapshot) -> Result<Self> {
        let store = Arc::new(MemoryOrderStore::new());
        let store_port: Arc<dyn OrderStore> = store.clone();
        let provider = MarketDataProvider::new(
            store_port,
            Arc::new(snapshot.locations()),
            Arc::new(snapshot.jump_map()),
        );
        provider.update_external_orders(&snapshot.resolved_orders())?;

        Ok(Self {
            store,
            provider,
            names: snapshot.name_fetcher(),
        })
    }

    /// Load a snapshot file and build a market from it.
    pub fn open(path: &Path) -> Result<Self> {
        let snapshot = MarketSnapshot::load(path)?;
        info!(
            path = %path.display(),
            orders = snapshot.orders.len(),
            stations = snapshot.stations.len(),
            jumps = snapshot.jumps.len(),
            "Market snapshot loaded"
        );
        Self::from_snapshot(&snapshot)
    }
}
