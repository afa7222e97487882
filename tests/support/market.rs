use std::sync::Arc;

use evetrade::application::MarketDataProvider;
use evetrade::domain::ExternalOrder;
use evetrade::testkit::store::CountingStore;
use evetrade::testkit::universe::ChainUniverse;

/// Provider over a linear chain of `len` systems holding `orders`.
pub fn chain_provider(len: u32, orders: &[ExternalOrder]) -> (Arc<CountingStore>, MarketDataProvider) {
    provider_in(ChainUniverse::linear(len), orders)
}

/// Provider over a prepared universe holding `orders`.
pub fn provider_in(
    universe: ChainUniverse,
    orders: &[ExternalOrder],
) -> (Arc<CountingStore>, MarketDataProvider) {
    let store = CountingStore::with_orders(orders);
    let provider = MarketDataProvider::new(
        store.clone(),
        Arc::new(universe.locations),
        Arc::new(universe.jumps),
    );
    (store, provider)
}
