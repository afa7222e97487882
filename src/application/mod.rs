//! Application services (use cases).
//!
//! These services orchestrate domain logic over the ports: cached price
//! lookups, name resolution and arbitrage quotes.

pub mod arbitrage;
pub mod cache;
pub mod market;
pub mod names;

pub use arbitrage::{quote, Quote};
pub use market::MarketDataProvider;
pub use names::{GenericNameCache, NamesChanged, UNKNOWN_NAME};
