//! Evetrade - EVE Online market price engine.
//!
//! Caches best buy and sell prices over imported market orders, decides which
//! remote buy orders are reachable from a station through the stargate
//! graph, and fills trade volumes against order books with station tax.
//!
//! # Architecture
//!
//! The crate follows a ports-and-adapters layout:
//!
//! - **`domain`** - Ids, orders, jump graphs, the fill algorithm and tax
//! - **`port`** - Traits for the order store, location lookup, jump graphs
//!   and name resolution
//! - **`application`** - The caching [`MarketDataProvider`](application::MarketDataProvider),
//!   the generic name cache and arbitrage quotes
//! - **`adapter`** - In-memory stores, JSON market snapshots and the CLI
//! - **`infrastructure`** - Configuration, logging and wiring
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use evetrade::adapter::outbound::memory::{MemoryLocations, MemoryOrderStore};
//! use evetrade::application::MarketDataProvider;
//! use evetrade::domain::{JumpMap, LocationId, TypeId};
//!
//! let provider = MarketDataProvider::new(
//!     Arc::new(MemoryOrderStore::new()),
//!     Arc::new(MemoryLocations::new()),
//!     Arc::new(JumpMap::new()),
//! );
//!
//! let price = provider.type_sell_price(TypeId::new(34), LocationId::new(60_003_760));
//! assert!(price.is_sentinel());
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
