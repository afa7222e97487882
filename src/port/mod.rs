//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! # Architecture
//!
//! ```text
//!                 ┌───────────────────────────┐
//!                 │        Application        │
//!                 │  MarketDataProvider, fill │
//!                 └─────────────┬─────────────┘
//!                               │
//!      ┌──────────────┬─────────┴──────┬────────────────┐
//!      ▼              ▼                ▼                ▼
//! ┌──────────┐  ┌────────────┐  ┌─────────────┐  ┌─────────────┐
//! │OrderStore│  │ Location   │  │ JumpGraph   │  │ NameFetcher │
//! │          │  │ Resolver   │  │ Provider    │  │             │
//! └──────────┘  └────────────┘  └─────────────┘  └─────────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`OrderStore`] - Imported market orders
//! - [`LocationResolver`] - Station → solar system → region
//! - [`JumpGraphProvider`] - Intra-region stargate adjacency
//! - [`NameFetcher`] - Remote generic name resolution

pub mod outbound;

pub use outbound::jump::JumpGraphProvider;
pub use outbound::location::LocationResolver;
pub use outbound::names::{NameCallback, NameFetcher};
pub use outbound::store::{OrderStore, TypeLocationPairs};
