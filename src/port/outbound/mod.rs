//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the data the market engine depends on: stored
//! orders, location lookups, jump graphs and remote name resolution.

pub mod jump;
pub mod location;
pub mod names;
pub mod store;
