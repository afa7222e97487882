//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`domain`] - Builders for orders and ids.
//! - [`universe`] - A linear chain of solar systems with one station each.
//! - [`store`] - Order stores that count queries or fail on demand.
//! - [`names`] - A name fetcher that completes requests when told to.

pub mod domain;
pub mod names;
pub mod store;
pub mod universe;
