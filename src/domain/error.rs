//! Domain errors for market lookups and order filling.
//!
//! # Examples
//!
//! A mandatory fill that runs out of liquidity:
//!
//! ```
//! use evetrade::domain::error::DomainError;
//! use evetrade::domain::fill::{fill_orders, FillOptions, FillableOrder};
//! use rust_decimal_macros::dec;
//!
//! let orders = vec![FillableOrder::new(5, dec!(1))];
//! let result = fill_orders(&orders, 10, FillOptions::strict());
//!
//! assert!(matches!(
//!     result,
//!     Err(DomainError::InsufficientVolume { requested: 10, available: 5 })
//! ));
//! ```

use thiserror::Error;

use super::money::Volume;

/// Errors raised by domain lookups and algorithms.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A finder had no backing record for the requested key.
    #[error("{what} not found: {key}")]
    NotFound {
        /// Kind of record that was looked up.
        what: &'static str,
        /// Human-readable lookup key.
        key: String,
    },

    /// A mandatory fill could not be satisfied by the available orders.
    #[error("insufficient volume: requested {requested}, available {available}")]
    InsufficientVolume {
        /// Volume the caller asked for.
        requested: Volume,
        /// Volume the eligible orders could supply.
        available: Volume,
    },

    /// Jump ranges are `-1` (station only) or a non-negative hop count.
    #[error("invalid jump range {0}")]
    InvalidJumpRange(i32),

    /// Corporation standings lie within -10..=10.
    #[error("invalid corporation standing {0}")]
    InvalidStanding(f64),
}

impl DomainError {
    /// Build a not-found error for a record kind and key.
    pub fn not_found(what: &'static str, key: impl ToString) -> Self {
        Self::NotFound {
            what,
            key: key.to_string(),
        }
    }

    /// True if this is a not-found condition.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
