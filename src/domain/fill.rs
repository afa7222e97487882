//! Greedy order-book filling.
//!
//! Allocates a desired volume across orders in the sequence the caller
//! provides. Sorting is the caller's job: sell orders ascending by price when
//! buying, buy orders descending by price when selling.
//!
//! # Examples
//!
//! ```
//! use evetrade::domain::fill::{fill_orders, FillOptions, FillOutcome, FillableOrder, UsedOrder};
//! use rust_decimal_macros::dec;
//!
//! let orders = vec![FillableOrder::new(10, dec!(1)), FillableOrder::new(5, dec!(2))];
//! let outcome = fill_orders(&orders, 12, FillOptions::strict()).unwrap();
//!
//! assert_eq!(
//!     outcome,
//!     FillOutcome::Filled(vec![UsedOrder::new(10, dec!(1)), UsedOrder::new(2, dec!(2))])
//! );
//! ```

use std::collections::VecDeque;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::money::{Price, Volume};
use super::order::ExternalOrder;

/// Volume taken from one order at that order's price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UsedOrder {
    /// Units consumed.
    pub volume: Volume,
    /// Unit price of the consumed order.
    pub price: Price,
}

impl UsedOrder {
    /// Create a used-order record.
    #[must_use]
    pub const fn new(volume: Volume, price: Price) -> Self {
        Self { volume, price }
    }

    /// ISK value of this slice.
    #[must_use]
    pub fn value(&self) -> Decimal {
        self.price * Decimal::from(self.volume)
    }
}

/// The part of an order the filler needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillableOrder {
    /// Units still available.
    pub volume: Volume,
    /// Unit price.
    pub price: Price,
    /// Smallest quantity the order may trade.
    #[serde(default = "default_min_volume")]
    pub min_volume: Volume,
}

const fn default_min_volume() -> Volume {
    1
}

impl FillableOrder {
    /// Order without a minimum volume.
    #[must_use]
    pub const fn new(volume: Volume, price: Price) -> Self {
        Self {
            volume,
            price,
            min_volume: default_min_volume(),
        }
    }

    /// Set the minimum volume.
    #[must_use]
    pub const fn with_min_volume(mut self, min_volume: Volume) -> Self {
        self.min_volume = min_volume;
        self
    }

    /// Whether the order may be traded at all.
    ///
    /// An order whose remaining volume fell below its minimum can no longer
    /// be filled.
    #[must_use]
    pub const fn is_eligible(&self, options: FillOptions) -> bool {
        self.volume > 0 && (options.ignore_min_volume || self.volume >= self.min_volume)
    }
}

impl From<&ExternalOrder> for FillableOrder {
    fn from(order: &ExternalOrder) -> Self {
        Self {
            volume: order.volume_remaining(),
            price: order.price(),
            min_volume: order.min_volume(),
        }
    }
}

/// Switches controlling a fill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillOptions {
    /// Fail instead of returning a partial fill.
    #[serde(default)]
    pub require_volume: bool,
    /// Fill orders even when their remaining volume is below their minimum.
    #[serde(default)]
    pub ignore_min_volume: bool,
}

impl FillOptions {
    /// The whole volume must be filled.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            require_volume: true,
            ignore_min_volume: false,
        }
    }

    /// Partial fills are acceptable.
    #[must_use]
    pub const fn partial() -> Self {
        Self {
            require_volume: false,
            ignore_min_volume: false,
        }
    }

    /// Toggle the minimum-volume bypass.
    #[must_use]
    pub const fn ignoring_min_volume(mut self, ignore: bool) -> Self {
        self.ignore_min_volume = ignore;
        self
    }
}

/// Result of a successful fill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FillOutcome {
    /// The whole desired volume was allocated.
    Filled(Vec<UsedOrder>),
    /// Orders ran out first; only allowed without `require_volume`.
    Partial {
        /// Slices that were allocated.
        used: Vec<UsedOrder>,
        /// Volume left unfilled.
        shortfall: Volume,
    },
}

impl FillOutcome {
    /// Allocated slices regardless of completeness.
    #[must_use]
    pub fn used(&self) -> &[UsedOrder] {
        match self {
            Self::Filled(used) | Self::Partial { used, .. } => used,
        }
    }

    /// Consume the outcome, keeping the slices.
    #[must_use]
    pub fn into_used(self) -> Vec<UsedOrder> {
        match self {
            Self::Filled(used) | Self::Partial { used, .. } => used,
        }
    }

    /// Total allocated volume.
    #[must_use]
    pub fn filled_volume(&self) -> Volume {
        self.used().iter().map(|u| u.volume).sum()
    }

    /// Total ISK value of the allocated slices.
    #[must_use]
    pub fn total_value(&self) -> Decimal {
        self.used().iter().map(UsedOrder::value).sum()
    }

    /// Volume left unfilled, zero for complete fills.
    #[must_use]
    pub const fn shortfall(&self) -> Volume {
        match self {
            Self::Filled(_) => 0,
            Self::Partial { shortfall, .. } => *shortfall,
        }
    }

    /// Returns true if the whole volume was allocated.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Filled(_))
    }
}

/// Allocation of `volume` units to the order at `index`.
struct Take {
    index: usize,
    volume: Volume,
}

fn plan<'a>(
    orders: impl IntoIterator<Item = &'a FillableOrder>,
    desired: Volume,
    options: FillOptions,
) -> (Vec<Take>, Volume) {
    let mut takes = Vec::new();
    let mut remaining = desired;

    for (index, order) in orders.into_iter().enumerate() {
        if remaining == 0 {
            break;
        }
        if !order.is_eligible(options) {
            continue;
        }
        let volume = remaining.min(order.volume);
        takes.push(Take { index, volume });
        remaining -= volume;
    }

    (takes, remaining)
}

fn finish(
    used: Vec<UsedOrder>,
    desired: Volume,
    shortfall: Volume,
    options: FillOptions,
) -> Result<FillOutcome, DomainError> {
    if shortfall == 0 {
        return Ok(FillOutcome::Filled(used));
    }
    if options.require_volume {
        return Err(DomainError::InsufficientVolume {
            requested: desired,
            available: desired - shortfall,
        });
    }
    Ok(FillOutcome::Partial { used, shortfall })
}

/// Allocate `desired` units across `orders` without modifying them.
///
/// Orders below their minimum volume are skipped unless
/// `options.ignore_min_volume` is set. With `options.require_volume` a
/// shortfall is reported as [`DomainError::InsufficientVolume`].
pub fn fill_orders(
    orders: &[FillableOrder],
    desired: Volume,
    options: FillOptions,
) -> Result<FillOutcome, DomainError> {
    let (takes, shortfall) = plan(orders, desired, options);
    let used = takes
        .iter()
        .map(|take| UsedOrder::new(take.volume, orders[take.index].price))
        .collect();
    finish(used, desired, shortfall, options)
}

/// Allocate `desired` units and consume them from `orders`.
///
/// Fully consumed orders are removed and a partially consumed order keeps
/// its leftover volume, so repeated calls walk down the book. When the fill
/// fails the queue is left untouched.
pub fn fill_order_queue(
    orders: &mut VecDeque<FillableOrder>,
    desired: Volume,
    options: FillOptions,
) -> Result<FillOutcome, DomainError> {
    let (takes, shortfall) = plan(orders.iter(), desired, options);
    if shortfall > 0 && options.require_volume {
        return finish(Vec::new(), desired, shortfall, options);
    }

    let mut used = Vec::with_capacity(takes.len());
    for take in &takes {
        let order = &mut orders[take.index];
        order.volume -= take.volume;
        used.push(UsedOrder::new(take.volume, order.price));
    }

    // Indices stay valid because removal happens after all takes are applied.
    let mut index = 0;
    orders.retain(|order| {
        let consumed = order.volume == 0 && takes.iter().any(|take| take.index == index);
        index += 1;
        !consumed
    });

    finish(used, desired, shortfall, options)
}
