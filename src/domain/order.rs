//! Market order records imported from the game's order feeds.
//!
//! An [`ExternalOrder`] is immutable once it has been fetched: stores hand
//! out `Arc<ExternalOrder>` and the price caches only ever hold shared
//! references to the store's records.
//!
//! # Examples
//!
//! ```
//! use evetrade::domain::order::{ExternalOrder, JumpRange, OrderSide};
//! use evetrade::domain::id::{LocationId, SolarSystemId, TypeId};
//! use rust_decimal_macros::dec;
//!
//! let order = ExternalOrder::builder(OrderSide::Buy, TypeId::new(34), LocationId::new(60_003_760))
//!     .solar_system(SolarSystemId::new(30_000_142))
//!     .price(dec!(4.25))
//!     .volume_remaining(1_000_000)
//!     .range(JumpRange::Jumps(5))
//!     .build();
//!
//! assert_eq!(order.price(), dec!(4.25));
//! assert!(!order.is_sentinel());
//! assert!(ExternalOrder::sentinel().is_sentinel());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::id::{LocationId, RegionId, SolarSystemId, TypeId};
use super::money::{Price, Volume};

/// Which side of the market an order sits on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    /// Bid: the issuer wants to buy.
    #[default]
    Buy,
    /// Ask: the issuer wants to sell.
    Sell,
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell"),
        }
    }
}

/// How far from its station an order may be filled.
///
/// Serialized as the raw game value: `-1` for station-only orders,
/// otherwise the maximum number of jumps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum JumpRange {
    /// Only fillable at the order's own station.
    #[default]
    Station,
    /// Fillable from any solar system within this many jumps.
    Jumps(u32),
}

impl JumpRange {
    /// Raw game value for station-only orders.
    pub const STATION_RAW: i32 = -1;
}

impl TryFrom<i32> for JumpRange {
    type Error = DomainError;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        match raw {
            Self::STATION_RAW => Ok(Self::Station),
            n if n >= 0 => Ok(Self::Jumps(n.unsigned_abs())),
            n => Err(DomainError::InvalidJumpRange(n)),
        }
    }
}

impl From<JumpRange> for i32 {
    fn from(range: JumpRange) -> Self {
        match range {
            JumpRange::Station => JumpRange::STATION_RAW,
            JumpRange::Jumps(n) => i32::try_from(n).unwrap_or(i32::MAX),
        }
    }
}

impl fmt::Display for JumpRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Station => write!(f, "station"),
            Self::Jumps(n) => write!(f, "{n} jumps"),
        }
    }
}

/// A buy or sell order located at a station.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalOrder {
    #[serde(default)]
    id: u64,
    side: OrderSide,
    type_id: TypeId,
    location_id: LocationId,
    #[serde(default)]
    solar_system_id: SolarSystemId,
    #[serde(default)]
    region_id: RegionId,
    price: Price,
    volume_remaining: Volume,
    #[serde(default = "default_min_volume")]
    min_volume: Volume,
    #[serde(default)]
    range: JumpRange,
}

const fn default_min_volume() -> Volume {
    1
}

impl ExternalOrder {
    /// Start building an order for a type at a location.
    #[must_use]
    pub fn builder(side: OrderSide, type_id: TypeId, location_id: LocationId) -> ExternalOrderBuilder {
        ExternalOrderBuilder::new(side, type_id, location_id)
    }

    /// The "no matching order" value: price zero, every id unknown.
    #[must_use]
    pub fn sentinel() -> Self {
        Self::default()
    }

    /// True for the value returned by [`ExternalOrder::sentinel`].
    #[must_use]
    pub fn is_sentinel(&self) -> bool {
        self.id == 0 && self.type_id.is_unknown() && self.price.is_zero()
    }

    /// Order id assigned by the game.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Order side.
    #[must_use]
    pub const fn side(&self) -> OrderSide {
        self.side
    }

    /// Traded item type.
    #[must_use]
    pub const fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Station the order was issued at.
    #[must_use]
    pub const fn location_id(&self) -> LocationId {
        self.location_id
    }

    /// Solar system of the order's station.
    #[must_use]
    pub const fn solar_system_id(&self) -> SolarSystemId {
        self.solar_system_id
    }

    /// Region of the order's station.
    #[must_use]
    pub const fn region_id(&self) -> RegionId {
        self.region_id
    }

    /// Unit price.
    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }

    /// Units still open on the order.
    #[must_use]
    pub const fn volume_remaining(&self) -> Volume {
        self.volume_remaining
    }

    /// Smallest quantity a single transaction may trade.
    #[must_use]
    pub const fn min_volume(&self) -> Volume {
        self.min_volume
    }

    /// Fill range of the order.
    #[must_use]
    pub const fn range(&self) -> JumpRange {
        self.range
    }

    /// Reopen the order for modification.
    #[must_use]
    pub fn into_builder(self) -> ExternalOrderBuilder {
        ExternalOrderBuilder { order: self }
    }

    /// The cache key an import of this order affects.
    #[must_use]
    pub const fn type_location(&self) -> (TypeId, LocationId) {
        (self.type_id, self.location_id)
    }
}

/// Builder for [`ExternalOrder`].
#[derive(Debug, Clone)]
pub struct ExternalOrderBuilder {
    order: ExternalOrder,
}

impl ExternalOrderBuilder {
    fn new(side: OrderSide, type_id: TypeId, location_id: LocationId) -> Self {
        Self {
            order: ExternalOrder {
                side,
                type_id,
                location_id,
                min_volume: default_min_volume(),
                ..ExternalOrder::default()
            },
        }
    }

    /// Set the game order id.
    #[must_use]
    pub fn id(mut self, id: u64) -> Self {
        self.order.id = id;
        self
    }

    /// Set the solar system of the order's station.
    #[must_use]
    pub fn solar_system(mut self, solar_system_id: SolarSystemId) -> Self {
        self.order.solar_system_id = solar_system_id;
        self
    }

    /// Set the region of the order's station.
    #[must_use]
    pub fn region(mut self, region_id: RegionId) -> Self {
        self.order.region_id = region_id;
        self
    }

    /// Set the unit price.
    #[must_use]
    pub fn price(mut self, price: Price) -> Self {
        self.order.price = price;
        self
    }

    /// Set the open volume.
    #[must_use]
    pub fn volume_remaining(mut self, volume: Volume) -> Self {
        self.order.volume_remaining = volume;
        self
    }

    /// Set the minimum transaction volume.
    #[must_use]
    pub fn min_volume(mut self, volume: Volume) -> Self {
        self.order.min_volume = volume;
        self
    }

    /// Set the fill range.
    #[must_use]
    pub fn range(mut self, range: JumpRange) -> Self {
        self.order.range = range;
        self
    }

    /// Finish the order.
    #[must_use]
    pub fn build(self) -> ExternalOrder {
        self.order
    }
}
