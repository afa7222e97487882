//! Builders for domain primitives used across tests.

use rust_decimal::Decimal;

use crate::domain::{
    ExternalOrder, JumpRange, LocationId, OrderSide, RegionId, SolarSystemId, TypeId, Volume,
};

/// Tritanium, the type most tests trade.
pub const TRITANIUM: TypeId = TypeId::new(34);

/// Region used by the fixtures.
pub const REGION: RegionId = RegionId::new(10_000_002);

/// Solar system id for fixture index `n`.
#[must_use]
pub const fn system(n: u32) -> SolarSystemId {
    SolarSystemId::new(30_000_000 + n)
}

/// Station id for fixture index `n`.
#[must_use]
pub const fn station(n: u32) -> LocationId {
    LocationId::new(60_000_000 + n as u64)
}

/// Sell order of `volume` units at `price`, placed at fixture station `n`.
#[must_use]
pub fn sell(n: u32, price: Decimal, volume: Volume) -> ExternalOrder {
    ExternalOrder::builder(OrderSide::Sell, TRITANIUM, station(n))
        .solar_system(system(n))
        .region(REGION)
        .price(price)
        .volume_remaining(volume)
        .build()
}

/// Buy order of `volume` units at `price` with a fill range, placed at
/// fixture station `n`.
#[must_use]
pub fn buy(n: u32, price: Decimal, volume: Volume, range: JumpRange) -> ExternalOrder {
    ExternalOrder::builder(OrderSide::Buy, TRITANIUM, station(n))
        .solar_system(system(n))
        .region(REGION)
        .price(price)
        .volume_remaining(volume)
        .range(range)
        .build()
}
