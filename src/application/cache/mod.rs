//! Cache implementations used by the market data provider.

pub mod location;
pub mod price;

pub use location::LocationCache;
pub use price::{OrderList, PriceCache, RegionKey, StationKey};
