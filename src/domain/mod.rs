//! Game-agnostic market domain: ids, orders, jump graphs, fills and tax.

pub mod error;
pub mod fill;
pub mod id;
pub mod jump;
pub mod money;
pub mod order;
pub mod tax;

pub use error::DomainError;
pub use fill::{fill_order_queue, fill_orders, FillOptions, FillOutcome, FillableOrder, UsedOrder};
pub use id::{LocationId, RegionId, SolarSystemId, TypeId};
pub use jump::{JumpGraph, JumpMap, SystemJump};
pub use money::{Price, Volume};
pub use order::{ExternalOrder, ExternalOrderBuilder, JumpRange, OrderSide};
pub use tax::{checked_station_tax, reprocessing_tax, station_tax, STANDING_LIMIT};
