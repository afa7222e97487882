//! Order store port.
//!
//! The store owns imported market orders. Finders return shared references;
//! the caching layer above decides how absence is presented to callers.

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::{ExternalOrder, LocationId, RegionId, TypeId};
use crate::error::Result;

/// Set of (type, location) pairs touched by an import.
pub type TypeLocationPairs = HashSet<(TypeId, LocationId)>;

/// Persistence of imported market orders.
///
/// # Implementation Notes
///
/// - `find_sell_by_type_and_station` returns
///   [`DomainError::NotFound`](crate::domain::DomainError::NotFound) (wrapped
///   in [`Error::Domain`](crate::error::Error::Domain)) when the station has no
///   sell order for the type. Any other error is a store failure.
/// - `find_buy_by_type_and_region` returns an empty list, not an error, when
///   nothing matches. Orders are ordered by descending price.
/// - `remove_obsolete` deletes every stored order whose (type, location) pair
///   is in the set, so a following `batch_store` replaces them wholesale.
pub trait OrderStore: Send + Sync {
    /// Cheapest sell order for a type at a station.
    fn find_sell_by_type_and_station(
        &self,
        type_id: TypeId,
        station_id: LocationId,
    ) -> Result<Arc<ExternalOrder>>;

    /// All buy orders for a type anywhere in a region.
    fn find_buy_by_type_and_region(
        &self,
        type_id: TypeId,
        region_id: RegionId,
    ) -> Result<Vec<Arc<ExternalOrder>>>;

    /// Drop stored orders for the given (type, location) pairs.
    fn remove_obsolete(&self, pairs: &TypeLocationPairs) -> Result<()>;

    /// Store a batch of orders.
    fn batch_store(&self, orders: &[ExternalOrder]) -> Result<()>;
}
