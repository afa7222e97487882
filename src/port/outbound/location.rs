//! Location resolution port.

use crate::domain::{LocationId, RegionId, SolarSystemId};

/// Maps stations to solar systems and solar systems to regions.
///
/// Unknown ids resolve to `None`. Absence is the normal "unknown location"
/// case and never an error.
pub trait LocationResolver: Send + Sync {
    /// Solar system a station or structure is in.
    fn solar_system_of(&self, station_id: LocationId) -> Option<SolarSystemId>;

    /// Region a solar system belongs to.
    fn region_of(&self, solar_system_id: SolarSystemId) -> Option<RegionId>;
}
