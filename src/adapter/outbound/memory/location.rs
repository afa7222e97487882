//! In-memory location resolver.

use std::collections::HashMap;

use crate::domain::{LocationId, RegionId, SolarSystemId};
use crate::port::LocationResolver;

/// Station and solar system tables held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryLocations {
    stations: HashMap<LocationId, SolarSystemId>,
    systems: HashMap<SolarSystemId, RegionId>,
}

impl MemoryLocations {
    /// Create empty tables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a station in a solar system.
    #[must_use]
    pub fn with_station(mut self, station_id: LocationId, solar_system_id: SolarSystemId) -> Self {
        self.stations.insert(station_id, solar_system_id);
        self
    }

    /// Place a solar system in a region.
    #[must_use]
    pub fn with_system(mut self, solar_system_id: SolarSystemId, region_id: RegionId) -> Self {
        self.systems.insert(solar_system_id, region_id);
        self
    }
}

impl LocationResolver for MemoryLocations {
    fn solar_system_of(&self, station_id: LocationId) -> Option<SolarSystemId> {
        self.stations.get(&station_id).copied()
    }

    fn region_of(&self, solar_system_id: SolarSystemId) -> Option<RegionId> {
        self.systems.get(&solar_system_id).copied()
    }
}
