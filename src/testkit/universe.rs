//! Linear chain fixture: systems 1 - 2 - ... - n in one region, station `i`
//! in system `i`.

use crate::adapter::outbound::memory::MemoryLocations;
use crate::domain::{JumpMap, SystemJump};

use super::domain::{station, system, REGION};

/// Locations and jumps of a linear chain of `len` systems.
pub struct ChainUniverse {
    /// Station and solar system tables for the chain.
    pub locations: MemoryLocations,
    /// Jumps linking each system to the next.
    pub jumps: JumpMap,
}

impl ChainUniverse {
    /// Build a chain of `len` systems numbered from 1.
    #[must_use]
    pub fn linear(len: u32) -> Self {
        let locations = (1..=len).fold(MemoryLocations::new(), |locations, n| {
            locations
                .with_station(station(n), system(n))
                .with_system(system(n), REGION)
        });
        let jumps = JumpMap::from_jumps(
            (1..len).map(|n| SystemJump::new(REGION, system(n), system(n + 1), REGION)),
        );
        Self { locations, jumps }
    }
}
