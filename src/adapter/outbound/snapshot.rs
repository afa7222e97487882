//! JSON market snapshot.
//!
//! A snapshot bundles everything the price engine needs for offline use:
//! station and solar system placement, the stargate table, market orders
//! and an optional table of known names.
//!
//! ```json
//! {
//!   "stations": [{ "id": 60003760, "solar_system_id": 30000142 }],
//!   "solar_systems": [{ "id": 30000142, "region_id": 10000002 }],
//!   "jumps": [{ "from_region": 10000002, "from_system": 30000142,
//!               "to_system": 30000144, "to_region": 10000002 }],
//!   "orders": [{ "side": "sell", "type_id": 34, "location_id": 60003760,
//!                "price": "5.10", "volume_remaining": 1000, "range": -1 }],
//!   "names": { "1000035": "Caldari Navy" }
//! }
//! ```
//!
//! Orders may omit their solar system and region; they are filled in from
//! the station tables on load.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::memory::{MemoryLocations, StaticNameFetcher};
use crate::domain::{ExternalOrder, JumpMap, LocationId, RegionId, SolarSystemId, SystemJump};
use crate::error::{Error, Result};

/// A station and the solar system it is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationRecord {
    /// Station id.
    pub id: LocationId,
    /// Solar system the station is in.
    pub solar_system_id: SolarSystemId,
}

/// A solar system and the region it is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolarSystemRecord {
    /// Solar system id.
    pub id: SolarSystemId,
    /// Region the solar system is in.
    pub region_id: RegionId,
}

/// Offline market data loaded from a JSON file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarketSnapshot {
    #[serde(default)]
    pub stations: Vec<StationRecord>,
    #[serde(default)]
    pub solar_systems: Vec<SolarSystemRecord>,
    #[serde(default)]
    pub jumps: Vec<SystemJump>,
    #[serde(default)]
    pub orders: Vec<ExternalOrder>,
    #[serde(default)]
    pub names: HashMap<u64, String>,
}

impl MarketSnapshot {
    /// Read and validate a snapshot file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse and validate snapshot JSON.
    pub fn parse(content: &str) -> Result<Self> {
        let snapshot: Self = serde_json::from_str(content)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    fn validate(&self) -> Result<()> {
        let mut stations = HashSet::new();
        for station in &self.stations {
            if station.solar_system_id.is_unknown() {
                return Err(Error::Snapshot(format!(
                    "station {} has no solar system",
                    station.id
                )));
            }
            if !stations.insert(station.id) {
                return Err(Error::Snapshot(format!("duplicate station {}", station.id)));
            }
        }

        let mut systems = HashSet::new();
        for system in &self.solar_systems {
            if system.region_id.is_unknown() {
                return Err(Error::Snapshot(format!(
                    "solar system {} has no region",
                    system.id
                )));
            }
            if !systems.insert(system.id) {
                return Err(Error::Snapshot(format!(
                    "duplicate solar system {}",
                    system.id
                )));
            }
        }

        Ok(())
    }

    /// Station and solar system tables.
    #[must_use]
    pub fn locations(&self) -> MemoryLocations {
        let locations = self
            .stations
            .iter()
            .fold(MemoryLocations::new(), |locations, station| {
                locations.with_station(station.id, station.solar_system_id)
            });
        self.solar_systems
            .iter()
            .fold(locations, |locations, system| {
                locations.with_system(system.id, system.region_id)
            })
    }

    /// Intra-region jump graphs.
    #[must_use]
    pub fn jump_map(&self) -> JumpMap {
        JumpMap::from_jumps(self.jumps.iter().copied())
    }

    /// Name table as a fetcher.
    #[must_use]
    pub fn name_fetcher(&self) -> StaticNameFetcher {
        StaticNameFetcher::new(self.names.clone())
    }

    /// Orders with solar system and region filled in from the station
    /// tables where they were left out.
    #[must_use]
    pub fn resolved_orders(&self) -> Vec<ExternalOrder> {
        let systems: HashMap<_, _> = self
            .stations
            .iter()
            .map(|station| (station.id, station.solar_system_id))
            .collect();
        let regions: HashMap<_, _> = self
            .solar_systems
            .iter()
            .map(|system| (system.id, system.region_id))
            .collect();

        self.orders
            .iter()
            .cloned()
            .map(|order| {
                let system = if order.solar_system_id().is_unknown() {
                    systems
                        .get(&order.location_id())
                        .copied()
                        .unwrap_or_default()
                } else {
                    order.solar_system_id()
                };
                let region = if order.region_id().is_unknown() {
                    regions.get(&system).copied().unwrap_or_default()
                } else {
                    order.region_id()
                };
                order.into_builder().solar_system(system).region(region).build()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::JumpRange;
    use crate::port::LocationResolver;

    const SNAPSHOT: &str = r#"{
        "stations": [{ "id": 60003760, "solar_system_id": 30000142 }],
        "solar_systems": [
            { "id": 30000142, "region_id": 10000002 },
            { "id": 30000144, "region_id": 10000002 }
        ],
        "jumps": [
            { "from_region": 10000002, "from_system": 30000142,
              "to_system": 30000144, "to_region": 10000002 }
        ],
        "orders": [
            { "side": "buy", "type_id": 34, "location_id": 60003760,
              "price": "4.5", "volume_remaining": 10, "range": 2 }
        ],
        "names": { "7": "Seven" }
    }"#;

    #[test]
    fn builds_adapters() {
        let snapshot = MarketSnapshot::parse(SNAPSHOT).unwrap();

        let locations = snapshot.locations();
        assert_eq!(
            locations.solar_system_of(LocationId::new(60_003_760)),
            Some(SolarSystemId::new(30_000_142))
        );
        assert_eq!(
            locations.region_of(SolarSystemId::new(30_000_144)),
            Some(RegionId::new(10_000_002))
        );

        let map = snapshot.jump_map();
        let graph = map.graph(RegionId::new(10_000_002)).unwrap();
        assert!(graph.is_within(SolarSystemId::new(30_000_142), SolarSystemId::new(30_000_144), 1));
    }

    #[test]
    fn fills_in_order_locations() {
        let snapshot = MarketSnapshot::parse(SNAPSHOT).unwrap();
        let orders = snapshot.resolved_orders();

        assert_eq!(orders[0].solar_system_id(), SolarSystemId::new(30_000_142));
        assert_eq!(orders[0].region_id(), RegionId::new(10_000_002));
        assert_eq!(orders[0].range(), JumpRange::Jumps(2));
    }

    #[test]
    fn rejects_station_without_system() {
        let result = MarketSnapshot::parse(r#"{ "stations": [{ "id": 1, "solar_system_id": 0 }] }"#);
        assert!(matches!(result, Err(Error::Snapshot(_))));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(MarketSnapshot::parse("{"), Err(Error::Json(_))));
    }
}
