use std::path::PathBuf;

use tempfile::TempDir;

/// Four systems in a line, one station each, plus a second station in
/// system 1.
///
/// Tritanium (34) sells at station 1 for 5.10 and 5.50, and at station 4 for
/// 4.00. Buy orders: 6.00 at station 3 with range 1, 7.00 at station 4
/// station-only.
pub const CHAIN_SNAPSHOT: &str = r#"{
    "stations": [
        { "id": 60000001, "solar_system_id": 30000001 },
        { "id": 60000002, "solar_system_id": 30000002 },
        { "id": 60000003, "solar_system_id": 30000003 },
        { "id": 60000004, "solar_system_id": 30000004 },
        { "id": 60000011, "solar_system_id": 30000001 }
    ],
    "solar_systems": [
        { "id": 30000001, "region_id": 10000002 },
        { "id": 30000002, "region_id": 10000002 },
        { "id": 30000003, "region_id": 10000002 },
        { "id": 30000004, "region_id": 10000002 }
    ],
    "jumps": [
        { "from_region": 10000002, "from_system": 30000001, "to_system": 30000002, "to_region": 10000002 },
        { "from_region": 10000002, "from_system": 30000002, "to_system": 30000003, "to_region": 10000002 },
        { "from_region": 10000002, "from_system": 30000003, "to_system": 30000004, "to_region": 10000002 }
    ],
    "orders": [
        { "id": 1, "side": "sell", "type_id": 34, "location_id": 60000001,
          "price": "5.10", "volume_remaining": 100, "range": -1 },
        { "id": 2, "side": "sell", "type_id": 34, "location_id": 60000001,
          "price": "5.50", "volume_remaining": 100, "range": -1 },
        { "id": 3, "side": "sell", "type_id": 34, "location_id": 60000004,
          "price": "4.00", "volume_remaining": 50, "range": -1 },
        { "id": 4, "side": "buy", "type_id": 34, "location_id": 60000003,
          "price": "6.00", "volume_remaining": 80, "range": 1 },
        { "id": 5, "side": "buy", "type_id": 34, "location_id": 60000004,
          "price": "7.00", "volume_remaining": 80, "range": -1 }
    ],
    "names": { "1000035": "Caldari Navy" }
}"#;

/// Write `content` to `name` inside a fresh temporary directory.
pub fn write_temp(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write temp file");
    (dir, path)
}
