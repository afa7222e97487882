//! Configuration loading tests.

mod support;

use std::path::Path;

use evetrade::error::{ConfigError, Error};
use evetrade::infrastructure::config::Config;

use support::snapshot::write_temp;

#[test]
fn loads_every_section() {
    let (_dir, path) = write_temp(
        "config.toml",
        r#"
[logging]
level = "debug"
format = "json"

[market]
snapshot = "jita.json"
corp_standing = -2.5
require_volume = false

[names]
cache_file = "names.json"
"#,
    );

    let config = Config::load(&path).unwrap();

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, "json");
    assert_eq!(config.market.snapshot, Path::new("jita.json"));
    assert_eq!(config.market.corp_standing, -2.5);
    assert!(!config.market.fill_options().require_volume);
    assert_eq!(config.names.cache_path().unwrap(), Path::new("names.json"));
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = Config::load(dir.path().join("absent.toml"));

    assert!(matches!(result, Err(Error::Config(ConfigError::ReadFile(_)))));
}

#[test]
fn empty_snapshot_path_is_rejected() {
    let (_dir, path) = write_temp("config.toml", "[market]\nsnapshot = \"\"\n");

    let result = Config::load(&path);

    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidValue {
            field: "snapshot",
            ..
        }))
    ));
}

#[test]
fn standing_below_minus_ten_is_rejected() {
    let (_dir, path) = write_temp("config.toml", "[market]\ncorp_standing = -10.01\n");

    let result = Config::load(&path);

    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidValue {
            field: "corp_standing",
            ..
        }))
    ));
}

#[test]
fn unknown_fields_in_sections_are_ignored() {
    let (_dir, path) = write_temp("config.toml", "[market]\nregion = \"The Forge\"\n");
    assert!(Config::load(&path).is_ok());
}
