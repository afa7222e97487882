//! Market data and fill settings.

use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::FillOptions;

pub use crate::domain::STANDING_LIMIT;

/// Market snapshot location and trading parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketConfig {
    /// JSON market snapshot to load orders and universe data from.
    #[serde(default = "default_snapshot")]
    pub snapshot: PathBuf,

    /// Standing towards the station owner's corporation, for station tax.
    #[serde(default)]
    pub corp_standing: f64,

    /// Fail fills that cannot cover the whole volume.
    #[serde(default = "default_require_volume")]
    pub require_volume: bool,

    /// Fill orders even when below their minimum volume.
    #[serde(default)]
    pub ignore_min_volume: bool,
}

fn default_snapshot() -> PathBuf {
    PathBuf::from("market.json")
}

const fn default_require_volume() -> bool {
    true
}

impl MarketConfig {
    /// Fill switches from these settings.
    #[must_use]
    pub const fn fill_options(&self) -> FillOptions {
        FillOptions {
            require_volume: self.require_volume,
            ignore_min_volume: self.ignore_min_volume,
        }
    }
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            snapshot: default_snapshot(),
            corp_standing: 0.0,
            require_volume: default_require_volume(),
            ignore_min_volume: false,
        }
    }
}
