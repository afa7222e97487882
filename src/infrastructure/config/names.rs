//! Generic name cache settings.

use std::path::PathBuf;

use serde::Deserialize;

const CACHE_DIR: &str = "evetrade";
const CACHE_FILE: &str = "generic_names.json";

/// Where resolved names are persisted between runs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NamesConfig {
    /// Cache file. Defaults to the user cache directory.
    #[serde(default)]
    pub cache_file: Option<PathBuf>,
}

impl NamesConfig {
    /// Configured cache file, or the default under the user cache directory.
    ///
    /// `None` when no path is configured and the platform has no cache
    /// directory.
    #[must_use]
    pub fn cache_path(&self) -> Option<PathBuf> {
        self.cache_file
            .clone()
            .or_else(|| dirs::cache_dir().map(|dir| dir.join(CACHE_DIR).join(CACHE_FILE)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let config = NamesConfig {
            cache_file: Some(PathBuf::from("/tmp/names.json")),
        };
        assert_eq!(config.cache_path(), Some(PathBuf::from("/tmp/names.json")));
    }

    #[test]
    fn default_path_ends_with_cache_file() {
        if let Some(path) = NamesConfig::default().cache_path() {
            assert!(path.ends_with("evetrade/generic_names.json"));
        }
    }
}
