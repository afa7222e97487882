//! Generic name cache with in-flight request deduplication.
//!
//! Names of characters, corporations and structures resolve through a remote
//! lookup. [`GenericNameCache::generic_name`] answers immediately from the
//! cache, or with [`UNKNOWN_NAME`] while a fetch is outstanding. Once the last
//! outstanding fetch completes, subscribers receive a [`NamesChanged`] event
//! so views can re-query.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::broadcast;
use tracing::{debug, warn};

use crate::error::Result;
use crate::port::NameFetcher;

/// Placeholder returned for unresolved or failed names.
pub const UNKNOWN_NAME: &str = "(unknown)";

/// Broadcast once no name requests remain pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamesChanged;

#[derive(Default)]
struct NameState {
    names: HashMap<u64, String>,
    pending: HashSet<u64>,
}

/// Thread-safe cache of generic names.
pub struct GenericNameCache {
    fetcher: Arc<dyn NameFetcher>,
    state: Arc<Mutex<NameState>>,
    tx: Option<broadcast::Sender<NamesChanged>>,
}

impl GenericNameCache {
    /// Create a cache without notifications.
    #[must_use]
    pub fn new(fetcher: Arc<dyn NameFetcher>) -> Self {
        Self {
            fetcher,
            state: Arc::new(Mutex::new(NameState::default())),
            tx: None,
        }
    }

    /// Create a cache with broadcast notifications.
    ///
    /// Returns the cache and a receiver for [`NamesChanged`] events.
    #[must_use]
    pub fn with_notifications(
        fetcher: Arc<dyn NameFetcher>,
        capacity: usize,
    ) -> (Self, broadcast::Receiver<NamesChanged>) {
        let (tx, rx) = broadcast::channel(capacity);
        let cache = Self {
            fetcher,
            state: Arc::new(Mutex::new(NameState::default())),
            tx: Some(tx),
        };
        (cache, rx)
    }

    /// Subscribe to change notifications.
    ///
    /// Returns `None` if the cache was created without notifications.
    #[must_use]
    pub fn subscribe(&self) -> Option<broadcast::Receiver<NamesChanged>> {
        self.tx.as_ref().map(broadcast::Sender::subscribe)
    }

    /// Name of `id`, or [`UNKNOWN_NAME`] until it has been fetched.
    ///
    /// The first miss for an id starts a fetch; further misses while it is
    /// pending do not.
    pub fn generic_name(&self, id: u64) -> String {
        if id == 0 {
            return UNKNOWN_NAME.to_string();
        }

        {
            let mut state = self.state.lock();
            if let Some(name) = state.names.get(&id) {
                return name.clone();
            }
            if !state.pending.insert(id) {
                return UNKNOWN_NAME.to_string();
            }
        }

        debug!(id, "Fetching generic name");

        // The fetcher may complete synchronously, so the lock must be free.
        let state = Arc::clone(&self.state);
        let tx = self.tx.clone();
        self.fetcher.fetch_generic_name(
            id,
            Box::new(move |result| {
                let name = result.unwrap_or_else(|error| {
                    warn!(id, error = %error, "Generic name lookup failed");
                    UNKNOWN_NAME.to_string()
                });

                let idle = {
                    let mut state = state.lock();
                    state.names.insert(id, name);
                    state.pending.remove(&id);
                    state.pending.is_empty()
                };

                if idle {
                    if let Some(tx) = tx {
                        // No receivers is fine.
                        let _ = tx.send(NamesChanged);
                    }
                }
            }),
        );

        UNKNOWN_NAME.to_string()
    }

    /// Cached name of `id`, without fetching.
    #[must_use]
    pub fn cached(&self, id: u64) -> Option<String> {
        self.state.lock().names.get(&id).cloned()
    }

    /// Number of fetches still outstanding.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.state.lock().pending.len()
    }

    /// Number of cached names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.lock().names.len()
    }

    /// Returns true if no names are cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Merge names from a JSON file written by [`GenericNameCache::save`].
    ///
    /// A missing file loads nothing. Returns the number of names read.
    pub fn load(&self, path: &Path) -> Result<usize> {
        if !path.exists() {
            return Ok(0);
        }

        let content = std::fs::read_to_string(path)?;
        let names: BTreeMap<u64, String> = serde_json::from_str(&content)?;
        let count = names.len();

        self.state.lock().names.extend(names);
        debug!(path = %path.display(), count, "Loaded generic names");
        Ok(count)
    }

    /// Write resolved names to a JSON file, creating parent directories.
    ///
    /// Failed lookups are not written so they are retried next time.
    pub fn save(&self, path: &Path) -> Result<()> {
        let names: BTreeMap<u64, String> = self
            .state
            .lock()
            .names
            .iter()
            .filter(|(_, name)| name.as_str() != UNKNOWN_NAME)
            .map(|(id, name)| (*id, name.clone()))
            .collect();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(&names)?)?;
        debug!(path = %path.display(), count = names.len(), "Saved generic names");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::NameCallback;

    /// Completes every fetch immediately.
    struct Immediate;

    impl NameFetcher for Immediate {
        fn fetch_generic_name(&self, id: u64, callback: NameCallback) {
            if id == 13 {
                callback(Err("boom".to_string()));
            } else {
                callback(Ok(format!("name-{id}")));
            }
        }
    }

    #[test]
    fn zero_is_unknown_without_fetching() {
        let cache = GenericNameCache::new(Arc::new(Immediate));
        assert_eq!(cache.generic_name(0), UNKNOWN_NAME);
        assert!(cache.is_empty());
    }

    #[test]
    fn synchronous_completion_fills_cache() {
        let cache = GenericNameCache::new(Arc::new(Immediate));

        assert_eq!(cache.generic_name(7), UNKNOWN_NAME);
        assert_eq!(cache.generic_name(7), "name-7");
        assert_eq!(cache.pending(), 0);
    }

    #[test]
    fn errors_are_cached_as_unknown() {
        let cache = GenericNameCache::new(Arc::new(Immediate));

        cache.generic_name(13);
        assert_eq!(cache.cached(13).as_deref(), Some(UNKNOWN_NAME));
    }

    #[test]
    fn save_skips_unknown_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("names").join("generic_names.json");

        let cache = GenericNameCache::new(Arc::new(Immediate));
        cache.generic_name(7);
        cache.generic_name(13);
        cache.save(&path).unwrap();

        let restored = GenericNameCache::new(Arc::new(Immediate));
        assert_eq!(restored.load(&path).unwrap(), 1);
        assert_eq!(restored.cached(7).as_deref(), Some("name-7"));
        assert_eq!(restored.cached(13), None);
    }

    #[test]
    fn load_of_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let cache = GenericNameCache::new(Arc::new(Immediate));
        assert_eq!(cache.load(&dir.path().join("absent.json")).unwrap(), 0);
    }
}
