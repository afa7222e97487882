//! Name fetcher that holds callbacks until the test completes them.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

use crate::port::{NameCallback, NameFetcher};

/// Records fetches and completes them on demand.
#[derive(Default)]
pub struct DeferredNameFetcher {
    waiting: Mutex<HashMap<u64, Vec<NameCallback>>>,
    fetches: AtomicUsize,
}

impl DeferredNameFetcher {
    /// Create a fetcher with nothing outstanding.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of fetches started.
    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    /// Complete every outstanding fetch for `id`. Returns how many ran.
    pub fn complete(&self, id: u64, result: Result<&str, &str>) -> usize {
        let callbacks = self.waiting.lock().remove(&id).unwrap_or_default();
        let count = callbacks.len();
        for callback in callbacks {
            callback(result.map(str::to_string).map_err(str::to_string));
        }
        count
    }
}

impl NameFetcher for DeferredNameFetcher {
    fn fetch_generic_name(&self, id: u64, callback: NameCallback) {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.waiting.lock().entry(id).or_default().push(callback);
    }
}
