//! Name fetcher over a fixed table.

use std::collections::HashMap;

use crate::port::{NameCallback, NameFetcher};

/// Resolves names from a table, completing every request immediately.
#[derive(Debug, Clone, Default)]
pub struct StaticNameFetcher {
    names: HashMap<u64, String>,
}

impl StaticNameFetcher {
    /// Create a fetcher over `names`.
    #[must_use]
    pub fn new(names: HashMap<u64, String>) -> Self {
        Self { names }
    }
}

impl NameFetcher for StaticNameFetcher {
    fn fetch_generic_name(&self, id: u64, callback: NameCallback) {
        match self.names.get(&id) {
            Some(name) => callback(Ok(name.clone())),
            None => callback(Err(format!("no name for id {id}"))),
        }
    }
}
