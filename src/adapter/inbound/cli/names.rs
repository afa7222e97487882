//! Handler for `names`.

use std::sync::Arc;

use serde_json::json;
use tabled::{Table, Tabled};
use tracing::warn;

use super::command::NamesArgs;
use super::output;
use crate::application::{GenericNameCache, UNKNOWN_NAME};
use crate::error::Result;
use crate::infrastructure::bootstrap::Market;
use crate::infrastructure::config::names::NamesConfig;

#[derive(Tabled)]
struct NameRow {
    #[tabled(rename = "Id")]
    id: u64,
    #[tabled(rename = "Name")]
    name: String,
}

/// Execute `names`.
pub fn execute(args: &NamesArgs, market: &Market, config: &NamesConfig) -> Result<()> {
    let cache = GenericNameCache::new(Arc::new(market.names.clone()));
    let cache_path = if args.no_cache {
        None
    } else {
        config.cache_path()
    };

    if let Some(path) = &cache_path {
        cache.load(path)?;
    }

    // The snapshot fetcher answers synchronously, so one pass resolves all.
    for &id in &args.ids {
        cache.generic_name(id);
    }
    let rows: Vec<NameRow> = args
        .ids
        .iter()
        .map(|&id| NameRow {
            id,
            name: cache.cached(id).unwrap_or_else(|| UNKNOWN_NAME.to_string()),
        })
        .collect();

    if let Some(path) = &cache_path {
        if let Err(error) = cache.save(path) {
            warn!(path = %path.display(), error = %error, "Failed to save name cache");
        }
    }

    if output::is_json() {
        let names: Vec<_> = rows
            .iter()
            .map(|row| json!({ "id": row.id, "name": row.name }))
            .collect();
        output::json_output(json!({ "command": "names", "names": names }));
        return Ok(());
    }

    if output::is_quiet() {
        for row in &rows {
            output::field("Name", &row.name);
        }
        return Ok(());
    }

    output::section("Names");
    output::lines(&Table::new(rows).to_string());
    Ok(())
}
