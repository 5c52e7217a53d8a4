use anyhow::{Result, bail};
use serde_json::json;

use crate::core::AppConfig;
use crate::events::{self, EventStore};

pub fn run(term: String, config: &AppConfig) -> Result<()> {
    if term.is_empty() {
        bail!("Search term must not be empty");
    }
    let store = EventStore::new(&config.data_path);
    let results = events::search(store.load()?, &term);
    println!(
        "{}",
        json!({
            "query": term,
            "count": results.len(),
            "results": results,
        })
    );
    Ok(())
}
