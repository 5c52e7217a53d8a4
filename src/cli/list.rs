use anyhow::Result;

use crate::core::AppConfig;
use crate::events::{EventStore, sort_by_start_time};

pub fn run(config: &AppConfig) -> Result<()> {
    let store = EventStore::new(&config.data_path);
    let mut events = store.load()?;
    sort_by_start_time(&mut events);
    println!("{}", serde_json::to_string_pretty(&events)?);
    Ok(())
}
