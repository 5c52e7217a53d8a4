use crate::core::AppConfig;
use crate::events::EventStore;

pub struct AppState {
    pub store: EventStore,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            store: EventStore::new(&config.data_path),
            config,
        }
    }
}
