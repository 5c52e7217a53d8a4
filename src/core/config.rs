use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Location of the JSON file holding the event collection
    pub data_path: String,
}

impl AppConfig {
    pub fn new(data_path: &str) -> Self {
        Self {
            data_path: data_path.to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let data_path =
            env::var("SCHEDULER_DATA_PATH").unwrap_or_else(|_| "events.json".to_string());

        Self { data_path }
    }
}
