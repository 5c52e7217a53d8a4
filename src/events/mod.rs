mod models;
mod store;

pub use models::{Event, REQUIRED_FIELDS, missing_fields, search, sort_by_start_time};
pub use store::{EventStore, next_id};
