use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fields every event must carry when it is created.
pub const REQUIRED_FIELDS: [&str; 4] = ["title", "description", "start_time", "end_time"];

/// A single stored record, kept exactly as it appears in the events
/// file. Only presence of the required fields is checked at creation;
/// field types are never enforced, so records written by older clients
/// or edited by hand survive a load/save cycle untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Event(Value);

impl Event {
    /// Build an event from a JSON object of caller-supplied fields.
    /// The store-assigned `id` always replaces whatever the caller sent.
    pub fn from_fields(id: u64, mut fields: Map<String, Value>) -> Self {
        fields.insert(String::from("id"), Value::from(id));
        Self(Value::Object(fields))
    }

    /// Integer id, if the record has one
    pub fn id(&self) -> Option<u64> {
        self.0.get("id").and_then(Value::as_u64)
    }

    pub fn title(&self) -> Option<&str> {
        self.text("title")
    }

    pub fn description(&self) -> Option<&str> {
        self.text("description")
    }

    // Times are opaque strings supplied by the caller and are only
    // ever compared lexically.
    pub fn start_time(&self) -> Option<&str> {
        self.text("start_time")
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    fn text(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Overlay a partial set of fields onto this event. Supplied keys
    /// overwrite, new keys are added and everything else is left alone.
    /// The id can not be changed this way.
    pub fn merge(&mut self, mut fields: Map<String, Value>) {
        fields.remove("id");
        if let Value::Object(map) = &mut self.0 {
            map.extend(fields);
        }
    }

    /// Case-insensitive substring match on title or description. The
    /// needle is expected to be lower-cased already. Non-string values
    /// never match.
    pub fn matches(&self, needle: &str) -> bool {
        let contains = |text: Option<&str>| text.is_some_and(|t| t.to_lowercase().contains(needle));
        contains(self.title()) || contains(self.description())
    }
}

/// Names of required fields absent from `fields`.
pub fn missing_fields(fields: &Map<String, Value>) -> Vec<&'static str> {
    REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|name| !fields.contains_key(*name))
        .collect()
}

/// Sort events by `start_time` using a stable, lexical string compare.
/// Records without a string `start_time` sort first.
pub fn sort_by_start_time(events: &mut [Event]) {
    events.sort_by(|a, b| a.start_time().cmp(&b.start_time()));
}

/// Find every event whose title or description contains `query`,
/// ignoring case.
pub fn search(events: Vec<Event>, query: &str) -> Vec<Event> {
    let needle = query.to_lowercase();
    events.into_iter().filter(|e| e.matches(&needle)).collect()
}
