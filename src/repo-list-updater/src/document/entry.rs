//! Repository entry records.

use serde::Deserialize;
use serde_json::{Map, Value};

/// A single repository record in the tracked list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Entry {
    /// Short name, taken from the last path segment of the URL on creation.
    pub name: String,

    /// Repository URL. Used to find existing entries; not required to be unique.
    pub url: String,

    /// Free-form description. The only field rewritten after creation.
    pub description: String,
}

impl Entry {
    /// Creates a new entry, deriving its name from `url`.
    pub fn new(url: &str, description: &str) -> Self {
        Self {
            name: derive_entry_name(url).to_string(),
            url: url.to_string(),
            description: description.to_string(),
        }
    }
}

impl From<Entry> for Value {
    fn from(entry: Entry) -> Self {
        let mut object = Map::new();
        object.insert("name".to_string(), Value::String(entry.name));
        object.insert("url".to_string(), Value::String(entry.url));
        object.insert("description".to_string(), Value::String(entry.description));
        Value::Object(object)
    }
}

/// Returns the part of `url` after its last `/`.
///
/// A URL without any separator is returned whole; a URL ending in `/`
/// yields an empty name.
pub fn derive_entry_name(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}
