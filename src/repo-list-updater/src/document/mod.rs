//! Repository list documents.
//!
//! A document is a JSON object holding an optional list of repository
//! entries under a configurable key. Everything else in the object, and any
//! extra fields on existing entries, is carried through untouched. Key order
//! is preserved so rewrites stay diff-friendly.

mod entry;
mod error;

pub use entry::{derive_entry_name, Entry};
pub use error::DocumentError;

use crate::updater::UpdateOutcome;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A repository list document loaded from disk.
#[derive(Debug, Clone)]
pub struct Document {
    /// File the document was loaded from and is saved back to.
    path: PathBuf,

    /// Top-level key of the entry list.
    list_key: String,

    /// The whole JSON object.
    root: Map<String, Value>,
}

impl Document {
    /// Reads and parses the document at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError`] if the file can't be read, isn't valid JSON,
    /// or its root isn't an object.
    pub fn load(path: &Path, list_key: &str) -> Result<Self, DocumentError> {
        debug!(path = %path.display(), list_key, "Loading document");

        let content = std::fs::read_to_string(path).map_err(|e| DocumentError::ReadError {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::parse(&content, path, list_key)
    }

    /// Parses document text that originates from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::ParseError`] for malformed JSON and
    /// [`DocumentError::NotAnObject`] when the root is any other JSON value.
    pub fn parse(content: &str, path: &Path, list_key: &str) -> Result<Self, DocumentError> {
        let value: Value = serde_json::from_str(content).map_err(|e| DocumentError::ParseError {
            path: path.display().to_string(),
            source: e,
        })?;

        match value {
            Value::Object(root) => Ok(Self {
                path: path.to_path_buf(),
                list_key: list_key.to_string(),
                root,
            }),
            _ => Err(DocumentError::NotAnObject {
                path: path.display().to_string(),
            }),
        }
    }

    /// Returns the file this document is bound to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the key of the entry list.
    pub fn list_key(&self) -> &str {
        &self.list_key
    }

    /// Returns the underlying JSON object.
    pub fn root(&self) -> &Map<String, Value> {
        &self.root
    }

    /// Returns the well-formed entries of the list.
    ///
    /// Elements that don't have the `{name, url, description}` shape are
    /// skipped. A missing or non-array list yields no entries.
    pub fn entries(&self) -> Vec<Entry> {
        self.root
            .get(&self.list_key)
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| serde_json::from_value(item.clone()).ok())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Sets the description of every entry whose `url` equals `url`, or
    /// appends a new entry when none does.
    pub fn upsert(&mut self, url: &str, description: &str) -> UpdateOutcome {
        let matches = self.describe_matching(url, description);
        if matches > 0 {
            debug!(url, matches, "Updated existing entries");
            return UpdateOutcome::Updated { matches };
        }

        let entry = Entry::new(url, description);
        let name = entry.name.clone();
        self.push_entry(entry);
        debug!(url, name, "Added new entry");
        UpdateOutcome::Added { name }
    }

    /// Rewrites the description of all entries matching `url`.
    fn describe_matching(&mut self, url: &str, description: &str) -> usize {
        let Some(items) = self.root.get_mut(&self.list_key).and_then(Value::as_array_mut) else {
            return 0;
        };

        let mut matches = 0;
        for item in items.iter_mut().filter_map(Value::as_object_mut) {
            if item.get("url").and_then(Value::as_str) == Some(url) {
                item.insert(
                    "description".to_string(),
                    Value::String(description.to_string()),
                );
                matches += 1;
            }
        }
        matches
    }

    /// Appends `entry`, creating the list if it's missing or not an array.
    fn push_entry(&mut self, entry: Entry) {
        let value = Value::from(entry);
        match self.root.get_mut(&self.list_key) {
            Some(Value::Array(items)) => items.push(value),
            Some(other) => {
                warn!(
                    list_key = %self.list_key,
                    found = json_type_name(other),
                    "Entry list is not an array, replacing it"
                );
                *other = Value::Array(vec![value]);
            }
            None => {
                self.root
                    .insert(self.list_key.clone(), Value::Array(vec![value]));
            }
        }
    }

    /// Renders the document as JSON indented by two spaces.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::SerializeError`] if rendering fails.
    pub fn to_pretty_string(&self) -> Result<String, DocumentError> {
        serde_json::to_string_pretty(&self.root).map_err(|e| DocumentError::SerializeError {
            path: self.path.display().to_string(),
            source: e,
        })
    }

    /// Overwrites the origin file with the rendered document.
    ///
    /// The file is truncated and rewritten in place; an interrupted write can
    /// leave it partially written.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError`] if rendering or writing fails.
    pub fn save(&self) -> Result<(), DocumentError> {
        let rendered = self.to_pretty_string()?;
        self.write_rendered(&rendered)
    }

    /// Writes already-rendered content to the origin file.
    pub(crate) fn write_rendered(&self, rendered: &str) -> Result<(), DocumentError> {
        debug!(path = %self.path.display(), bytes = rendered.len(), "Writing document");

        std::fs::write(&self.path, rendered).map_err(|e| DocumentError::WriteError {
            path: self.path.display().to_string(),
            source: e,
        })
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
