//! Document error types.

use thiserror::Error;

/// Errors that can occur while loading, parsing or persisting a document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Failed to read the document file.
    #[error("Failed to read file '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file content is not valid JSON.
    #[error("Failed to parse JSON in '{path}': {source}")]
    ParseError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// The file holds valid JSON, but the root value is not an object.
    #[error("Expected a JSON object at the root of '{path}'")]
    NotAnObject { path: String },

    /// Failed to render the document back to JSON.
    #[error("Failed to serialize JSON for '{path}': {source}")]
    SerializeError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Failed to write the document file.
    #[error("Failed to write file '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
