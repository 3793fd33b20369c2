// Sozluk Type Definitions
// Core types for dictionary entries, ghost predictions, and load failures

use serde::Deserialize;
use thiserror::Error;

/// A single dictionary entry as stored in the JSON document
///
/// The document guarantees at least a `description` field; any other fields
/// are ignored on load. Descriptions are rich text: they may carry a small
/// set of inline markup tags and literal `<br>` line-break markers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DictEntry {
    /// Rich-text description, unsanitized as loaded
    pub description: String,
}

impl DictEntry {
    /// Create an entry from a raw description string
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A ghost-text prediction for a partially typed word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ghost {
    /// The full headword the prediction came from
    pub word: String,

    /// The literal remainder of `word` past the typed characters
    ///
    /// Computed against the original headword, so its visible casing may
    /// differ from what was typed ("iy" typed against "İyi" leaves "i").
    pub suffix: String,
}

/// Dictionary document load failures
///
/// Load happens once at startup; on failure the widget surfaces a static
/// error state and keeps running against an empty dictionary. There is no
/// retry.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read dictionary document: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse dictionary document: {0}")]
    Parse(#[from] serde_json::Error),
}
