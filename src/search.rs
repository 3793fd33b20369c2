// Sozluk Search Engine
// Main API that wires the store, sanitizer, highlighter, and predictor

use crate::data::SAMPLE_DICT;
use crate::dict::Dictionary;
use crate::highlight::Highlighter;
use crate::matcher::prefix_search;
use crate::predict;
use crate::sanitize::{strip_line_breaks, Sanitizer};
use crate::types::Ghost;
use std::path::Path;

/// Main dictionary search engine
///
/// Combines all components:
/// - Prefix matching over the loaded word document
/// - Description rendering (line-break stripping → sanitize → highlight)
/// - Ghost-text prediction for the word being typed
///
/// The engine is pure: it never touches UI state. The
/// [`SearchWidget`](crate::widget::SearchWidget) layers query memoization
/// and surface updates on top.
pub struct SozlukSearch {
    /// The loaded word document
    dict: Dictionary,

    /// Markup sanitizer applied to every rendered description
    sanitizer: Sanitizer,

    /// Locale-tag highlighter applied after sanitization
    highlighter: Highlighter,
}

impl SozlukSearch {
    /// Create an engine over an already loaded dictionary
    pub fn new(dict: Dictionary) -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self {
            dict,
            sanitizer: Sanitizer::new()?,
            highlighter: Highlighter::new()?,
        })
    }

    /// Create an inert engine over an empty dictionary
    ///
    /// The fallback state after a failed document load: every query is a
    /// no-match, every prediction empty.
    pub fn empty() -> Result<Self, Box<dyn std::error::Error>> {
        Self::new(Dictionary::empty())
    }

    /// Parse a dictionary document string and build an engine over it
    pub fn from_json(json: &str) -> Result<Self, Box<dyn std::error::Error>> {
        Self::new(Dictionary::from_json(json)?)
    }

    /// Load a dictionary document from disk and build an engine over it
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        Self::new(Dictionary::load(path)?)
    }

    /// Build an engine over the embedded sample document
    pub fn sample() -> Result<Self, Box<dyn std::error::Error>> {
        Self::from_json(SAMPLE_DICT)
    }

    /// Find all headwords starting with `query`, sorted ascending
    ///
    /// See [`prefix_search`] for the folding and ordering rules. An empty
    /// vector signals no-match, not failure.
    pub fn search(&self, query: &str) -> Vec<String> {
        prefix_search(&self.dict, query)
    }

    /// Render one entry's description for display
    ///
    /// Pipeline per the page's rendering order: line-break markers removed,
    /// then sanitized to the allow-list, then locale tags highlighted.
    /// Returns `None` for a headword not in the dictionary.
    pub fn render(&self, word: &str) -> Option<String> {
        let entry = self.dict.get(word)?;
        let text = strip_line_breaks(&entry.description);
        let text = self.sanitizer.sanitize(&text);
        Some(self.highlighter.highlight(&text))
    }

    /// Predict the ghost completion for `query`
    pub fn predict(&self, query: &str) -> Option<Ghost> {
        predict::predict(&self.dict, query)
    }

    /// Number of loaded headwords, for the word-count display
    pub fn word_count(&self) -> usize {
        self.dict.word_count()
    }

    /// Shared access to the underlying dictionary
    pub fn dictionary(&self) -> &Dictionary {
        &self.dict
    }
}
