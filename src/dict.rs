// Sozluk Dictionary Store
// Loads the JSON word document and serves read-only lookups

use crate::types::{DictEntry, LoadError};
use rustc_hash::FxHashMap;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;
use std::path::Path;

/// Read-only dictionary store: headword → entry
///
/// Loaded once at startup and never mutated afterwards. Lookup goes through
/// an `FxHashMap`; a parallel headword list preserves the document's key
/// order, which the ghost-text predictor depends on (first match in
/// document order wins there).
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    /// Headword → entry mapping
    entries: FxHashMap<String, DictEntry>,

    /// Headwords in document order
    words: Vec<String>,
}

impl Dictionary {
    /// Create an empty dictionary
    ///
    /// This is the inert state the widget falls back to after a load
    /// failure: every query is a no-match.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a dictionary from a JSON document string
    ///
    /// The document is a single JSON object mapping headwords to entry
    /// objects with at least a `description` field.
    ///
    /// # Example
    /// ```
    /// # use sozluk::dict::Dictionary;
    /// let dict = Dictionary::from_json(r#"{"kök": {"description": "01 kök"}}"#).unwrap();
    /// assert_eq!(dict.word_count(), 1);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let dict = serde_json::from_str(json)?;
        Ok(dict)
    }

    /// Load a dictionary document from disk
    ///
    /// One-time initialization; there is no reload or invalidation. Either
    /// the read or the parse step can fail with a [`LoadError`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Look up the entry for a headword (exact, case-sensitive)
    pub fn get(&self, word: &str) -> Option<&DictEntry> {
        self.entries.get(word)
    }

    /// Iterate headwords in document order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Number of headwords, for the word-count display
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// True when the dictionary holds no entries
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

// The JSON object's key order is observable behavior (ghost prediction picks
// the first match in document order), so deserialization records it instead
// of relying on map iteration order. A duplicated key overwrites the entry
// but keeps its first position, like a JSON object literal.
impl<'de> Deserialize<'de> for Dictionary {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DictVisitor;

        impl<'de> Visitor<'de> for DictVisitor {
            type Value = Dictionary;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object mapping headwords to entries")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries =
                    FxHashMap::with_capacity_and_hasher(access.size_hint().unwrap_or(0), Default::default());
                let mut words = Vec::with_capacity(access.size_hint().unwrap_or(0));

                while let Some((word, entry)) = access.next_entry::<String, DictEntry>()? {
                    if entries.insert(word.clone(), entry).is_none() {
                        words.push(word);
                    }
                }

                Ok(Dictionary { entries, words })
            }
        }

        deserializer.deserialize_map(DictVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{
        "kök": {"description": "01 kök"},
        "İyi": {"description": "03 eyü"},
        "ağaç": {"description": "01 ıgaç"}
    }"#;

    #[test]
    fn test_from_json() {
        let dict = Dictionary::from_json(DOC).unwrap();
        assert_eq!(dict.word_count(), 3);
        assert_eq!(dict.get("kök").unwrap().description, "01 kök");
    }

    #[test]
    fn test_document_order_preserved() {
        let dict = Dictionary::from_json(DOC).unwrap();
        let words: Vec<&str> = dict.words().collect();
        assert_eq!(words, vec!["kök", "İyi", "ağaç"]);
    }

    #[test]
    fn test_duplicate_key_last_wins_first_position() {
        let dict = Dictionary::from_json(
            r#"{"kök": {"description": "first"}, "su": {"description": "x"}, "kök": {"description": "second"}}"#,
        )
        .unwrap();
        let words: Vec<&str> = dict.words().collect();
        assert_eq!(words, vec!["kök", "su"]);
        assert_eq!(dict.get("kök").unwrap().description, "second");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let dict = Dictionary::from_json(DOC).unwrap();
        assert!(dict.get("İyi").is_some());
        assert!(dict.get("iyi").is_none());
    }

    #[test]
    fn test_malformed_document_is_parse_error() {
        let result = Dictionary::from_json("{\"kök\": ");
        assert!(matches!(result, Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_non_object_document_is_parse_error() {
        let result = Dictionary::from_json(r#"["kök"]"#);
        assert!(matches!(result, Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = Dictionary::load("no/such/semantic.json");
        assert!(matches!(result, Err(LoadError::Io(_))));
    }

    #[test]
    fn test_empty_dictionary() {
        let dict = Dictionary::empty();
        assert!(dict.is_empty());
        assert_eq!(dict.word_count(), 0);
        assert!(dict.get("kök").is_none());
    }
}
