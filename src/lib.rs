//! # Sozluk: Turkish Etymology Dictionary Search
//!
//! Prefix search over a static word dictionary with ghost-text completion and
//! locale-tag highlighting, as served by the dictionary's search page.
//!
//! ## Behavior
//!
//! 1. **Prefix search** - headwords filtered by Turkish-folded prefix,
//!    results sorted by the original headword
//! 2. **Description rendering** - line-break markers stripped, markup
//!    sanitized to an allow-list, historical locale codes rewritten into
//!    styled labels
//! 3. **Ghost completion** - the first document-order match supplies the
//!    inline remainder of the word being typed, positioned by measured
//!    text width
//!
//! ## Turkish folding
//!
//! Queries and headwords are compared under Turkish casing: `I` folds to
//! `ı` and `İ` to `i` before standard lowercasing, so the dotted and
//! dotless pairs never collide the way default case folding would make
//! them.
//!
//! ## Example Usage
//!
//! ```ignore
//! use sozluk::SozlukSearch;
//!
//! let search = SozlukSearch::load("semantic.json")?;
//!
//! // Prefix search, sorted ascending
//! let words = search.search("kö");
//!
//! // Rendered description for one entry
//! let html = search.render("kök");
//!
//! // Ghost completion for a partial word
//! let ghost = search.predict("kö");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! - **Dictionary Store** - JSON word document, document order preserved
//! - **Sanitizer** - allow-list markup filter over descriptions
//! - **Highlighter** - ordered locale-tag substitution table
//! - **Prefix Matcher** - folded-prefix filter, sorted output
//! - **Ghost Predictor** - first-match completion + text measurement
//! - **Search Widget** - input-event state machine over a surface trait

pub mod data;
pub mod dict;
pub mod highlight;
pub mod matcher;
pub mod normalize;
pub mod predict;
pub mod sanitize;
pub mod search;
pub mod types;
pub mod widget;

// Re-export main types and functions for convenience
pub use dict::Dictionary;
pub use highlight::{Highlighter, LOCALE_TAGS};
pub use matcher::prefix_search;
pub use predict::{ghost_offset, FixedAdvanceMeasure, InputMetrics, TextMeasure};
pub use sanitize::{strip_line_breaks, Sanitizer};
pub use search::SozlukSearch;
pub use types::{DictEntry, Ghost, LoadError};
pub use widget::{SearchSurface, SearchWidget};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
