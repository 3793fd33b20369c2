// Sozluk Ghost-Text Predictor
// Completes the word being typed and places the hint inside the input box

use crate::dict::Dictionary;
use crate::normalize;
use crate::types::Ghost;

/// Predict the ghost completion for a partially typed query
///
/// Picks the **first headword in document order** whose folded form starts
/// with the folded query. This deliberately differs from
/// [`prefix_search`](crate::matcher::prefix_search), which sorts its
/// results: with several completions available the ghost hint can disagree
/// with the first listed result. Both behaviors are observable contract;
/// unifying them would change output for dictionaries with multiple
/// completions.
///
/// The suffix is cut from the **original** headword past the query's
/// character count, so its casing can differ from what was typed: with
/// `"İyi"` stored first and `"iy"` typed, the suffix is `"i"`.
///
/// Returns `None` for an empty query or when nothing matches; the caller
/// clears any stale ghost text in that case.
pub fn predict(dict: &Dictionary, query: &str) -> Option<Ghost> {
    if query.is_empty() {
        return None;
    }

    let folded = normalize::fold(query);
    let word = dict
        .words()
        .find(|word| normalize::starts_with_folded(word, &folded))?;

    let suffix: String = word.chars().skip(query.chars().count()).collect();
    Some(Ghost {
        word: word.to_string(),
        suffix,
    })
}

/// Pixel geometry of the search input box
///
/// Supplied by the hosting surface; only the two values the ghost overlay
/// needs to line up with the typed text.
#[derive(Debug, Clone, Copy)]
pub struct InputMetrics {
    /// Left padding of the input box, in pixels
    pub padding_left: f32,

    /// Current font size of the input box, in pixels
    pub font_size: f32,
}

/// Text-width measurement capability
///
/// The browser measures through a canvas context; tests and the CLI use the
/// deterministic [`FixedAdvanceMeasure`]. Kept deliberately narrow so any
/// rendering surface can implement it.
pub trait TextMeasure {
    /// Rendered width of `text` at `font_size`, in pixels
    fn text_width(&self, text: &str, font_size: f32) -> f32;
}

/// Deterministic measurer: every character advances a fixed em-fraction
#[derive(Debug, Clone, Copy)]
pub struct FixedAdvanceMeasure {
    /// Horizontal advance per character, as a fraction of the font size
    pub advance_em: f32,
}

impl Default for FixedAdvanceMeasure {
    fn default() -> Self {
        Self { advance_em: 0.6 }
    }
}

impl TextMeasure for FixedAdvanceMeasure {
    fn text_width(&self, text: &str, font_size: f32) -> f32 {
        text.chars().count() as f32 * self.advance_em * font_size
    }
}

/// Horizontal pixel offset at which to render the ghost suffix
///
/// Left padding of the input box plus the rendered width of the raw typed
/// query. Only meaningful while a prediction exists; with no match the
/// overlay is cleared and no offset update happens.
pub fn ghost_offset(query: &str, metrics: &InputMetrics, measure: &dyn TextMeasure) -> f32 {
    metrics.padding_left + measure.text_width(query, metrics.font_size)
}
