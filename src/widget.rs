// Sozluk Search Widget
// Controller state machine between input events and the hosting surface

use crate::predict::{ghost_offset, InputMetrics, TextMeasure};
use crate::search::SozlukSearch;

/// The hosting page's collaborators, reduced to what the widget touches
///
/// The widget owns none of these elements; it only writes their text
/// content, toggles the error class, and replays the result area's
/// entrance animation. Implementations range from a DOM binding to the
/// recording double the tests use.
pub trait SearchSurface {
    /// Empty the result area
    fn clear_results(&mut self);

    /// Append one rendered entry to the result area
    fn push_result(&mut self, word: &str, rendered: &str);

    /// Toggle the error presentation class on the search container
    fn set_error(&mut self, on: bool);

    /// Set the ghost overlay's text; an empty suffix clears it
    fn set_ghost(&mut self, suffix: &str);

    /// Move the ghost overlay to a horizontal pixel offset
    fn set_ghost_offset(&mut self, px: f32);

    /// Reset and reapply the result area's fade-in animation
    fn replay_entrance(&mut self);

    /// Show how many words the dictionary holds
    fn set_word_count(&mut self, count: usize);

    /// Show the static load-failure message in the result area
    fn show_load_failure(&mut self);
}

/// Search controller: one instance per page lifetime
///
/// Owns the engine, the text-measurement capability, and the last-query
/// memo. All mutable state lives here; each [`on_input`](Self::on_input)
/// call runs to completion before the next event arrives, so no further
/// coordination is needed.
pub struct SearchWidget {
    engine: SozlukSearch,
    measure: Box<dyn TextMeasure>,
    metrics: InputMetrics,

    /// Memoization key: the previous trimmed query
    ///
    /// Repeating a query must not clear the result area or replay the
    /// entrance animation, so the whole search path short-circuits on it.
    last_query: String,
}

impl SearchWidget {
    /// Create a widget and announce the word count on the surface
    pub fn new(
        engine: SozlukSearch,
        measure: Box<dyn TextMeasure>,
        metrics: InputMetrics,
        surface: &mut dyn SearchSurface,
    ) -> Self {
        surface.set_word_count(engine.word_count());
        Self {
            engine,
            measure,
            metrics,
            last_query: String::new(),
        }
    }

    /// Create the inert post-load-failure widget
    ///
    /// Shows the static failure message once; afterwards the widget keeps
    /// accepting input against an empty dictionary, so every query is a
    /// no-match. There is no retry.
    pub fn load_failed(
        engine: SozlukSearch,
        measure: Box<dyn TextMeasure>,
        metrics: InputMetrics,
        surface: &mut dyn SearchSurface,
    ) -> Self {
        surface.show_load_failure();
        Self {
            engine,
            measure,
            metrics,
            last_query: String::new(),
        }
    }

    /// Handle one input-change event
    ///
    /// The ghost prediction is recomputed on every keystroke, memoized or
    /// not; the search path short-circuits when the trimmed query repeats.
    pub fn on_input(&mut self, raw: &str, surface: &mut dyn SearchSurface) {
        let query = raw.trim();

        // Ghost first, unconditionally. No match (or empty query) clears
        // the overlay; the offset only moves while a prediction exists.
        match self.engine.predict(query) {
            Some(ghost) => {
                surface.set_ghost(&ghost.suffix);
                surface.set_ghost_offset(ghost_offset(query, &self.metrics, &*self.measure));
            }
            None => surface.set_ghost(""),
        }

        if query == self.last_query {
            return;
        }
        self.last_query = query.to_string();

        surface.clear_results();

        if query.is_empty() {
            surface.set_error(false);
            return;
        }

        let matches = self.engine.search(query);
        if matches.is_empty() {
            surface.set_error(true);
            return;
        }

        for word in &matches {
            if let Some(rendered) = self.engine.render(word) {
                surface.push_result(word, &rendered);
            }
        }

        surface.replay_entrance();
        surface.set_error(false);
    }

    /// The query the widget last acted on
    pub fn last_query(&self) -> &str {
        &self.last_query
    }
}
