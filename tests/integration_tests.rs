// End-to-end tests for the search widget state machine

use sozluk::{FixedAdvanceMeasure, InputMetrics, SearchSurface, SearchWidget, SozlukSearch};

/// Recording surface double standing in for the hosting page
#[derive(Default)]
struct PageDouble {
    results: Vec<(String, String)>,
    result_clears: usize,
    error_class: bool,
    ghost_text: String,
    ghost_offset: Option<f32>,
    animation_replays: usize,
    word_count: Option<usize>,
    load_failure_shown: bool,
}

impl SearchSurface for PageDouble {
    fn clear_results(&mut self) {
        self.results.clear();
        self.result_clears += 1;
    }

    fn push_result(&mut self, word: &str, rendered: &str) {
        self.results.push((word.to_string(), rendered.to_string()));
    }

    fn set_error(&mut self, on: bool) {
        self.error_class = on;
    }

    fn set_ghost(&mut self, suffix: &str) {
        self.ghost_text = suffix.to_string();
    }

    fn set_ghost_offset(&mut self, px: f32) {
        self.ghost_offset = Some(px);
    }

    fn replay_entrance(&mut self) {
        self.animation_replays += 1;
    }

    fn set_word_count(&mut self, count: usize) {
        self.word_count = Some(count);
    }

    fn show_load_failure(&mut self) {
        self.load_failure_shown = true;
    }
}

const METRICS: InputMetrics = InputMetrics {
    padding_left: 16.0,
    font_size: 24.0,
};

fn widget(page: &mut PageDouble) -> SearchWidget {
    let engine = SozlukSearch::from_json(
        r#"{
            "İyi": {"description": "03 eyü 05 iyi<br>İstenen niteliklere sahip olan."},
            "kök": {"description": "01 gövde<br>"},
            "kökten": {"description": "05 kökten<br>Temelden olan."}
        }"#,
    )
    .unwrap();

    SearchWidget::new(
        engine,
        Box::new(FixedAdvanceMeasure { advance_em: 0.5 }),
        METRICS,
        page,
    )
}

// ============ Startup ============

#[test]
fn test_word_count_shown_after_load() {
    let mut page = PageDouble::default();
    let _w = widget(&mut page);
    assert_eq!(page.word_count, Some(3));
    assert!(!page.load_failure_shown);
}

#[test]
fn test_load_failure_leaves_widget_inert() {
    let mut page = PageDouble::default();
    let mut w = SearchWidget::load_failed(
        SozlukSearch::empty().unwrap(),
        Box::new(FixedAdvanceMeasure::default()),
        METRICS,
        &mut page,
    );

    assert!(page.load_failure_shown);

    // Searches against the empty dictionary always yield no-match
    w.on_input("kök", &mut page);
    assert!(page.error_class);
    assert!(page.results.is_empty());
    assert_eq!(page.ghost_text, "");
}

// ============ Query Flow ============

#[test]
fn test_typing_a_prefix_renders_sorted_entries() {
    let mut page = PageDouble::default();
    let mut w = widget(&mut page);

    w.on_input("kö", &mut page);

    let words: Vec<&str> = page.results.iter().map(|(w, _)| w.as_str()).collect();
    assert_eq!(words, vec!["kök", "kökten"]);
    assert_eq!(page.results[0].1, "<b>Ön Türkçe</b> <i> gövde</i>");
    assert_eq!(page.animation_replays, 1);
    assert!(!page.error_class);
}

#[test]
fn test_memoization_law() {
    let mut page = PageDouble::default();
    let mut w = widget(&mut page);

    w.on_input("kö", &mut page);
    let clears = page.result_clears;
    let replays = page.animation_replays;
    let results = page.results.clone();

    // Same query again, also with surrounding whitespace
    w.on_input("kö", &mut page);
    w.on_input(" kö ", &mut page);

    assert_eq!(page.result_clears, clears, "result area must stay untouched");
    assert_eq!(page.animation_replays, replays, "animation state must not reset");
    assert_eq!(page.results, results);
}

#[test]
fn test_ghost_always_follows_the_keystroke() {
    let mut page = PageDouble::default();
    let mut w = widget(&mut page);

    w.on_input("kö", &mut page);
    assert_eq!(page.ghost_text, "k", "first document-order completion of kö*");

    // Memoized repeat still refreshes the ghost overlay
    page.ghost_text.clear();
    w.on_input("kö", &mut page);
    assert_eq!(page.ghost_text, "k");
    assert_eq!(
        page.ghost_offset,
        Some(16.0 + 2.0 * 0.5 * 24.0),
        "padding plus measured query width",
    );
}

#[test]
fn test_ghost_completion_keeps_original_casing() {
    let mut page = PageDouble::default();
    let mut w = widget(&mut page);

    // "iy" folds onto "İyi"; the suffix comes from the original headword
    w.on_input("iy", &mut page);
    assert_eq!(page.ghost_text, "i");
}

#[test]
fn test_no_match_toggles_error_and_clears_ghost() {
    let mut page = PageDouble::default();
    let mut w = widget(&mut page);

    w.on_input("zzz", &mut page);

    assert!(page.error_class);
    assert!(page.results.is_empty());
    assert_eq!(page.ghost_text, "");
    assert_eq!(page.animation_replays, 0);
}

#[test]
fn test_empty_query_clears_results_ghost_and_error() {
    let mut page = PageDouble::default();
    let mut w = widget(&mut page);

    w.on_input("zzz", &mut page);
    assert!(page.error_class);

    w.on_input("", &mut page);
    assert!(!page.error_class);
    assert!(page.results.is_empty());
    assert_eq!(page.ghost_text, "");
}

#[test]
fn test_next_keystroke_recovers_from_error() {
    let mut page = PageDouble::default();
    let mut w = widget(&mut page);

    w.on_input("zz", &mut page);
    assert!(page.error_class);

    w.on_input("kök", &mut page);
    assert!(!page.error_class);
    assert_eq!(page.results.len(), 2);
    assert_eq!(page.animation_replays, 1);
}

#[test]
fn test_whitespace_only_input_is_empty_query() {
    let mut page = PageDouble::default();
    let mut w = widget(&mut page);

    w.on_input("kö", &mut page);
    w.on_input("   ", &mut page);

    assert!(page.results.is_empty());
    assert_eq!(page.ghost_text, "");
    assert!(!page.error_class);
}

// ============ Full Session ============

#[test]
fn test_typing_session_letter_by_letter() {
    let mut page = PageDouble::default();
    let mut w = widget(&mut page);

    // k → kö → kök → kökt, as a user would type
    for q in ["k", "kö", "kök", "kökt"] {
        w.on_input(q, &mut page);
        assert!(!page.error_class, "{:?} should match", q);
        assert!(!page.results.is_empty());
    }

    // "kökt" narrows down to the single entry
    let words: Vec<&str> = page.results.iter().map(|(w, _)| w.as_str()).collect();
    assert_eq!(words, vec!["kökten"]);
    assert_eq!(page.ghost_text, "en");

    // Deleting everything resets the widget
    w.on_input("", &mut page);
    assert!(page.results.is_empty());
    assert_eq!(page.ghost_text, "");
}
