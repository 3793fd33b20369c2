// Sozluk Prefix Matcher
// Filters dictionary headwords by Turkish-folded prefix

use crate::dict::Dictionary;
use crate::normalize;

/// Search the dictionary for headwords starting with `query`
///
/// Both the query and every candidate are folded (see [`normalize::fold`])
/// before comparison, so "kö", "KÖ" and "Kö" select the same entries and
/// dotted/dotless I behave per Turkish casing. Matches are sorted
/// lexicographically ascending by the original headword, not the folded
/// form.
///
/// An empty result is a valid no-match outcome, not an error; the widget
/// turns it into an error-styled UI state.
///
/// # Example
/// ```
/// # use sozluk::dict::Dictionary;
/// # use sozluk::matcher::prefix_search;
/// let dict = Dictionary::from_json(
///     r#"{"kökten": {"description": ""}, "kök": {"description": ""}}"#,
/// ).unwrap();
/// assert_eq!(prefix_search(&dict, "kö"), vec!["kök", "kökten"]);
/// ```
pub fn prefix_search(dict: &Dictionary, query: &str) -> Vec<String> {
    let folded = normalize::fold(query);

    let mut matches: Vec<String> = dict
        .words()
        .filter(|word| normalize::starts_with_folded(word, &folded))
        .map(str::to_string)
        .collect();

    matches.sort();
    matches
}
