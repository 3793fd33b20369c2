// Sozluk Tag Highlighter
// Rewrites two-digit locale codes in descriptions into styled labels

use regex::Regex;

/// The fixed locale-tag table, in substitution order
///
/// Each two-digit code marks the language stage or variant a cited form
/// belongs to. The table is an ordered slice rather than a map: codes are
/// substituted sequentially `01` through `15`, each globally, and that
/// ordering is observable whenever one replacement's output could feed a
/// later code's pattern. The label set is the deployed table's data as-is,
/// duplicated "Kırgız Türkçesi" included.
pub const LOCALE_TAGS: &[(&str, &str)] = &[
    ("01", "Ön Türkçe"),
    ("02", "Moğolca"),
    ("03", "Eski Anadolu Türkçesi"),
    ("04", "Osmanlı Türkçesi"),
    ("05", "Türkiye Türkçesi"),
    ("06", "Azerbaycan Türkçesi"),
    ("07", "Kırgız Türkçesi"),
    ("08", "Başkurt Türkçesi"),
    ("09", "Kazak Türkçesi"),
    ("10", "Kırgız Türkçesi"),
    ("11", "Özbek Türkçesi"),
    ("12", "Tatar Türkçesi"),
    ("13", "Türkmen Türkçesi"),
    ("14", "Uygur Türkçesi"),
    ("15", "Çuvaş Türkçesi"),
];

/// Locale-tag highlighter with one precompiled rule per table row
///
/// A code matches as a standalone word-boundary-delimited token followed by
/// whitespace and one more word token (the cited form). The whole span is
/// replaced by the bold locale label plus the cited form in italics, the
/// captured whitespace kept in front of it.
pub struct Highlighter {
    /// (pattern, replacement) per table row, in table order
    rules: Vec<(Regex, String)>,
}

impl Highlighter {
    /// Compile the substitution rules from [`LOCALE_TAGS`]
    pub fn new() -> Result<Self, regex::Error> {
        let mut rules = Vec::with_capacity(LOCALE_TAGS.len());
        for (code, label) in LOCALE_TAGS {
            let re = Regex::new(&format!(r"(?i)\b{}\b(\s+\w+)", code))?;
            rules.push((re, format!("<b>{}</b> <i>$1</i>", label)));
        }
        Ok(Self { rules })
    }

    /// Rewrite every recognized locale tag in `text`
    ///
    /// Substitution is sequential, not simultaneous: each rule runs
    /// globally over the output of the previous one. Input is expected to
    /// be sanitized already; no re-sanitization happens here.
    ///
    /// # Example
    /// ```
    /// # use sozluk::highlight::Highlighter;
    /// let h = Highlighter::new().unwrap();
    /// assert_eq!(h.highlight("01 gövde"), "<b>Ön Türkçe</b> <i> gövde</i>");
    /// ```
    pub fn highlight(&self, text: &str) -> String {
        let mut text = text.to_string();
        for (re, replacement) in &self.rules {
            text = re.replace_all(&text, replacement.as_str()).into_owned();
        }
        text
    }
}
