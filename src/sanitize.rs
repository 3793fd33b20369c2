// Sozluk Markup Sanitizer
// Reduces untrusted description markup to an allow-listed tag set

use regex::Regex;

/// Inline tags allowed to survive sanitization
const ALLOWED_TAGS: &[&str] = &["b", "i", "em", "strong", "a"];

/// Attributes allowed on any surviving tag
const ALLOWED_ATTRS: &[&str] = &["href", "class"];

/// URL schemes never allowed in an `href` value
const BLOCKED_SCHEMES: &[&str] = &["javascript:", "vbscript:", "data:"];

/// Remove every literal `<br>` line-break marker
///
/// The document uses the exact `<br>` token as a line-break placeholder;
/// it is stripped before sanitization. Other spellings are not markers and
/// fall through to the sanitizer's disallowed-tag handling.
pub fn strip_line_breaks(raw: &str) -> String {
    raw.replace("<br>", "")
}

/// Allow-list sanitizer for entry descriptions
///
/// Descriptions may originate from third-party-edited content, so the
/// output is constrained to the tags in [`ALLOWED_TAGS`] carrying only the
/// attributes in [`ALLOWED_ATTRS`]. `script` and `style` elements are
/// dropped with their contents; any other disallowed tag is removed while
/// its inner text is kept. Malformed markup degrades to stripped output;
/// sanitization itself never fails.
pub struct Sanitizer {
    /// `script`/`style` elements, contents included
    dropped_elements: Regex,

    /// HTML comments
    comments: Regex,

    /// Any complete tag, with its attribute section captured
    tags: Regex,

    /// One attribute inside a tag's attribute section
    attrs: Regex,

    /// Unterminated tag left open at end of input
    dangling: Regex,
}

impl Sanitizer {
    /// Compile the sanitizer's pattern set
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            dropped_elements: Regex::new(
                r"(?is)<script\b[^>]*>.*?(?:</script\s*>|\z)|<style\b[^>]*>.*?(?:</style\s*>|\z)",
            )?,
            comments: Regex::new(r"(?s)<!--.*?-->")?,
            tags: Regex::new(r#"(?s)<(/?)([A-Za-z][A-Za-z0-9]*)((?:"[^"]*"|'[^']*'|[^>"'])*)>"#)?,
            attrs: Regex::new(r#"([A-Za-z_][A-Za-z0-9_:.-]*)\s*(?:=\s*("[^"]*"|'[^']*'|[^\s>]+))?"#)?,
            dangling: Regex::new(r"<[^>]*\z")?,
        })
    }

    /// Sanitize a raw description down to the allow-listed markup
    ///
    /// # Example
    /// ```
    /// # use sozluk::sanitize::Sanitizer;
    /// let sanitizer = Sanitizer::new().unwrap();
    /// assert_eq!(
    ///     sanitizer.sanitize(r#"<b onclick="x()">kök</b><script>x()</script>"#),
    ///     "<b>kök</b>",
    /// );
    /// ```
    pub fn sanitize(&self, raw: &str) -> String {
        let text = self.dropped_elements.replace_all(raw, "");
        let text = self.comments.replace_all(&text, "");

        let text = self.tags.replace_all(&text, |caps: &regex::Captures<'_>| {
            let closing = !caps[1].is_empty();
            let name = caps[2].to_lowercase();

            if !ALLOWED_TAGS.contains(&name.as_str()) {
                return String::new();
            }
            if closing {
                return format!("</{}>", name);
            }
            self.rebuild_tag(&name, &caps[3])
        });

        self.dangling.replace(&text, "").into_owned()
    }

    /// Re-emit an allowed opening tag with only its allowed attributes
    fn rebuild_tag(&self, name: &str, attr_section: &str) -> String {
        let mut tag = format!("<{}", name);

        for attr in self.attrs.captures_iter(attr_section) {
            let key = attr[1].to_lowercase();
            if !ALLOWED_ATTRS.contains(&key.as_str()) {
                continue;
            }

            let value = attr.get(2).map(|m| unquote(m.as_str())).unwrap_or("");
            if key == "href" && has_blocked_scheme(value) {
                continue;
            }

            tag.push(' ');
            tag.push_str(&key);
            tag.push_str("=\"");
            tag.push_str(&value.replace('"', "&quot;"));
            tag.push('"');
        }

        tag.push('>');
        tag
    }
}

/// Strip one layer of surrounding quotes from an attribute value
fn unquote(value: &str) -> &str {
    let stripped = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')));
    stripped.unwrap_or(value)
}

/// Detect blocked URL schemes, ignoring interleaved whitespace and control
/// characters the way browsers do when resolving a scheme
fn has_blocked_scheme(value: &str) -> bool {
    let compact: String = value
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .flat_map(char::to_lowercase)
        .collect();
    BLOCKED_SCHEMES.iter().any(|s| compact.starts_with(s))
}
