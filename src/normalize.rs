// Sozluk Normalization
// Turkish dotted/dotless-I case folding applied before prefix comparison

/// Fold a string for prefix comparison under Turkish casing rules
///
/// Default case folding maps both `I` and `İ` wrong for Turkish: `I`
/// lowercases to `i` instead of `ı`, and `İ` lowercases to `i` plus a
/// combining dot. The two problem pairs are rewritten first, then the rest
/// is standard-lowercased.
///
/// Folding is idempotent: folding an already folded string is a no-op.
///
/// # Examples
/// ```
/// # use sozluk::normalize::fold;
/// assert_eq!(fold("I"), "ı");
/// assert_eq!(fold("İ"), "i");
/// assert_eq!(fold("Kök"), "kök");
/// ```
pub fn fold(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            'I' => out.push('ı'),
            'İ' => out.push('i'),
            _ => out.extend(ch.to_lowercase()),
        }
    }
    out
}

/// Check whether a candidate headword starts with an already-folded query
///
/// The query must be pre-folded by the caller; candidates are folded here.
#[inline]
pub fn starts_with_folded(candidate: &str, folded_query: &str) -> bool {
    fold(candidate).starts_with(folded_query)
}
