// crates/dinerdb-core/src/text.rs

//! Text normalization used by every substring search.

/// Convert a string into a folded key suitable for comparison.
///
/// This performs:
/// 1) Transliterate Unicode → ASCII (e.g. `Crème Brûlée` -> `Creme Brulee`)
/// 2) Normalize to lowercase
///
/// # Examples
///
/// ```rust
/// use dinerdb_core::text::fold_key;
///
/// assert_eq!(fold_key("Łódź"), "lodz");
/// assert_eq!(fold_key("Crème BRÛLÉE"), "creme brulee");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Splits a search term into folded sub-terms on runs of whitespace.
///
/// A blank term yields no sub-terms, which every search treats as
/// "match nothing".
///
/// ```rust
/// use dinerdb_core::text::search_terms;
///
/// assert_eq!(search_terms("  Zoë   smith "), vec!["zoe", "smith"]);
/// assert!(search_terms("   ").is_empty());
/// ```
pub fn search_terms(term: &str) -> Vec<String> {
    fold_key(term)
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

/// True if the folded `haystack` contains the already-folded `needle`.
#[inline]
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    fold_key(haystack).contains(needle)
}
