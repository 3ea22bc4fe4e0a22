// crates/whereto-core/src/text.rs

//! Text normalization used by matching and deduplication.
//!
//! Matching in this crate is deliberately plain: lowercase, no accent
//! folding, no transliteration. Display names keep their original casing
//! everywhere; the folded forms exist only for comparisons and dedup keys.

/// Lowercase a string for comparison purposes.
///
/// # Examples
///
/// ```rust
/// use whereto_core::text::fold_lower;
///
/// assert_eq!(fold_lower("North Goa"), "north goa");
/// ```
pub fn fold_lower(s: &str) -> String {
    s.to_lowercase()
}

/// Case-insensitive equality on the folded forms.
///
/// # Examples
///
/// ```rust
/// use whereto_core::text::equals_folded;
///
/// assert!(equals_folded("PANAJI", "panaji"));
/// assert!(!equals_folded("Goa", "North Goa"));
/// ```
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_lower(a) == fold_lower(b)
}

/// Normalize a user query: trim surrounding whitespace, then lowercase.
///
/// An empty return value means "do not search"; the engine maps it to an
/// empty result list. There is no minimum-length rule here; callers that
/// want to hold off until the user has typed a couple of characters apply
/// that policy themselves.
pub fn normalize_query(q: &str) -> String {
    q.trim().to_lowercase()
}

/// Name-based matching helpers for types exposing a canonical display name.
///
/// Implementors provide a `&str` view of their name via
/// [`NameMatch::name_str`] and get case-insensitive comparison helpers.
///
/// # Examples
///
/// ```rust
/// use whereto_core::text::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Panaji").is_named("panaji"));
/// assert!(Place("North Goa").name_contains("goa"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    /// Case-insensitive name equality.
    #[inline]
    fn is_named(&self, q: &str) -> bool {
        equals_folded(self.name_str(), q)
    }

    /// Case-insensitive substring match.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        fold_lower(self.name_str()).contains(&fold_lower(q))
    }
}
