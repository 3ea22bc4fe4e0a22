// crates/whereto-core/src/highlight.rs
//! Splits display text into plain and matched segments for rendering.

use regex::RegexBuilder;
use serde::{Deserialize, Serialize};

/// Queries shorter than this (in characters, after trimming) are not
/// highlighted; single letters would light up half of every name.
pub const MIN_HIGHLIGHT_QUERY: usize = 2;

/// One run of text, flagged as a query match or not.
///
/// The segments returned by [`highlight`] cover the input in order;
/// concatenating their `text` fields reproduces it byte for byte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    pub matched: bool,
}

/// Mark every case-insensitive occurrence of `query` inside `text`.
///
/// The query is trimmed and regex-escaped before matching, so user input
/// full of metacharacters is matched literally. This function never fails:
/// an empty or too-short query, or a matcher that cannot be built, yields
/// the whole text as a single unmatched segment. No segment is ever empty;
/// empty `text` yields no segments.
///
/// ```
/// use whereto_core::highlight;
///
/// let segments = highlight("San Francisco", "an");
/// let lit: String = segments
///     .iter()
///     .filter(|s| s.matched)
///     .map(|s| s.text.as_str())
///     .collect();
/// assert_eq!(lit, "anan");
/// ```
pub fn highlight(text: &str, query: &str) -> Vec<Segment> {
    if text.is_empty() {
        return Vec::new();
    }
    let whole = || {
        vec![Segment {
            text: text.to_string(),
            matched: false,
        }]
    };

    let query = query.trim();
    if query.chars().count() < MIN_HIGHLIGHT_QUERY {
        return whole();
    }
    let Ok(matcher) = RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
    else {
        return whole();
    };

    let mut segments = Vec::new();
    let mut cursor = 0;
    for m in matcher.find_iter(text) {
        if m.start() > cursor {
            segments.push(Segment {
                text: text[cursor..m.start()].to_string(),
                matched: false,
            });
        }
        segments.push(Segment {
            text: m.as_str().to_string(),
            matched: true,
        });
        cursor = m.end();
    }
    if cursor == 0 {
        return whole();
    }
    if cursor < text.len() {
        segments.push(Segment {
            text: text[cursor..].to_string(),
            matched: false,
        });
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(segments: &[Segment]) -> String {
        segments.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn splits_around_every_occurrence() {
        let segments = highlight("San Francisco", "an");

        let parts: Vec<(&str, bool)> = segments
            .iter()
            .map(|s| (s.text.as_str(), s.matched))
            .collect();
        assert_eq!(
            parts,
            vec![
                ("S", false),
                ("an", true),
                (" Fr", false),
                ("an", true),
                ("cisco", false),
            ]
        );
        assert_eq!(render(&segments), "San Francisco");
    }

    #[test]
    fn matching_ignores_case_but_keeps_original_text() {
        let segments = highlight("GOA", "goa");
        assert_eq!(segments.len(), 1);
        assert!(segments[0].matched);
        assert_eq!(segments[0].text, "GOA");
    }

    #[test]
    fn no_match_yields_one_plain_segment() {
        let segments = highlight("Jaipur", "xyz");
        assert_eq!(segments.len(), 1);
        assert!(!segments[0].matched);
        assert_eq!(segments[0].text, "Jaipur");
    }

    #[test]
    fn short_and_empty_queries_are_not_highlighted() {
        for query in ["", " ", "g", " g "] {
            let segments = highlight("Goa", query);
            assert_eq!(segments.len(), 1, "query {query:?}");
            assert!(!segments[0].matched);
        }
    }

    #[test]
    fn empty_text_yields_no_segments() {
        assert!(highlight("", "goa").is_empty());
    }

    #[test]
    fn query_is_trimmed_before_matching() {
        let segments = highlight("Goa", "  go  ");
        assert_eq!(
            segments,
            vec![
                Segment {
                    text: "Go".into(),
                    matched: true
                },
                Segment {
                    text: "a".into(),
                    matched: false
                },
            ]
        );
    }

    #[test]
    fn metacharacters_match_literally() {
        let segments = highlight("C++ (beta)", "(beta)");
        assert_eq!(segments.len(), 2);
        assert!(!segments[0].matched);
        assert!(segments[1].matched);
        assert_eq!(segments[1].text, "(beta)");

        // ".." must not act as a wildcard.
        let segments = highlight("ab", "..");
        assert_eq!(segments.len(), 1);
        assert!(!segments[0].matched);
    }

    #[test]
    fn adjacent_matches_produce_no_empty_segments() {
        let segments = highlight("aaaa", "aa");
        assert_eq!(segments.len(), 2);
        assert!(segments.iter().all(|s| s.matched && s.text == "aa"));
    }

    #[test]
    fn multibyte_text_splits_on_character_boundaries() {
        let segments = highlight("Zürich", "rich");
        assert_eq!(render(&segments), "Zürich");
        assert_eq!(segments[0].text, "Zü");
        assert!(segments[1].matched);
    }

    #[test]
    fn concatenation_always_reproduces_the_text() {
        let cases = [
            ("North Goa", "goa"),
            ("City Palace", "pal"),
            ("Connaught Place", "na"),
            ("no match here", "zz"),
            ("ü ü ü", "ü ü"),
        ];
        for (text, query) in cases {
            assert_eq!(render(&highlight(text, query)), text, "query {query:?}");
        }
    }
}
