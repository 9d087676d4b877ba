//! Small text-normalization helpers shared by the intent normalizer,
//! classifier, and scoring rules.

use std::collections::BTreeSet;

/// Lowercase, strip zero-width characters, collapse whitespace, and replace
/// punctuation with spaces so phrase lookups can use word boundaries.
pub(crate) fn normalize(value: &str) -> String {
    let cleaned: String = value
        .replace(['\u{feff}', '\u{200b}'], "")
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '$' {
                c.to_ascii_lowercase()
            } else {
                ' '
            }
        })
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Word-boundary phrase containment on already-normalized text.
pub(crate) fn contains_phrase(normalized: &str, phrase: &str) -> bool {
    let needle = normalize(phrase);
    if needle.is_empty() {
        return false;
    }
    format!(" {normalized} ").contains(&format!(" {needle} "))
}

pub(crate) fn tokens(value: &str) -> BTreeSet<String> {
    normalize(value)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Pre-normalized view over one posting's searchable text, computed once per
/// posting so gates and scoring do not renormalize repeatedly.
#[derive(Debug, Clone)]
pub(crate) struct PostingText {
    pub title: String,
    pub description: String,
    pub combined: String,
}

impl PostingText {
    pub(crate) fn new(title: &str, description: &str) -> Self {
        let title = normalize(title);
        let description = normalize(description);
        let combined = format!("{title} {description}");
        Self {
            title,
            description,
            combined,
        }
    }

    pub(crate) fn title_has(&self, phrase: &str) -> bool {
        contains_phrase(&self.title, phrase)
    }

    pub(crate) fn description_has(&self, phrase: &str) -> bool {
        contains_phrase(&self.description, phrase)
    }

    pub(crate) fn has(&self, phrase: &str) -> bool {
        contains_phrase(&self.combined, phrase)
    }

    pub(crate) fn combined_tokens(&self) -> BTreeSet<String> {
        self.combined
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_case_and_punctuation() {
        assert_eq!(normalize("  Sr.  Software-Engineer! "), "sr software engineer");
    }

    #[test]
    fn phrase_matching_respects_word_boundaries() {
        let text = normalize("Leadership development program");
        assert!(!contains_phrase(&text, "lead"));
        assert!(contains_phrase(&text, "leadership"));
    }

    #[test]
    fn multi_word_phrases_match_across_punctuation() {
        let text = normalize("Intern - Investment Banking (Summer 2027)");
        assert!(contains_phrase(&text, "investment banking"));
        assert!(contains_phrase(&text, "INTERN"));
    }
}
