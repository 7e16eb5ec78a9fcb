use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::normalize::normalize_text;

/// Tokens shorter than this carry no signal (articles, prepositions).
const MIN_TOKEN_LEN: usize = 3;

static NON_ALNUM: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Significant-token set of a text: normalized, split on runs of characters
/// outside `[a-z0-9]`, short tokens discarded, duplicates collapsed.
///
/// Order is not preserved; callers must treat the result purely as a set.
pub fn tokenize(text: &str) -> HashSet<String> {
    let cleaned = normalize_text(text);
    NON_ALNUM
        .split(&cleaned)
        .filter(|token| token.len() >= MIN_TOKEN_LEN)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(tokens: &[&str]) -> HashSet<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn splits_on_punctuation_and_whitespace() {
        assert_eq!(
            tokenize("animation d'ateliers, coordination/planning"),
            set(&["animation", "ateliers", "coordination", "planning"])
        );
    }

    #[test]
    fn drops_short_tokens() {
        assert_eq!(tokenize("je vais au bureau le lundi"), set(&["vais", "bureau", "lundi"]));
    }

    #[test]
    fn deduplicates() {
        assert_eq!(tokenize("budget budget BUDGET"), set(&["budget"]));
    }

    #[test]
    fn normalizes_accented_input() {
        assert_eq!(
            tokenize("Formation pédagogique et éducation"),
            set(&["formation", "pedagogique", "education"])
        );
    }

    #[test]
    fn keeps_digits() {
        assert_eq!(tokenize("gestion iso9001"), set(&["gestion", "iso9001"]));
    }

    #[test]
    fn empty_input_yields_empty_set() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  -- ! ").is_empty());
    }
}
