use std::collections::HashSet;

use crate::tokenize::tokenize;

/// Share of the vocabulary covered by the description tokens. The
/// denominator is the vocabulary size, so long descriptions are never
/// penalized and the score is capped at 1.0 by set intersection.
fn overlap_ratio(desc_tokens: &HashSet<String>, vocab: &HashSet<String>) -> f64 {
    let overlap = desc_tokens.intersection(vocab).count();
    overlap as f64 / vocab.len().max(1) as f64
}

/// Lexical overlap score of a career description against an admin token set
/// and a role token set, in `[0, 1]`.
///
/// When admin tokens are present they act as an alternative sufficient
/// signal and the best of the two scores wins. When they are absent the
/// result must stay pure role-based scoring; the branch is kept explicit so
/// a future non-zero baseline cannot silently leak an admin score in.
pub fn compute_score(
    description: &str,
    admin_tokens: &HashSet<String>,
    role_tokens: &HashSet<String>,
) -> f64 {
    let desc_tokens = tokenize(description);
    if desc_tokens.is_empty() {
        return 0.0;
    }

    let score_admin = if admin_tokens.is_empty() {
        0.0
    } else {
        overlap_ratio(&desc_tokens, admin_tokens)
    };
    let score_role = if role_tokens.is_empty() {
        0.0
    } else {
        overlap_ratio(&desc_tokens, role_tokens)
    };

    if admin_tokens.is_empty() {
        score_role
    } else {
        score_admin.max(score_role)
    }
}

/// The single rounding rule of the service: half away from zero, four
/// decimal places.
pub fn round_score(score: f64) -> f64 {
    (score * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn empty_description_scores_zero() {
        let vocab = tokens(&["budget", "gestion"]);
        assert_eq!(compute_score("", &vocab, &vocab), 0.0);
        assert_eq!(compute_score("a b c", &vocab, &vocab), 0.0);
    }

    #[test]
    fn no_filters_score_zero() {
        let empty = HashSet::new();
        assert_eq!(compute_score("some meaningful text", &empty, &empty), 0.0);
    }

    #[test]
    fn role_score_uses_vocabulary_size_as_denominator() {
        let role = tokens(&["budget", "gestion", "reporting", "pilotage"]);
        let score = compute_score("responsable du budget et du reporting", &HashSet::new(), &role);
        assert_eq!(score, 0.5);
    }

    #[test]
    fn extra_description_tokens_are_not_penalized() {
        let role = tokens(&["budget", "gestion"]);
        let short = compute_score("budget gestion", &HashSet::new(), &role);
        let long = compute_score(
            "budget gestion avec beaucoup de mots parfaitement etrangers entre eux",
            &HashSet::new(),
            &role,
        );
        assert_eq!(short, 1.0);
        assert_eq!(long, 1.0);
    }

    #[test]
    fn admin_tokens_take_best_of_both_scores() {
        let admin = tokens(&["budget", "reporting"]);
        let role = tokens(&[
            "responsable",
            "coordination",
            "gestion",
            "planning",
            "pilotage",
            "supervision",
        ]);
        // admin: 2/2 = 1.0, role: 1/6
        let score = compute_score("responsable budget reporting", &admin, &role);
        assert_eq!(score, 1.0);
    }

    #[test]
    fn empty_admin_set_means_pure_role_scoring() {
        let role = tokens(&["gestion", "budget"]);
        let score = compute_score("gestion quotidienne", &HashSet::new(), &role);
        assert_eq!(score, 0.5);
    }

    #[test]
    fn score_stays_in_unit_interval() {
        let admin = tokens(&["gestion"]);
        let role = tokens(&["gestion", "budget"]);
        for description in ["", "gestion", "gestion budget gestion budget", "rien du tout"] {
            let score = compute_score(description, &admin, &role);
            assert!((0.0..=1.0).contains(&score), "score {score} out of bounds");
        }
    }

    #[test]
    fn rounds_half_away_from_zero_to_four_places() {
        assert_eq!(round_score(3.0 / 13.0), 0.2308);
        assert_eq!(round_score(2.0 / 3.0), 0.6667);
        assert_eq!(round_score(0.25), 0.25);
        // 1/32 * 10_000 is exactly 312.5; half away from zero picks 313.
        assert_eq!(round_score(1.0 / 32.0), 0.0313);
    }
}
