use unicode_normalization::UnicodeNormalization;

/// Canonical ASCII form of free text: NFKD decomposition, every non-ASCII
/// code point dropped (combining marks included), then ASCII case folding.
///
/// Total over all inputs and idempotent: `normalize_text(normalize_text(s))
/// == normalize_text(s)`.
pub fn normalize_text(text: &str) -> String {
    text.nfkd()
        .filter(char::is_ascii)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_accents_and_folds_case() {
        assert_eq!(
            normalize_text("Formation pédagogique et éducation"),
            "formation pedagogique et education"
        );
        assert_eq!(normalize_text("Élèves à l'Évaluation"), "eleves a l'evaluation");
    }

    #[test]
    fn drops_characters_without_ascii_decomposition() {
        assert_eq!(normalize_text("gestion 日本語 budget"), "gestion  budget");
        assert_eq!(normalize_text("🔥pilotage🔥"), "pilotage");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(normalize_text(""), "");
    }

    #[test]
    fn is_idempotent() {
        for input in ["Pédagogie & Éducation", "déjà-vu œuvre", "plain ascii 42"] {
            let once = normalize_text(input);
            assert_eq!(normalize_text(&once), once);
        }
    }
}
