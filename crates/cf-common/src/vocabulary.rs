use std::collections::{HashMap, HashSet};

/// Immutable mapping from role identifier to its keyword set.
///
/// Built once at startup and shared read-only across requests; lookups are
/// case-insensitive (identifiers are uppercased before comparison) and an
/// unknown role simply maps to no keywords.
#[derive(Debug, Clone)]
pub struct RoleVocabulary {
    roles: HashMap<String, HashSet<String>>,
}

/// Keyword vocabulary of the two production roles.
const DEFAULT_ROLES: &[(&str, &[&str])] = &[
    (
        "FORMATEUR",
        &[
            "formation",
            "formateur",
            "enseignement",
            "pedagogie",
            "cours",
            "atelier",
            "coach",
            "education",
            "eleves",
            "classe",
            "animation",
            "didactique",
            "evaluation",
        ],
    ),
    (
        "RESPONSABLE",
        &[
            "responsable",
            "coordination",
            "gestion",
            "planning",
            "pilotage",
            "supervision",
            "administration",
            "strategie",
            "reporting",
            "management",
            "organisation",
            "budget",
        ],
    ),
];

impl RoleVocabulary {
    /// Build a vocabulary from arbitrary role/keyword pairs. Role
    /// identifiers are uppercased so lookups stay case-insensitive.
    pub fn from_roles<R, K>(roles: impl IntoIterator<Item = (R, Vec<K>)>) -> Self
    where
        R: Into<String>,
        K: Into<String>,
    {
        let roles = roles
            .into_iter()
            .map(|(role, keywords)| {
                (
                    role.into().trim().to_uppercase(),
                    keywords.into_iter().map(Into::into).collect(),
                )
            })
            .collect();

        Self { roles }
    }

    /// Keyword set for a role identifier, or `None` for unknown roles.
    /// The identifier is trimmed and uppercased before lookup.
    pub fn keywords(&self, role: &str) -> Option<&HashSet<String>> {
        let key = role.trim().to_uppercase();
        self.roles.get(&key)
    }

    pub fn role_count(&self) -> usize {
        self.roles.len()
    }
}

impl Default for RoleVocabulary {
    fn default() -> Self {
        Self::from_roles(
            DEFAULT_ROLES
                .iter()
                .map(|(role, keywords)| (*role, keywords.to_vec())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_vocabulary_has_both_roles() {
        let vocab = RoleVocabulary::default();
        assert_eq!(vocab.role_count(), 2);
        assert_eq!(vocab.keywords("FORMATEUR").map(HashSet::len), Some(13));
        assert_eq!(vocab.keywords("RESPONSABLE").map(HashSet::len), Some(12));
    }

    #[test]
    fn lookup_trims_and_ignores_case() {
        let vocab = RoleVocabulary::default();
        assert!(vocab.keywords("  formateur ").is_some());
        assert!(vocab.keywords("Responsable").is_some());
    }

    #[test]
    fn unknown_role_has_no_keywords() {
        let vocab = RoleVocabulary::default();
        assert!(vocab.keywords("XYZ").is_none());
        assert!(vocab.keywords("").is_none());
    }

    #[test]
    fn custom_vocabularies_can_be_injected() {
        let vocab = RoleVocabulary::from_roles([("testeur", vec!["qualite", "tests"])]);
        let keywords = vocab.keywords("TESTEUR").unwrap();
        assert!(keywords.contains("qualite"));
        assert_eq!(keywords.len(), 2);
    }
}
