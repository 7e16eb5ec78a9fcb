use std::collections::HashSet;

use tracing::debug;

use crate::api::{FilterRequest, FilterResponse, ScoreResult};
use crate::scoring::{compute_score, round_score};
use crate::tokenize::tokenize;
use crate::vocabulary::RoleVocabulary;

/// Batch scoring engine over an immutable role vocabulary.
///
/// Stateless apart from the vocabulary; a single engine is shared across
/// requests without synchronization.
#[derive(Debug, Clone)]
pub struct FilterEngine {
    vocabulary: RoleVocabulary,
}

impl FilterEngine {
    pub fn new(vocabulary: RoleVocabulary) -> Self {
        Self { vocabulary }
    }

    /// Score every item of the request against the admin-choice tokens and
    /// the union of the global and per-item role keywords.
    ///
    /// Results come back in input order, one per item; a degenerate item
    /// (missing description, unknown role) scores 0.0 but never fails the
    /// batch. The resolved threshold is echoed in the response.
    pub fn run(&self, request: &FilterRequest) -> FilterResponse {
        let min_score = request.resolved_min_score();
        let admin_tokens = tokenize(request.admin_choice.as_deref().unwrap_or_default());
        let global_role_tokens = self.role_tokens(request.role.as_deref());

        let results = request
            .items
            .iter()
            .map(|item| {
                let mut role_tokens = self.role_tokens(item.role.as_deref());
                role_tokens.extend(global_role_tokens.iter().cloned());

                let description = item.career_description.as_deref().unwrap_or_default();
                let score = round_score(compute_score(description, &admin_tokens, &role_tokens));

                ScoreResult {
                    id: item.id.clone(),
                    score,
                    matched: score >= min_score,
                }
            })
            .collect::<Vec<_>>();

        debug!(
            items = results.len(),
            matched = results.iter().filter(|r| r.matched).count(),
            min_score,
            "filter batch scored"
        );

        FilterResponse { results, min_score }
    }

    fn role_tokens(&self, role: Option<&str>) -> HashSet<String> {
        role.and_then(|role| self.vocabulary.keywords(role))
            .cloned()
            .unwrap_or_default()
    }
}

impl Default for FilterEngine {
    fn default() -> Self {
        Self::new(RoleVocabulary::default())
    }
}
