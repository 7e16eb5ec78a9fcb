use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Per-item outcome of a filter run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    /// Identifier echoed from the request, untouched.
    pub id: Value,
    /// Overlap score in `[0, 1]`, rounded to four decimal places.
    pub score: f64,
    /// Whether the score cleared the resolved threshold.
    pub matched: bool,
}

/// Full filter response: one result per input item, in input order, plus
/// the threshold that was actually applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterResponse {
    pub results: Vec<ScoreResult>,
    pub min_score: f64,
}
