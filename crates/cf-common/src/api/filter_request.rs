use serde::Deserialize;
use serde_json::Value;

/// Threshold applied when the request carries none or an unparsable one.
pub const DEFAULT_MIN_SCORE: f64 = 0.3;

/// Batch filter request from the HTTP API. Every field is optional on the
/// wire; absent or null fields degrade to empty values, never to an error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterRequest {
    /// Free-text admin filter criterion.
    #[serde(default)]
    pub admin_choice: Option<String>,
    /// Global role identifier applied to every item.
    #[serde(default)]
    pub role: Option<String>,
    /// Minimum score threshold; accepted as a JSON number or a numeric
    /// string, kept raw so bad values can fall back silently.
    #[serde(default)]
    pub min_score: Option<Value>,
    #[serde(default)]
    pub items: Vec<ScoreRequest>,
}

/// One candidature to score.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    /// Opaque identifier echoed back unchanged (may be null).
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub career_description: Option<String>,
    /// Per-item role, merged with the request-level role.
    #[serde(default)]
    pub role: Option<String>,
}

impl FilterRequest {
    /// Effective threshold: the provided number, a parsed numeric string, or
    /// [`DEFAULT_MIN_SCORE`] when absent or unparsable.
    pub fn resolved_min_score(&self) -> f64 {
        match &self.min_score {
            Some(Value::Number(n)) => n.as_f64().unwrap_or(DEFAULT_MIN_SCORE),
            Some(Value::String(s)) => s.trim().parse().unwrap_or(DEFAULT_MIN_SCORE),
            _ => DEFAULT_MIN_SCORE,
        }
    }
}
