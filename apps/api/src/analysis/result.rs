use serde::Serialize;
use serde_json::Value;

/// Verdict emitted locally when the model's reply cannot be parsed.
pub const PARSING_ERROR_VERDICT: &str = "Parsing Error";

/// Structured outcome of one analysis.
///
/// Every field has a default, so a record is always complete. `score` and
/// `verdict` stay `None` when the model omitted them; the report layer decides
/// how absent values are shown.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// Nominally 0–100. Not validated or clamped.
    pub score: Option<i64>,
    pub strengths: Vec<String>,
    pub missing_skills: Vec<String>,
    /// In practice one of "Shortlist", "Consider", "Not a Match" or "Parsing Error".
    pub verdict: Option<String>,
    pub recommendations: Vec<String>,
}

impl AnalysisResult {
    /// Sentinel returned when the reply has no parseable JSON object.
    /// The raw reply is kept as the only recommendation.
    pub fn parsing_error(raw_reply: &str) -> Self {
        Self {
            score: Some(0),
            strengths: vec![],
            missing_skills: vec![],
            verdict: Some(PARSING_ERROR_VERDICT.to_string()),
            recommendations: vec![raw_reply.to_string()],
        }
    }

    /// Populates a record field by field. A missing or wrong-typed field falls
    /// back to its default without affecting the others.
    pub fn from_json(value: &Value) -> Self {
        Self {
            score: value.get("score").and_then(integer),
            strengths: string_list(value.get("strengths")),
            missing_skills: string_list(value.get("missing_skills")),
            verdict: value
                .get("verdict")
                .and_then(Value::as_str)
                .map(str::to_string),
            recommendations: string_list(value.get("recommendations")),
        }
    }
}

/// Integers, including floats with no fractional part (`72.0`).
fn integer(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    value
        .as_f64()
        .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
        .map(|f| f as i64)
}

/// Array of strings; non-string elements are skipped.
fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|arr| {
            arr.iter()
                .filter_map(|v| v.as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default()
}
