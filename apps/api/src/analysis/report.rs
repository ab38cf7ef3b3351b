use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::analysis::result::AnalysisResult;

/// Shown when the model gave no verdict.
pub const NO_VERDICT: &str = "N/A";

/// What the client displays for one analysis. Absent values from the model are
/// filled in here: score 0, verdict "N/A".
#[derive(Debug, Clone, Serialize)]
pub struct CompatibilityReport {
    pub analysis_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub model: String,
    pub score: i64,
    /// `score / 100` clamped to 0.0–1.0, for a progress bar.
    pub score_fraction: f64,
    pub strengths: Vec<String>,
    pub missing_skills: Vec<String>,
    pub verdict: String,
    pub recommendations: Vec<String>,
}

impl CompatibilityReport {
    pub fn from_result(result: AnalysisResult, model: &str) -> Self {
        let score = result.score.unwrap_or(0);
        Self {
            analysis_id: Uuid::new_v4(),
            analyzed_at: Utc::now(),
            model: model.to_string(),
            score,
            score_fraction: (score as f64 / 100.0).clamp(0.0, 1.0),
            strengths: result.strengths,
            missing_skills: result.missing_skills,
            verdict: result.verdict.unwrap_or_else(|| NO_VERDICT.to_string()),
            recommendations: result.recommendations,
        }
    }
}
