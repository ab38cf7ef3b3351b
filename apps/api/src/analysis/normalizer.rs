//! Analysis Normalizer — asks the generation service for an ATS verdict and
//! coerces the free-form reply into an `AnalysisResult`.
//!
//! Reply parsing never fails: anything that is not a JSON object becomes the
//! "Parsing Error" sentinel. Service faults are returned unchanged.

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{info, warn};

use crate::analysis::prompts::build_prompt;
use crate::analysis::result::AnalysisResult;
use crate::llm_client::{GenerationService, LlmError};

/// Greedy: first `{` through last `}`, across newlines. Tolerates prose and
/// code fences around the object. Replies holding several objects or stray
/// braces match the whole span and then fail to parse.
static JSON_OBJECT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{[\s\S]*\}").unwrap());

/// Holds the injected generation service and the model to ask.
#[derive(Clone)]
pub struct Analyzer {
    service: Arc<dyn GenerationService>,
    model: String,
}

impl Analyzer {
    pub fn new(service: Arc<dyn GenerationService>, model: impl Into<String>) -> Self {
        Self {
            service,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// One service call per invocation; no state is kept between calls.
    pub async fn analyze(
        &self,
        resume_text: &str,
        jd_text: &str,
    ) -> Result<AnalysisResult, LlmError> {
        let prompt = build_prompt(resume_text, jd_text);
        let reply = self.service.generate(&self.model, &prompt).await?;

        let parsed = parse_reply(&reply);
        match &parsed {
            ParsedReply::Structured(result) => {
                info!("Analysis complete: score={:?}, verdict={:?}", result.score, result.verdict)
            }
            ParsedReply::Fallback(_) => warn!(
                "Model reply could not be parsed as JSON ({} chars); returning sentinel",
                reply.len()
            ),
        }
        Ok(parsed.into_result())
    }
}

/// Outcome of reply parsing. Both arms carry a complete record.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedReply {
    /// A JSON object was found and coerced field by field.
    Structured(AnalysisResult),
    /// No parseable object; holds the "Parsing Error" sentinel.
    Fallback(AnalysisResult),
}

impl ParsedReply {
    pub fn is_fallback(&self) -> bool {
        matches!(self, ParsedReply::Fallback(_))
    }

    pub fn into_result(self) -> AnalysisResult {
        match self {
            ParsedReply::Structured(result) | ParsedReply::Fallback(result) => result,
        }
    }
}

/// Locates the greedy brace-delimited span in a reply.
pub fn extract_json_object(text: &str) -> Option<&str> {
    JSON_OBJECT_RE.find(text).map(|m| m.as_str())
}

/// Coerces a raw reply into a record, falling back to the sentinel.
pub fn parse_reply(raw_reply: &str) -> ParsedReply {
    let Some(candidate) = extract_json_object(raw_reply.trim()) else {
        return ParsedReply::Fallback(AnalysisResult::parsing_error(raw_reply));
    };

    match serde_json::from_str::<serde_json::Value>(candidate) {
        Ok(value) => ParsedReply::Structured(AnalysisResult::from_json(&value)),
        Err(_) => ParsedReply::Fallback(AnalysisResult::parsing_error(raw_reply)),
    }
}
