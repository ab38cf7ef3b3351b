//! Axum route handler for the Analysis API.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::analysis::report::CompatibilityReport;
use crate::errors::AppError;
use crate::extraction::{read_resume, SourceDocument};
use crate::state::AppState;

pub const RESUME_FIELD: &str = "resume";
pub const JOB_DESCRIPTION_FIELD: &str = "job_description";

/// Fields collected from the upload form. Unknown fields are ignored.
#[derive(Debug, Default)]
struct AnalyzeForm {
    resume: Option<SourceDocument>,
    job_description: Option<String>,
}

/// Body-limit overruns surface as 413; anything else is a malformed form.
fn multipart_error(context: &str, e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge("Upload exceeds the maximum allowed size".to_string())
    } else {
        AppError::Validation(format!("{context}: {e}"))
    }
}

async fn read_form(multipart: &mut Multipart) -> Result<AnalyzeForm, AppError> {
    let mut form = AnalyzeForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error("Invalid multipart body", e))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            RESUME_FIELD => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| multipart_error("Failed to read resume", e))?;
                form.resume = Some(SourceDocument::new(filename, bytes));
            }
            JOB_DESCRIPTION_FIELD => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| multipart_error("Failed to read job_description", e))?;
                form.job_description = Some(text);
            }
            _ => {}
        }
    }

    Ok(form)
}

/// POST /api/v1/analyze
///
/// Multipart form: `resume` (PDF or DOCX file) and `job_description` (text).
/// Extracts the resume, asks the model for a verdict, returns the report.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<CompatibilityReport>, AppError> {
    let form = read_form(&mut multipart).await?;

    let document = form
        .resume
        .ok_or_else(|| AppError::Validation("resume file is required".to_string()))?;
    let jd_text = form.job_description.unwrap_or_default();
    if jd_text.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let resume_text = tokio::task::spawn_blocking(move || read_resume(document))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Extraction task failed: {e}")))??;

    let result = state.analyzer.analyze(&resume_text, &jd_text).await?;
    let report = CompatibilityReport::from_result(result, state.analyzer.model());
    info!(
        "Analysis {} returned verdict {:?}",
        report.analysis_id, report.verdict
    );

    Ok(Json(report))
}
