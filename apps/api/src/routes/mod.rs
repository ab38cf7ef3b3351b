pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/analyze",
            post(handlers::handle_analyze).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::analysis::normalizer::Analyzer;
    use crate::extraction::docx::tests::build_docx;
    use crate::llm_client::mock::MockGenerationService;

    const BOUNDARY: &str = "X-ATS-TEST-BOUNDARY";
    const REPLY: &str = "```json\n{\"score\": 72, \"strengths\": [\"Rust\"], \"missing_skills\": [\"Kafka\"], \"verdict\": \"Consider\", \"recommendations\": [\"Add X\"]}\n```";

    fn router(mock: &MockGenerationService) -> Router {
        router_with_limit(mock, 1024 * 1024)
    }

    fn router_with_limit(mock: &MockGenerationService, max_upload_bytes: usize) -> Router {
        let state = AppState {
            analyzer: Analyzer::new(Arc::new(mock.clone()), "gemini-2.0-flash"),
        };
        build_router(state, max_upload_bytes)
    }

    enum Part<'a> {
        File(&'a str, &'a str, &'a [u8]),
        Text(&'a str, &'a str),
    }

    fn multipart_body(parts: &[Part]) -> Vec<u8> {
        let mut body = Vec::new();
        for part in parts {
            body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
            match part {
                Part::File(name, filename, bytes) => {
                    body.extend_from_slice(
                        format!(
                            "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n\
                             Content-Type: application/octet-stream\r\n\r\n"
                        )
                        .as_bytes(),
                    );
                    body.extend_from_slice(bytes);
                }
                Part::Text(name, text) => {
                    body.extend_from_slice(
                        format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n")
                            .as_bytes(),
                    );
                    body.extend_from_slice(text.as_bytes());
                }
            }
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    async fn post_analyze(app: Router, parts: &[Part<'_>]) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/analyze")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(multipart_body(parts)))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let app = router(&MockGenerationService::replying(REPLY));
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_docx_upload_returns_report() {
        let mock = MockGenerationService::replying(REPLY);
        let docx = build_docx(&["Jane Doe", "", "Skills: Rust, Tokio"]);
        let (status, body) = post_analyze(
            router(&mock),
            &[
                Part::File("resume", "jane.docx", &docx),
                Part::Text("job_description", "Rust engineer with Kafka"),
            ],
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"], 72);
        assert_eq!(body["verdict"], "Consider");
        assert_eq!(body["missing_skills"][0], "Kafka");
        assert_eq!(body["model"], "gemini-2.0-flash");

        let calls = mock.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].1.contains("=== RESUME ===\nJane Doe\nSkills: Rust, Tokio\n"));
        assert!(calls[0].1.contains("=== JOB DESCRIPTION ===\nRust engineer with Kafka\n"));
    }

    #[tokio::test]
    async fn test_unsupported_format_stops_before_model_call() {
        let mock = MockGenerationService::replying(REPLY);
        let (status, body) = post_analyze(
            router(&mock),
            &[
                Part::File("resume", "resume.txt", b"Experience: 5 years"),
                Part::Text("job_description", "Rust engineer"),
            ],
        )
        .await;

        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(body["error"]["code"], "UNSUPPORTED_FORMAT");
        assert_eq!(
            body["error"]["message"],
            "Unsupported file format. Please upload PDF or DOCX."
        );
        assert!(mock.calls().is_empty());
    }

    #[tokio::test]
    async fn test_unextractable_resume_stops_before_model_call() {
        let mock = MockGenerationService::replying(REPLY);
        let (status, body) = post_analyze(
            router(&mock),
            &[
                Part::File("resume", "scan.pdf", b"%PDF-1.4 not really"),
                Part::Text("job_description", "Rust engineer"),
            ],
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "EXTRACTION_EMPTY");
        assert!(mock.calls().is_empty());
    }

    #[tokio::test]
    async fn test_upload_over_body_limit_is_413() {
        let mock = MockGenerationService::replying(REPLY);
        let oversized = vec![b'a'; 4096];
        let (status, body) = post_analyze(
            router_with_limit(&mock, 1024),
            &[
                Part::File("resume", "big.pdf", &oversized),
                Part::Text("job_description", "Rust engineer"),
            ],
        )
        .await;

        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body["error"]["code"], "PAYLOAD_TOO_LARGE");
        assert!(mock.calls().is_empty());
    }

    #[tokio::test]
    async fn test_missing_job_description_is_rejected() {
        let mock = MockGenerationService::replying(REPLY);
        let docx = build_docx(&["Jane Doe"]);
        let (status, body) = post_analyze(
            router(&mock),
            &[
                Part::File("resume", "jane.docx", &docx),
                Part::Text("job_description", "   "),
            ],
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(mock.calls().is_empty());
    }

    #[tokio::test]
    async fn test_missing_resume_is_rejected() {
        let mock = MockGenerationService::replying(REPLY);
        let (status, _) = post_analyze(
            router(&mock),
            &[Part::Text("job_description", "Rust engineer")],
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unparseable_reply_returns_parsing_error_report() {
        let mock = MockGenerationService::replying("I cannot evaluate this.");
        let docx = build_docx(&["Jane Doe"]);
        let (status, body) = post_analyze(
            router(&mock),
            &[
                Part::File("resume", "jane.docx", &docx),
                Part::Text("job_description", "Rust engineer"),
            ],
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["verdict"], "Parsing Error");
        assert_eq!(body["score"], 0);
        assert_eq!(body["recommendations"][0], "I cannot evaluate this.");
    }

    #[tokio::test]
    async fn test_service_fault_maps_to_bad_gateway() {
        let mock = MockGenerationService::failing();
        let docx = build_docx(&["Jane Doe"]);
        let (status, body) = post_analyze(
            router(&mock),
            &[
                Part::File("resume", "jane.docx", &docx),
                Part::Text("job_description", "Rust engineer"),
            ],
        )
        .await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "LLM_ERROR");
    }
}
