use crate::analysis::normalizer::Analyzer;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Analyzer,
}
