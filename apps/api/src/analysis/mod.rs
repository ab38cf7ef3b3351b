// Resume-vs-job-description analysis.
// Prompt building, the model call and reply normalization live here; the
// model itself is reached only through llm_client.

pub mod handlers;
pub mod normalizer;
pub mod prompts;
pub mod report;
pub mod result;
