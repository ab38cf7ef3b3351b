// Prompt text for the ATS evaluation call.
// The wording, field names and section labels are what the model is tuned
// against; change them only together with the reply parser.

/// Fixed evaluation instructions. Starts with a newline; the job description
/// and resume sections follow.
pub const ATS_EVALUATION_INSTRUCTIONS: &str = "
You are an expert ATS evaluator and career coach.

Evaluate the following resume against the given job description.

Provide output in JSON format with the following fields:
- score: integer between 0 and 100
- strengths: list of top strengths
- missing_skills: list of missing or weak skills
- verdict: Shortlist / Consider / Not a Match
- recommendations: list of 2–3 suggestions
- create a list where mention the only missing skills from the job description
";

pub const JOB_DESCRIPTION_LABEL: &str = "=== JOB DESCRIPTION ===";
pub const RESUME_LABEL: &str = "=== RESUME ===";

/// Assembles the full prompt: instructions, then job description, then resume.
pub fn build_prompt(resume_text: &str, jd_text: &str) -> String {
    format!(
        "{ATS_EVALUATION_INSTRUCTIONS}\n{JOB_DESCRIPTION_LABEL}\n{jd_text}\n\n{RESUME_LABEL}\n{resume_text}\n"
    )
}
