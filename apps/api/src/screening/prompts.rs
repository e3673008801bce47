// All LLM prompt constants for the Screening module.

/// System prompt for resume screening — enforces JSON-only output.
pub const SCREENING_SYSTEM: &str =
    "You are an expert HR recruiter with years of experience in technical hiring. \
    Compare a resume with a job description and produce a structured analysis. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Screening prompt template. Replace `{job_description}` and `{resume_text}`
/// before sending.
pub const SCREENING_PROMPT_TEMPLATE: &str = r#"Compare the following resume with the job description and provide a detailed analysis.

JOB DESCRIPTION:
{job_description}

RESUME:
{resume_text}

Return a JSON object with this EXACT schema (no extra fields):
{
  "match_score": 7.5,
  "matched_skills": ["Python", "Aws"],
  "missing_skills": ["Kubernetes"],
  "justification": "2-3 sentence explanation of the match score",
  "recommendation": "Shortlist"
}

Rules:
- "match_score" is a number between 1 and 10.
- "matched_skills" lists skills from the resume that match job requirements.
- "missing_skills" lists important skills from the job description not found in the resume.
- "recommendation" is exactly one of: "Shortlist", "Maybe", "Reject".

Consider:
1. Technical skills match
2. Experience level alignment
3. Educational qualifications
4. Relevant project experience
5. Cultural fit indicators

Be objective and provide specific reasoning."#;
