// All LLM prompt constants for the analysis module.

/// Fixed analyst persona sent as the system instruction on every call.
pub const ANALYST_SYSTEM: &str = "You are an expert content analyst and AI detection specialist. \
    Your goal is to evaluate text for its likelihood of being AI-generated versus human-written, \
    and provide constructive feedback on its quality, tone, and readability. \
    Be objective and precise.";

/// Analysis prompt template. Replace `{text}` before sending.
/// The text is embedded verbatim; no escaping is applied.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze the following text for AI-generated patterns and content quality. Provide a detailed breakdown of its characteristics.

Text to analyze:
"{text}""#;

// Field descriptions carried in the response schema.
pub const AI_SCORE_DESCRIPTION: &str =
    "Likelihood percentage that the text is AI-generated (0-100)";
pub const HUMAN_SCORE_DESCRIPTION: &str =
    "Likelihood percentage that the text is human-written (0-100)";
pub const READABILITY_DESCRIPTION: &str = "Readability level (e.g., Easy, Moderate, Academic)";
pub const TONE_DESCRIPTION: &str = "The perceived tone of the writing";
pub const KEY_FINDINGS_DESCRIPTION: &str =
    "3-4 key observations about the text structure and patterns";
pub const SUGGESTIONS_DESCRIPTION: &str =
    "Actionable suggestions to improve the content or make it more human-like";
pub const METRIC_LABEL_DESCRIPTION: &str =
    "Metric name (e.g., Perplexity, Burstiness, Emotional Depth)";
pub const METRIC_VALUE_DESCRIPTION: &str = "Score from 0-100";
