//! Builds the single `generateContent` request for an analysis.

use crate::analysis::input::SubmittedText;
use crate::analysis::prompts::*;
use crate::llm_client::{GenerationRequest, Schema};

/// Response schema mirroring `AnalysisResult`. All seven top-level fields are required,
/// and nested item objects require their own fields too.
pub fn analysis_schema() -> Schema {
    let suggestion = Schema::object()
        .required_property("title", Schema::string())
        .required_property("description", Schema::string());

    let metric = Schema::object()
        .required_property("label", Schema::string().describe(METRIC_LABEL_DESCRIPTION))
        .required_property("value", Schema::number().describe(METRIC_VALUE_DESCRIPTION));

    Schema::object()
        .required_property("aiScore", Schema::number().describe(AI_SCORE_DESCRIPTION))
        .required_property("humanScore", Schema::number().describe(HUMAN_SCORE_DESCRIPTION))
        .required_property("readability", Schema::string().describe(READABILITY_DESCRIPTION))
        .required_property("tone", Schema::string().describe(TONE_DESCRIPTION))
        .required_property(
            "keyFindings",
            Schema::array(Schema::string()).describe(KEY_FINDINGS_DESCRIPTION),
        )
        .required_property(
            "suggestions",
            Schema::array(suggestion).describe(SUGGESTIONS_DESCRIPTION),
        )
        .required_property("detailedMetrics", Schema::array(metric))
}

pub fn build_analysis_request(text: SubmittedText<'_>) -> GenerationRequest {
    GenerationRequest {
        system_instruction: ANALYST_SYSTEM.to_string(),
        prompt: ANALYSIS_PROMPT_TEMPLATE.replace("{text}", text.as_str()),
        response_schema: analysis_schema(),
    }
}
