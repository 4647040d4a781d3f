//! Detector: runs one analysis: build the request, make exactly one model call,
//! parse the reply strictly.

use tracing::info;
use uuid::Uuid;

use crate::analysis::input::SubmittedText;
use crate::analysis::models::AnalysisResult;
use crate::analysis::parser::parse_analysis;
use crate::analysis::request::build_analysis_request;
use crate::errors::AppError;
use crate::llm_client::GenerativeModel;

/// Analyzes already-gated text. Any model or parse failure becomes `AppError::Analysis`.
pub async fn analyze_content(
    text: SubmittedText<'_>,
    model: &dyn GenerativeModel,
) -> Result<AnalysisResult, AppError> {
    let analysis_id = Uuid::new_v4();
    info!(
        %analysis_id,
        chars = text.char_count(),
        model = model.model_name(),
        "Submitting text for analysis"
    );

    let request = build_analysis_request(text);

    let raw = model
        .generate(&request)
        .await
        .map_err(|e| AppError::Analysis(format!("[{analysis_id}] model call failed: {e}")))?;

    let result = parse_analysis(&raw)
        .map_err(|e| AppError::Analysis(format!("[{analysis_id}] invalid payload: {e}")))?;

    info!(
        %analysis_id,
        ai_score = result.ai_score,
        human_score = result.human_score,
        metrics = result.detailed_metrics.len(),
        "Analysis complete"
    );
    Ok(result)
}
