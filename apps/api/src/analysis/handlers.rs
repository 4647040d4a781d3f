use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;

use crate::analysis::detector::analyze_content;
use crate::analysis::input::{normalize_input, SubmittedText};
use crate::analysis::models::AnalysisResult;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

/// POST /api/v1/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>, AppError> {
    let Json(req) = payload?;
    let normalized = normalize_input(&req.text);
    let text = SubmittedText::parse(&normalized)?;
    let result = analyze_content(text, state.model.as_ref()).await?;
    Ok(Json(result))
}
