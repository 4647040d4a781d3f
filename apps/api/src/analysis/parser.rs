//! Strict parsing of the model's response text into an `AnalysisResult`.
//!
//! Either every field is present, correctly typed and in range, or parsing fails.
//! Nothing is defaulted, coerced or clamped.

use thiserror::Error;

use crate::analysis::models::AnalysisResult;

const SCORE_MIN: f64 = 0.0;
const SCORE_MAX: f64 = 100.0;

#[derive(Debug, Error)]
pub enum ResultError {
    #[error("model returned an empty payload")]
    Empty,

    #[error("payload does not match the analysis schema: {0}")]
    Schema(#[from] serde_json::Error),

    #[error("{field} must be within 0-100, got {value}")]
    OutOfRange { field: String, value: f64 },
}

pub fn parse_analysis(raw: &str) -> Result<AnalysisResult, ResultError> {
    let text = strip_json_fences(raw);
    if text.is_empty() {
        return Err(ResultError::Empty);
    }

    let result: AnalysisResult = serde_json::from_str(text)?;
    check_ranges(&result)?;
    Ok(result)
}

fn check_ranges(result: &AnalysisResult) -> Result<(), ResultError> {
    check_score("aiScore", result.ai_score)?;
    check_score("humanScore", result.human_score)?;
    for (i, metric) in result.detailed_metrics.iter().enumerate() {
        check_score(&format!("detailedMetrics[{i}].value"), metric.value)?;
    }
    Ok(())
}

fn check_score(field: &str, value: f64) -> Result<(), ResultError> {
    if (SCORE_MIN..=SCORE_MAX).contains(&value) {
        Ok(())
    } else {
        Err(ResultError::OutOfRange {
            field: field.to_string(),
            value,
        })
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let inner = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"));
    match inner {
        Some(stripped) => {
            let stripped = stripped.trim_start();
            stripped
                .strip_suffix("```")
                .map(str::trim)
                .unwrap_or(stripped)
        }
        None => text,
    }
}
