use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, Redirect},
    Form,
};
use serde::Deserialize;

use crate::analysis::detector::analyze_content;
use crate::errors::AppError;
use crate::analysis::input::{normalize_input, SubmittedText};
use crate::render::{render_page, PageView};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeForm {
    #[serde(default)]
    pub text: String,
}

/// GET /
pub async fn handle_index() -> Html<String> {
    Html(render_page(&PageView::default()))
}

/// POST /
/// Re-renders the page with either the result or an error. The input is always kept.
pub async fn handle_submit(
    State(state): State<AppState>,
    Form(form): Form<AnalyzeForm>,
) -> (StatusCode, Html<String>) {
    let text = normalize_input(&form.text);

    let outcome = match SubmittedText::parse(&text) {
        Ok(submitted) => analyze_content(submitted, state.model.as_ref()).await,
        Err(e) => Err(e),
    };

    let (status, view) = match outcome {
        Ok(result) => (
            StatusCode::OK,
            PageView {
                text,
                result: Some(result),
                ..Default::default()
            },
        ),
        Err(e) => {
            if let AppError::Analysis(detail) = &e {
                tracing::error!("Analysis error: {detail}");
            }
            (
                e.status_code(),
                PageView {
                    text,
                    error: Some(e.user_message()),
                    ..Default::default()
                },
            )
        }
    };

    (status, Html(render_page(&view)))
}

/// POST /reset
/// Discards input, result and error.
pub async fn handle_reset() -> Redirect {
    Redirect::to("/")
}
