use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::GenerativeModel;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup; nothing here needs locking.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable model backend. Production: `LlmClient` (Gemini). Tests: `StubModel`.
    pub model: Arc<dyn GenerativeModel>,
    pub config: Config,
}
