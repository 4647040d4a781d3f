// AI-content analysis: input gating, prompt + schema construction, the single model
// call, and strict parsing of the returned payload.
// All model calls go through llm_client; nothing here talks to Gemini directly.

pub mod detector;
pub mod handlers;
pub mod input;
pub mod models;
pub mod parser;
pub mod prompts;
pub mod request;
