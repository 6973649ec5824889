//! Common types and utilities shared across Claimlens crates.
//!
//! This crate defines the shared error type, the LLM provider configuration,
//! and the centralised observability helpers. It is intentionally lightweight
//! so that every crate in the workspace can depend on it without pulling in
//! heavy transitive costs.
//!
//! # Overview
//!
//! - [`LlmConfig`]: Provider configuration for the language-model backend
//! - [`observability`]: Centralised tracing/logging initialisation
//! - [`ClaimlensError`] and [`Result`]: Shared error handling
use serde::{Deserialize, Serialize};

pub mod observability;

/// Configuration for the language-model backend.
///
/// The `provider` tag selects the concrete client; see the `claimlens-llm`
/// crate for implementations. Model selection is a real knob here — there is
/// no hidden default model behind a dead toggle.
///
/// ```
/// use claimlens_common::LlmConfig;
///
/// let cfg: LlmConfig = serde_json::from_str(
///     r#"{"provider": "openai", "model": "gpt-4o-mini", "api_key": "sk-test"}"#,
/// )
/// .unwrap();
/// let LlmConfig::OpenAi { model, .. } = cfg;
/// assert_eq!(model, "gpt-4o-mini");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "provider", rename_all = "lowercase")]
pub enum LlmConfig {
    OpenAi {
        model: String,
        api_key: String,
        /// Override for gateways and OpenAI-compatible endpoints.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        base_url: Option<String>,
    },
}

/// Error types used across the Claimlens system.
///
/// Each variant names a failure cause; the pipeline's fallback policy matches
/// on cause rather than catching everything in one arm.
#[derive(thiserror::Error, Debug)]
pub enum ClaimlensError {
    /// Document text extraction failed on both extraction paths.
    #[error("Extraction error: {0}")]
    Extraction(String),

    /// A language-model call failed in transport or at the API.
    #[error("Model error: {0}")]
    Model(String),

    /// A web-search call failed in transport or at the API.
    #[error("Search error: {0}")]
    Search(String),

    /// A model response did not conform to the documented shape.
    #[error("Malformed model output: {0}")]
    Parse(String),
}

/// Convenient alias for results that use [`ClaimlensError`].
pub type Result<T> = std::result::Result<T, ClaimlensError>;
