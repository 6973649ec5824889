//! Provider-agnostic LLM integration for Claimlens.
//!
//! This crate exposes a common [`traits::LlmClient`] interface and the
//! OpenAI-backed implementation. [`ensure_llm_ready`] builds a client from a
//! [`claimlens_common::LlmConfig`] so callers never name a concrete provider.
//!
//! # Examples
//! ```no_run
//! use claimlens_common::{LlmConfig, Result};
//! use claimlens_llm::ensure_llm_ready;
//!
//! # fn main() -> Result<()> {
//! let cfg = LlmConfig::OpenAi {
//!     model: "gpt-4o-mini".into(),
//!     api_key: "sk-test".into(),
//!     base_url: None,
//! };
//! let client = ensure_llm_ready(&cfg)?;
//! assert!(!client.model_name().is_empty());
//! # Ok(())
//! # }
//! ```
pub mod openai;
pub mod traits;

use claimlens_common::LlmConfig;
use openai::OpenAiClient;
use std::sync::Arc;
use traits::LlmClient;

/// Default model recommendation for claim extraction and verification.
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

/// Build an LLM client from configuration.
pub fn ensure_llm_ready(
    config: &LlmConfig,
) -> claimlens_common::Result<Arc<dyn LlmClient + Send + Sync + 'static>> {
    match config {
        LlmConfig::OpenAi {
            model,
            api_key,
            base_url,
        } => {
            let client = match base_url {
                Some(base) => {
                    OpenAiClient::with_base_url(api_key.clone(), model.clone(), base)?
                }
                None => OpenAiClient::new(api_key.clone(), model.clone())?,
            };
            Ok(Arc::new(client))
        }
    }
}
