//! The fact-checking pipeline: text extraction, claim extraction, claim
//! verification, and report aggregation.
//!
//! The flow is strictly sequential — one document at a time, one claim at a
//! time, search before classification — and every failure is absorbed
//! locally: an extraction failure falls back to the secondary parser, a
//! model failure falls back to heuristic claims or an `Error` verdict, a
//! search failure becomes a `SearchError` verdict. Nothing about one claim
//! can abort the run.
//!
//! Clients are injected, never global:
//!
//! ```no_run
//! use claimlens_llm::ensure_llm_ready;
//! use claimlens_pipeline::Pipeline;
//! use claimlens_search::{SearchClient, TavilyApi};
//! use std::sync::Arc;
//!
//! # async fn demo(cfg: &claimlens_common::LlmConfig) -> claimlens_common::Result<()> {
//! let llm = ensure_llm_ready(cfg)?;
//! let search: Arc<dyn SearchClient> = Arc::new(TavilyApi::new("tvly-key".into())?);
//! let pipeline = Pipeline::new(llm, search);
//! let report = pipeline.check_document(b"%PDF-1.5 ...").await?;
//! println!("{} claims checked", report.claim_count());
//! # Ok(())
//! # }
//! ```

pub mod extract;
pub mod report;
pub mod types;
pub mod verify;

use claimlens_common::{ClaimlensError, Result};
use claimlens_llm::traits::LlmClient;
use claimlens_search::SearchClient;
use std::sync::Arc;

pub use extract::ClaimExtractor;
pub use report::{Report, Summary};
pub use types::{Claim, Verdict, VerificationResult};
pub use verify::ClaimVerifier;

pub struct Pipeline {
    extractor: ClaimExtractor,
    verifier: ClaimVerifier,
}

impl Pipeline {
    pub fn new(llm: Arc<dyn LlmClient>, search: Arc<dyn SearchClient>) -> Self {
        Self {
            extractor: ClaimExtractor::new(llm.clone()),
            verifier: ClaimVerifier::new(llm, search),
        }
    }

    /// Run the full pipeline over raw PDF bytes.
    ///
    /// Only extraction can fail here; everything downstream degrades into
    /// terminal verdicts instead of errors.
    pub async fn check_document(&self, pdf: &[u8]) -> Result<Report> {
        let text = claimlens_pdf::extract_text(pdf)
            .map_err(|e| ClaimlensError::Extraction(e.to_string()))?;
        tracing::info!(text_len = text.len(), "document text extracted");
        Ok(self.check_text(&text).await)
    }

    /// Run claim extraction and verification over already-extracted text.
    pub async fn check_text(&self, text: &str) -> Report {
        let claims = self.extractor.extract(text).await;
        tracing::info!(claim_count = claims.len(), "claims extracted");

        let mut results = Vec::with_capacity(claims.len());
        for (i, claim) in claims.iter().enumerate() {
            tracing::info!(
                current = i + 1,
                total = claims.len(),
                claim = %types::preview(&claim.text, 50),
                "checking claim"
            );
            results.push(self.verifier.verify(claim).await);
        }

        Report::new(text, results)
    }
}
