//! Claim verification: evidence search, then model classification.

use crate::extract::strip_json_fence;
use crate::types::{Claim, Verdict, VerificationResult, preview, truncate_chars};
use claimlens_common::{ClaimlensError, Result};
use claimlens_llm::traits::LlmClient;
use claimlens_search::{EvidenceHit, SearchClient};
use serde::Deserialize;
use std::sync::Arc;

/// How many search results are requested per claim.
pub const SEARCH_RESULT_LIMIT: u32 = 3;

/// Evidence snippets are cut to this many characters in the prompt.
pub const SNIPPET_LIMIT: usize = 200;

const SEARCH_FAILED_REASON: &str = "Could not search";
const VERIFY_FAILED_REASON: &str = "Verification failed";

pub struct ClaimVerifier {
    llm: Arc<dyn LlmClient>,
    search: Arc<dyn SearchClient>,
}

impl ClaimVerifier {
    pub fn new(llm: Arc<dyn LlmClient>, search: Arc<dyn SearchClient>) -> Self {
        Self { llm, search }
    }

    /// Verify one claim. Never fails: every failure cause collapses into a
    /// terminal verdict on the result itself.
    pub async fn verify(&self, claim: &Claim) -> VerificationResult {
        let hits = match self.search.search(&claim.text, SEARCH_RESULT_LIMIT).await {
            Ok(hits) => hits,
            Err(err) => {
                tracing::warn!(
                    claim = %preview(&claim.text, 50),
                    error = %err,
                    "evidence search failed"
                );
                // short-circuit: no model call without evidence
                return VerificationResult {
                    claim: claim.clone(),
                    verdict: Verdict::SearchError,
                    reason: SEARCH_FAILED_REASON.to_string(),
                };
            }
        };

        match self.classify(claim, &hits).await {
            Ok((verdict, reason)) => VerificationResult {
                claim: claim.clone(),
                verdict,
                reason,
            },
            Err(err) => {
                tracing::warn!(
                    claim = %preview(&claim.text, 50),
                    error = %err,
                    "verdict classification failed"
                );
                VerificationResult {
                    claim: claim.clone(),
                    verdict: Verdict::Error,
                    reason: VERIFY_FAILED_REASON.to_string(),
                }
            }
        }
    }

    async fn classify(&self, claim: &Claim, hits: &[EvidenceHit]) -> Result<(Verdict, String)> {
        let evidence = compose_evidence_block(hits);
        let prompt = build_verification_prompt(&claim.text, &evidence);
        let resp = self.llm.generate(&prompt, None, None, Some(0.0)).await?;
        parse_verdict(&resp.text)
    }
}

/// Render up to three hits as a labelled evidence block.
fn compose_evidence_block(hits: &[EvidenceHit]) -> String {
    hits.iter()
        .take(SEARCH_RESULT_LIMIT as usize)
        .enumerate()
        .map(|(i, hit)| {
            format!(
                "Source {}: {}\n{}...",
                i + 1,
                hit.title,
                truncate_chars(&hit.content, SNIPPET_LIMIT)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn build_verification_prompt(claim: &str, evidence: &str) -> String {
    format!(
        r#"Claim: "{claim}"

Search Results:
{evidence}

Based ONLY on the search results above, classify the claim as:
1. "Verified" - Claim matches current data
2. "Inaccurate" - Partially true but outdated/wrong numbers
3. "False" - No evidence or contradicts evidence
4. "Unverifiable" - Not enough information

Also provide a brief reason (1 sentence).

Return format: {{"verdict": "Verified", "reason": "Matches current data from reliable sources"}}"#
    )
}

#[derive(Debug, Deserialize)]
struct VerdictWire {
    #[serde(default)]
    verdict: Option<Verdict>,
    #[serde(default)]
    reason: Option<String>,
}

/// Strictly deserialize the model's verdict object, tolerating a ```json
/// fence. A well-formed object with missing fields is not an error: the
/// verdict defaults to `Error` and the reason to empty.
fn parse_verdict(text: &str) -> Result<(Verdict, String)> {
    let trimmed = text.trim();
    let json = strip_json_fence(trimmed).unwrap_or_else(|| trimmed.to_string());
    let wire: VerdictWire =
        serde_json::from_str(&json).map_err(|e| ClaimlensError::Parse(e.to_string()))?;
    Ok((
        wire.verdict.unwrap_or(Verdict::Error),
        wire.reason.unwrap_or_default(),
    ))
}
