//! Claim extraction: structured model output with a heuristic fallback.

use crate::types::{Claim, truncate_chars};
use claimlens_common::{ClaimlensError, Result};
use claimlens_llm::traits::LlmClient;
use regex::Regex;
use serde::Deserialize;
use std::sync::Arc;

/// Only this many leading characters of the document are sent to the model.
pub const CLAIM_INPUT_LIMIT: usize = 3000;

/// The heuristic fallback never returns more than this many claims.
pub const FALLBACK_CLAIM_CAP: usize = 10;

pub struct ClaimExtractor {
    llm: Arc<dyn LlmClient>,
}

impl ClaimExtractor {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    /// Extract claims from `text`.
    ///
    /// Any failure of the model path (transport, non-conforming response)
    /// degrades to [`fallback_claims`] on the same input.
    pub async fn extract(&self, text: &str) -> Vec<Claim> {
        match self.extract_structured(text).await {
            Ok(claims) => claims,
            Err(err) => {
                tracing::warn!(error = %err, "structured claim extraction failed, using heuristic fallback");
                fallback_claims(text)
            }
        }
    }

    async fn extract_structured(&self, text: &str) -> Result<Vec<Claim>> {
        let excerpt = truncate_chars(text, CLAIM_INPUT_LIMIT);
        let prompt = build_extraction_prompt(excerpt);
        let resp = self.llm.generate(&prompt, None, None, Some(0.0)).await?;
        parse_claim_array(&resp.text)
    }
}

fn build_extraction_prompt(excerpt: &str) -> String {
    format!(
        r#"Extract ALL factual claims, statistics, dates, financial figures, and specific statements from this text. Return ONLY a JSON array where each item has "claim" and "category" (e.g., "statistic", "date", "financial", "fact").

Text: {excerpt}

Return format: [{{"claim": "Bitcoin is $42,500", "category": "financial"}}, ...]"#
    )
}

#[derive(Debug, Deserialize)]
struct ClaimWire {
    claim: String,
    #[serde(default)]
    category: Option<String>,
}

/// Strictly deserialize the model's claim array, tolerating a ```json fence.
fn parse_claim_array(text: &str) -> Result<Vec<Claim>> {
    let trimmed = text.trim();
    let json = strip_json_fence(trimmed).unwrap_or_else(|| trimmed.to_string());
    let wire: Vec<ClaimWire> =
        serde_json::from_str(&json).map_err(|e| ClaimlensError::Parse(e.to_string()))?;
    Ok(wire
        .into_iter()
        .filter(|w| !w.claim.trim().is_empty())
        .map(|w| Claim {
            text: w.claim,
            category: w.category,
        })
        .collect())
}

/// Pull the payload out of a ```json ... ``` fenced block, if present.
/// Shared with the verifier, which parses the object shape.
pub(crate) fn strip_json_fence(text: &str) -> Option<String> {
    let re = Regex::new(r"(?s)```(?:json)?\s*(\[.*?\]|\{.*?\})\s*```").ok()?;
    re.captures(text)
        .and_then(|c| c.get(1).map(|m| m.as_str().to_string()))
}

/// Heuristic extraction: sentences that mention at least one digit, capped at
/// [`FALLBACK_CLAIM_CAP`]. Deterministic for a fixed input.
pub fn fallback_claims(text: &str) -> Vec<Claim> {
    split_sentences(text)
        .into_iter()
        .filter(|s| s.chars().any(|c| c.is_ascii_digit()))
        .take(FALLBACK_CLAIM_CAP)
        .map(Claim::new)
        .collect()
}

/// Split on '.', '!' or '?' followed by whitespace; sentences keep their
/// terminal punctuation and the whitespace run is consumed.
fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        current.push(ch);
        if matches!(ch, '.' | '!' | '?') && chars.peek().is_some_and(|c| c.is_whitespace()) {
            while chars.peek().is_some_and(|c| c.is_whitespace()) {
                chars.next();
            }
            sentences.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        sentences.push(current);
    }
    sentences
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentences_split_on_terminal_punctuation() {
        let got = split_sentences("First one. Second two!  Third three? Tail");
        assert_eq!(
            got,
            vec!["First one.", "Second two!", "Third three?", "Tail"]
        );
    }

    #[test]
    fn abbreviation_without_space_stays_joined() {
        let got = split_sentences("Revenue was $4.2 billion.");
        assert_eq!(got, vec!["Revenue was $4.2 billion."]);
    }

    #[test]
    fn fallback_keeps_only_digit_bearing_sentences() {
        let text = "The sky is blue. Revenue grew 25% to $4.2 billion in Q3 2023. Nothing here.";
        let claims = fallback_claims(text);
        assert_eq!(claims.len(), 1);
        assert_eq!(claims[0].text, "Revenue grew 25% to $4.2 billion in Q3 2023.");
        assert!(claims[0].category.is_none());
    }

    #[test]
    fn fallback_caps_at_ten() {
        let text = (1..=15)
            .map(|i| format!("Item {i} happened."))
            .collect::<Vec<_>>()
            .join(" ");
        let claims = fallback_claims(&text);
        assert_eq!(claims.len(), FALLBACK_CLAIM_CAP);
        assert_eq!(claims[0].text, "Item 1 happened.");
        assert_eq!(claims[9].text, "Item 10 happened.");
    }

    #[test]
    fn fallback_on_digitless_text_is_empty() {
        assert!(fallback_claims("No numbers anywhere. None at all.").is_empty());
        assert!(fallback_claims("").is_empty());
    }

    #[test]
    fn parse_accepts_a_plain_array() {
        let claims = parse_claim_array(
            r#"[{"claim": "Bitcoin is $42,500", "category": "financial"},
                {"claim": "The Q3 report was filed in 2023", "category": "date"}]"#,
        )
        .unwrap();
        assert_eq!(claims.len(), 2);
        assert_eq!(claims[0].category.as_deref(), Some("financial"));
    }

    #[test]
    fn parse_accepts_a_fenced_array() {
        let claims = parse_claim_array(
            "```json\n[{\"claim\": \"GDP rose 2%\", \"category\": \"statistic\"}]\n```",
        )
        .unwrap();
        assert_eq!(claims.len(), 1);
        assert_eq!(claims[0].text, "GDP rose 2%");
    }

    #[test]
    fn parse_drops_empty_claims() {
        let claims =
            parse_claim_array(r#"[{"claim": "  "}, {"claim": "Real claim 1"}]"#).unwrap();
        assert_eq!(claims.len(), 1);
    }

    #[test]
    fn parse_rejects_prose() {
        assert!(parse_claim_array("Here are the claims I found:").is_err());
        assert!(parse_claim_array(r#"{"claim": "not an array"}"#).is_err());
    }
}
