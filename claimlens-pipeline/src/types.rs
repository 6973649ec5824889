use serde::{Deserialize, Serialize};
use std::fmt;

/// One factual assertion extracted from source text.
///
/// Invariant: `text` is never empty. The category label is whatever the
/// extraction model chose ("statistic", "date", "financial", "fact", ...);
/// the heuristic fallback leaves it unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    pub text: String,
    #[serde(default)]
    pub category: Option<String>,
}

impl Claim {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: None,
        }
    }
}

/// Classification outcome for one claim.
///
/// The first four variants are assigned by the model; `Error` and
/// `SearchError` are terminal fallback verdicts assigned locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Verified,
    Inaccurate,
    False,
    Unverifiable,
    Error,
    #[serde(rename = "Search Error")]
    SearchError,
}

impl Verdict {
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Verified => "Verified",
            Verdict::Inaccurate => "Inaccurate",
            Verdict::False => "False",
            Verdict::Unverifiable => "Unverifiable",
            Verdict::Error => "Error",
            Verdict::SearchError => "Search Error",
        }
    }

    /// Glyph shown next to the verdict in rendered reports.
    pub fn glyph(&self) -> &'static str {
        match self {
            Verdict::Verified => "✅",
            Verdict::Inaccurate => "⚠️",
            Verdict::False => "🚫",
            Verdict::Unverifiable => "❓",
            Verdict::Error => "❌",
            _ => "🔸",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The (claim, verdict, reason) triple produced by the verifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResult {
    pub claim: Claim,
    pub verdict: Verdict,
    pub reason: String,
}

/// Return the first `limit` characters of `text`, on a char boundary.
pub(crate) fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Short prefix of a longer text for log lines and report headings; appends
/// an ellipsis only when something was cut.
pub fn preview(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        text.to_string()
    } else {
        format!("{}...", truncate_chars(text, limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_labels_and_glyphs() {
        assert_eq!(Verdict::SearchError.label(), "Search Error");
        assert_eq!(Verdict::Verified.glyph(), "✅");
        assert_eq!(Verdict::SearchError.glyph(), "🔸");
    }

    #[test]
    fn verdict_wire_names_match_the_model_contract() {
        let v: Verdict = serde_json::from_str(r#""Verified""#).unwrap();
        assert_eq!(v, Verdict::Verified);
        assert!(serde_json::from_str::<Verdict>(r#""Mostly True""#).is_err());
    }

    #[test]
    fn truncate_chars_respects_multibyte_boundaries() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("short", 100), "short");
    }

    #[test]
    fn preview_appends_ellipsis_only_when_truncating() {
        assert_eq!(preview("tiny", 50), "tiny");
        let long = "x".repeat(60);
        assert_eq!(preview(&long, 50).len(), 53);
    }
}
