//! Aggregation of per-claim results into a run report.

use crate::types::{Verdict, VerificationResult};
use serde::{Deserialize, Serialize};

/// Characters of extracted text kept as the report preview.
pub const PREVIEW_LIMIT: usize = 600;

/// Verdict occurrence counts in first-encounter order.
///
/// No canonical ordering is imposed: the tally iterates in the order verdicts
/// were first seen, mirroring the order of the results themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    counts: Vec<(Verdict, usize)>,
}

impl Summary {
    pub fn tally(results: &[VerificationResult]) -> Self {
        let mut counts: Vec<(Verdict, usize)> = Vec::new();
        for result in results {
            match counts.iter_mut().find(|(v, _)| *v == result.verdict) {
                Some((_, n)) => *n += 1,
                None => counts.push((result.verdict, 1)),
            }
        }
        Self { counts }
    }

    pub fn counts(&self) -> &[(Verdict, usize)] {
        &self.counts
    }

    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, n)| n).sum()
    }
}

/// Everything the renderer needs for one completed run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Leading slice of the extracted text.
    pub text_preview: String,
    pub results: Vec<VerificationResult>,
    pub summary: Summary,
}

impl Report {
    pub fn new(extracted_text: &str, results: Vec<VerificationResult>) -> Self {
        let summary = Summary::tally(&results);
        Self {
            text_preview: crate::types::preview(extracted_text, PREVIEW_LIMIT),
            results,
            summary,
        }
    }

    pub fn claim_count(&self) -> usize {
        self.results.len()
    }
}
