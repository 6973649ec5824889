//! Plain-terminal rendering of a completed report.

use claimlens_pipeline::types::preview;
use claimlens_pipeline::{Report, VerificationResult};

const CLAIM_HEADING_LIMIT: usize = 80;

pub fn render(report: &Report) {
    println!("EXTRACTED TEXT (PREVIEW)");
    println!("{}", report.text_preview);
    println!();

    println!("Found {} claims", report.claim_count());
    println!();

    for result in &report.results {
        render_result(result);
    }

    println!("SUMMARY");
    for (verdict, count) in report.summary.counts() {
        println!("{} {}: {}", verdict.glyph(), verdict, count);
    }
}

fn render_result(result: &VerificationResult) {
    let heading = preview(&result.claim.text, CLAIM_HEADING_LIMIT);
    match result.claim.category.as_deref() {
        Some(category) => println!("{} [{}] {}", result.verdict.glyph(), category, heading),
        None => println!("{} {}", result.verdict.glyph(), heading),
    }
    println!("   Verdict: {}", result.verdict);
    println!("   Reason: {}", result.reason);
    println!();
}
