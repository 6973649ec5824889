//! Web evidence discovery for claim verification.
//!
//! - Tavily Search API client (`tavily`) for evidence gathering
//! - [`SearchClient`]: the seam the pipeline consumes, so tests can inject
//!   fakes without network access

pub mod tavily;

use async_trait::async_trait;
use claimlens_common::Result;

pub use tavily::{EvidenceHit, TavilyApi};

/// A web-search backend that returns ranked evidence hits for a query.
#[async_trait]
pub trait SearchClient: Send + Sync {
    /// Run one search, returning at most `max_results` hits.
    async fn search(&self, query: &str, max_results: u32) -> Result<Vec<EvidenceHit>>;
}
