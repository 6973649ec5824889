//! Tavily Search API integration.
//!
//! Submodules provide the HTTP client wrapper and the typed request/response
//! models, plus the conversion into provider-neutral [`EvidenceHit`]s.
pub mod client;
pub mod types;

pub use client::TavilyApi;
pub use types::EvidenceHit;
