use super::types::{EvidenceHit, SearchApiResponse, SearchRequest, collect_hits};
use crate::SearchClient;
use async_trait::async_trait;
use claimlens_common::{ClaimlensError, Result};
use claimlens_http::{HttpClient, RequestOpts};
use std::time::Instant;

const TAVILY_API_BASE: &str = "https://api.tavily.com";

/// Minimal client for the Tavily Search API.
#[derive(Clone)]
pub struct TavilyApi {
    http: HttpClient,
    api_key: String,
}

impl TavilyApi {
    pub fn new(api_key: String) -> Result<Self> {
        Self::with_base_url(api_key, TAVILY_API_BASE)
    }

    /// Point the client at an alternative endpoint (test servers, proxies).
    pub fn with_base_url(api_key: String, base_url: &str) -> Result<Self> {
        let http = HttpClient::new(base_url)
            .map_err(|e| ClaimlensError::Search(format!("HttpClient init failed: {e}")))?;
        Ok(Self { http, api_key })
    }

    /// Single search call returning the raw API response.
    pub async fn raw_search(&self, query: &str, max_results: u32) -> Result<SearchApiResponse> {
        let req = SearchRequest {
            api_key: &self.api_key,
            query,
            max_results,
            search_depth: None,
        };

        let query_snippet = if query.len() > 160 {
            format!("{}…", truncate_on_char_boundary(query, 160))
        } else {
            query.to_string()
        };
        let started = Instant::now();
        tracing::info!(
            target: "search.tavily",
            query = %query_snippet,
            max_results,
            "tavily.search.start"
        );

        let resp: SearchApiResponse = match self
            .http
            .post_json(
                "search",
                &req,
                RequestOpts {
                    // one attempt per search; a miss becomes a SearchError verdict
                    retries: Some(0),
                    ..Default::default()
                },
            )
            .await
        {
            Ok(resp) => {
                tracing::info!(
                    target: "search.tavily",
                    query = %query_snippet,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "tavily.search.success"
                );
                resp
            }
            Err(e) => {
                tracing::warn!(
                    target: "search.tavily",
                    query = %query_snippet,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    error = %e,
                    "tavily.search.error"
                );
                return Err(ClaimlensError::Search(e.to_string()));
            }
        };

        tracing::debug!(
            target: "search.tavily",
            result_count = resp.results.len(),
            response_time = ?resp.response_time,
            "tavily.search.page"
        );
        Ok(resp)
    }
}

#[async_trait]
impl SearchClient for TavilyApi {
    async fn search(&self, query: &str, max_results: u32) -> Result<Vec<EvidenceHit>> {
        let resp = self.raw_search(query, max_results).await?;
        Ok(collect_hits(&resp, max_results))
    }
}

fn truncate_on_char_boundary(s: &str, limit: usize) -> &str {
    let mut end = limit.min(s.len());
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
