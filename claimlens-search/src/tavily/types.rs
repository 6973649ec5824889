use serde::{Deserialize, Serialize};
use url::Url;

/// Request body for the Tavily `/search` endpoint.
///
/// The API key travels in the body, so this type deliberately has no `Debug`
/// derive; nothing here should end up in logs.
#[derive(Clone, Serialize)]
pub struct SearchRequest<'a> {
    pub api_key: &'a str,
    pub query: &'a str,
    pub max_results: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_depth: Option<&'static str>, // "basic" | "advanced"
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchApiResponse {
    #[serde(default)]
    pub query: Option<String>,

    /// Synthesised answer, present when `include_answer` is requested.
    #[serde(default)]
    pub answer: Option<String>,

    #[serde(default)]
    pub results: Vec<SearchResultEntry>,

    #[serde(default)]
    pub response_time: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResultEntry {
    pub title: String,
    pub url: String,

    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub raw_content: Option<String>,
}

/// Provider-neutral evidence record handed to the verifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvidenceHit {
    pub rank: u32,
    pub title: String,
    pub url: String,
    pub content: String,
}

/// Flatten a response into hits in display order, skipping entries whose URL
/// does not parse.
pub fn collect_hits(resp: &SearchApiResponse, max_results: u32) -> Vec<EvidenceHit> {
    let mut out = Vec::new();
    for entry in &resp.results {
        if out.len() as u32 >= max_results {
            break;
        }
        if Url::parse(&entry.url).is_err() {
            continue;
        }
        out.push(EvidenceHit {
            rank: (out.len() + 1) as u32,
            title: entry.title.clone(),
            url: entry.url.clone(),
            content: entry.content.clone(),
        });
    }
    out
}
