//! Scriptable fakes for the model and search seams.

use async_trait::async_trait;
use claimlens_common::{ClaimlensError, Result};
use claimlens_llm::traits::{LlmClient, LlmResponse};
use claimlens_search::{EvidenceHit, SearchClient};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// An [`LlmClient`] that replays scripted responses and counts calls.
pub struct FakeLlm {
    replies: Mutex<VecDeque<Result<String>>>,
    calls: AtomicUsize,
}

impl FakeLlm {
    /// Every call fails, as if the backend were unreachable.
    pub fn failing() -> Self {
        Self::scripted(Vec::new())
    }

    /// Replies are consumed in order; further calls fail.
    pub fn scripted(replies: Vec<Result<String>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LlmClient for FakeLlm {
    async fn generate(
        &self,
        _prompt: &str,
        _system_prompt: Option<&str>,
        _max_tokens: Option<u32>,
        _temperature: Option<f32>,
    ) -> Result<LlmResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.replies.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(LlmResponse {
                text,
                model: Some("fake-model".to_string()),
                tokens_used: None,
            }),
            Some(Err(err)) => Err(err),
            None => Err(ClaimlensError::Model("model backend unreachable".into())),
        }
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(true)
    }

    fn model_name(&self) -> &str {
        "fake-model"
    }
}

/// A [`SearchClient`] that returns fixed hits (or always fails) and counts
/// calls.
pub struct FakeSearch {
    hits: Option<Vec<EvidenceHit>>,
    calls: AtomicUsize,
}

impl FakeSearch {
    pub fn failing() -> Self {
        Self {
            hits: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_hits(hits: Vec<EvidenceHit>) -> Self {
        Self {
            hits: Some(hits),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SearchClient for FakeSearch {
    async fn search(&self, _query: &str, max_results: u32) -> Result<Vec<EvidenceHit>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.hits {
            Some(hits) => Ok(hits.iter().take(max_results as usize).cloned().collect()),
            None => Err(ClaimlensError::Search("search backend unreachable".into())),
        }
    }
}

pub fn evidence(rank: u32, title: &str, content: &str) -> EvidenceHit {
    EvidenceHit {
        rank,
        title: title.to_string(),
        url: format!("https://example.com/{rank}"),
        content: content.to_string(),
    }
}
