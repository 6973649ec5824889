//! Minimal JSON-over-HTTP client shared by the service integrations.
//!
//! - Base-URL anchored: construct once per service, call with relative paths
//! - Per-request knobs: timeout, retry budget, bearer auth
//! - Retries 429/5xx with exponential backoff and `Retry-After` support
//! - Structured `tracing` events for request start, response, retries, and
//!   final errors; bearer tokens never appear in logs
//!
//! Example (no_run):
//! ```rust
//! # async fn demo() -> Result<(), claimlens_http::HttpError> {
//! let client = claimlens_http::HttpClient::new("https://api.example.com")?;
//! let got: serde_json::Value = client
//!     .post_json("v1/echo", &serde_json::json!({"ping": true}), claimlens_http::RequestOpts::default())
//!     .await?;
//! # Ok(()) }
//! ```

use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::{Client, Method, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;
use tokio::time::sleep;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("invalid URL: {0}")]
    Url(String),
    #[error("request build failed: {0}")]
    Build(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("decode error: {0}, body_snippet: {1}")]
    Decode(String, String),
    #[error("server returned error {status}: {message}, request_id={request_id}")]
    Api {
        status: StatusCode,
        message: String,
        request_id: String,
    },
}

/// Per-request tuning knobs.
///
/// ```
/// use claimlens_http::RequestOpts;
/// use std::time::Duration;
///
/// let opts = RequestOpts {
///     timeout: Some(Duration::from_secs(30)),
///     retries: Some(0),
///     bearer: Some("sk-demo"),
/// };
/// assert_eq!(opts.timeout.unwrap().as_secs(), 30);
/// ```
#[derive(Clone, Debug, Default)]
pub struct RequestOpts<'a> {
    pub timeout: Option<Duration>,
    pub retries: Option<usize>,
    /// Sent as `Authorization: Bearer <token>` after sanitisation.
    pub bearer: Option<&'a str>,
}

#[derive(Clone)]
pub struct HttpClient {
    base: Url,
    inner: Client,
    pub default_timeout: Duration,
    pub max_retries: usize,
}

impl HttpClient {
    /// Construct a client anchored to a base URL.
    ///
    /// ```no_run
    /// use claimlens_http::{HttpClient, HttpError};
    /// use std::time::Duration;
    ///
    /// let client = HttpClient::new("https://api.example.com")?;
    /// assert_eq!(client.default_timeout, Duration::from_secs(15));
    /// assert_eq!(client.max_retries, 2);
    /// # Ok::<(), HttpError>(())
    /// ```
    pub fn new(base: &str) -> Result<Self, HttpError> {
        let base = Url::parse(base).map_err(|e| HttpError::Url(e.to_string()))?;
        let inner = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| HttpError::Build(e.to_string()))?;
        Ok(Self {
            base,
            inner,
            default_timeout: Duration::from_secs(15),
            max_retries: 2,
        })
    }

    /// Override the default timeout returned by [`HttpClient::new`].
    pub fn with_timeout(mut self, dur: Duration) -> Self {
        self.default_timeout = dur;
        self
    }

    /// Override the default retry budget returned by [`HttpClient::new`].
    pub fn with_retries(mut self, n: usize) -> Self {
        self.max_retries = n;
        self
    }

    /// POST a JSON body and decode a JSON response.
    pub async fn post_json<B, T>(
        &self,
        path: &str,
        body: &B,
        opts: RequestOpts<'_>,
    ) -> Result<T, HttpError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self
            .base
            .join(path)
            .map_err(|e| HttpError::Url(e.to_string()))?;

        let bearer = match opts.bearer {
            Some(raw) => Some(sanitize_api_key(raw)?),
            None => None,
        };

        let timeout = opts.timeout.unwrap_or(self.default_timeout);
        let max_retries = opts.retries.unwrap_or(self.max_retries);
        let mut attempt = 0usize;

        loop {
            let mut rb = self
                .inner
                .request(Method::POST, url.clone())
                .timeout(timeout)
                .json(body);
            if let Some(tok) = &bearer {
                rb = rb.bearer_auth(tok);
            }

            tracing::debug!(
                attempt = attempt + 1,
                max_retries,
                host_path = %format!("{}{}", url.domain().unwrap_or("-"), url.path()),
                timeout_ms = timeout.as_millis() as u64,
                auth_kind = if bearer.is_some() { "bearer" } else { "none" },
                "http.request.start"
            );

            let t0 = std::time::Instant::now();
            let resp = match rb.send().await {
                Ok(resp) => resp,
                Err(err) => {
                    let message = err.to_string();
                    if attempt < max_retries {
                        attempt += 1;
                        let delay = backoff_delay(attempt);
                        tracing::warn!(
                            attempt,
                            max_retries,
                            backoff_ms = delay.as_millis() as u64,
                            message = %message,
                            "http.retrying.network"
                        );
                        sleep(delay).await;
                        continue;
                    }
                    tracing::warn!(attempt, max_retries, message = %message, "http.network_error");
                    return Err(HttpError::Network(message));
                }
            };

            let status = resp.status();
            let headers = resp.headers().clone();
            let bytes = match resp.bytes().await {
                Ok(bytes) => bytes,
                Err(err) => {
                    let message = err.to_string();
                    if attempt < max_retries {
                        attempt += 1;
                        let delay = backoff_delay(attempt);
                        tracing::warn!(
                            attempt,
                            max_retries,
                            backoff_ms = delay.as_millis() as u64,
                            message = %message,
                            "http.retrying.body"
                        );
                        sleep(delay).await;
                        continue;
                    }
                    return Err(HttpError::Network(message));
                }
            };

            let request_id = headers
                .get("x-request-id")
                .or_else(|| headers.get("x-correlation-id"))
                .and_then(|v| v.to_str().ok())
                .unwrap_or("-")
                .to_string();
            let snippet = snip_body(&bytes);

            tracing::debug!(
                %status,
                duration_ms = t0.elapsed().as_millis() as u64,
                body_len = bytes.len(),
                x_request_id = %request_id,
                "http.response"
            );

            if status.is_success() {
                return serde_json::from_slice::<T>(&bytes).map_err(|e| {
                    tracing::warn!(
                        serde_err = %e,
                        body_snippet = %snippet,
                        "http.response.decode_error"
                    );
                    HttpError::Decode(e.to_string(), snippet)
                });
            }

            let message = extract_error_message(&bytes);
            let is_retryable = status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error();

            if is_retryable && attempt < max_retries {
                attempt += 1;
                let delay = if let Some(secs) = retry_after_delay_secs(&headers) {
                    Duration::from_secs(secs)
                } else if status == StatusCode::TOO_MANY_REQUESTS {
                    // floor for 429 when no Retry-After is present
                    backoff_delay(attempt).max(Duration::from_millis(1100))
                } else {
                    backoff_delay(attempt)
                };
                tracing::warn!(
                    %status,
                    attempt,
                    max_retries,
                    backoff_ms = delay.as_millis() as u64,
                    message = %message,
                    "http.retrying"
                );
                sleep(delay).await;
                continue;
            }

            tracing::warn!(
                %status,
                message = %message,
                x_request_id = %request_id,
                body_snippet = %snippet,
                "http.error"
            );
            return Err(HttpError::Api {
                status,
                message,
                request_id,
            });
        }
    }
}

fn backoff_delay(attempt: usize) -> Duration {
    Duration::from_millis(200u64.saturating_mul(1 << (attempt - 1)))
}

/// Pull a human-readable message out of a JSON error body.
///
/// Understands the OpenAI envelope (`{"error":{"message":...}}`) and the
/// generic `message`/`detail`/`error` shapes used by most JSON APIs.
fn extract_error_message(body: &[u8]) -> String {
    #[derive(serde::Deserialize)]
    struct OpenAiEnv {
        error: OpenAiDetail,
    }
    #[derive(serde::Deserialize)]
    struct OpenAiDetail {
        message: String,
    }

    #[derive(serde::Deserialize)]
    struct Msg {
        #[serde(default)]
        message: String,
        #[serde(default)]
        detail: String,
        #[serde(default)]
        error: String,
    }

    if let Ok(env) = serde_json::from_slice::<OpenAiEnv>(body) {
        return env.error.message;
    }
    if let Ok(m) = serde_json::from_slice::<Msg>(body) {
        if !m.message.is_empty() {
            return m.message;
        }
        if !m.detail.is_empty() {
            return m.detail;
        }
        if !m.error.is_empty() {
            return m.error;
        }
    }
    snip_body(body)
}

fn retry_after_delay_secs(h: &HeaderMap) -> Option<u64> {
    h.get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())?
        .parse()
        .ok()
}

fn snip_body(body: &[u8]) -> String {
    let mut snip = String::from_utf8_lossy(body).to_string();
    if snip.len() > 500 {
        snip.truncate(500);
        snip.push_str("...");
    }
    snip
}

fn sanitize_api_key(raw: &str) -> Result<String, HttpError> {
    // Trim outer spaces/quotes, then strip all ASCII whitespace. Keys pasted
    // from shells and .env files routinely carry both.
    let mut s = raw
        .trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .to_string();
    s.retain(|ch| !ch.is_ascii_whitespace());

    if !s.is_ascii() {
        return Err(HttpError::Build("API key contains non-ASCII bytes".into()));
    }
    if s.bytes().any(|b| b < 0x20 || b == 0x7F) {
        return Err(HttpError::Build(
            "API key contains control characters".into(),
        ));
    }

    reqwest::header::HeaderValue::from_str(&format!("Bearer {}", s))
        .map_err(|e| HttpError::Build(format!("invalid Authorization header: {e}")))?;
    Ok(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_quotes_and_whitespace() {
        let key = sanitize_api_key(" \"sk-abc\ndef\" ").unwrap();
        assert_eq!(key, "sk-abcdef");
    }

    #[test]
    fn sanitize_rejects_control_characters() {
        assert!(matches!(
            sanitize_api_key("sk-\x01abc"),
            Err(HttpError::Build(_))
        ));
    }

    #[test]
    fn error_message_prefers_openai_envelope() {
        let body = br#"{"error":{"message":"model overloaded"}}"#;
        assert_eq!(extract_error_message(body), "model overloaded");
    }

    #[test]
    fn error_message_falls_back_to_generic_fields() {
        assert_eq!(
            extract_error_message(br#"{"detail":"missing api key"}"#),
            "missing api key"
        );
        assert_eq!(extract_error_message(b"plain text"), "plain text");
    }

    #[test]
    fn long_bodies_are_snipped() {
        let body = vec![b'x'; 600];
        let snip = snip_body(&body);
        assert!(snip.ends_with("..."));
        assert_eq!(snip.len(), 503);
    }
}
