use crate::traits::{LlmClient, LlmResponse};
use async_trait::async_trait;
use claimlens_common::{ClaimlensError, Result};
use claimlens_http::{HttpClient, HttpError, RequestOpts};
use serde::{Deserialize, Serialize};

const OPENAI_API_BASE: &str = "https://api.openai.com/v1/";

pub struct OpenAiClient {
    client: HttpClient,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
struct ResponsesApiRequest {
    model: String,
    input: String,
    instructions: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsesApiResponse {
    pub id: String,
    pub status: String,
    pub model: String,
    #[serde(default)]
    pub output: Vec<ResponseMessage>,
    #[serde(default)]
    pub usage: Option<ResponseUsage>,
}

/// One element in the `output` array
#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub content: Vec<ResponseContent>,
}

/// One part of the message `content`
#[derive(Debug, Deserialize)]
pub struct ResponseContent {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct ResponseUsage {
    #[serde(default)]
    pub total_tokens: Option<u32>,
}

impl OpenAiClient {
    /// Create a new client for the given API key and model against the
    /// public OpenAI endpoint.
    pub fn new(api_key: String, model: String) -> Result<Self> {
        Self::with_base_url(api_key, model, OPENAI_API_BASE)
    }

    /// Create a client against an alternative base URL (gateways,
    /// OpenAI-compatible endpoints, test servers).
    pub fn with_base_url(api_key: String, model: String, base_url: &str) -> Result<Self> {
        let client = HttpClient::new(base_url)
            .map_err(|e| ClaimlensError::Model(format!("HttpClient init failed: {e}")))?;
        Ok(Self {
            client,
            api_key,
            model,
        })
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn generate(
        &self,
        prompt: &str,
        system_prompt: Option<&str>,
        max_tokens: Option<u32>,
        temperature: Option<f32>,
    ) -> Result<LlmResponse> {
        let instructions = match system_prompt {
            Some(s) => s.to_string(),
            None => "You are an objective, unbiased researcher.".to_string(),
        };

        let req = ResponsesApiRequest {
            model: self.model.clone(),
            input: prompt.to_string(),
            instructions,
            max_output_tokens: max_tokens,
            temperature,
        };

        let resp: ResponsesApiResponse = self
            .client
            .post_json(
                "responses",
                &req,
                RequestOpts {
                    bearer: Some(&self.api_key),
                    // one attempt per call; the pipeline never retries
                    retries: Some(0),
                    ..Default::default()
                },
            )
            .await
            .map_err(http_to_model_error)?;

        tracing::debug!(
            response_id = %resp.id,
            status = %resp.status,
            model = %resp.model,
            "openai.responses.completed"
        );

        let text = resp
            .output
            .iter()
            .flat_map(|msg| &msg.content)
            .find(|c| c.kind == "output_text")
            .map(|c| c.text.clone())
            .unwrap_or_default();

        Ok(LlmResponse {
            text,
            model: Some(resp.model),
            tokens_used: resp.usage.and_then(|u| u.total_tokens),
        })
    }

    async fn health_check(&self) -> Result<bool> {
        // Cheapest probe the Responses API offers: a minimal generation.
        let test_prompt = "Respond with just 'OK'";
        match self.generate(test_prompt, None, Some(5), Some(0.1)).await {
            Ok(_) => Ok(true),
            Err(e) => {
                tracing::warn!("OpenAI health check failed: {}", e);
                Ok(false)
            }
        }
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

fn http_to_model_error(e: HttpError) -> ClaimlensError {
    ClaimlensError::Model(format!("{e}"))
}
