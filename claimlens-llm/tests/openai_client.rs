mod common;

use claimlens_llm::openai::OpenAiClient;
use claimlens_llm::traits::LlmClient;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn responses_body(text: &str) -> serde_json::Value {
    json!({
        "id": "resp_test",
        "status": "completed",
        "model": "gpt-4o-mini",
        "output": [
            {
                "type": "message",
                "content": [
                    { "type": "output_text", "text": text }
                ]
            }
        ],
        "usage": { "total_tokens": 42 }
    })
}

#[tokio::test]
async fn generate_returns_output_text() {
    common::init_test_tracing();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/responses"))
        .and(header("authorization", "Bearer sk-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(responses_body("hello there")))
        .expect(1)
        .mount(&server)
        .await;

    let client = OpenAiClient::with_base_url("sk-test".into(), "gpt-4o-mini".into(), &server.uri())
        .expect("client should build");

    let resp = client
        .generate("Say hello", None, Some(16), Some(0.0))
        .await
        .expect("generate should succeed");

    assert_eq!(resp.text, "hello there");
    assert_eq!(resp.model.as_deref(), Some("gpt-4o-mini"));
    assert_eq!(resp.tokens_used, Some(42));
}

#[tokio::test]
async fn generate_surfaces_api_errors() {
    common::init_test_tracing();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/responses"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": { "message": "invalid api key" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = OpenAiClient::with_base_url("sk-bad".into(), "gpt-4o-mini".into(), &server.uri())
        .expect("client should build");

    let err = client
        .generate("Say hello", None, None, None)
        .await
        .expect_err("generate should fail");

    assert!(err.to_string().contains("invalid api key"));
}

#[tokio::test]
async fn generate_tolerates_missing_output_text() {
    common::init_test_tracing();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/responses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "resp_empty",
            "status": "completed",
            "model": "gpt-4o-mini",
            "output": []
        })))
        .mount(&server)
        .await;

    let client = OpenAiClient::with_base_url("sk-test".into(), "gpt-4o-mini".into(), &server.uri())
        .expect("client should build");

    let resp = client
        .generate("Say hello", None, None, None)
        .await
        .expect("generate should succeed");

    assert!(resp.text.is_empty());
}
