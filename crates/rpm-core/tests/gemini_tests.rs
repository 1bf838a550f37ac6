//! Gemini HTTP client against a mock server.

use rpm_core::{GeminiProvider, ProviderConfig, ProviderError, TextProvider};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GENERATE_PATH: &str = "/models/gemini-3-pro-preview:generateContent";

fn provider_for(server: &MockServer) -> GeminiProvider {
    let config = ProviderConfig {
        api_key: Some("test-key".to_string()),
        base_url: server.uri(),
        ..ProviderConfig::default()
    };
    GeminiProvider::from_config(&config).expect("Failed to create provider")
}

#[tokio::test]
async fn test_generate_sends_prompt_and_key() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_json(json!({"contents": [{"parts": [{"text": "Halo"}]}]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "# RPM"}, {"text": "\nIsi"}]},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"totalTokenCount": 12}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let text = provider_for(&server).generate("Halo").await.unwrap();

    assert_eq!(text.as_deref(), Some("# RPM\nIsi"));
}

#[tokio::test]
async fn test_blocked_response_has_no_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "promptFeedback": {"blockReason": "SAFETY"}
        })))
        .mount(&server)
        .await;

    let text = provider_for(&server).generate("Halo").await.unwrap();

    assert_eq!(text, None);
}

#[tokio::test]
async fn test_error_status_is_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(
            ResponseTemplate::new(500).set_body_string(r#"{"error":{"message":"internal"}}"#),
        )
        .mount(&server)
        .await;

    let result = provider_for(&server).generate("Halo").await;

    match result {
        Err(ProviderError::Api { status, message }) => {
            assert_eq!(status, 500);
            assert!(message.contains("internal"));
        }
        other => panic!("expected an API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let result = provider_for(&server).generate("Halo").await;

    assert!(matches!(result, Err(ProviderError::InvalidResponse(_))));
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    // reserve a free port, then release it so nothing is listening there
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    let config = ProviderConfig {
        api_key: Some("test-key".to_string()),
        base_url: format!("http://127.0.0.1:{port}"),
        ..ProviderConfig::default()
    };
    let provider = GeminiProvider::from_config(&config).unwrap();

    let result = provider.generate("Halo").await;

    assert!(matches!(result, Err(ProviderError::Transport(_))));
}
