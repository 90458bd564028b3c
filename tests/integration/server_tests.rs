/*!
 * HTTP tests against the router served on a local socket
 */

use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use note_english::providers::mock::MockProvider;
use note_english::server;

use crate::common::{mock_providers, service_with};

const ORIGIN: &str = "http://localhost:5173";

/// Serve a router backed by `mock` and return its base URL
async fn spawn_server(mock: &MockProvider) -> String {
    let service = Arc::new(service_with(mock));
    let app = server::router(service, ORIGIN).unwrap();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(server::serve(listener, app));

    format!("http://{}", addr)
}

#[tokio::test]
async fn test_health_withGet_shouldReturnOk() {
    let base = spawn_server(&MockProvider::failing()).await;

    let response = reqwest::get(format!("{}/api/health", base)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.json::<Value>().await.unwrap(), json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_translate_withText_shouldReturnSentencePairs() {
    let mock = MockProvider::echo_translations();
    let base = spawn_server(&mock).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/translate", base))
        .json(&json!({ "text": "I like apples. She reads books." }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    let sentences = body["sentences"].as_array().unwrap();
    assert_eq!(sentences.len(), 2);
    assert_eq!(sentences[0]["id"], 0);
    assert_eq!(sentences[0]["original"], "I like apples.");
    assert_eq!(sentences[1]["translation"], "[1] She reads books.");
    assert!(sentences[0]["vocab"]
        .as_array()
        .unwrap()
        .iter()
        .any(|v| v["lemma"] == "apple" && v["pos"] == "NOUN" && v["text"] == "apples"));
}

#[tokio::test]
async fn test_translate_withUnknownMode_shouldRejectBody() {
    let mock = MockProvider::echo_translations();
    let base = spawn_server(&mock).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/translate", base))
        .json(&json!({ "text": "Hello.", "mode": "poetic" }))
        .send()
        .await
        .unwrap();

    assert!(response.status().is_client_error());
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_translate_withProviderFailure_shouldReturnBadGateway() {
    let base = spawn_server(&MockProvider::failing()).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/translate", base))
        .json(&json!({ "text": "Hello." }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body: Value = response.json().await.unwrap();
    assert!(body["detail"].as_str().unwrap().contains("LLM request failed"));
}

#[tokio::test]
async fn test_vocab_detail_withTranslationOnly_shouldOmitOtherFields() {
    let mock = mock_providers::dictionary("跑", "To move fast.", "I run.", "A1");
    let base = spawn_server(&mock).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/vocab/detail", base))
        .json(&json!({
            "lemma": "Run",
            "pos": "VERB",
            "options": { "translation": true, "definition": false, "pos": true, "example": false, "level": false }
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "lemma": "Run", "pos": "VERB", "translation": "跑" }));
}

#[tokio::test]
async fn test_vocab_detail_withEmptyPos_shouldReturnBadRequest() {
    let base = spawn_server(&MockProvider::failing()).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/vocab/detail", base))
        .json(&json!({ "lemma": "run", "pos": "", "options": { "translation": true } }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert!(body["detail"].as_str().unwrap().contains("pos"));
}

#[tokio::test]
async fn test_vocab_detail_withMalformedFill_shouldReturnPreview() {
    let base = spawn_server(&MockProvider::responding("definitely not json")).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/vocab/detail", base))
        .json(&json!({ "lemma": "run", "pos": "VERB", "options": { "definition": true } }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body: Value = response.json().await.unwrap();
    assert!(body["detail"]
        .as_str()
        .unwrap()
        .ends_with("Output preview: definitely not json"));
}

#[tokio::test]
async fn test_debug_split_withText_shouldReturnCount() {
    let base = spawn_server(&MockProvider::failing()).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/debug/split", base))
        .json(&json!({ "text": "One. Two! Three?" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>().await.unwrap(),
        json!({ "count": 3, "sentences": ["One.", "Two!", "Three?"] })
    );
}

#[tokio::test]
async fn test_cors_preflight_withFrontendOrigin_shouldAllowCredentials() {
    let base = spawn_server(&MockProvider::failing()).await;

    let response = reqwest::Client::new()
        .request(reqwest::Method::OPTIONS, format!("{}/api/translate", base))
        .header("Origin", ORIGIN)
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .send()
        .await
        .unwrap();

    assert!(response.status().is_success());
    let headers = response.headers();
    assert_eq!(headers["access-control-allow-origin"], ORIGIN);
    assert_eq!(headers["access-control-allow-credentials"], "true");
}

#[tokio::test]
async fn test_cors_preflight_withOtherOrigin_shouldNotAllow() {
    let base = spawn_server(&MockProvider::failing()).await;

    let response = reqwest::Client::new()
        .request(reqwest::Method::OPTIONS, format!("{}/api/translate", base))
        .header("Origin", "https://evil.example.com")
        .header("Access-Control-Request-Method", "POST")
        .send()
        .await
        .unwrap();

    assert!(response.headers().get("access-control-allow-origin").is_none());
}

#[tokio::test]
async fn test_routes_withoutApiPrefix_shouldNotExist() {
    let base = spawn_server(&MockProvider::failing()).await;
    let response = reqwest::get(format!("{}/health", base)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
