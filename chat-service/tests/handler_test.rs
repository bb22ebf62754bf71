//! Integration tests for the chat handler.
//!
//! These drive `ChatHandler::handle` with gateway requests and the mock text
//! provider, so no AWS credentials or network access are needed.
//! Run with: cargo test -p chat-service --test handler_test

use chat_service::handler::{ChatHandler, FALLBACK_REPLY};
use chat_service::services::providers::mock::MockTextProvider;
use chat_service::services::providers::GenerationParams;
use lambda_http::http::{Method, StatusCode};
use lambda_http::{Body, Request, Response};
use serde_json::{json, Value};
use std::sync::Arc;

fn request(method: Method, body: Body) -> Request {
    lambda_http::http::Request::builder()
        .method(method)
        .uri("https://example.execute-api.us-east-1.amazonaws.com/prod/chat")
        .body(body)
        .expect("Failed to build request")
}

fn post(body: Value) -> Request {
    request(Method::POST, Body::from(body.to_string()))
}

fn body_json(response: &Response<Body>) -> Value {
    serde_json::from_slice(response.body().as_ref()).expect("Response body is not JSON")
}

fn assert_cors_headers(response: &Response<Body>) {
    let headers = response.headers();
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(headers["access-control-allow-headers"], "*");
    assert_eq!(headers["access-control-allow-methods"], "OPTIONS,POST,GET");
}

#[tokio::test]
async fn preflight_returns_ok_without_calling_model() {
    let provider = Arc::new(MockTextProvider::replying("unused"));
    let handler = ChatHandler::new(provider.clone());

    for body in [Body::Empty, Body::from("{not json"), Body::from(r#"{"message":"hi"}"#)] {
        let response = handler.handle(request(Method::OPTIONS, body)).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(&response), json!("Preflight OK"));
        assert!(response.headers().get("content-type").is_none());
        assert_cors_headers(&response);
    }

    assert!(provider.calls().is_empty());
}

#[tokio::test]
async fn empty_history_builds_single_turn_prompt() {
    let provider = Arc::new(MockTextProvider::replying("hi there"));
    let handler = ChatHandler::new(provider.clone());

    let response = handler.handle(post(json!({ "message": "hello" }))).await;

    assert_eq!(response.status(), StatusCode::OK);
    let calls = provider.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].prompt, "User: hello\nAssistant:");
}

#[tokio::test]
async fn history_is_folded_into_prompt() {
    let provider = Arc::new(MockTextProvider::replying("d"));
    let handler = ChatHandler::new(provider.clone());

    let response = handler
        .handle(post(json!({
            "message": "c",
            "history": [{ "user": "a", "assistant": "b" }]
        })))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        provider.calls()[0].prompt,
        "User: a\nAssistant: b\nUser: c\nAssistant:"
    );
}

#[tokio::test]
async fn model_receives_fixed_generation_params() {
    let provider = Arc::new(MockTextProvider::replying("ok"));
    let handler = ChatHandler::new(provider.clone());

    handler.handle(post(json!({ "message": "hello" }))).await;

    let params = &provider.calls()[0].params;
    assert_eq!(params, &GenerationParams::default());
    assert_eq!(params.max_tokens, 300);
    assert!(params.stop_sequences.is_empty());
}

#[tokio::test]
async fn missing_fields_default_to_empty() {
    let provider = Arc::new(MockTextProvider::replying("ok"));
    let handler = ChatHandler::new(provider.clone());

    let response = handler.handle(post(json!({}))).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(provider.calls()[0].prompt, "User: \nAssistant:");
}

#[tokio::test]
async fn first_candidate_becomes_reply() {
    let handler = ChatHandler::new(Arc::new(MockTextProvider::replying("hello")));

    let response = handler.handle(post(json!({ "message": "hi" }))).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-type"], "application/json");
    assert_eq!(body_json(&response), json!({ "response": "hello" }));
    assert_cors_headers(&response);
}

#[tokio::test]
async fn only_first_of_many_candidates_is_used() {
    let handler = ChatHandler::new(Arc::new(MockTextProvider::new(
        chat_service::services::providers::mock::MockOutcome::Candidates(vec![
            "first".to_string(),
            "second".to_string(),
        ]),
    )));

    let response = handler.handle(post(json!({ "message": "hi" }))).await;

    assert_eq!(body_json(&response), json!({ "response": "first" }));
}

#[tokio::test]
async fn empty_result_uses_fallback_reply() {
    let handler = ChatHandler::new(Arc::new(MockTextProvider::empty()));

    let response = handler.handle(post(json!({ "message": "hi" }))).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(&response),
        json!({ "response": "Sorry, I couldn't generate a response." })
    );
    assert_eq!(FALLBACK_REPLY, "Sorry, I couldn't generate a response.");
    assert_cors_headers(&response);
}

#[tokio::test]
async fn invalid_json_returns_500_with_error() {
    let provider = Arc::new(MockTextProvider::replying("unused"));
    let handler = ChatHandler::new(provider.clone());

    let response = handler
        .handle(request(Method::POST, Body::from("{not json")))
        .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.headers()["content-type"], "application/json");
    let body = body_json(&response);
    let error = body["error"].as_str().expect("error should be a string");
    assert!(error.starts_with("Invalid request body: "));
    assert_eq!(body.as_object().map(|o| o.len()), Some(1));
    assert_cors_headers(&response);
    assert!(provider.calls().is_empty());
}

#[tokio::test]
async fn missing_body_returns_500() {
    let handler = ChatHandler::new(Arc::new(MockTextProvider::replying("unused")));

    let response = handler.handle(request(Method::GET, Body::Empty)).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_json(&response)["error"].is_string());
    assert_cors_headers(&response);
}

#[tokio::test]
async fn turn_missing_field_returns_500() {
    let provider = Arc::new(MockTextProvider::replying("unused"));
    let handler = ChatHandler::new(provider.clone());

    let response = handler
        .handle(post(json!({
            "message": "c",
            "history": [{ "user": "a" }]
        })))
        .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(&response);
    assert!(body["error"]
        .as_str()
        .is_some_and(|e| e.contains("missing field `assistant`")));
    assert!(provider.calls().is_empty());
}

#[tokio::test]
async fn model_failure_returns_500_with_message() {
    let handler = ChatHandler::new(Arc::new(MockTextProvider::failing(
        "ThrottlingException: Too many requests, please wait before trying again.",
    )));

    let response = handler.handle(post(json!({ "message": "hi" }))).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(&response),
        json!({
            "error": "Model invocation failed: ThrottlingException: Too many requests, please wait before trying again."
        })
    );
    assert_cors_headers(&response);
}

#[tokio::test]
async fn binary_body_is_accepted() {
    let provider = Arc::new(MockTextProvider::replying("ok"));
    let handler = ChatHandler::new(provider.clone());

    let body = Body::Binary(json!({ "message": "bytes" }).to_string().into_bytes());
    let response = handler.handle(request(Method::POST, body)).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(provider.calls()[0].prompt, "User: bytes\nAssistant:");
}
