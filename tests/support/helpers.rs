// tests/support/helpers.rs
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header::AUTHORIZATION, header::CONTENT_TYPE};
use axum::response::Response;
use serde_json::Value;

pub const FORM: &str = "application/x-www-form-urlencoded";

pub fn form_request(method: Method, uri: &str, form: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, FORM)
        .body(Body::from(form.to_owned()))
        .unwrap()
}

pub fn bearer_request(method: Method, uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_bytes(resp: Response) -> (StatusCode, Vec<u8>) {
    let status = resp.status();
    let (parts, body_stream) = resp.into_parts();
    let bytes = body::to_bytes(body_stream, 1024 * 1024).await.expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    (status, bytes.to_vec())
}

pub async fn read_json(resp: Response) -> (StatusCode, Value) {
    let (status, bytes) = body_bytes(resp).await;
    let json: Value = serde_json::from_slice(&bytes).expect("expected valid json body");
    (status, json)
}

/// Assert that a response is an error envelope with the expected status and
/// wire code. Returns the envelope for further checks.
pub async fn assert_error_response(
    resp: Response,
    expected_status: StatusCode,
    expected_error: &str,
) -> Value {
    let (status, json) = read_json(resp).await;
    assert_eq!(status, expected_status, "unexpected status, body: {json}");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    json
}
