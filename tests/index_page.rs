mod common;

use axum::{
    http::{HeaderName, HeaderValue},
    routing::get,
    Router,
};
use axum_test::TestServer;
use rootview::configuration::DocumentSettings;
use rootview::routes;
use rootview::server::{AppState, RootValueError, StaticRootValue};
use serde_json::{json, Value};

#[tokio::test]
async fn index_renders_object_with_two_space_indent() {
    let server = common::spawn_app(json!({"user": "a"}));

    let response = server.get("/").await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(common::view_text(&response.text()), "{\n  \"user\": \"a\"\n}");
}

#[tokio::test]
async fn index_renders_null_literally() {
    let server = common::spawn_app(Value::Null);

    let response = server.get("/").await;

    assert_eq!(common::view_text(&response.text()), "null");
}

#[tokio::test]
async fn index_renders_arrays_one_element_per_line() {
    let server = common::spawn_app(json!([1, 2, 3]));

    let response = server.get("/").await;

    assert_eq!(common::view_text(&response.text()), "[\n  1,\n  2,\n  3\n]");
}

#[tokio::test]
async fn index_is_wrapped_in_the_document_shell() {
    let server = common::spawn_app(json!({"user": "a"}));

    let html = server.get("/").await.text();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Index</title>"));
    assert_eq!(html.matches(r#"<meta charset="utf-8" />"#).count(), 1);
    assert_eq!(html.matches(r#"<meta name="viewport""#).count(), 1);
    assert!(html.contains(r#"type="application/json">{"user":"a"}</script>"#));
}

#[tokio::test]
async fn htmx_requests_get_the_fragment_only() {
    let server = common::spawn_app(json!({"user": "a"}));

    let response = server
        .get("/")
        .add_header(
            HeaderName::from_static("hx-request"),
            HeaderValue::from_static("true"),
        )
        .await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(response.header("hx-title"), "Index");
    let html = response.text();
    assert!(!html.contains("<html"));
    assert_eq!(common::view_text(&html), "{\n  \"user\": \"a\"\n}");
}

#[tokio::test]
async fn root_value_endpoint_returns_the_distributed_value() {
    let server = common::spawn_app(json!({"features": ["a", "b"]}));

    let response = server.get("/root-value.json").await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body, json!({"features": ["a", "b"]}));
}

#[tokio::test]
async fn value_is_computed_per_request() {
    let server = common::spawn_app_with_source(|parts: &axum::http::request::Parts| {
        Ok::<_, RootValueError>(json!({ "query": parts.uri.query() }))
    });

    let first: Value = server.get("/root-value.json?page=1").await.json();
    let second: Value = server.get("/root-value.json").await.json();

    assert_eq!(first, json!({"query": "page=1"}));
    assert_eq!(second, json!({"query": null}));
}

#[tokio::test]
async fn failing_source_yields_server_error() {
    let server = common::spawn_app_with_source(|_: &axum::http::request::Parts| {
        Err::<Value, _>(RootValueError::Source("upstream down".into()))
    });

    let response = server.get("/").await;

    assert_eq!(response.status_code(), 500);
    assert!(!response.text().contains("<html"));
}

#[tokio::test]
async fn index_without_provider_fails_deterministically() {
    let state = AppState::new(DocumentSettings::default(), StaticRootValue::new(json!(1)));
    let app = Router::new()
        .route("/", get(routes::index))
        .route("/root-value.json", get(routes::root_value))
        .with_state(state);
    let server = TestServer::new(app.into_make_service()).unwrap();

    for path in ["/", "/root-value.json"] {
        let response = server.get(path).await;
        assert_eq!(response.status_code(), 500);
        assert_eq!(response.text(), "Internal Server Error");
    }
}
