#![allow(dead_code)]

use std::path::Path;

use axum_test::TestServer;
use rootview::configuration::DocumentSettings;
use rootview::server::{app_router, AppState, RootValueSource, StaticRootValue};
use serde_json::Value;

pub fn spawn_app_with_source(source: impl RootValueSource) -> TestServer {
    let state = AppState::new(DocumentSettings::default(), source);
    let app = app_router(state, Path::new("static"));
    TestServer::new(app.into_make_service()).expect("Failed to start test server")
}

pub fn spawn_app(value: Value) -> TestServer {
    spawn_app_with_source(StaticRootValue::new(value))
}

/// Undoes the HTML text escaping applied by the templates.
pub fn unescape(html: &str) -> String {
    html.replace("&quot;", "\"")
        .replace("&#x27;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

/// The text content of the index view's block element.
pub fn view_text(html: &str) -> String {
    let open = r#"<div class="whitespace-pre">"#;
    let start = html.find(open).expect("index view missing") + open.len();
    let end = start + html[start..].find("</div>").expect("unterminated view");
    unescape(&html[start..end])
}
