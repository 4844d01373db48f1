use axum::{
    extract::State,
    http::{header::HeaderMap, HeaderValue},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use crate::document::{Document, MetaTag};
use crate::server::config::AppState;
use crate::server::error::AppError;
use crate::server::root::RootContext;
use crate::views::index::{IndexView, TITLE as INDEX_TITLE};

pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

pub async fn index(
    State(state): State<AppState>,
    ctx: RootContext,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let view = IndexView::new(&ctx).render()?;
    let document = Document::new(&state.document).with_meta([MetaTag::title(INDEX_TITLE)]);

    if headers.contains_key("hx-request") {
        let mut response = Html(view).into_response();
        if let Some(title) = document.title() {
            if let Ok(value) = HeaderValue::from_str(title) {
                response.headers_mut().insert("hx-title", value);
            }
        }
        return Ok(response);
    }

    Ok(Html(document.render(&ctx, &view)?).into_response())
}

pub async fn root_value(ctx: RootContext) -> Json<Value> {
    Json(ctx.value().clone())
}

pub async fn not_found() -> AppError {
    AppError::NotFound
}
