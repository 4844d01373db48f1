use std::path::Path;
use std::sync::Arc;

use axum::{
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::get,
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;

use super::error::RootValueError;
use super::root::{provide_root_value, RootValueSource, StaticRootValue};
use crate::configuration::{DocumentSettings, Settings};
use crate::routes;

#[derive(Clone)]
pub struct AppState {
    pub document: Arc<DocumentSettings>,
    pub root_source: Arc<dyn RootValueSource>,
}

impl AppState {
    pub fn new(document: DocumentSettings, root_source: impl RootValueSource) -> Self {
        Self {
            document: Arc::new(document),
            root_source: Arc::new(root_source),
        }
    }
}

pub fn configure_app(settings: &Settings) -> Result<Router, RootValueError> {
    let source = StaticRootValue::from_settings(settings.root_value.file.as_deref())?;
    let state = AppState::new(settings.document.clone(), source);
    Ok(app_router(state, &settings.application.static_dir))
}

async fn log_request(request: Request, next: Next) -> Response {
    info!("{} {}", request.method(), request.uri().path());
    next.run(request).await
}

pub fn app_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/root-value.json", get(routes::root_value))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            provide_root_value,
        ))
        .route("/health", get(routes::health_check))
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(routes::not_found)
        .layer(middleware::from_fn(log_request))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
