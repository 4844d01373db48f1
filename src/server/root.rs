//! Root provider: computes the distributed value once per request and hands it
//! to handlers as an explicit [`RootContext`].

use std::{fs, ops::Deref, path::Path, sync::Arc};

use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::{request::Parts, Extensions},
    middleware::Next,
    response::Response,
};
use serde_json::Value;
use tracing::{debug, info};

use super::config::AppState;
use super::error::{AppError, RootValueError};

/// The server-computed payload distributed to views for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct RootValue(Arc<Value>);

impl RootValue {
    pub fn new(value: Value) -> Self {
        Self(Arc::new(value))
    }
}

impl Deref for RootValue {
    type Target = Value;

    fn deref(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for RootValue {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

/// Read-only provider scope. Only [`provide_root_value`] creates one for a
/// request.
#[derive(Debug, Clone)]
pub struct RootContext {
    value: RootValue,
}

impl RootContext {
    pub fn new(value: impl Into<RootValue>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn from_extensions(extensions: &Extensions) -> Result<Self, AppError> {
        extensions
            .get::<RootContext>()
            .cloned()
            .ok_or(AppError::MissingRootContext)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for RootContext
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Self::from_extensions(&parts.extensions)
    }
}

/// Computes the distributed value for a request.
pub trait RootValueSource: Send + Sync + 'static {
    fn load(&self, request: &Parts) -> Result<Value, RootValueError>;
}

impl<F> RootValueSource for F
where
    F: Fn(&Parts) -> Result<Value, RootValueError> + Send + Sync + 'static,
{
    fn load(&self, request: &Parts) -> Result<Value, RootValueError> {
        self(request)
    }
}

/// Serves the same value to every request.
#[derive(Debug, Clone)]
pub struct StaticRootValue {
    value: Value,
}

impl StaticRootValue {
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    pub fn from_file(path: &Path) -> Result<Self, RootValueError> {
        let raw = fs::read_to_string(path).map_err(|source| RootValueError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let value = serde_json::from_str(&raw).map_err(|source| RootValueError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Loaded root value from {}", path.display());
        Ok(Self { value })
    }

    /// `null` when no file is configured.
    pub fn from_settings(file: Option<&Path>) -> Result<Self, RootValueError> {
        match file {
            Some(path) => Self::from_file(path),
            None => Ok(Self::new(Value::Null)),
        }
    }
}

impl RootValueSource for StaticRootValue {
    fn load(&self, _request: &Parts) -> Result<Value, RootValueError> {
        Ok(self.value.clone())
    }
}

pub async fn provide_root_value(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = request.into_parts();
    let value = state.root_source.load(&parts)?;
    debug!("Providing root value for {}", parts.uri.path());
    parts.extensions.insert(RootContext::new(value));
    Ok(next.run(Request::from_parts(parts, body)).await)
}
