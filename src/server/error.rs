use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum RootValueError {
    #[error("Failed to read root value from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Root value in {path} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Root value source failed: {0}")]
    Source(String),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Root context read outside of the root provider")]
    MissingRootContext,
    #[error(transparent)]
    RootValue(#[from] RootValueError),
    #[error("Failed to render template: {0}")]
    Render(#[from] askama::Error),
    #[error("Not Found")]
    NotFound,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::MissingRootContext | AppError::RootValue(_) | AppError::Render(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!("{}", self);
            (status, "Internal Server Error").into_response()
        } else {
            (status, self.to_string()).into_response()
        }
    }
}
