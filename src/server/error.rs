use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use super::wire::ErrorBody;
use crate::logic::path::SandboxViolation;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Invalid path: {0}")]
    PathTraversalRejected(#[from] SandboxViolation),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

impl ServerError {
    /// Map an I/O error, turning "no such file" into a 404 with `not_found` as message
    pub fn from_io(err: std::io::Error, not_found: &str) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            ServerError::NotFound(not_found.to_string())
        } else {
            ServerError::Io(err)
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::BadRequest(_) | ServerError::PathTraversalRejected(_) => {
                StatusCode::BAD_REQUEST
            }
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
            ServerError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }
        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}
