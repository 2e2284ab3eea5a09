use axum::{
    extract::rejection::PathRejection,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::content_type::PLAIN_TEXT;
use crate::resolve::Rejected;

#[derive(Error, Debug)]
pub enum FileServerError {
    #[error("Forbidden: {0}")]
    Forbidden(#[from] Rejected),

    #[error("Not found")]
    NotFound,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Blocking task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),

    #[error("Undecodable request path: {0}")]
    BadPath(#[from] PathRejection),
}

impl FileServerError {
    /// Classify a failed stat or open of a resolved path. Missing entries
    /// (including a file used as a directory) are 404, anything else is 500.
    pub fn from_lookup(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound | std::io::ErrorKind::NotADirectory => {
                FileServerError::NotFound
            }
            _ => FileServerError::Io(err),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            FileServerError::Forbidden(_) => StatusCode::FORBIDDEN,
            FileServerError::NotFound => StatusCode::NOT_FOUND,
            FileServerError::Io(_)
            | FileServerError::TaskFailed(_)
            | FileServerError::BadPath(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for FileServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        // Bodies are fixed strings; details stay in the server log
        let body = match &self {
            FileServerError::Forbidden(_) => "Forbidden",
            FileServerError::NotFound => "Not found",
            FileServerError::Io(_)
            | FileServerError::TaskFailed(_)
            | FileServerError::BadPath(_) => {
                error!("Request failed: {}", self);
                "Server error"
            }
        };

        (status, [(header::CONTENT_TYPE, PLAIN_TEXT)], body).into_response()
    }
}
