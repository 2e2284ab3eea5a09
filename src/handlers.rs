use std::path::Path as FsPath;

use axum::{
    Json,
    body::Body,
    extract::{Path, State, rejection::PathRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tokio::fs;
use tokio_util::io::ReaderStream;
use tracing::debug;

use crate::AppState;
use crate::content_type;
use crate::error::FileServerError;
use crate::source::OsDirectory;
use crate::tree::{TreeBuilder, TreeNode};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /health - Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// GET /api/tree - Full directory tree under the root
pub async fn get_tree(State(state): State<AppState>) -> Result<Json<TreeNode>, FileServerError> {
    let root_dir = state.root_dir.clone();
    let exclusions = state.exclusions.clone();

    debug!("Building tree for {}", root_dir.display());

    let tree = tokio::task::spawn_blocking(move || {
        TreeBuilder::new(&OsDirectory, &exclusions).build(&root_dir)
    })
    .await??;

    Ok(Json(tree))
}

/// GET /files/{*path} and /api/files/{*path} - Raw file content
///
/// The router hands over the remainder of the URL already percent-decoded.
/// A remainder that does not decode to UTF-8 is a plain 500 like any other
/// failure.
pub async fn get_file(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Response, FileServerError> {
    let Path(path) = path?;
    let resolved = state.resolver().resolve_segments(path.split('/'))?;
    let content_type = content_type::for_path(&resolved);
    serve_file(&resolved, content_type).await
}

/// GET / and /index.html - The configured index page
pub async fn index(State(state): State<AppState>) -> Result<Response, FileServerError> {
    let resolved = state.resolver().resolve(&state.config.index_file)?;
    serve_file(&resolved, content_type::HTML).await
}

/// Anything not routed
pub async fn not_found() -> FileServerError {
    FileServerError::NotFound
}

/// Stream a regular file. Directories and missing paths are 404.
async fn serve_file(path: &FsPath, content_type: &'static str) -> Result<Response, FileServerError> {
    let metadata = fs::metadata(path)
        .await
        .map_err(FileServerError::from_lookup)?;

    if !metadata.is_file() {
        debug!("Not a regular file: {}", path.display());
        return Err(FileServerError::NotFound);
    }

    let file = fs::File::open(path)
        .await
        .map_err(FileServerError::from_lookup)?;

    debug!("Streaming file: {}", path.display());

    let body = Body::from_stream(ReaderStream::new(file));

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (header::CONTENT_LENGTH, metadata.len().to_string()),
        ],
        body,
    )
        .into_response())
}
