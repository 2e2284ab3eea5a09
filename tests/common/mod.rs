//! Test utilities and common setup.

use std::path::Path;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, Response},
};
use folder_browser::{AppState, Config, routes};
use tempfile::TempDir;
use tower::ServiceExt;

/// Root with `a.txt`, `Sub/b.txt`, `.hidden`, `node_modules/pkg/index.js`
/// and an `index.html`.
pub fn sample_root() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    std::fs::write(root.join("a.txt"), "alpha\n").unwrap();
    std::fs::create_dir(root.join("Sub")).unwrap();
    std::fs::write(root.join("Sub/b.txt"), "bravo bytes\n").unwrap();
    std::fs::write(root.join(".hidden"), "secret").unwrap();
    std::fs::create_dir_all(root.join("node_modules/pkg")).unwrap();
    std::fs::write(root.join("node_modules/pkg/index.js"), "module.exports = 1;").unwrap();
    std::fs::write(root.join("index.html"), "<h1>Folder browser</h1>").unwrap();

    temp_dir
}

/// Create a test application serving `root` with the default config.
pub fn test_app(root: &Path) -> Router {
    routes::app(AppState::new(root.to_path_buf()))
}

/// Create a test application serving `root` with a custom config.
pub fn test_app_with_config(root: &Path, config: Config) -> Router {
    routes::app(AppState::with_config(root.to_path_buf(), config))
}

/// Issue a GET against the app.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .method(Method::GET)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap()
        .to_vec()
}
