use std::path::Path;

pub const OCTET_STREAM: &str = "application/octet-stream";
pub const HTML: &str = "text/html; charset=utf-8";
pub const PLAIN_TEXT: &str = "text/plain; charset=utf-8";

/// Content type for a served file, by extension (case-insensitive).
/// Anything not in the table is served as `application/octet-stream`.
pub fn for_path(path: &Path) -> &'static str {
    let Some(ext) = path.extension() else {
        return OCTET_STREAM;
    };

    match ext.to_string_lossy().to_ascii_lowercase().as_str() {
        "html" => HTML,
        "css" => "text/css; charset=utf-8",
        "js" => "text/javascript; charset=utf-8",
        "json" => "application/json; charset=utf-8",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "webp" => "image/webp",
        "txt" => PLAIN_TEXT,
        "md" => "text/markdown; charset=utf-8",
        _ => OCTET_STREAM,
    }
}
