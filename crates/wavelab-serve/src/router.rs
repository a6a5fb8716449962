//! Request routing and file responses.

use crate::listing::{Entry, render_listing};
use axum::body::Body;
use axum::extract::State;
use axum::http::{StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use percent_encoding::percent_decode_str;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio_util::io::ReaderStream;

/// Build the app router serving the given root directory.
///
/// A single fallback handler owns every path: directories render as
/// listings, files stream back with an extension-derived content type,
/// and anything unresolvable is a 404.
pub fn router(root: impl Into<PathBuf>) -> Router {
    Router::new()
        .fallback(get(handle))
        .with_state(Arc::new(root.into()))
}

/// Content type for a served file, from its extension.
///
/// `.wav` maps to `audio/wav` so browsers feed it to the inline player,
/// and extensionless files come back as plain text for quick inspection
/// of logs and notes.
pub fn content_type(path: &Path) -> &'static str {
    let Some(ext) = path.extension() else {
        return "text/plain; charset=utf-8";
    };
    match ext.to_string_lossy().to_lowercase().as_str() {
        "wav" => "audio/wav",
        "flac" => "audio/flac",
        "mp3" => "audio/mpeg",
        "ogg" => "audio/ogg",
        "html" | "htm" => "text/html; charset=utf-8",
        "txt" | "md" | "log" => "text/plain; charset=utf-8",
        "csv" => "text/csv",
        "css" => "text/css",
        "js" => "text/javascript",
        "json" => "application/json",
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// Resolve a decoded request path against the served root.
///
/// Rejects parent-directory components outright; empty and `.`
/// components are skipped, so the result is always at or below root.
fn resolve(root: &Path, request_path: &str) -> Option<PathBuf> {
    let mut path = root.to_path_buf();
    for part in request_path.split('/') {
        match part {
            "" | "." => {}
            ".." => return None,
            name => path.push(name),
        }
    }
    Some(path)
}

fn not_found(message: &'static str) -> Response {
    (StatusCode::NOT_FOUND, message).into_response()
}

async fn handle(State(root): State<Arc<PathBuf>>, uri: Uri) -> Response {
    let decoded = percent_decode_str(uri.path())
        .decode_utf8_lossy()
        .into_owned();
    let Some(fs_path) = resolve(&root, &decoded) else {
        tracing::debug!("rejected path traversal: {decoded}");
        return not_found("File not found");
    };

    match tokio::fs::metadata(&fs_path).await {
        Ok(meta) if meta.is_dir() => list_directory(&fs_path, &decoded).await,
        Ok(_) => serve_file(&fs_path).await,
        Err(_) => not_found("File not found"),
    }
}

/// Render a directory as an HTML listing.
///
/// An unreadable directory answers 404, mirroring how missing files are
/// reported (permission problems should not leak more than absence).
async fn list_directory(dir: &Path, display_path: &str) -> Response {
    let Ok(mut read_dir) = tokio::fs::read_dir(dir).await else {
        return not_found("No permission to list directory");
    };

    let mut entries = Vec::new();
    while let Ok(Some(item)) = read_dir.next_entry().await {
        let name = item.file_name().to_string_lossy().into_owned();
        // file_type() does not follow symlinks; metadata() does, so a
        // symlinked directory still lists (and links) as a directory.
        let is_symlink = item
            .file_type()
            .await
            .map(|t| t.is_symlink())
            .unwrap_or(false);
        let is_dir = tokio::fs::metadata(item.path())
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false);
        entries.push(Entry {
            name,
            is_dir,
            is_symlink,
        });
    }

    (
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        render_listing(display_path, &entries),
    )
        .into_response()
}

/// Stream a file back without buffering it whole.
async fn serve_file(path: &Path) -> Response {
    let file = match tokio::fs::File::open(path).await {
        Ok(file) => file,
        Err(err) => {
            tracing::debug!("failed to open {}: {err}", path.display());
            return not_found("File not found");
        }
    };

    let body = Body::from_stream(ReaderStream::new(file));
    ([(header::CONTENT_TYPE, content_type(path))], body).into_response()
}
