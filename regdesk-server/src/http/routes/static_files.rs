//! Static file fallback with generated directory indexes
//!
//! Files, and directories holding an `index.html`, are served by
//! `ServeDir`. A directory without an index gets a generated page linking
//! to each entry, sorted by name.

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{Method, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use tower::ServiceExt;
use tower_http::services::ServeDir;

use crate::http::server::AppState;
use crate::view::{self, DirectoryEntry};

pub const DIRECTORY_FAILED: &str = "Error reading directory";

/// Fallback for every path without a route
pub(crate) async fn serve_static(State(state): State<Arc<AppState>>, request: Request) -> Response {
    if matches!(*request.method(), Method::GET | Method::HEAD) {
        if let Some(dir) = unindexed_directory(&state.static_root, request.uri().path()).await {
            return directory_index(&dir).await;
        }
    }

    match ServeDir::new(&state.static_root).oneshot(request).await {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}

/// Directory a request path resolves to, when it has no `index.html`.
///
/// Only paths ending in `/` qualify; ServeDir redirects `/dir` to `/dir/`.
/// Any `.` or `..` segment disqualifies the path.
async fn unindexed_directory(root: &Path, uri_path: &str) -> Option<PathBuf> {
    if !uri_path.ends_with('/') {
        return None;
    }

    let decoded = urlencoding::decode(uri_path).ok()?;
    let mut dir = root.to_path_buf();
    for segment in decoded.split('/').filter(|s| !s.is_empty()) {
        let mut components = Path::new(segment).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(part)), None) => dir.push(part),
            _ => return None,
        }
    }

    let metadata = tokio::fs::metadata(&dir).await.ok()?;
    if !metadata.is_dir() {
        return None;
    }
    if tokio::fs::try_exists(dir.join("index.html"))
        .await
        .unwrap_or(false)
    {
        return None;
    }

    Some(dir)
}

async fn directory_index(dir: &Path) -> Response {
    let entries = match read_entries(dir).await {
        Ok(entries) => entries,
        Err(e) => {
            tracing::error!(path = %dir.display(), "Failed to read directory: {}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, DIRECTORY_FAILED).into_response();
        }
    };

    match view::render_directory_listing(&entries) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!(path = %dir.display(), "Directory index error: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, DIRECTORY_FAILED).into_response()
        }
    }
}

async fn read_entries(dir: &Path) -> std::io::Result<Vec<DirectoryEntry>> {
    let mut reader = tokio::fs::read_dir(dir).await?;
    let mut entries = Vec::new();

    while let Some(entry) = reader.next_entry().await? {
        let name = entry.file_name().to_string_lossy().into_owned();
        let dir = entry.file_type().await?.is_dir();
        entries.push(DirectoryEntry {
            href: urlencoding::encode(&name).into_owned(),
            name,
            dir,
        });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}
