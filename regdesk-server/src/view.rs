//! HTML rendering for the user listing page and directory indexes
//!
//! The user list template is read from disk on every request so it can be
//! edited while the server runs. Rows are exposed to the template as
//! `users`, each with `username` and `password`. Output is always
//! HTML-escaped.

use std::path::{Path, PathBuf};

use minijinja::{context, AutoEscape, Environment};
use serde::Serialize;

use crate::models::UserListing;

const DIRECTORY_TEMPLATE: &str = "<!doctype html>\n<meta name=\"viewport\" content=\"width=device-width\">\n<pre>\n{% for entry in entries %}<a href=\"{{ entry.href }}{% if entry.dir %}/{% endif %}\">{{ entry.name }}{% if entry.dir %}/{% endif %}</a>\n{% endfor %}</pre>\n";

/// One link in a generated directory index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryEntry {
    /// File name as found on disk
    pub name: String,
    /// Percent-encoded file name
    pub href: String,
    /// Directories are rendered with a trailing `/`
    pub dir: bool,
}

/// Template loading or rendering failure
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("failed to load template {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to render template: {0}")]
    Render(#[from] minijinja::Error),
}

/// Load the template at `path` and render it with `users`.
pub async fn render_user_list(path: &Path, users: &[UserListing]) -> Result<String, TemplateError> {
    let source = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| TemplateError::Load {
            path: path.to_path_buf(),
            source,
        })?;

    render_source(&source, users)
}

/// Render an already loaded template source.
pub fn render_source(source: &str, users: &[UserListing]) -> Result<String, TemplateError> {
    Ok(html_env().render_str(source, context! { users => users })?)
}

/// Render a directory index, one link per entry, in the given order.
pub fn render_directory_listing(entries: &[DirectoryEntry]) -> Result<String, TemplateError> {
    Ok(html_env().render_str(DIRECTORY_TEMPLATE, context! { entries => entries })?)
}

fn html_env() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::Html);
    env
}
