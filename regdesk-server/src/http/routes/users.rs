//! User listing page

use std::sync::Arc;

use axum::{extract::State, response::Html, routing::get, Router};

use super::method_not_allowed;
use crate::db::UserRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::view;

/// GET /userList - render every stored user
pub(crate) async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, ApiError> {
    let users = UserRepo::new(&state.pool)
        .list()
        .await
        .map_err(ApiError::Query)?;
    tracing::debug!(count = users.len(), "Loaded users");

    let html = view::render_user_list(&state.template_path, &users).await?;
    Ok(Html(html))
}

/// User listing routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/userList", get(list_users).fallback(method_not_allowed))
}
