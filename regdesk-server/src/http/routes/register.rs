//! Registration endpoint

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    routing::post,
    Json, Router,
};

use super::{method_not_allowed, users::list_users};
use crate::db::UserRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{Envelope, RegistrationRequest};

pub const REGISTERED: &str =
    "Registration data successfully received and inserted into the database";

/// POST /register - validate and store a registration
///
/// The body is read as raw bytes so that a wrong or missing content type
/// is treated like any other undecodable body.
async fn register(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Envelope>, ApiError> {
    let request = RegistrationRequest::from_slice(&body?)?;
    let user = request.validate()?;

    UserRepo::new(&state.pool)
        .insert(&user)
        .await
        .map_err(ApiError::Insert)?;

    tracing::info!(username = user.username(), "Registered user");
    Ok(Json(Envelope::success(REGISTERED)))
}

/// Registration routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/register",
        post(register).get(list_users).fallback(method_not_allowed),
    )
}
