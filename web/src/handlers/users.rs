//! User registration.

use super::{respond, Enveloped};
use crate::{extractors::JsonBody, state::AppState, WebResult};
use axum::{extract::State, http::StatusCode};
use multitodo_core::User;
use serde::{Deserialize, Serialize};

/// Body of `POST /users`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterUserRequest {
    /// Display name; may be omitted
    pub name: Option<String>,
    /// Unique login name
    pub username: Option<String>,
}

/// Register a user with an empty todo list.
///
/// # Endpoint
///
/// ```text
/// POST /users
/// { "name": "Ana", "username": "ana" }
/// ```
///
/// # Errors
///
/// - `missing_user_data` (400) if `username` is absent or empty
/// - `username_already_exists` (400) if `username` is taken
pub async fn register_user(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<RegisterUserRequest>,
) -> WebResult<Enveloped<User>> {
    let mut store = state.store().write().await;
    let user = store.register(
        state.environment(),
        body.name.unwrap_or_default(),
        body.username.unwrap_or_default(),
    )?;

    metrics::counter!("multitodo_users_registered_total").increment(1);
    Ok(respond(StatusCode::CREATED, user))
}
