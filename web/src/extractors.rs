//! Custom Axum extractors.
//!
//! - [`ActingUser`]: the registered user named by the `username` header
//! - [`JsonBody`]: a lenient JSON body where an empty payload means "no fields"
//!
//! # Examples
//!
//! ```ignore
//! async fn create_todo(
//!     State(state): State<AppState>,
//!     acting: ActingUser,
//!     JsonBody(draft): JsonBody<NewTodo>,
//! ) -> WebResult<...> {
//!     tracing::info!(username = %acting.username, "Creating todo");
//!     ...
//! }
//! ```

use crate::{error::AppError, state::AppState};
use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Request},
    http::{request::Parts, HeaderMap},
};
use multitodo_core::{authorizer, UserId};
use serde::de::DeserializeOwned;

/// Header carrying the caller's claimed identity.
pub const USERNAME_HEADER: &str = "username";

/// The authorized caller of a todo route.
///
/// Resolution happens under the store's read lock. Handlers that mutate
/// re-resolve the user under the write lock.
///
/// # Rejections
///
/// - `missing_username` (400) if the header is absent or empty
/// - `user_not_found` (400) if nobody registered that username
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActingUser {
    /// Id of the registered user
    pub id: UserId,
    /// Username exactly as registered
    pub username: String,
}

/// Header value as UTF-8; anything undecodable counts as no claim.
fn username_claim(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(USERNAME_HEADER)
        .and_then(|value| std::str::from_utf8(value.as_bytes()).ok())
}

#[async_trait]
impl FromRequestParts<AppState> for ActingUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let claim = username_claim(&parts.headers);
        let store = state.store().read().await;
        let user = authorizer::authorize(&store, claim)?;

        Ok(Self {
            id: user.id,
            username: user.username.clone(),
        })
    }
}

/// JSON request body with lenient handling of empty payloads.
///
/// An empty (or whitespace-only) body yields `T::default()`, so a missing
/// body surfaces as the route's own "missing data" error rather than a
/// parse failure. Malformed JSON is rejected with `invalid_request_body`.
/// The `Content-Type` header is not inspected.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::invalid_body(rejection.body_text()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(T::default()));
        }

        serde_json::from_slice(&bytes)
            .map(Self)
            .map_err(|err| AppError::invalid_body(err.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode};
    use multitodo_core::{Environment, NewTodo};

    fn request(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/todos")
            .body(Body::from(body))
            .unwrap()
    }

    #[test]
    fn claim_reads_utf8_header() {
        let mut headers = HeaderMap::new();
        assert_eq!(username_claim(&headers), None);

        headers.insert(USERNAME_HEADER, "ana".parse().unwrap());
        assert_eq!(username_claim(&headers), Some("ana"));
    }

    #[tokio::test]
    async fn empty_body_is_default() {
        let JsonBody(draft) = JsonBody::<NewTodo>::from_request(request(""), &())
            .await
            .unwrap();
        assert_eq!(draft, NewTodo::default());
    }

    #[tokio::test]
    async fn malformed_body_is_rejected() {
        let err = JsonBody::<NewTodo>::from_request(request("{\"title\":"), &())
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), "invalid_request_body");
    }

    #[tokio::test]
    async fn acting_user_resolves_registered_username() {
        let state = AppState::new(Environment::production());
        let registered = state
            .store()
            .write()
            .await
            .register(state.environment(), "Ana", "ana")
            .unwrap();

        let (mut parts, ()) = Request::builder()
            .header(USERNAME_HEADER, "ana")
            .body(())
            .unwrap()
            .into_parts();
        let acting = ActingUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap();

        assert_eq!(acting.id, registered.id);
        assert_eq!(acting.username, "ana");
    }

    #[tokio::test]
    async fn acting_user_rejections() {
        let state = AppState::new(Environment::production());

        let (mut parts, ()) = Request::builder().body(()).unwrap().into_parts();
        let err = ActingUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap_err();
        assert_eq!(err.code(), "missing_username");

        let (mut parts, ()) = Request::builder()
            .header(USERNAME_HEADER, "ghost")
            .body(())
            .unwrap()
            .into_parts();
        let err = ActingUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap_err();
        assert_eq!(err.code(), "user_not_found");
    }
}
