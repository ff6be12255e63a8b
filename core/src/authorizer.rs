//! Per-request identity gate.
//!
//! Every todo route resolves its acting user here first. On failure the
//! request stops before any todo state is touched.

use crate::error::{Result, TodoError};
use crate::identity::IdentityStore;
use crate::types::User;

fn claimed(claim: Option<&str>) -> Result<&str> {
    match claim {
        Some(username) if !username.is_empty() => Ok(username),
        _ => Err(TodoError::MissingUsername),
    }
}

/// Resolve the claimed username to a registered user.
///
/// # Errors
///
/// - [`TodoError::MissingUsername`] if the claim is absent or empty
/// - [`TodoError::UserNotFound`] if no user has that username
pub fn authorize<'a>(store: &'a IdentityStore, claim: Option<&str>) -> Result<&'a User> {
    let username = claimed(claim)?;
    store.find_by_username(username).ok_or_else(|| {
        tracing::debug!(%username, "Unknown username");
        TodoError::UserNotFound
    })
}

/// Same contract as [`authorize`], yielding the user for mutation.
///
/// # Errors
///
/// See [`authorize`].
pub fn authorize_mut<'a>(store: &'a mut IdentityStore, claim: Option<&str>) -> Result<&'a mut User> {
    let username = claimed(claim)?;
    store
        .find_by_username_mut(username)
        .ok_or(TodoError::UserNotFound)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::environment::Environment;

    fn store_with_ana() -> IdentityStore {
        let mut store = IdentityStore::new();
        store.register(&Environment::production(), "Ana", "ana").unwrap();
        store
    }

    #[test]
    fn missing_claim() {
        let store = store_with_ana();
        assert_eq!(authorize(&store, None).unwrap_err(), TodoError::MissingUsername);
    }

    #[test]
    fn empty_claim_counts_as_missing() {
        let store = store_with_ana();
        assert_eq!(authorize(&store, Some("")).unwrap_err(), TodoError::MissingUsername);
    }

    #[test]
    fn unknown_user() {
        let store = store_with_ana();
        assert_eq!(authorize(&store, Some("ghost")).unwrap_err(), TodoError::UserNotFound);
    }

    #[test]
    fn known_user_is_resolved() {
        let store = store_with_ana();
        assert_eq!(authorize(&store, Some("ana")).unwrap().name, "Ana");
    }

    #[test]
    fn mutable_resolution_follows_the_same_rules() {
        let mut store = store_with_ana();
        assert_eq!(authorize_mut(&mut store, None).unwrap_err(), TodoError::MissingUsername);
        assert_eq!(
            authorize_mut(&mut store, Some("ghost")).unwrap_err(),
            TodoError::UserNotFound
        );
        authorize_mut(&mut store, Some("ana")).unwrap().name = "Ana B".to_string();
        assert_eq!(store.find_by_username("ana").unwrap().name, "Ana B");
    }
}
