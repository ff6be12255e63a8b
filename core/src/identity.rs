//! The authoritative set of registered users.

use crate::environment::Environment;
use crate::error::{Result, TodoError};
use crate::types::{User, UserId};
use std::collections::HashMap;

/// In-memory user registry.
///
/// Users are kept in registration order; a username index makes lookups
/// constant time. Users are never removed, so indices stay valid for the
/// lifetime of the store (or until [`IdentityStore::reset`]).
#[derive(Debug, Clone, Default)]
pub struct IdentityStore {
    users: Vec<User>,
    by_username: HashMap<String, usize>,
}

impl IdentityStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every user and todo.
    pub fn reset(&mut self) {
        self.users.clear();
        self.by_username.clear();
    }

    /// Register a new user with an empty todo collection.
    ///
    /// # Errors
    ///
    /// - [`TodoError::MissingUserData`] if `username` is empty
    /// - [`TodoError::DuplicateUsername`] if `username` is already registered
    pub fn register(
        &mut self,
        env: &Environment,
        name: impl Into<String>,
        username: impl Into<String>,
    ) -> Result<User> {
        let username = username.into();
        if username.is_empty() {
            return Err(TodoError::MissingUserData);
        }
        if self.by_username.contains_key(&username) {
            tracing::debug!(%username, "Rejected duplicate username");
            return Err(TodoError::DuplicateUsername);
        }

        let user = User {
            id: UserId::from_uuid(env.next_id()),
            name: name.into(),
            username: username.clone(),
            todos: Vec::new(),
        };
        self.by_username.insert(username, self.users.len());
        self.users.push(user.clone());

        tracing::info!(user_id = %user.id, username = %user.username, "User registered");
        Ok(user)
    }

    /// Exact, case-sensitive lookup.
    #[must_use]
    pub fn find_by_username(&self, username: &str) -> Option<&User> {
        self.by_username
            .get(username)
            .and_then(|&index| self.users.get(index))
    }

    /// Mutable variant of [`IdentityStore::find_by_username`].
    #[must_use]
    pub fn find_by_username_mut(&mut self, username: &str) -> Option<&mut User> {
        match self.by_username.get(username) {
            Some(&index) => self.users.get_mut(index),
            None => None,
        }
    }

    /// Registered users in registration order.
    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.iter()
    }

    /// Number of registered users.
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Returns `true` if nobody has registered yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn register_creates_user_with_no_todos() {
        let env = Environment::production();
        let mut store = IdentityStore::new();

        let user = store.register(&env, "Ana", "ana").unwrap();

        assert_eq!(user.name, "Ana");
        assert_eq!(user.username, "ana");
        assert!(user.todos.is_empty());
        assert_eq!(store.find_by_username("ana"), Some(&user));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn duplicate_username_is_rejected_and_store_unchanged() {
        let env = Environment::production();
        let mut store = IdentityStore::new();
        let first = store.register(&env, "Ana", "ana").unwrap();

        let err = store.register(&env, "Another Ana", "ana").unwrap_err();

        assert_eq!(err, TodoError::DuplicateUsername);
        assert_eq!(store.len(), 1);
        assert_eq!(store.find_by_username("ana"), Some(&first));
    }

    #[test]
    fn empty_username_is_rejected() {
        let env = Environment::production();
        let mut store = IdentityStore::new();
        assert_eq!(
            store.register(&env, "Nobody", "").unwrap_err(),
            TodoError::MissingUserData
        );
        assert!(store.is_empty());
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let env = Environment::production();
        let mut store = IdentityStore::new();
        store.register(&env, "Ana", "ana").unwrap();

        assert!(store.find_by_username("Ana").is_none());
        assert!(store.find_by_username("ana ").is_none());
    }

    #[test]
    fn names_need_not_be_unique() {
        let env = Environment::production();
        let mut store = IdentityStore::new();
        let a = store.register(&env, "Sam", "sam1").unwrap();
        let b = store.register(&env, "Sam", "sam2").unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn users_iterate_in_registration_order() {
        let env = Environment::production();
        let mut store = IdentityStore::new();
        for username in ["c", "a", "b"] {
            store.register(&env, username, username).unwrap();
        }
        let order: Vec<_> = store.users().map(|u| u.username.as_str()).collect();
        assert_eq!(order, ["c", "a", "b"]);
    }

    #[test]
    fn reset_forgets_everyone() {
        let env = Environment::production();
        let mut store = IdentityStore::new();
        store.register(&env, "Ana", "ana").unwrap();

        store.reset();

        assert!(store.is_empty());
        assert!(store.find_by_username("ana").is_none());
        store.register(&env, "Ana", "ana").unwrap();
    }
}
