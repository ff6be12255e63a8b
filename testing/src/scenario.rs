//! Given-When-Then harness for todo operations.

#![allow(clippy::module_name_repetitions)]
#![allow(clippy::expect_used)] // Fixture setup failures are test bugs

use multitodo_core::{
    IdentityStore, NewTodo, Result, Todo, TodoError, TodoOperations, User,
};

use crate::test_environment;

/// Fluent builder for operation tests
///
/// # Example
///
/// ```
/// use multitodo_core::TodoError;
/// use multitodo_testing::TodoScenario;
///
/// TodoScenario::new()
///     .given_user("Ana", "ana")
///     .given_user("Bob", "bob")
///     .given_todo("ana", "buy milk", "2025-01-01")
///     .when_each("bob", |ops, user, ana_todos| ops.mark_done(user, ana_todos[0].id))
///     .then_err(&TodoError::TodoNotFound);
/// ```
pub struct TodoScenario {
    ops: TodoOperations,
    store: IdentityStore,
    created: Vec<Todo>,
}

impl Default for TodoScenario {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoScenario {
    /// Empty store with a deterministic environment.
    #[must_use]
    pub fn new() -> Self {
        let env = test_environment();
        Self {
            ops: TodoOperations::new(env),
            store: IdentityStore::new(),
            created: Vec::new(),
        }
    }

    /// Register a user (Given).
    ///
    /// # Panics
    ///
    /// Panics if registration fails.
    #[must_use]
    pub fn given_user(mut self, name: &str, username: &str) -> Self {
        self.store
            .register(self.ops.environment(), name, username)
            .expect("fixture user should register");
        self
    }

    /// Create a todo for a registered user (Given).
    ///
    /// # Panics
    ///
    /// Panics if the user is unknown or the todo is rejected.
    #[must_use]
    pub fn given_todo(mut self, username: &str, title: &str, deadline: &str) -> Self {
        let user = self
            .store
            .find_by_username_mut(username)
            .expect("fixture user should exist");
        let todo = self
            .ops
            .create(
                user,
                NewTodo {
                    title: Some(title.to_string()),
                    deadline: Some(deadline.into()),
                },
            )
            .expect("fixture todo should be created");
        self.created.push(todo);
        self
    }

    /// Run an operation as `username` (When).
    ///
    /// # Panics
    ///
    /// Panics if `username` was never registered.
    pub fn when<T>(
        self,
        username: &str,
        operation: impl FnOnce(&TodoOperations, &mut User) -> Result<T>,
    ) -> Outcome<T> {
        self.when_each(username, |ops, user, _| operation(ops, user))
    }

    /// Like [`TodoScenario::when`], also passing every todo created by
    /// `given_todo` in creation order.
    ///
    /// # Panics
    ///
    /// Panics if `username` was never registered.
    pub fn when_each<T>(
        mut self,
        username: &str,
        operation: impl FnOnce(&TodoOperations, &mut User, &[Todo]) -> Result<T>,
    ) -> Outcome<T> {
        let user = self
            .store
            .find_by_username_mut(username)
            .expect("acting user should exist");
        let result = operation(&self.ops, user, &self.created);
        Outcome {
            result,
            store: self.store,
        }
    }
}

/// Result of the When step plus the store it ran against.
pub struct Outcome<T> {
    result: Result<T>,
    store: IdentityStore,
}

impl<T: std::fmt::Debug> Outcome<T> {
    /// Assert success and inspect the value (Then).
    ///
    /// # Panics
    ///
    /// Panics if the operation failed.
    pub fn then_ok(self, check: impl FnOnce(&T)) -> Self {
        assert!(
            self.result.is_ok(),
            "expected success, got {:?}",
            self.result.as_ref().err()
        );
        if let Ok(value) = &self.result {
            check(value);
        }
        self
    }

    /// Assert the operation failed with exactly `expected` (Then).
    ///
    /// # Panics
    ///
    /// Panics if the operation succeeded or failed differently.
    pub fn then_err(self, expected: &TodoError) -> Self {
        assert_eq!(self.result.as_ref().err(), Some(expected));
        self
    }

    /// Inspect a user's state after the operation (Then).
    ///
    /// # Panics
    ///
    /// Panics if `username` was never registered.
    pub fn then_user(self, username: &str, check: impl FnOnce(&User)) -> Self {
        let user = self
            .store
            .find_by_username(username)
            .expect("inspected user should exist");
        check(user);
        self
    }
}
