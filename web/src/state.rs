//! Application state for Axum handlers.

use multitodo_core::{Environment, IdentityStore, TodoOperations};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Application state shared across all HTTP handlers.
///
/// The identity store sits behind a single reader-writer lock: listing todos
/// takes the read side, every mutation the write side, so each operation is
/// atomic with respect to the others.
#[derive(Clone)]
pub struct AppState {
    store: Arc<RwLock<IdentityStore>>,
    todos: TodoOperations,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Environment::production())
    }
}

impl AppState {
    /// Empty store bound to `env`.
    #[must_use]
    pub fn new(env: Environment) -> Self {
        Self::with_store(IdentityStore::new(), env)
    }

    /// Start from an existing store (useful for seeding tests).
    #[must_use]
    pub fn with_store(store: IdentityStore, env: Environment) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            todos: TodoOperations::new(env),
        }
    }

    /// The shared identity store.
    #[must_use]
    pub fn store(&self) -> &RwLock<IdentityStore> {
        &self.store
    }

    /// Todo operations with the injected environment.
    #[must_use]
    pub const fn todos(&self) -> &TodoOperations {
        &self.todos
    }

    /// Clock and id generator shared by every operation.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        self.todos.environment()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_state_is_clone() {
        fn assert_clone<T: Clone + Send + Sync + 'static>() {}
        assert_clone::<AppState>();
    }

    #[tokio::test]
    async fn clones_share_one_store() {
        let state = AppState::default();
        let other = state.clone();

        state
            .store()
            .write()
            .await
            .register(state.environment(), "Ana", "ana")
            .unwrap();

        assert!(other.store().read().await.find_by_username("ana").is_some());
    }
}
