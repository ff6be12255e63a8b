//! # Multitodo Core
//!
//! Request-handling logic for a multi-tenant todo service, free of any
//! transport concerns.
//!
//! ## Pipeline
//!
//! ```text
//! claimed username ──► authorizer ──► acting User ──► TodoOperations ──► Todo / TodoError
//!                          │
//!                    IdentityStore
//! ```
//!
//! - [`IdentityStore`]: registered users, unique by username
//! - [`authorizer`]: resolves the `username` claim or refuses the request
//! - [`TodoOperations`]: create, list, update, complete and delete todos of
//!   the acting user
//!
//! Every operation returns a [`Result`] whose error is a [`TodoError`]; the
//! caller maps it to a status code.
//!
//! ## Example
//!
//! ```
//! use multitodo_core::{authorizer, Environment, IdentityStore, NewTodo, TodoOperations};
//!
//! # fn main() -> multitodo_core::Result<()> {
//! let env = Environment::production();
//! let ops = TodoOperations::new(env.clone());
//! let mut store = IdentityStore::new();
//!
//! store.register(&env, "Ana", "ana")?;
//!
//! let user = authorizer::authorize_mut(&mut store, Some("ana"))?;
//! let todo = ops.create(user, NewTodo {
//!     title: Some("buy milk".to_string()),
//!     deadline: Some("2025-01-01".into()),
//! })?;
//! assert!(!todo.done);
//! assert_eq!(ops.list(user).len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod authorizer;
pub mod environment;
pub mod error;
pub mod identity;
pub mod todos;
pub mod types;

pub use environment::{Clock, Environment, IdGenerator};
pub use error::{Result, TodoError};
pub use identity::IdentityStore;
pub use todos::{NewTodo, TodoOperations, TodoPatch};
pub use types::{DeadlineInput, Todo, TodoId, User, UserId};
