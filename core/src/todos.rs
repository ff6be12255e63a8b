//! Todo mutations and queries for an already-authorized user.
//!
//! Every operation works on the acting user's own collection. A todo id owned
//! by somebody else is indistinguishable from one that never existed.

use crate::environment::Environment;
use crate::error::{Result, TodoError};
use crate::types::{DeadlineInput, Todo, TodoId, User};
use serde::{Deserialize, Serialize};

/// Input for [`TodoOperations::create`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTodo {
    /// Required, non-empty
    pub title: Option<String>,
    /// Required, non-empty
    pub deadline: Option<DeadlineInput>,
}

/// Input for [`TodoOperations::update`]. At least one field must be present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoPatch {
    /// Replacement title; an omitted title keeps the current one
    pub title: Option<String>,
    /// Replacement deadline
    pub deadline: Option<DeadlineInput>,
}

impl TodoPatch {
    /// Check that the patch carries something to apply.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::MissingUpdateInfo`] if both fields are absent or empty.
    pub fn validate(&self) -> Result<()> {
        let has_title = self.title.as_ref().is_some_and(|title| !title.is_empty());
        let has_deadline = self.deadline.as_ref().is_some_and(|deadline| !deadline.is_blank());
        if has_title || has_deadline {
            Ok(())
        } else {
            Err(TodoError::MissingUpdateInfo)
        }
    }
}

/// Interpret a raw path segment as a todo id.
///
/// # Errors
///
/// Returns [`TodoError::TodoNotFound`] when the segment is not a UUID, since
/// no todo can ever carry such an id.
pub fn parse_todo_id(raw: &str) -> Result<TodoId> {
    raw.parse().map_err(|_| TodoError::TodoNotFound)
}

fn present_title(title: Option<String>) -> Option<String> {
    title.filter(|title| !title.is_empty())
}

fn present_deadline(deadline: Option<DeadlineInput>) -> Option<DeadlineInput> {
    deadline.filter(|deadline| !deadline.is_blank())
}

/// Todo operations bound to an [`Environment`].
#[derive(Debug, Clone, Default)]
pub struct TodoOperations {
    env: Environment,
}

impl TodoOperations {
    /// Create the operations with injected clock and id generator.
    #[must_use]
    pub const fn new(env: Environment) -> Self {
        Self { env }
    }

    /// The injected dependencies.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.env
    }

    /// The user's todos in creation order.
    #[must_use]
    pub fn list<'a>(&self, user: &'a User) -> &'a [Todo] {
        &user.todos
    }

    /// Append a new, not-yet-done todo to the user's collection.
    ///
    /// # Errors
    ///
    /// - [`TodoError::MissingTodoData`] if title or deadline is absent or empty
    /// - [`TodoError::InvalidDeadline`] if the deadline cannot be parsed
    pub fn create(&self, user: &mut User, draft: NewTodo) -> Result<Todo> {
        let (Some(title), Some(deadline)) =
            (present_title(draft.title), present_deadline(draft.deadline))
        else {
            return Err(TodoError::MissingTodoData);
        };

        let todo = Todo {
            id: TodoId::from_uuid(self.env.next_id()),
            title,
            deadline: deadline.resolve()?,
            done: false,
            created_at: self.env.now(),
        };
        user.todos.push(todo.clone());

        tracing::info!(username = %user.username, todo_id = %todo.id, "Todo created");
        Ok(todo)
    }

    /// Replace the title and/or deadline of one of the user's todos in place.
    ///
    /// `id`, `done` and `created_at` are carried over; position in the
    /// collection is unchanged.
    ///
    /// # Errors
    ///
    /// - [`TodoError::MissingUpdateInfo`] if neither field is present
    /// - [`TodoError::TodoNotFound`] if the user owns no todo with `id`
    /// - [`TodoError::InvalidDeadline`] if the new deadline cannot be parsed
    pub fn update(&self, user: &mut User, id: TodoId, patch: TodoPatch) -> Result<Todo> {
        patch.validate()?;
        let title = present_title(patch.title);
        let deadline = present_deadline(patch.deadline);

        let todo = Self::find_mut(user, id)?;
        let deadline = deadline.as_ref().map(DeadlineInput::resolve).transpose()?;

        let updated = Todo {
            title: title.unwrap_or_else(|| todo.title.clone()),
            deadline: deadline.unwrap_or(todo.deadline),
            ..todo.clone()
        };
        *todo = updated.clone();

        tracing::info!(username = %user.username, todo_id = %id, "Todo updated");
        Ok(updated)
    }

    /// Mark one of the user's todos as done. Repeating the call is harmless.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::TodoNotFound`] if the user owns no todo with `id`.
    pub fn mark_done(&self, user: &mut User, id: TodoId) -> Result<Todo> {
        let todo = Self::find_mut(user, id)?;
        todo.done = true;
        let done = todo.clone();

        tracing::info!(username = %user.username, todo_id = %id, "Todo marked done");
        Ok(done)
    }

    /// Remove one of the user's todos; the rest keep their relative order.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::TodoNotFound`] if the user owns no todo with `id`.
    pub fn delete(&self, user: &mut User, id: TodoId) -> Result<()> {
        let index = user.position_of(id).ok_or(TodoError::TodoNotFound)?;
        user.todos.remove(index);

        tracing::info!(username = %user.username, todo_id = %id, "Todo deleted");
        Ok(())
    }

    fn find_mut(user: &mut User, id: TodoId) -> Result<&mut Todo> {
        user.todos
            .iter_mut()
            .find(|todo| todo.id == id)
            .ok_or(TodoError::TodoNotFound)
    }
}
