//! Todo routes. Every handler acts on the [`ActingUser`]'s own collection.

use super::{respond, Enveloped};
use crate::{
    extractors::{ActingUser, JsonBody},
    state::AppState,
    WebResult,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use multitodo_core::{
    authorizer,
    todos::parse_todo_id,
    NewTodo, Result, Todo, TodoPatch, User,
};

/// Run `operation` on the acting user under the store's write lock.
///
/// The user is resolved again because the read lock taken by the extractor
/// has been released in between.
async fn with_acting_user<T>(
    state: &AppState,
    acting: &ActingUser,
    operation: impl FnOnce(&mut User) -> Result<T>,
) -> Result<T> {
    let mut store = state.store().write().await;
    let user = authorizer::authorize_mut(&mut store, Some(&acting.username))?;
    operation(user)
}

/// List the caller's todos in creation order.
///
/// ```text
/// GET /todos
/// ```
pub async fn list_todos(
    State(state): State<AppState>,
    acting: ActingUser,
) -> WebResult<Enveloped<Vec<Todo>>> {
    let store = state.store().read().await;
    let user = authorizer::authorize(&store, Some(&acting.username))?;
    let todos = state.todos().list(user).to_vec();
    Ok(respond(StatusCode::OK, todos))
}

/// Create a todo.
///
/// ```text
/// POST /todos
/// { "title": "buy milk", "deadline": "2025-01-01" }
/// ```
///
/// # Errors
///
/// - `missing_todo_data` (400) if title or deadline is absent or empty
/// - `invalid_deadline` (400) if the deadline cannot be parsed
pub async fn create_todo(
    State(state): State<AppState>,
    acting: ActingUser,
    JsonBody(draft): JsonBody<NewTodo>,
) -> WebResult<Enveloped<Todo>> {
    let todo = with_acting_user(&state, &acting, |user| state.todos().create(user, draft)).await?;

    metrics::counter!("multitodo_todos_created_total").increment(1);
    Ok(respond(StatusCode::CREATED, todo))
}

/// Replace the title and/or deadline of a todo.
///
/// ```text
/// PUT /todos/:id
/// { "title": "buy oat milk" }
/// ```
///
/// # Errors
///
/// - `missing_todo_update_info` (400) if neither field is present
/// - `todo_not_found` (404) if the caller owns no such todo
/// - `invalid_deadline` (400) if the new deadline cannot be parsed
pub async fn update_todo(
    State(state): State<AppState>,
    acting: ActingUser,
    Path(raw_id): Path<String>,
    JsonBody(patch): JsonBody<TodoPatch>,
) -> WebResult<Enveloped<Todo>> {
    patch.validate()?;
    let id = parse_todo_id(&raw_id)?;
    let todo =
        with_acting_user(&state, &acting, |user| state.todos().update(user, id, patch)).await?;
    Ok(respond(StatusCode::OK, todo))
}

/// Mark a todo as done. Idempotent.
///
/// ```text
/// PATCH /todos/:id/done
/// ```
pub async fn mark_todo_done(
    State(state): State<AppState>,
    acting: ActingUser,
    Path(raw_id): Path<String>,
) -> WebResult<Enveloped<Todo>> {
    let id = parse_todo_id(&raw_id)?;
    let todo = with_acting_user(&state, &acting, |user| state.todos().mark_done(user, id)).await?;

    metrics::counter!("multitodo_todos_completed_total").increment(1);
    Ok(respond(StatusCode::OK, todo))
}

/// Delete a todo. Responds `204 No Content` with an empty body.
///
/// ```text
/// DELETE /todos/:id
/// ```
pub async fn delete_todo(
    State(state): State<AppState>,
    acting: ActingUser,
    Path(raw_id): Path<String>,
) -> WebResult<StatusCode> {
    let id = parse_todo_id(&raw_id)?;
    with_acting_user(&state, &acting, |user| state.todos().delete(user, id)).await?;

    metrics::counter!("multitodo_todos_deleted_total").increment(1);
    Ok(StatusCode::NO_CONTENT)
}

