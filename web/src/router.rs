//! Route table and middleware stack.

use crate::{
    error::AppError,
    handlers::{health, todos, users},
    middleware::request_id_layer,
    state::AppState,
};
use axum::{
    http::Uri,
    routing::{get, patch, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the full application router.
///
/// | Method | Path              | Success |
/// |--------|-------------------|---------|
/// | POST   | `/users`          | 201     |
/// | GET    | `/todos`          | 200     |
/// | POST   | `/todos`          | 201     |
/// | PUT    | `/todos/:id`      | 200     |
/// | PATCH  | `/todos/:id/done` | 200     |
/// | DELETE | `/todos/:id`      | 204     |
/// | GET    | `/health`         | 200     |
///
/// CORS is fully permissive.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/users", post(users::register_user))
        .route("/todos", get(todos::list_todos).post(todos::create_todo))
        .route("/todos/:id", put(todos::update_todo).delete(todos::delete_todo))
        .route("/todos/:id/done", patch(todos::mark_todo_done))
        .fallback(route_not_found)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}

#[allow(clippy::unused_async)]
async fn route_not_found(uri: Uri) -> AppError {
    AppError::route_not_found(uri)
}
