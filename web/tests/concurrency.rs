//! Concurrent mutations against one shared router.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use multitodo_core::Todo;
use multitodo_testing::test_environment;
use multitodo_web::{build_router, AppState, Envelope, USERNAME_HEADER};
use std::collections::HashSet;
use tower::ServiceExt;

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

fn post(uri: &str, username: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(username) = username {
        builder = builder.header(USERNAME_HEADER, username);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

#[tokio::test]
async fn parallel_creates_are_all_kept() {
    let app = build_router(AppState::new(test_environment()));
    let (status, _) = send(&app, post("/users", None, r#"{"name":"Ana","username":"ana"}"#)).await;
    assert_eq!(status, StatusCode::CREATED);

    let tasks: Vec<_> = (0..32)
        .map(|n| {
            let app = app.clone();
            tokio::spawn(async move {
                let body = format!(r#"{{"title":"todo {n}","deadline":"2025-01-01"}}"#);
                send(&app, post("/todos", Some("ana"), &body)).await.0
            })
        })
        .collect();
    for task in tasks {
        assert_eq!(task.await.unwrap(), StatusCode::CREATED);
    }

    let request = Request::builder()
        .uri("/todos")
        .header(USERNAME_HEADER, "ana")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);

    let todos = serde_json::from_slice::<Envelope<Vec<Todo>>>(&body)
        .unwrap()
        .message
        .unwrap();
    assert_eq!(todos.len(), 32);
    let ids: HashSet<_> = todos.iter().map(|todo| todo.id).collect();
    assert_eq!(ids.len(), 32);
}

#[tokio::test]
async fn racing_registrations_admit_one_winner() {
    let app = build_router(AppState::new(test_environment()));

    let tasks: Vec<_> = (0..16)
        .map(|_| {
            let app = app.clone();
            tokio::spawn(async move {
                send(&app, post("/users", None, r#"{"name":"Ana","username":"ana"}"#))
                    .await
                    .0
            })
        })
        .collect();

    let mut created = 0;
    for task in tasks {
        match task.await.unwrap() {
            StatusCode::CREATED => created += 1,
            status => assert_eq!(status, StatusCode::BAD_REQUEST),
        }
    }
    assert_eq!(created, 1);
}
