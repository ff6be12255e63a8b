//! HTTP surface of the multitodo service.
//!
//! This crate is the imperative shell around `multitodo-core`: it turns HTTP
//! requests into core operations and their outcomes into JSON envelopes.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         Imperative Shell (Axum)         │  ← HTTP, JSON, CORS
//! │  - Header / body extraction             │  ← Request ids, tracing
//! │  - Envelope serialization               │  ← Metrics
//! ├─────────────────────────────────────────┤
//! │         Functional Core                 │
//! │  - Identity store, authorizer           │  ← Testable without HTTP
//! │  - Todo operations                      │  ← Injected clock and ids
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Request Flow
//!
//! 1. **Tag** the request with an `x-request-id`
//! 2. **Authorize** the `username` header ([`ActingUser`])
//! 3. **Parse** the JSON body ([`extractors::JsonBody`])
//! 4. **Run** one core operation under the store lock
//! 5. **Map** the result to a status code and [`Envelope`]
//!
//! # Example
//!
//! ```
//! use multitodo_core::Environment;
//! use multitodo_web::{build_router, AppState};
//!
//! let app = build_router(AppState::new(Environment::production()));
//! # let _ = app;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod envelope;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

// Re-export key types for convenience
pub use envelope::Envelope;
pub use error::AppError;
pub use extractors::{ActingUser, JsonBody, USERNAME_HEADER};
pub use middleware::{request_id_layer, RequestId, REQUEST_ID_HEADER};
pub use router::build_router;
pub use state::AppState;

/// Result type alias for web handlers.
pub type WebResult<T> = Result<T, AppError>;
