//! HTTP handlers.
//!
//! Each handler parses its input, runs one core operation against the shared
//! store and wraps the outcome in an [`Envelope`](crate::envelope::Envelope).

pub mod health;
pub mod todos;
pub mod users;

use crate::envelope::Envelope;
use axum::{http::StatusCode, Json};

/// Successful handler response: status plus enveloped payload.
pub type Enveloped<T> = (StatusCode, Json<Envelope<T>>);

/// Wrap `payload` in a success envelope with `status`.
#[must_use]
pub const fn respond<T>(status: StatusCode, payload: T) -> Enveloped<T> {
    (status, Json(Envelope::success(payload)))
}
