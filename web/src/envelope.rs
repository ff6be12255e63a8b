//! The JSON envelope wrapping every response body.

use serde::{Deserialize, Serialize};

/// `{ "success": bool, "message"?: T, "error"?: string }`
///
/// Exactly one of `message` and `error` is set, matching `success`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Whether the operation succeeded
    pub success: bool,
    /// Payload of a successful operation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<T>,
    /// Error code of a failed operation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    /// Wrap a successful payload.
    #[must_use]
    pub const fn success(payload: T) -> Self {
        Self {
            success: true,
            message: Some(payload),
            error: None,
        }
    }
}

impl Envelope<()> {
    /// Failure carrying only an error code.
    #[must_use]
    pub fn failure(code: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(code.into()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_omits_error() {
        let value = serde_json::to_value(Envelope::success("hi")).unwrap();
        assert_eq!(value, json!({ "success": true, "message": "hi" }));
    }

    #[test]
    fn failure_omits_message() {
        let value = serde_json::to_value(Envelope::failure("todo_not_found")).unwrap();
        assert_eq!(value, json!({ "success": false, "error": "todo_not_found" }));
    }
}
