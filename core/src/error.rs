//! Error types for identity and todo operations.

use thiserror::Error;

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, TodoError>;

/// Every way a request can be refused by the core.
///
/// All variants are request-local: none of them leaves the store in a
/// partially-updated state, and retrying the same input yields the same error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TodoError {
    // ═══════════════════════════════════════════════════════════
    // Authorization Errors
    // ═══════════════════════════════════════════════════════════

    /// The `username` header was absent or empty.
    #[error("Missing username header")]
    MissingUsername,

    /// No registered user matches the claimed username.
    #[error("User not found")]
    UserNotFound,

    // ═══════════════════════════════════════════════════════════
    // Registration Errors
    // ═══════════════════════════════════════════════════════════

    /// The username is already taken.
    #[error("Username already exists")]
    DuplicateUsername,

    /// Registration did not carry a username.
    #[error("Missing user data")]
    MissingUserData,

    // ═══════════════════════════════════════════════════════════
    // Todo Errors
    // ═══════════════════════════════════════════════════════════

    /// Creation needs both a title and a deadline.
    #[error("Missing todo data")]
    MissingTodoData,

    /// Update carried neither a title nor a deadline.
    #[error("Missing todo update info")]
    MissingUpdateInfo,

    /// The supplied deadline is not a recognisable point in time.
    #[error("Invalid deadline: {0}")]
    InvalidDeadline(String),

    /// No todo with that id exists in the acting user's collection.
    #[error("Todo not found")]
    TodoNotFound,
}

impl TodoError {
    /// Stable machine-readable code sent to clients.
    ///
    /// # Examples
    ///
    /// ```
    /// # use multitodo_core::TodoError;
    /// assert_eq!(TodoError::DuplicateUsername.code(), "username_already_exists");
    /// assert_eq!(TodoError::TodoNotFound.code(), "todo_not_found");
    /// ```
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingUsername => "missing_username",
            Self::UserNotFound => "user_not_found",
            Self::DuplicateUsername => "username_already_exists",
            Self::MissingUserData => "missing_user_data",
            Self::MissingTodoData => "missing_todo_data",
            Self::MissingUpdateInfo => "missing_todo_update_info",
            Self::InvalidDeadline(_) => "invalid_deadline",
            Self::TodoNotFound => "todo_not_found",
        }
    }

    /// Returns `true` if the error means the addressed todo does not exist.
    ///
    /// This is the only kind that maps to `404`; everything else is a `400`.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::TodoNotFound)
    }

    /// Returns `true` if the error came from the authorization gate.
    #[must_use]
    pub const fn is_auth_error(&self) -> bool {
        matches!(self, Self::MissingUsername | Self::UserNotFound)
    }
}
