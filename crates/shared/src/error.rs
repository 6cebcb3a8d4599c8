//! Application-wide error types.

use thiserror::Error;

/// Application error types.
///
/// Every domain error ends up here before it reaches a client; this is the
/// one place that decides status codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Email already registered.
    #[error("Email already registered")]
    DuplicateIdentity,

    /// Password does not meet the minimum requirements.
    #[error("Weak password: {0}")]
    WeakCredential(String),

    /// Bad email/password combination. Deliberately vague.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// A receipt with this transaction number already exists in scope.
    #[error("A receipt with transaction number {0} already exists")]
    DuplicateTransaction(String),

    /// Missing, malformed, or expired bearer token.
    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    /// Valid token, insufficient role.
    #[error("Access denied: {0}")]
    Forbidden(String),

    /// Resource absent or outside the caller's scope.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::DuplicateIdentity
            | Self::WeakCredential(_)
            | Self::InvalidCredentials
            | Self::DuplicateTransaction(_)
            | Self::Validation(_) => 400,
            Self::Unauthorized(_) => 401,
            Self::Forbidden(_) => 403,
            Self::NotFound(_) => 404,
            Self::Database(_) | Self::Internal(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateIdentity => "DUPLICATE_IDENTITY",
            Self::WeakCredential(_) => "WEAK_CREDENTIAL",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::DuplicateTransaction(_) => "DUPLICATE_TRANSACTION",
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns true for failures whose detail must not reach the client.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }

    /// Message safe to show to a client.
    #[must_use]
    pub fn public_message(&self) -> String {
        if self.is_server_error() {
            "An unexpected error occurred".to_string()
        } else {
            self.to_string()
        }
    }
}
