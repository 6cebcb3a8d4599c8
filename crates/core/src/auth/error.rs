//! Authentication and authorization errors.

use riocaja_shared::{AppError, JwtError, Role};
use thiserror::Error;

use super::password::PasswordError;
use crate::store::StoreError;

/// Errors raised by registration and login.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The email is already registered.
    #[error("email already registered")]
    DuplicateIdentity,

    /// The password is too short.
    #[error("password must have at least {min_length} characters")]
    WeakCredential {
        /// Minimum accepted length in characters.
        min_length: usize,
    },

    /// Unknown email or wrong password; the two are never told apart.
    #[error("invalid credentials")]
    AuthFailure,

    /// Storage or hashing fault.
    #[error("unexpected authentication failure: {0}")]
    Unexpected(String),
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        Self::Unexpected(err.to_string())
    }
}

impl From<PasswordError> for AuthError {
    fn from(err: PasswordError) -> Self {
        Self::Unexpected(err.to_string())
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::DuplicateIdentity => Self::DuplicateIdentity,
            e @ AuthError::WeakCredential { .. } => Self::WeakCredential(e.to_string()),
            AuthError::AuthFailure => Self::InvalidCredentials,
            AuthError::Unexpected(detail) => Self::Internal(detail),
        }
    }
}

/// Errors raised before any business logic runs.
#[derive(Debug, Error)]
pub enum AccessError {
    /// Token is malformed, badly signed, or expired.
    #[error("invalid or expired token: {0}")]
    InvalidToken(String),

    /// Token is valid but its role is not allowed here.
    #[error("role {role} is not allowed to perform this operation")]
    Forbidden {
        /// Role carried by the token.
        role: Role,
    },
}

impl From<JwtError> for AccessError {
    fn from(err: JwtError) -> Self {
        Self::InvalidToken(err.to_string())
    }
}

impl From<AccessError> for AppError {
    fn from(err: AccessError) -> Self {
        match err {
            e @ AccessError::InvalidToken(_) => Self::Unauthorized(e.to_string()),
            e @ AccessError::Forbidden { .. } => Self::Forbidden(e.to_string()),
        }
    }
}
