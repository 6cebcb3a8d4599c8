//! Authentication and authorization.
//!
//! This module provides:
//! - Password hashing with Argon2id
//! - Registration and login against a [`CredentialStore`]
//! - Visibility scopes derived from token claims
//! - Role gating for admin-only operations

mod authenticator;
mod error;
mod password;
mod scope;
mod store;
mod types;


pub use authenticator::{MIN_PASSWORD_LENGTH, PasswordAuthenticator, normalize_email};
pub use error::{AccessError, AuthError};
pub use password::{
    PasswordError, hash_password, hash_password_async, verify_password, verify_password_async,
};
pub use riocaja_shared::auth::{Claims, Role, UserStatus};
pub use scope::{AccessScopePolicy, Scope};
pub use store::CredentialStore;
pub use types::{NewUser, UserProfile, UserRecord};
