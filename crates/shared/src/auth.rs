//! Authentication types: roles, session claims, and auth payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::UserId;

/// Role of a user. Serialized with the names the mobile client already sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Role {
    /// Back-office staff; sees and manages every receipt.
    #[serde(rename = "admin")]
    Admin,
    /// Teller recording receipts.
    #[serde(rename = "operador", alias = "operator")]
    Operator,
    /// Read-mostly account. Default for self-registration.
    #[default]
    #[serde(rename = "lector", alias = "reader")]
    Reader,
}

impl Role {
    /// Wire name of the role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Operator => "operador",
            Self::Reader => "lector",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Account status. Stored and reported, not enforced at login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UserStatus {
    /// Active account.
    #[default]
    #[serde(rename = "activo")]
    Active,
    /// Deactivated account.
    #[serde(rename = "inactivo")]
    Inactive,
}

/// JWT claims for access tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID).
    pub sub: UserId,
    /// Email the user logged in with (normalized).
    pub email: String,
    /// Role at the time the token was issued.
    #[serde(rename = "rol")]
    pub role: Role,
    /// Issued at timestamp.
    pub iat: i64,
    /// Expiration timestamp.
    pub exp: i64,
}

impl Claims {
    /// Creates claims that expire at `expires_at`.
    #[must_use]
    pub fn new(user_id: UserId, email: &str, role: Role, expires_at: DateTime<Utc>) -> Self {
        Self {
            sub: user_id,
            email: email.to_string(),
            role,
            iat: Utc::now().timestamp(),
            exp: expires_at.timestamp(),
        }
    }

    /// Returns the user ID from claims.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.sub
    }
}

/// Registration request payload.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Display name.
    #[serde(rename = "nombre")]
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    /// User email.
    #[validate(email(message = "email is not valid"))]
    pub email: String,
    /// Plaintext password. Length rules live in the authenticator.
    pub password: String,
    /// Requested role, `lector` when omitted.
    #[serde(rename = "rol", default)]
    pub role: Option<Role>,
}

/// Login request payload.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    /// User email.
    #[validate(email(message = "email is not valid"))]
    pub email: String,
    /// User password.
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Signed bearer token.
    pub access_token: String,
    /// Always `"bearer"`.
    pub token_type: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
}

impl LoginResponse {
    /// Wraps a freshly issued bearer token.
    #[must_use]
    pub fn bearer(access_token: String, expires_in: i64) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
            expires_in,
        }
    }
}
