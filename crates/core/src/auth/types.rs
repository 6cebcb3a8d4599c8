//! User identity records.

use chrono::{DateTime, Utc};
use riocaja_shared::{Role, UserStatus, types::UserId};
use serde::Serialize;

/// A user about to be stored. The store assigns the identifier.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Display name.
    pub name: String,
    /// Normalized email.
    pub email: String,
    /// Argon2id digest.
    pub password_hash: String,
    /// Role.
    pub role: Role,
    /// Status.
    pub status: UserStatus,
    /// Registration time.
    pub registered_at: DateTime<Utc>,
}

/// A stored user, digest included. Never serialized.
#[derive(Debug, Clone)]
pub struct UserRecord {
    /// Identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Normalized email.
    pub email: String,
    /// Argon2id digest.
    pub password_hash: String,
    /// Role.
    pub role: Role,
    /// Status.
    pub status: UserStatus,
    /// Registration time.
    pub registered_at: DateTime<Utc>,
    /// Failed logins so far. Only ever incremented.
    pub failed_login_attempts: u32,
    /// Password recovery token, if one was issued.
    pub recovery_token: Option<String>,
}

/// Public view of a user: what login returns and what admins can list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    /// Identifier.
    #[serde(rename = "_id")]
    pub id: UserId,
    /// Display name.
    #[serde(rename = "nombre")]
    pub name: String,
    /// Email.
    pub email: String,
    /// Role.
    #[serde(rename = "rol")]
    pub role: Role,
    /// Status.
    #[serde(rename = "estado")]
    pub status: UserStatus,
    /// Registration time.
    #[serde(rename = "fecha_registro")]
    pub registered_at: DateTime<Utc>,
    /// Failed logins so far.
    #[serde(rename = "intentos_fallidos")]
    pub failed_login_attempts: u32,
}

impl From<UserRecord> for UserProfile {
    fn from(user: UserRecord) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            status: user.status,
            registered_at: user.registered_at,
            failed_login_attempts: user.failed_login_attempts,
        }
    }
}
