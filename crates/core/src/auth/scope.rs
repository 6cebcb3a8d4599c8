//! Visibility scopes derived from verified claims.

use riocaja_shared::{Claims, Role, types::UserId};

use super::error::AccessError;

/// Which receipts an operation may see or touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Every receipt, regardless of owner.
    Unrestricted,
    /// Only receipts owned by this user.
    OwnedBy(UserId),
}

impl Scope {
    /// Owner every read is narrowed to, and every create is stamped with.
    #[must_use]
    pub const fn owner(&self) -> Option<UserId> {
        match self {
            Self::Unrestricted => None,
            Self::OwnedBy(user_id) => Some(*user_id),
        }
    }
}

/// Turns claims into scopes and gates role-restricted operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessScopePolicy;

impl AccessScopePolicy {
    /// Admins see everything; every other role sees only its own receipts.
    #[must_use]
    pub const fn scope_for(claims: &Claims) -> Scope {
        match claims.role {
            Role::Admin => Scope::Unrestricted,
            Role::Operator | Role::Reader => Scope::OwnedBy(claims.sub),
        }
    }

    /// Passes the claims through when their role is in `allowed`.
    ///
    /// # Errors
    ///
    /// Returns `AccessError::Forbidden` otherwise.
    pub fn require_role<'a>(
        claims: &'a Claims,
        allowed: &[Role],
    ) -> Result<&'a Claims, AccessError> {
        if allowed.contains(&claims.role) {
            Ok(claims)
        } else {
            Err(AccessError::Forbidden { role: claims.role })
        }
    }
}
