//! Session token issuing and verification.
//!
//! Tokens are HMAC-signed JWTs carrying [`Claims`]. Verification only answers
//! "is this token authentic and unexpired"; role checks happen elsewhere.

use chrono::{DateTime, TimeDelta, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use thiserror::Error;

use crate::auth::{Claims, Role};
use crate::config::JwtSettings;
use crate::types::UserId;

/// Longest accepted access token lifetime: one year.
pub const MAX_ACCESS_TOKEN_EXPIRY_SECS: i64 = 366 * 24 * 60 * 60;

/// Runtime token configuration.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Secret key for signing tokens.
    pub secret: String,
    /// HMAC algorithm used to sign and verify.
    pub algorithm: Algorithm,
    /// Access token lifetime in seconds.
    pub access_token_expires_secs: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: "change-me-in-production".to_string(),
            algorithm: Algorithm::HS256,
            access_token_expires_secs: 30 * 60,
        }
    }
}

impl TryFrom<&JwtSettings> for JwtConfig {
    type Error = JwtError;

    fn try_from(settings: &JwtSettings) -> Result<Self, Self::Error> {
        let algorithm = settings
            .algorithm
            .parse::<Algorithm>()
            .map_err(|_| JwtError::UnsupportedAlgorithm(settings.algorithm.clone()))?;
        if !matches!(
            algorithm,
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512
        ) {
            return Err(JwtError::UnsupportedAlgorithm(settings.algorithm.clone()));
        }

        let access_token_expires_secs = i64::try_from(settings.access_token_expiry_secs)
            .ok()
            .filter(|secs| (1..=MAX_ACCESS_TOKEN_EXPIRY_SECS).contains(secs))
            .ok_or(JwtError::InvalidExpiry(settings.access_token_expiry_secs))?;

        Ok(Self {
            secret: settings.secret.clone(),
            algorithm,
            access_token_expires_secs,
        })
    }
}

/// Errors that can occur during token operations.
#[derive(Debug, Error)]
pub enum JwtError {
    /// Token encoding failed.
    #[error("failed to encode token: {0}")]
    Encoding(String),

    /// Token has expired.
    #[error("token has expired")]
    Expired,

    /// Signature mismatch, malformed token, or missing claims.
    #[error("invalid token: {0}")]
    Invalid(String),

    /// The configured lifetime is zero or longer than a year.
    #[error("access token expiry out of range: {0}s")]
    InvalidExpiry(u64),

    /// The configured algorithm is not an HMAC algorithm.
    #[error("unsupported signing algorithm: {0}")]
    UnsupportedAlgorithm(String),
}

/// Issues and verifies signed session tokens.
#[derive(Clone)]
pub struct TokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("algorithm", &self.config.algorithm)
            .field("expires_secs", &self.config.access_token_expires_secs)
            .field("keys", &"[hidden]")
            .finish()
    }
}

impl TokenService {
    /// Creates a token service with the given configuration.
    #[must_use]
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());
        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Issues an access token for the configured lifetime.
    ///
    /// # Errors
    ///
    /// Returns `JwtError::Encoding` if signing fails or the expiry instant
    /// is not representable.
    pub fn issue(&self, user_id: UserId, email: &str, role: Role) -> Result<String, JwtError> {
        let secs = self.config.access_token_expires_secs;
        let expires_at = TimeDelta::try_seconds(secs)
            .and_then(|lifetime| Utc::now().checked_add_signed(lifetime))
            .ok_or_else(|| JwtError::Encoding(format!("expiry of {secs}s is out of range")))?;
        self.issue_until(user_id, email, role, expires_at)
    }

    /// Issues a token expiring at an explicit instant.
    ///
    /// # Errors
    ///
    /// Returns `JwtError::Encoding` if signing fails.
    pub fn issue_until(
        &self,
        user_id: UserId,
        email: &str,
        role: Role,
        expires_at: DateTime<Utc>,
    ) -> Result<String, JwtError> {
        let claims = Claims::new(user_id, email, role, expires_at);
        encode(
            &Header::new(self.config.algorithm),
            &claims,
            &self.encoding_key,
        )
        .map_err(|e| JwtError::Encoding(e.to_string()))
    }

    /// Verifies a token and returns its claims.
    ///
    /// # Errors
    ///
    /// Returns `JwtError::Expired` once `exp` has passed (no leeway) and
    /// `JwtError::Invalid` for anything else that fails verification.
    pub fn verify(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(self.config.algorithm);
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => JwtError::Expired,
                _ => JwtError::Invalid(e.to_string()),
            })
    }

    /// Returns the access token lifetime in seconds.
    #[must_use]
    pub const fn expires_in(&self) -> i64 {
        self.config.access_token_expires_secs
    }
}
