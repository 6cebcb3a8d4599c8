//! Shared types, errors, and configuration for RioCaja.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for users and receipts
//! - Session claims and roles carried by access tokens
//! - The token service that signs and verifies those claims
//! - Application-wide error types
//! - Configuration management

pub mod auth;
pub mod config;
pub mod error;
pub mod jwt;
pub mod types;

#[cfg(test)]
mod jwt_tests;

pub use auth::{Claims, Role, UserStatus};
pub use config::AppConfig;
pub use error::AppError;
pub use jwt::{JwtConfig, JwtError, TokenService};
