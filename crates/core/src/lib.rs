//! Core business logic for RioCaja.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Persistence is reached through the store traits defined next to each
//! service; the `riocaja-db` crate implements them over PostgreSQL and
//! [`store::memory`] implements them in memory.
//!
//! # Modules
//!
//! - `auth` - Registration, password login and visibility scopes
//! - `receipts` - Scoped receipt storage and lookup
//! - `reports` - Daily closing reports
//! - `store` - Storage error type and in-memory stores

pub mod auth;
pub mod receipts;
pub mod reports;
pub mod store;
