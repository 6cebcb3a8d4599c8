//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - REST API routes
//! - Authentication middleware
//! - JSON error responses

pub mod error;
pub mod middleware;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use riocaja_core::auth::{CredentialStore, PasswordAuthenticator};
use riocaja_core::receipts::{ReceiptRepository, ReceiptStore};
use riocaja_core::reports::ReportAggregator;
use riocaja_shared::TokenService;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Registration and password login.
    pub authenticator: Arc<PasswordAuthenticator>,
    /// Scoped receipt access.
    pub receipts: ReceiptRepository,
    /// Closing reports.
    pub reports: ReportAggregator,
    /// JWT service for token operations.
    pub token_service: Arc<TokenService>,
}

impl AppState {
    /// Wires the services over the given stores.
    #[must_use]
    pub fn new(
        credentials: Arc<dyn CredentialStore>,
        receipts: Arc<dyn ReceiptStore>,
        token_service: TokenService,
    ) -> Self {
        let receipts = ReceiptRepository::new(receipts);
        Self {
            authenticator: Arc::new(PasswordAuthenticator::new(credentials)),
            reports: ReportAggregator::new(receipts.clone()),
            receipts,
            token_service: Arc::new(token_service),
        }
    }
}

/// Creates the main application router with every route under `prefix`.
pub fn create_router(state: AppState, prefix: &str) -> Router {
    let api = routes::api_routes_with_state(state.clone());
    let prefix = prefix.trim_end_matches('/');

    let router = if prefix.is_empty() {
        Router::new().merge(api)
    } else {
        Router::new().nest(prefix, api)
    };

    router
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
