//! Authentication routes for registration, login and identity.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::{get, post},
};
use riocaja_core::auth::{Claims, Role, UserProfile};
use riocaja_shared::{
    auth::{LoginRequest, LoginResponse, RegisterRequest},
    types::UserId,
};
use serde::Serialize;
use tracing::info;
use validator::Validate;

use crate::AppState;
use crate::error::ApiResult;
use crate::middleware::auth::AuthUser;

/// Registration acknowledgment.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    /// Human-readable confirmation.
    pub msg: &'static str,
    /// Identifier of the new user.
    #[serde(rename = "_id")]
    pub id: UserId,
}

/// User listing.
#[derive(Debug, Serialize)]
pub struct UsersResponse {
    /// Users, oldest registration first.
    pub data: Vec<UserProfile>,
    /// Number of users.
    pub count: usize,
}

/// Creates the public auth router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
}

/// Creates the auth routes that need a verified token.
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/me", get(me))
        .route("/auth/users", get(list_users))
}

/// POST /auth/register - Register a new user.
async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> ApiResult<Json<RegisterResponse>> {
    let Json(payload) = payload?;
    payload.validate()?;

    let id = state
        .authenticator
        .register(
            &payload.name,
            &payload.email,
            &payload.password,
            payload.role.unwrap_or_default(),
        )
        .await?;

    Ok(Json(RegisterResponse {
        msg: "Usuario registrado",
        id,
    }))
}

/// POST /auth/login - Authenticate and issue an access token.
async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<LoginResponse>> {
    let Json(payload) = payload?;
    payload.validate()?;

    let user = state
        .authenticator
        .authenticate(&payload.email, &payload.password)
        .await?;

    let token = state.token_service.issue(user.id, &user.email, user.role)?;
    info!(user_id = %user.id, "Access token issued");

    Ok(Json(LoginResponse::bearer(
        token,
        state.token_service.expires_in(),
    )))
}

/// GET /auth/me - The caller's verified claims.
async fn me(user: AuthUser) -> Json<Claims> {
    Json(user.0)
}

/// GET /auth/users - Every registered user. Admin only.
async fn list_users(
    State(state): State<AppState>,
    user: AuthUser,
) -> ApiResult<Json<UsersResponse>> {
    user.require_role(&[Role::Admin])?;

    let data = state.authenticator.list_users().await?;
    Ok(Json(UsersResponse {
        count: data.len(),
        data,
    }))
}
