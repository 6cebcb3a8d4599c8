//! Shared helpers for the HTTP tests: a router over in-memory stores.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header::AUTHORIZATION, header::CONTENT_TYPE},
};
use http_body_util::BodyExt;
use riocaja_api::{AppState, create_router};
use riocaja_core::store::memory::{InMemoryCredentialStore, InMemoryReceiptStore};
use riocaja_shared::{JwtConfig, TokenService};
use serde_json::{Value, json};
use tower::ServiceExt;

pub const PREFIX: &str = "/api/v1";
pub const SECRET: &str = "test-secret-key-for-http-tests";

pub fn token_service() -> TokenService {
    TokenService::new(JwtConfig {
        secret: SECRET.to_string(),
        ..JwtConfig::default()
    })
}

pub fn create_test_app() -> Router {
    let state = AppState::new(
        Arc::new(InMemoryCredentialStore::new()),
        Arc::new(InMemoryReceiptStore::new()),
        token_service(),
    );
    create_router(state, PREFIX)
}

/// Sends one request and returns the status with the decoded JSON body.
pub async fn send(
    app: &Router,
    method: &str,
    path: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut request = Request::builder()
        .method(method)
        .uri(format!("{PREFIX}{path}"));
    if let Some(token) = token {
        request = request.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => request
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

pub async fn register(app: &Router, email: &str, role: &str) -> Value {
    let (status, body) = send(
        app,
        "POST",
        "/auth/register",
        None,
        Some(json!({
            "nombre": "Test User",
            "email": email,
            "password": "password123",
            "rol": role
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "register failed: {body}");
    body
}

pub async fn login(app: &Router, email: &str, password: &str) -> (StatusCode, Value) {
    send(
        app,
        "POST",
        "/auth/login",
        None,
        Some(json!({ "email": email, "password": password })),
    )
    .await
}

/// Registers a user and returns a bearer token for them.
pub async fn register_and_login(app: &Router, email: &str, role: &str) -> String {
    register(app, email, role).await;
    let (status, body) = login(app, email, "password123").await;
    assert_eq!(status, StatusCode::OK, "login failed: {body}");
    body["access_token"].as_str().unwrap().to_string()
}

pub fn receipt_body(number: &str, date: &str, kind: &str, value: &str) -> Value {
    json!({
        "banco": "Banco Pichincha",
        "fecha": date,
        "hora": "10:15:00",
        "tipo": kind,
        "nro_transaccion": number,
        "nro_control": "C-001",
        "local": "Riobamba Centro",
        "corresponsal": "CNB-17",
        "tipo_cuenta": "Ahorros",
        "valor_total": value,
        "full_text": ""
    })
}
