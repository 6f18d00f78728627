use std::collections::HashMap;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::extract::Query;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

/// In-process stand-in for the deployed backend the battery probes. Serves
/// the checkout/billing/subscription/auth/webhook surface with the observed
/// happy-path and validation responses, plus a few routes that exist only to
/// exercise classification edges.
pub struct StubBackend {
    pub base_url: String,
}

pub async fn spawn_backend() -> Result<StubBackend> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .context("failed to bind stub backend")?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        axum::serve(listener, app()).await.expect("stub backend");
    });

    Ok(StubBackend {
        base_url: format!("http://{}", addr),
    })
}

fn app() -> Router {
    Router::new()
        .route("/api/checkout", post(checkout_create))
        .route("/api/checkout/session", get(checkout_session))
        .route("/api/billing-portal", post(billing_portal))
        .route("/api/subscription", get(subscription))
        .route("/api/auth/login", post(auth_login))
        .route("/api/auth/sync", post(auth_sync))
        .route("/api/webhooks/stripe", post(stripe_webhook))
        // Classification-edge routes, not part of the real surface
        .route("/api/flaky", get(flaky))
        .route("/api/notjson", get(not_json))
        .route("/api/subscription-active", get(subscription_active))
        .route("/api/slow", get(slow))
}

async fn checkout_create(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body.get("email").and_then(Value::as_str).is_none() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "email is required" })),
        );
    }
    if body.get("inboxCount").and_then(Value::as_u64).is_none() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "inboxCount is required" })),
        );
    }
    (
        StatusCode::OK,
        Json(json!({
            "url": "https://checkout.stripe.com/c/pay/cs_test_stub_session",
            "sessionId": "cs_test_stub_session"
        })),
    )
}

async fn checkout_session(
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    match params.get("session_id") {
        None => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "session_id is required" })),
        ),
        Some(id) if id.starts_with("cs_") => (
            StatusCode::OK,
            Json(json!({ "id": id, "payment_status": "paid" })),
        ),
        Some(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "no such session" })),
        ),
    }
}

async fn billing_portal(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    match body.get("customerId").and_then(Value::as_str) {
        None => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "customerId is required" })),
        ),
        Some(id) if id.starts_with("cus_invalid") => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "no such customer" })),
        ),
        Some(_) => (
            StatusCode::OK,
            Json(json!({ "url": "https://billing.stripe.com/session/stub" })),
        ),
    }
}

async fn subscription(Query(params): Query<HashMap<String, String>>) -> (StatusCode, Json<Value>) {
    if params.get("user_id").is_none() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "user_id is required" })),
        );
    }
    (StatusCode::OK, Json(json!({ "subscription": null })))
}

async fn auth_login(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body.get("email").and_then(Value::as_str).is_none() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "email is required" })),
        );
    }
    (StatusCode::OK, Json(json!({ "success": true })))
}

async fn auth_sync(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body.get("id").and_then(Value::as_str).is_none() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "id is required" })),
        );
    }
    (StatusCode::OK, Json(json!({ "success": true })))
}

async fn stripe_webhook(Json(_event): Json<Value>) -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "received": true })))
}

async fn flaky() -> (StatusCode, Json<Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "upstream exploded" })),
    )
}

async fn not_json() -> (StatusCode, &'static str) {
    (StatusCode::OK, "<html>definitely not json</html>")
}

async fn subscription_active() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({ "subscription": { "status": "active" } })),
    )
}

async fn slow() -> (StatusCode, Json<Value>) {
    tokio::time::sleep(Duration::from_secs(5)).await;
    (StatusCode::OK, Json(json!({ "ok": true })))
}
