// The fixed probe battery for the order & subscription backend: checkout,
// billing portal, subscription lookup, magic-link auth, user sync, and the
// Stripe webhook. Pure configuration data consumed by the harness.
use serde_json::json;

use crate::harness::TestCase;

pub fn default_battery() -> Vec<TestCase> {
    vec![
        // --- checkout ---
        TestCase::post("checkout - create session", "/api/checkout")
            .with_body(json!({
                "email": "probe@example.com",
                "inboxCount": 1
            }))
            .check(|body| {
                body["url"]
                    .as_str()
                    .is_some_and(|url| url.starts_with("https://checkout.stripe.com"))
            }),
        TestCase::post("checkout - missing email", "/api/checkout")
            .with_body(json!({ "inboxCount": 1 }))
            .expect_status([400]),
        TestCase::post("checkout - missing inbox count", "/api/checkout")
            .with_body(json!({ "email": "probe@example.com" }))
            .expect_status([400]),
        // --- checkout session lookup ---
        TestCase::get("checkout session - missing session id", "/api/checkout/session")
            .expect_status([400]),
        // Upstream Stripe lookups surface invalid ids as 500; some deployments
        // validate earlier and answer 400/404 instead.
        TestCase::get(
            "checkout session - invalid session id",
            "/api/checkout/session?session_id=invalid_session",
        )
        .expect_status([500])
        .accept_alternate([400, 404]),
        // --- billing portal ---
        TestCase::post("billing portal - missing customer id", "/api/billing-portal")
            .with_body(json!({}))
            .expect_status([400]),
        TestCase::post("billing portal - invalid customer id", "/api/billing-portal")
            .with_body(json!({ "customerId": "cus_invalid_customer_id" }))
            .expect_status([500])
            .accept_alternate([400]),
        // --- subscription lookup ---
        TestCase::get("subscription - missing user id", "/api/subscription")
            .expect_status([400]),
        TestCase::get(
            "subscription - unknown user returns null",
            "/api/subscription?user_id=non_existent_user",
        )
        .check(|body| {
            body.get("subscription")
                .is_some_and(serde_json::Value::is_null)
        }),
        // --- magic-link auth ---
        TestCase::post("auth login - missing email", "/api/auth/login")
            .with_body(json!({}))
            .expect_status([400]),
        // Upstream auth may reject the address under strict validation.
        TestCase::post("auth login - magic link", "/api/auth/login")
            .with_body(json!({ "email": "probe@example.com" }))
            .accept_alternate([400])
            .check(|body| body["success"] == json!(true)),
        // --- auth sync ---
        TestCase::post("auth sync - missing id", "/api/auth/sync")
            .with_body(json!({ "email": "probe@example.com" }))
            .expect_status([400]),
        TestCase::post("auth sync - upsert user", "/api/auth/sync")
            .with_body(json!({
                "id": "probe-user-id-12345",
                "email": "probe@example.com"
            }))
            .check(|body| body["success"] == json!(true)),
        // --- stripe webhook ---
        TestCase::post("webhook - checkout session completed", "/api/webhooks/stripe")
            .with_body(json!({
                "type": "checkout.session.completed",
                "data": {
                    "object": {
                        "id": "cs_test_12345",
                        "customer_email": "probe@example.com",
                        "customer": "cus_test_12345",
                        "subscription": "sub_test_12345",
                        "metadata": {
                            "inbox_count": "2",
                            "email": "probe@example.com"
                        }
                    }
                }
            }))
            .check(|body| body["received"] == json!(true)),
        TestCase::post("webhook - subscription updated", "/api/webhooks/stripe")
            .with_body(json!({
                "type": "customer.subscription.updated",
                "data": {
                    "object": {
                        "id": "sub_test_12345",
                        "status": "active",
                        "current_period_end": 1_643_723_400
                    }
                }
            })),
    ]
}
