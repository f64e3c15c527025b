// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use rowing_activities::config::Config;
use rowing_activities::db::ActivityStore;
use rowing_activities::eligibility::{EligibilityChain, FixedClock};
use rowing_activities::middleware::auth::create_jwt;
use rowing_activities::routes::create_router;
use rowing_activities::services::ActivityService;
use rowing_activities::AppState;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

/// Create a test app whose clock sits at the Unix epoch, so every
/// activity dated in the 2020s is far enough away for any lead time.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let (app, state, _) = create_test_app_with_clock(0);
    (app, state)
}

/// Create a test app with a controllable clock starting at `now_millis`.
#[allow(dead_code)]
pub fn create_test_app_with_clock(
    now_millis: i64,
) -> (axum::Router, Arc<AppState>, Arc<FixedClock>) {
    let config = Config::test_default();
    let clock = Arc::new(FixedClock::new(now_millis));
    let utc_offset = config.utc_offset().expect("test offset is valid");
    let chain = EligibilityChain::new(clock.clone(), utc_offset);

    let state = Arc::new(AppState {
        config,
        activity_service: ActivityService::new(ActivityStore::new(), chain),
    });

    (create_router(state.clone()), state, clock)
}

/// Create a test JWT token for `user_id`.
#[allow(dead_code)]
pub fn create_test_jwt(user_id: u64, signing_key: &[u8]) -> String {
    create_jwt(user_id, signing_key).expect("Failed to create JWT")
}

/// Send an authenticated request and decode the JSON response body.
/// Empty bodies decode to `Value::Null`.
#[allow(dead_code)]
pub async fn send(
    app: &axum::Router,
    token: &str,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token));

    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

/// Training on Monday 2024-01-01, 11:45-13:00, needing two coxes and
/// three coaches in a C4.
#[allow(dead_code)]
pub fn training_body() -> Value {
    json!({
        "activity_date": "2024-01-01",
        "start_time": "11:45",
        "end_time": "13:00",
        "required_positions": [
            { "position": "COX", "required_count": 2 },
            { "position": "COACH", "required_count": 3 }
        ],
        "boat_type": "C4"
    })
}

/// Same slot as `training_body`, restricted to professional men of "org".
#[allow(dead_code)]
pub fn competition_body() -> Value {
    let mut body = training_body();
    body["allowed_level"] = json!("PROFESSIONAL");
    body["allowed_gender"] = json!("MALE");
    body["organization"] = json!("org");
    body
}

/// Professional male cox of "org" with a C4 certificate, free on Mondays
/// from 10:30 to 14:20.
#[allow(dead_code)]
pub fn rower_body() -> Value {
    json!({
        "id": 1,
        "username": "matei",
        "first_name": "Matei",
        "last_name": "Ionescu",
        "organisation": "org",
        "certificate": "C4",
        "gender": "MALE",
        "level": "PROFESSIONAL",
        "position": "COX",
        "availabilities": [
            { "day_of_week": 1, "start_time": "10:30", "end_time": "14:20" }
        ]
    })
}
