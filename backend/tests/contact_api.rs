use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use spectrum_backend::mail::Mailer;
use spectrum_backend::{app, AppState};

fn relay_app(mailer: Mailer) -> (Router, Arc<AppState>) {
    let state = Arc::new(AppState { mailer });
    (app(state.clone()), state)
}

async fn post_submission(app: Router, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/sendEmail")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

#[tokio::test]
async fn health_check_responds_ok() {
    let (app, _state) = relay_app(Mailer::accepting_stub());
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn valid_submission_is_relayed_once() {
    let (app, state) = relay_app(Mailer::accepting_stub());
    let (status, body) = post_submission(
        app,
        json!({
            "name": "Ada",
            "email": "ada@example.com",
            "subject": "Hi",
            "message": "Hello"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Email sent successfully"}));
    assert_eq!(state.mailer.delivery_attempts(), 1);
}

#[tokio::test]
async fn empty_field_is_rejected_without_delivery() {
    let (app, state) = relay_app(Mailer::accepting_stub());
    let (status, body) = post_submission(
        app,
        json!({
            "name": "",
            "email": "x@x.com",
            "subject": "s",
            "message": "m"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"message": "Missing required fields"}));
    assert_eq!(state.mailer.delivery_attempts(), 0);
}

#[tokio::test]
async fn absent_field_is_rejected_without_delivery() {
    let (app, state) = relay_app(Mailer::accepting_stub());
    let (status, body) = post_submission(
        app,
        json!({
            "name": "Ada",
            "email": "ada@example.com",
            "message": "no subject here"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"message": "Missing required fields"}));
    assert_eq!(state.mailer.delivery_attempts(), 0);
}

#[tokio::test]
async fn transport_failure_reports_server_error_without_retry() {
    let (app, state) = relay_app(Mailer::rejecting_stub());
    let (status, body) = post_submission(
        app,
        json!({
            "name": "Ada",
            "email": "ada@example.com",
            "subject": "Hi",
            "message": "Hello"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Error sending email");
    // The stub's reason is logged, not echoed to the client.
    assert_eq!(body["error"], "mail transport failure");
    assert_eq!(state.mailer.delivery_attempts(), 1);
}

#[tokio::test]
async fn whitespace_only_fields_are_rejected() {
    let (app, state) = relay_app(Mailer::accepting_stub());
    let (status, _body) = post_submission(
        app,
        json!({
            "name": "   ",
            "email": "x@x.com",
            "subject": "s",
            "message": "m"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(state.mailer.delivery_attempts(), 0);
}
