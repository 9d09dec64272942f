use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub mod config;
pub mod mail;
pub mod handlers {
    pub mod contact_handlers;
}

use handlers::contact_handlers;
use mail::Mailer;

pub struct AppState {
    pub mailer: Mailer,
}

async fn health_check() -> &'static str {
    "OK"
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/sendEmail", post(contact_handlers::send_email))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(
            CorsLayer::new()
                .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
                .allow_origin(Any) // dev posture; restrict to the site origin in production
                .allow_headers([axum::http::header::CONTENT_TYPE]),
        )
        .with_state(state)
}
