use std::sync::Arc;

use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::{info, Level};

use spectrum_backend::config::MailConfig;
use spectrum_backend::mail::Mailer;
use spectrum_backend::{app, AppState};

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let config = MailConfig::from_env().expect("mail configuration must be set");
    let mailer = Mailer::from_config(&config).expect("failed to build SMTP transport");

    let state = Arc::new(AppState { mailer });
    let app = app(state);

    let listener = TcpListener::bind("127.0.0.1:3001").await.unwrap();
    info!("contact relay listening on 127.0.0.1:3001");
    axum::serve(listener, app.into_make_service()).await.unwrap();
}
