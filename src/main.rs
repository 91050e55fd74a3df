use std::net::SocketAddr;

use sea_orm::Database;
use tracing::info;

use otp_auth::config::AppConfig;
use otp_auth::infra::mail::SmtpMailer;
use otp_auth::router::build_router;
use otp_auth::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let mailer = SmtpMailer::from_config(&config).expect("failed to build SMTP transport");

    let state = AppState {
        db,
        mailer,
        jwt_secret: config.jwt_secret,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("otp-auth listening on {addr}");
    // ConnectInfo feeds the per-IP rate limiter.
    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .expect("server error");
}
