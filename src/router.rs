use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::domain::repository::OtpMailer;
use crate::handlers::{otp::request_otp, otp::verify_otp, profile::profile};
use crate::health::{healthz, readyz};
use crate::middleware::request_id_layer;
use crate::rate_limit::{otp_rate_limit, otp_rate_limiter};
use crate::state::AppState;

pub fn build_router<M>(state: AppState<M>) -> Router
where
    M: OtpMailer + Clone + Send + Sync + 'static,
{
    // Per-IP quota applies to issuance only; verification retries are
    // unbounded.
    let limiter = otp_rate_limiter();

    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // OTP lifecycle
        .route(
            "/request-otp",
            post(request_otp::<M>).route_layer(from_fn_with_state(limiter, otp_rate_limit)),
        )
        .route("/verify-otp", post(verify_otp::<M>))
        // Authenticated profile
        .route("/profile", get(profile::<M>))
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(TraceLayer::new_for_http()),
        )
        .with_state(state)
}
