use std::net::{IpAddr, SocketAddr};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{ConnectInfo, Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};

use crate::domain::types::{OTP_RATE_LIMIT, OTP_RATE_WINDOW_SECS};
use crate::error::AuthServiceError;

pub type OtpRateLimiter = DefaultKeyedRateLimiter<IpAddr>;

/// Per-IP limiter for the issuance endpoint: a burst of [`OTP_RATE_LIMIT`]
/// requests, replenishing one permit every window/limit seconds — 5 requests
/// per rolling 15 minutes. The lifecycle core has no lockout of its own, so
/// this is the only bound on request volume.
pub fn otp_rate_limiter() -> Arc<OtpRateLimiter> {
    let replenish = Duration::from_secs(OTP_RATE_WINDOW_SECS / u64::from(OTP_RATE_LIMIT));
    let quota = Quota::with_period(replenish)
        .expect("nonzero replenish period")
        .allow_burst(NonZeroU32::new(OTP_RATE_LIMIT).expect("nonzero burst"));
    Arc::new(RateLimiter::keyed(quota))
}

/// Middleware for `POST /request-otp`. Requires the router to be served
/// with `into_make_service_with_connect_info::<SocketAddr>()`.
pub async fn otp_rate_limit(
    State(limiter): State<Arc<OtpRateLimiter>>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Request,
    next: Next,
) -> Response {
    if limiter.check_key(&addr.ip()).is_err() {
        return AuthServiceError::RateLimited.into_response();
    }
    next.run(request).await
}
