use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Service error variants, one per failure the API can report.
#[derive(Debug, thiserror::Error)]
pub enum AuthServiceError {
    #[error("email missing from request")]
    MissingEmail,
    #[error("email or otp missing from request")]
    MissingCredentials,
    #[error("no pending otp")]
    UnknownOtp,
    #[error("otp expired")]
    ExpiredOtp,
    #[error("otp mismatch")]
    InvalidOtp,
    #[error("otp delivery failed")]
    Delivery(#[source] anyhow::Error),
    #[error("authorization token missing")]
    MissingToken,
    #[error("authorization token invalid")]
    InvalidToken,
    #[error("otp request quota exceeded")]
    RateLimited,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl AuthServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingEmail => "MISSING_EMAIL",
            Self::MissingCredentials => "MISSING_CREDENTIALS",
            Self::UnknownOtp => "UNKNOWN_OTP",
            Self::ExpiredOtp => "EXPIRED_OTP",
            Self::InvalidOtp => "INVALID_OTP",
            Self::Delivery(_) => "DELIVERY",
            Self::MissingToken => "MISSING_TOKEN",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::RateLimited => "RATE_LIMITED",
            Self::Internal(_) => "INTERNAL",
        }
    }

    /// Message shown to the client. "Never requested" and "already consumed"
    /// share one message; the distinction stays server-side.
    fn client_message(&self) -> &'static str {
        match self {
            Self::MissingEmail => "Email diperlukan",
            Self::MissingCredentials => "Email dan OTP diperlukan",
            Self::UnknownOtp => "OTP tidak valid atau sudah kedaluwarsa",
            Self::ExpiredOtp => "OTP sudah kedaluwarsa",
            Self::InvalidOtp => "OTP tidak valid",
            Self::Delivery(_) => "Gagal mengirim OTP",
            Self::RateLimited => {
                "Terlalu banyak permintaan OTP dari IP ini, silakan coba lagi setelah 15 menit"
            }
            // 401/403 carry no body.
            Self::MissingToken | Self::InvalidToken => "",
            Self::Internal(_) => "Terjadi kesalahan pada server",
        }
    }
}

impl IntoResponse for AuthServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::MissingEmail
            | Self::MissingCredentials
            | Self::UnknownOtp
            | Self::ExpiredOtp
            | Self::InvalidOtp => StatusCode::BAD_REQUEST,
            Self::MissingToken => StatusCode::UNAUTHORIZED,
            Self::InvalidToken => StatusCode::FORBIDDEN,
            Self::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            Self::Delivery(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s with the anyhow chain so the root cause is traceable; the
        // client only ever sees the generic message. 4xx are expected client
        // errors and are already covered by the request trace layer.
        match &self {
            Self::Internal(e) => tracing::error!(error = %e, kind = "INTERNAL", "internal error"),
            Self::Delivery(e) => tracing::error!(error = %e, kind = "DELIVERY", "otp delivery failed"),
            _ => {}
        }
        // Auth failures on /profile carry a bare status; everything else
        // gets a {"message"} body.
        if matches!(self, Self::MissingToken | Self::InvalidToken) {
            return status.into_response();
        }
        let body = serde_json::json!({ "message": self.client_message() });
        (status, axum::Json(body)).into_response()
    }
}
