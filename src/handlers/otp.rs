use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::domain::repository::OtpMailer;
use crate::error::AuthServiceError;
use crate::state::AppState;
use crate::usecase::otp::{
    RequestOtpInput, RequestOtpUseCase, VerifyOtpInput, VerifyOtpUseCase,
};

// Fields are optional so a missing field reaches the usecase's validation
// (400 with a readable message) instead of axum's deserialize rejection.
#[derive(Deserialize)]
pub struct RequestOtpRequest {
    pub email: Option<String>,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

pub async fn request_otp<M>(
    State(state): State<AppState<M>>,
    Json(body): Json<RequestOtpRequest>,
) -> Result<Json<MessageResponse>, AuthServiceError>
where
    M: OtpMailer + Clone + Send + Sync + 'static,
{
    let usecase = RequestOtpUseCase {
        otps: state.otp_repo(),
        mailer: state.mailer.clone(),
    };
    usecase
        .execute(RequestOtpInput {
            email: body.email.unwrap_or_default(),
        })
        .await?;
    Ok(Json(MessageResponse {
        message: "OTP berhasil dikirim ke email Anda",
    }))
}

#[derive(Deserialize)]
pub struct VerifyOtpRequest {
    pub email: Option<String>,
    pub otp: Option<String>,
}

#[derive(Serialize)]
pub struct VerifyOtpResponse {
    pub message: &'static str,
    pub token: String,
}

pub async fn verify_otp<M>(
    State(state): State<AppState<M>>,
    Json(body): Json<VerifyOtpRequest>,
) -> Result<Json<VerifyOtpResponse>, AuthServiceError>
where
    M: Clone + Send + Sync + 'static,
{
    let usecase = VerifyOtpUseCase {
        otps: state.otp_repo(),
        jwt_secret: state.jwt_secret.clone(),
    };
    let out = usecase
        .execute(VerifyOtpInput {
            email: body.email.unwrap_or_default(),
            otp: body.otp.unwrap_or_default(),
        })
        .await?;
    Ok(Json(VerifyOtpResponse {
        message: "Login berhasil",
        token: out.token,
    }))
}
