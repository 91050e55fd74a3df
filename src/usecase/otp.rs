use chrono::{Duration, Utc};
use rand::RngExt;

use crate::domain::repository::{OtpMailer, OtpRepository};
use crate::domain::types::{OTP_TTL_SECS, OtpRecord};
use crate::error::AuthServiceError;
use crate::usecase::token::issue_session_token;

/// 6-digit decimal code, uniform over 100000–999999.
///
/// The thread-local rng is a CSPRNG; the code lives in a 900 000-value
/// space, so guessing resistance rests entirely on the generator and the
/// issuance-side rate limit.
pub fn generate_otp() -> String {
    let mut rng = rand::rng();
    rng.random_range(100_000..=999_999u32).to_string()
}

// ── RequestOtp ───────────────────────────────────────────────────────────────

pub struct RequestOtpInput {
    pub email: String,
}

pub struct RequestOtpUseCase<O, M>
where
    O: OtpRepository,
    M: OtpMailer,
{
    pub otps: O,
    pub mailer: M,
}

impl<O, M> RequestOtpUseCase<O, M>
where
    O: OtpRepository,
    M: OtpMailer,
{
    pub async fn execute(&self, input: RequestOtpInput) -> Result<(), AuthServiceError> {
        if input.email.trim().is_empty() {
            return Err(AuthServiceError::MissingEmail);
        }

        let record = OtpRecord {
            email: input.email,
            code: generate_otp(),
            expires_at: Utc::now() + Duration::seconds(OTP_TTL_SECS),
        };

        // Store first, then deliver. A failed delivery keeps the stored
        // record; a resend request simply replaces it.
        self.otps.upsert(&record).await?;
        self.mailer.send_otp(&record.email, &record.code).await?;
        Ok(())
    }
}

// ── VerifyOtp ────────────────────────────────────────────────────────────────

pub struct VerifyOtpInput {
    pub email: String,
    pub otp: String,
}

#[derive(Debug)]
pub struct VerifyOtpOutput {
    pub email: String,
    pub token: String,
}

pub struct VerifyOtpUseCase<O: OtpRepository> {
    pub otps: O,
    pub jwt_secret: String,
}

impl<O: OtpRepository> VerifyOtpUseCase<O> {
    pub async fn execute(&self, input: VerifyOtpInput) -> Result<VerifyOtpOutput, AuthServiceError> {
        if input.email.trim().is_empty() || input.otp.trim().is_empty() {
            return Err(AuthServiceError::MissingCredentials);
        }

        // "Never requested" and "already consumed" are indistinguishable to
        // the client.
        let record = self
            .otps
            .find(&input.email)
            .await?
            .ok_or(AuthServiceError::UnknownOtp)?;

        if record.is_expired(Utc::now()) {
            self.otps.delete(&input.email).await?;
            return Err(AuthServiceError::ExpiredOtp);
        }

        // A wrong code leaves the record pending; local retries are bounded
        // only by the issuance-side rate limiter.
        if record.code != input.otp {
            return Err(AuthServiceError::InvalidOtp);
        }

        // Consume before issuing, so the code is single-use.
        self.otps.delete(&input.email).await?;

        let token = issue_session_token(&input.email, &self.jwt_secret)?;
        Ok(VerifyOtpOutput {
            email: input.email,
            token,
        })
    }
}
