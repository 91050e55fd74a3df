use chrono::{DateTime, Utc};

/// Outstanding one-time passcode for an email address.
///
/// The store keys records by email, so issuing a new code for an address
/// that already has one replaces it; the old code is immediately invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpRecord {
    pub email: String,
    pub code: String,
    pub expires_at: DateTime<Utc>,
}

impl OtpRecord {
    /// Expiry is strict: a record is expired only once `now` has passed
    /// `expires_at`, so verification at the exact expiry instant succeeds.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

/// OTP time-to-live in seconds (5 minutes).
pub const OTP_TTL_SECS: i64 = 300;

/// Session token time-to-live in seconds (1 hour).
pub const SESSION_TTL_SECS: u64 = 3600;

/// Maximum OTP requests per client IP within [`OTP_RATE_WINDOW_SECS`].
pub const OTP_RATE_LIMIT: u32 = 5;

/// Rolling rate-limit window in seconds (15 minutes).
pub const OTP_RATE_WINDOW_SECS: u64 = 900;
