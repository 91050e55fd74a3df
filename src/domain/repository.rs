#![allow(async_fn_in_trait)]

use crate::domain::types::OtpRecord;
use crate::error::AuthServiceError;

/// Store for outstanding one-time passcodes, keyed by email.
pub trait OtpRepository: Send + Sync {
    /// Insert a record, or replace the existing one for the same email.
    /// Must be a single atomic insert-or-replace — two racing requests for
    /// one address leave exactly one intact record (last write wins), never
    /// a mix of old code and new expiry.
    async fn upsert(&self, record: &OtpRecord) -> Result<(), AuthServiceError>;

    /// Find the outstanding record for an email, expired or not.
    async fn find(&self, email: &str) -> Result<Option<OtpRecord>, AuthServiceError>;

    /// Remove the record for an email. Deleting a missing record is a no-op.
    async fn delete(&self, email: &str) -> Result<(), AuthServiceError>;
}

/// Port for out-of-band delivery of a passcode to its address.
pub trait OtpMailer: Send + Sync {
    fn send_otp(
        &self,
        to: &str,
        code: &str,
    ) -> impl Future<Output = Result<(), AuthServiceError>> + Send;
}
