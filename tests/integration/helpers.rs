use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{Duration, Utc};

use otp_auth::domain::repository::{OtpMailer, OtpRepository};
use otp_auth::domain::types::OtpRecord;
use otp_auth::error::AuthServiceError;

// ── MockOtpRepo ──────────────────────────────────────────────────────────────

/// In-memory store keyed by email; upsert replaces under a single lock,
/// mirroring the database's atomic insert-or-replace.
#[derive(Clone, Default)]
pub struct MockOtpRepo {
    records: Arc<Mutex<HashMap<String, OtpRecord>>>,
}

impl MockOtpRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(record: OtpRecord) -> Self {
        let repo = Self::new();
        repo.records
            .lock()
            .unwrap()
            .insert(record.email.clone(), record);
        repo
    }

    pub fn get(&self, email: &str) -> Option<OtpRecord> {
        self.records.lock().unwrap().get(email).cloned()
    }

    pub fn record_count(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

impl OtpRepository for MockOtpRepo {
    async fn upsert(&self, record: &OtpRecord) -> Result<(), AuthServiceError> {
        self.records
            .lock()
            .unwrap()
            .insert(record.email.clone(), record.clone());
        Ok(())
    }

    async fn find(&self, email: &str) -> Result<Option<OtpRecord>, AuthServiceError> {
        Ok(self.records.lock().unwrap().get(email).cloned())
    }

    async fn delete(&self, email: &str) -> Result<(), AuthServiceError> {
        self.records.lock().unwrap().remove(email);
        Ok(())
    }
}

// ── MockMailer ───────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockMailer {
    sent: Arc<Mutex<Vec<(String, String)>>>,
    fail: bool,
}

impl MockMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A mailer whose every send fails, leaving nothing recorded.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }

    /// Code of the most recently delivered OTP, if any.
    pub fn last_code(&self) -> Option<String> {
        self.sent.lock().unwrap().last().map(|(_, code)| code.clone())
    }
}

impl OtpMailer for MockMailer {
    async fn send_otp(&self, to: &str, code: &str) -> Result<(), AuthServiceError> {
        if self.fail {
            return Err(AuthServiceError::Delivery(anyhow::anyhow!(
                "smtp unavailable"
            )));
        }
        self.sent
            .lock()
            .unwrap()
            .push((to.to_owned(), code.to_owned()));
        Ok(())
    }
}

// ── Test fixture helpers ─────────────────────────────────────────────────────

pub fn pending_record(email: &str, code: &str) -> OtpRecord {
    OtpRecord {
        email: email.to_owned(),
        code: code.to_owned(),
        expires_at: Utc::now() + Duration::seconds(300),
    }
}

pub fn expired_record(email: &str, code: &str) -> OtpRecord {
    OtpRecord {
        email: email.to_owned(),
        code: code.to_owned(),
        expires_at: Utc::now() - Duration::seconds(1),
    }
}

pub const TEST_JWT_SECRET: &str = "test-jwt-secret-for-unit-tests-only";
