use sea_orm::DatabaseConnection;

use crate::infra::db::DbOtpRepository;
use crate::infra::mail::SmtpMailer;

/// Shared application state passed to every handler via axum `State`.
/// Generic over the mailer so tests can inject a recording fake; production
/// uses the SMTP default.
#[derive(Clone)]
pub struct AppState<M = SmtpMailer> {
    pub db: DatabaseConnection,
    pub mailer: M,
    pub jwt_secret: String,
}

impl<M> AppState<M> {
    pub fn otp_repo(&self) -> DbOtpRepository {
        DbOtpRepository {
            db: self.db.clone(),
        }
    }
}
