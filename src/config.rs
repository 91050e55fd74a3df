/// Service configuration loaded from environment variables.
#[derive(Debug)]
pub struct AppConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// SMTP relay host (default "smtp.gmail.com"). Env var: `SMTP_HOST`.
    pub smtp_host: String,
    /// SMTP username; also used as the From address. Env var: `EMAIL_USER`.
    pub email_user: String,
    /// SMTP password. Env var: `EMAIL_PASS`.
    pub email_pass: String,
    /// HMAC secret for signing session tokens.
    pub jwt_secret: String,
    /// TCP port to listen on (default 3000). Env var: `PORT`.
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            smtp_host: std::env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_owned()),
            email_user: std::env::var("EMAIL_USER").expect("EMAIL_USER"),
            email_pass: std::env::var("EMAIL_PASS").expect("EMAIL_PASS"),
            jwt_secret: std::env::var("JWT_SECRET").expect("JWT_SECRET"),
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
        }
    }
}
