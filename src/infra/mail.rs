use anyhow::Context as _;
use lettre::message::header::ContentType;
use lettre::message::{Mailbox, Message};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};

use crate::config::AppConfig;
use crate::domain::repository::OtpMailer;
use crate::error::AuthServiceError;

/// SMTP-backed OTP delivery.
#[derive(Clone)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn new(transport: AsyncSmtpTransport<Tokio1Executor>, from: Mailbox) -> Self {
        Self { transport, from }
    }

    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
            .context("invalid SMTP host")?
            .credentials(Credentials::new(
                config.email_user.clone(),
                config.email_pass.clone(),
            ))
            .build();
        let from = format!("OTP Auth <{}>", config.email_user)
            .parse()
            .context("invalid EMAIL_USER address")?;
        Ok(Self { transport, from })
    }

    async fn try_send(&self, to: &str, code: &str) -> anyhow::Result<()> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(to.parse().context("invalid recipient address")?)
            .subject("Kode OTP untuk Autentikasi")
            .header(ContentType::TEXT_HTML)
            .body(otp_email_html(code))
            .context("build otp email")?;
        self.transport.send(message).await.context("send otp email")?;
        Ok(())
    }
}

impl OtpMailer for SmtpMailer {
    async fn send_otp(&self, to: &str, code: &str) -> Result<(), AuthServiceError> {
        self.try_send(to, code)
            .await
            .map_err(AuthServiceError::Delivery)
    }
}

/// HTML body for the OTP email.
fn otp_email_html(code: &str) -> String {
    // Delimiter must be wider than one hash: the HTML contains `bgcolor="#..."`.
    format!(
        r##"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
</head>
<body style="margin: 0; padding: 0; background-color: #f4f4f4;">
    <table align="center" border="0" cellpadding="0" cellspacing="0" width="600" style="border-collapse: collapse; margin: 20px auto; border: 1px solid #cccccc;">
        <tr>
            <td align="center" bgcolor="#007bff" style="padding: 40px 0; color: #ffffff; font-size: 28px; font-weight: bold; font-family: Arial, sans-serif;">
                Verifikasi Akun Anda
            </td>
        </tr>
        <tr>
            <td bgcolor="#ffffff" style="padding: 40px 30px;">
                <h1 style="font-size: 24px; margin: 0; font-family: Arial, sans-serif;">Kode OTP Anda</h1>
                <p style="margin: 20px 0; font-size: 16px; line-height: 1.5; font-family: Arial, sans-serif;">
                    Halo,
                    <br><br>
                    Gunakan kode berikut untuk menyelesaikan proses login Anda. Jangan bagikan kode ini kepada siapa pun.
                </p>
                <table align="center" border="0" cellpadding="0" cellspacing="0" style="margin: 20px auto;">
                    <tr>
                        <td align="center" bgcolor="#e9ecef" style="padding: 15px 25px; font-size: 32px; font-weight: bold; letter-spacing: 5px; font-family: 'Courier New', Courier, monospace; border-radius: 5px;">
                            {code}
                        </td>
                    </tr>
                </table>
                <p style="margin-top: 20px; font-size: 16px; font-family: Arial, sans-serif;">
                    Kode ini akan kedaluwarsa dalam 5 menit.
                </p>
            </td>
        </tr>
        <tr>
            <td bgcolor="#343a40" style="padding: 30px; text-align: center; color: #888888; font-size: 12px; font-family: Arial, sans-serif;">
                &copy; 2025 OTP Auth. Semua Hak Dilindungi.
                <br>
                Jika Anda tidak meminta kode ini, mohon abaikan email ini.
            </td>
        </tr>
    </table>
</body>
</html>"##
    )
}
