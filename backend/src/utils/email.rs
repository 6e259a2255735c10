use anyhow::Result;
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::SmtpConfig;

/// Outgoing mail used by the account flows.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send_password_reset_email(&self, to_email: &str, reset_link: &str) -> Result<()>;
}

pub struct EmailService {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
    skip_send: bool,
}

impl EmailService {
    pub fn new(smtp: &SmtpConfig) -> Result<Self> {
        let mailer = if smtp.username.is_empty() {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&smtp.host)
                .port(smtp.port)
                .build()
        } else {
            let creds = Credentials::new(smtp.username.clone(), smtp.password.clone());
            AsyncSmtpTransport::<Tokio1Executor>::relay(&smtp.host)?
                .port(smtp.port)
                .credentials(creds)
                .build()
        };

        Ok(Self {
            mailer,
            from_address: smtp.from_address.clone(),
            skip_send: smtp.skip_send,
        })
    }
}

/// Link mailed to the user; the token travels as a query parameter.
pub fn reset_link(frontend_url: &str, token: &str) -> String {
    format!(
        "{}/resetpassword?token={}",
        frontend_url.trim_end_matches('/'),
        token
    )
}

fn password_reset_body(reset_link: &str, ttl_hint: &str) -> String {
    format!(
        r#"
We received a request to reset the password for your Rakshak account.

Open the link below to choose a new password:

{}

{}

If you did not request this, you can ignore this email.

---
Rakshak Disaster Response Portal
"#,
        reset_link, ttl_hint
    )
}

#[async_trait]
impl Mailer for EmailService {
    async fn send_password_reset_email(&self, to_email: &str, reset_link: &str) -> Result<()> {
        if self.skip_send {
            tracing::info!(to = %to_email, "SMTP_SKIP_SEND set; password reset email not sent");
            return Ok(());
        }

        let email = Message::builder()
            .from(self.from_address.parse()?)
            .to(to_email.parse()?)
            .subject("Reset your Rakshak password")
            .header(ContentType::TEXT_PLAIN)
            .body(password_reset_body(
                reset_link,
                "The link expires shortly and can be used once.",
            ))?;

        self.mailer.send(email).await?;
        Ok(())
    }
}
