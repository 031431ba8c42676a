use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::core::config::NotifierConfig;
use crate::core::error::{AppError, Result};

/// Outbound mail boundary for alert delivery
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, recipients: &[String], subject: &str, body: &str) -> Result<()>;
}

/// SMTP transport built from notifier configuration
pub struct SmtpMailer {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn new(config: &NotifierConfig) -> Result<Self> {
        let from: Mailbox = config
            .from_address
            .parse()
            .map_err(|e| AppError::Internal(format!("Invalid NOTIFY_FROM address: {}", e)))?;

        let mailer = if config.smtp_username.is_empty() {
            // Unauthenticated relay, e.g. a local dev mailhog
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .build()
        } else {
            let creds = Credentials::new(
                config.smtp_username.clone(),
                config.smtp_password.clone(),
            );
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
                .map_err(|e| AppError::Internal(format!("Invalid SMTP host: {}", e)))?
                .credentials(creds)
                .port(config.smtp_port)
                .build()
        };

        Ok(Self { mailer, from })
    }
}

#[async_trait]
impl MailTransport for SmtpMailer {
    async fn send(&self, recipients: &[String], subject: &str, body: &str) -> Result<()> {
        let mut builder = Message::builder().from(self.from.clone()).subject(subject);

        for recipient in recipients {
            let to: Mailbox = recipient.parse().map_err(|e| {
                AppError::ExternalServiceError(format!(
                    "Invalid recipient address '{}': {}",
                    recipient, e
                ))
            })?;
            builder = builder.to(to);
        }

        let email = builder
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| AppError::ExternalServiceError(format!("Failed to build mail: {}", e)))?;

        self.mailer
            .send(email)
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("SMTP send failed: {}", e)))?;

        tracing::info!("Alert mail sent to {} recipient(s)", recipients.len());

        Ok(())
    }
}
