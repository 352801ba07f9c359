//! Mail Notification Service
//!
//! Transactional email behind the [`MailClient`] trait. The SMTP transport
//! is configured from `SMTP_HOST/SMTP_PORT/SMTP_USERNAME/SMTP_PASSWORD`;
//! when unset the service degrades to [`LogMailer`], which records the send
//! and succeeds. Callers treat delivery as best-effort: a failed send is
//! logged and surfaced as a response flag, never as an HTTP error.

use crate::core::Config;
use crate::utils::{AppError, AppResult, ErrorCode};
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::sync::Arc;

/// One outbound email
#[derive(Debug, Clone)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub body_html: String,
}

#[async_trait::async_trait]
pub trait MailClient: Send + Sync {
    async fn send(&self, message: EmailMessage) -> AppResult<()>;
    fn from_email(&self) -> &str;
}

/// SMTP transport via lettre
pub struct SmtpMailClient {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from_email: String,
}

impl SmtpMailClient {
    /// Build from environment. Returns None when SMTP_HOST is unset.
    pub fn from_env(from_email: &str) -> Option<Self> {
        let host = std::env::var("SMTP_HOST").ok()?;
        let port: u16 = std::env::var("SMTP_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(587);
        let username = std::env::var("SMTP_USERNAME").unwrap_or_default();
        let password = std::env::var("SMTP_PASSWORD").unwrap_or_default();

        let mut builder = match AsyncSmtpTransport::<Tokio1Executor>::relay(&host) {
            Ok(b) => b.port(port),
            Err(e) => {
                tracing::error!("Invalid SMTP relay {host}: {e}");
                return None;
            }
        };
        if !username.is_empty() {
            builder = builder.credentials(Credentials::new(username, password));
        }

        Some(Self {
            transport: builder.build(),
            from_email: from_email.to_string(),
        })
    }
}

#[async_trait::async_trait]
impl MailClient for SmtpMailClient {
    async fn send(&self, message: EmailMessage) -> AppResult<()> {
        let email = Message::builder()
            .from(
                self.from_email
                    .parse()
                    .map_err(|e| AppError::with_message(ErrorCode::MailSendFailed, format!("Invalid from address: {e}")))?,
            )
            .to(message
                .to
                .parse()
                .map_err(|e| AppError::with_message(ErrorCode::MailSendFailed, format!("Invalid to address: {e}")))?)
            .subject(&message.subject)
            .header(ContentType::TEXT_HTML)
            .body(message.body_html)
            .map_err(|e| {
                AppError::with_message(ErrorCode::MailSendFailed, format!("Failed to build email: {e}"))
            })?;

        self.transport.send(email).await.map_err(|e| {
            AppError::with_message(ErrorCode::MailSendFailed, format!("SMTP send failed: {e}"))
        })?;
        Ok(())
    }

    fn from_email(&self) -> &str {
        &self.from_email
    }
}

/// Logging fallback used when SMTP is unconfigured (development / tests)
pub struct LogMailer {
    from_email: String,
}

impl LogMailer {
    pub fn new(from_email: impl Into<String>) -> Self {
        Self {
            from_email: from_email.into(),
        }
    }
}

#[async_trait::async_trait]
impl MailClient for LogMailer {
    async fn send(&self, message: EmailMessage) -> AppResult<()> {
        tracing::info!(
            to = %message.to,
            subject = %message.subject,
            "Mail delivery skipped (SMTP not configured)"
        );
        Ok(())
    }

    fn from_email(&self) -> &str {
        &self.from_email
    }
}

/// Build the process-wide mail client from config + environment
pub fn build_mail_client(config: &Config) -> Arc<dyn MailClient> {
    match SmtpMailClient::from_env(&config.mail_from) {
        Some(smtp) => {
            tracing::info!("SMTP mail client configured");
            Arc::new(smtp)
        }
        None => Arc::new(LogMailer::new(config.mail_from.clone())),
    }
}

// ── Templates ───────────────────────────────────────────────────────

/// Welcome email for the client, carrying the wizard login link
pub fn client_welcome_email(
    to: &str,
    vendor_name: &str,
    login_url: &str,
    inquiry_no: &str,
) -> EmailMessage {
    EmailMessage {
        to: to.to_string(),
        subject: format!("Your inquiry with {vendor_name} ({inquiry_no})"),
        body_html: format!(
            "<h2>Thank you for your inquiry!</h2>\
             <p>{vendor_name} has received your request ({inquiry_no}).</p>\
             <p>Continue designing your florals here: <a href=\"{login_url}\">{login_url}</a></p>"
        ),
    }
}

/// New-inquiry alert for the vendor
pub fn vendor_alert_email(
    to: &str,
    bride_name: &str,
    inquiry_no: &str,
    event_date: Option<&str>,
) -> EmailMessage {
    let date_line = event_date
        .map(|d| format!("<p>Event date: {d}</p>"))
        .unwrap_or_default();
    EmailMessage {
        to: to.to_string(),
        subject: format!("New inquiry {inquiry_no} from {bride_name}"),
        body_html: format!(
            "<h2>New inquiry received</h2>\
             <p>{bride_name} just submitted inquiry {inquiry_no}.</p>{date_line}"
        ),
    }
}
