use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::info;

use crate::config::MailConfig;

/// Bounded wait on the SMTP conversation so a stalled provider turns into a
/// reported failure instead of a hung request.
const SEND_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("invalid mailbox address: {0}")]
    Address(#[from] lettre::address::AddressError),
    #[error("failed to build message: {0}")]
    Message(#[from] lettre::error::Error),
    #[error("smtp transport failure: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
    #[error("delivery rejected by stub transport")]
    StubRejected,
}

/// A composed contact-form email, ready to hand to the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEmail {
    pub subject: String,
    pub html_body: String,
}

/// Builds the notification email for one form submission. Every user-supplied
/// value is HTML-escaped before it reaches the body.
pub fn contact_email(name: &str, email: &str, subject: &str, message: &str) -> ContactEmail {
    ContactEmail {
        subject: format!("Contact Form: {}", subject),
        html_body: format!(
            "<h1>New Contact Form Submission</h1>\n\
             <p><strong>Name:</strong> {}</p>\n\
             <p><strong>Email:</strong> {}</p>\n\
             <p><strong>Subject:</strong> {}</p>\n\
             <p><strong>Message:</strong> {}</p>",
            escape_html(name),
            escape_html(email),
            escape_html(subject),
            escape_html(message),
        ),
    }
}

pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

enum Delivery {
    Smtp(AsyncSmtpTransport<Tokio1Executor>),
    /// Accept every message without touching SMTP.
    Accept,
    /// Reject every message, standing in for a failing provider.
    Reject,
}

/// One-way mailer for contact-form notifications. Counts every delivery
/// attempt so tests can assert how many times the transport was reached.
pub struct Mailer {
    delivery: Delivery,
    from: String,
    to: String,
    attempts: AtomicUsize,
}

impl Mailer {
    pub fn from_config(config: &MailConfig) -> Result<Self, MailError> {
        let creds = Credentials::new(
            config.smtp_username.clone(),
            config.smtp_password.clone(),
        );
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)?
            .port(config.smtp_port)
            .credentials(creds)
            .timeout(Some(SEND_TIMEOUT))
            .build();
        Ok(Self {
            delivery: Delivery::Smtp(transport),
            from: config.from_address.clone(),
            to: config.contact_inbox.clone(),
            attempts: AtomicUsize::new(0),
        })
    }

    /// Mailer that accepts every message and skips SMTP entirely. Test use.
    pub fn accepting_stub() -> Self {
        Self::stub(Delivery::Accept)
    }

    /// Mailer whose transport rejects every message. Test use.
    pub fn rejecting_stub() -> Self {
        Self::stub(Delivery::Reject)
    }

    fn stub(delivery: Delivery) -> Self {
        Self {
            delivery,
            from: "site@spectrum.localhost".to_string(),
            to: "team@spectrum.localhost".to_string(),
            attempts: AtomicUsize::new(0),
        }
    }

    pub fn delivery_attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    pub async fn deliver(&self, email: &ContactEmail) -> Result<(), MailError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);

        let message = Message::builder()
            .from(self.from.parse()?)
            .to(self.to.parse()?)
            .subject(email.subject.as_str())
            .header(ContentType::TEXT_HTML)
            .body(email.html_body.clone())?;

        match &self.delivery {
            Delivery::Smtp(transport) => {
                transport.send(message).await?;
                Ok(())
            }
            Delivery::Accept => {
                info!(subject = %email.subject, "stub mailer accepted message");
                Ok(())
            }
            Delivery::Reject => Err(MailError::StubRejected),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_carries_contact_form_prefix() {
        let email = contact_email("Ada", "ada@example.com", "Hi", "Hello");
        assert_eq!(email.subject, "Contact Form: Hi");
    }

    #[test]
    fn body_embeds_all_four_fields() {
        let email = contact_email("Ada", "ada@example.com", "Hi", "Hello");
        assert!(email.html_body.contains("<strong>Name:</strong> Ada"));
        assert!(email.html_body.contains("<strong>Email:</strong> ada@example.com"));
        assert!(email.html_body.contains("<strong>Subject:</strong> Hi"));
        assert!(email.html_body.contains("<strong>Message:</strong> Hello"));
    }

    #[test]
    fn html_in_fields_cannot_alter_body_structure() {
        let email = contact_email(
            "<script>alert(1)</script>",
            "a&b@example.com",
            "\"quoted\"",
            "<img src=x onerror=alert(1)>",
        );
        assert!(!email.html_body.contains("<script>"));
        assert!(!email.html_body.contains("<img"));
        assert!(email.html_body.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(email.html_body.contains("a&amp;b@example.com"));
        assert!(email.html_body.contains("&quot;quoted&quot;"));
    }

    #[test]
    fn escape_leaves_plain_text_untouched() {
        assert_eq!(escape_html("plain text 123"), "plain text 123");
    }

    #[test]
    fn escape_handles_every_sensitive_character() {
        assert_eq!(escape_html(r#"&<>"'"#), "&amp;&lt;&gt;&quot;&#39;");
    }

    #[tokio::test]
    async fn rejecting_stub_counts_the_attempt() {
        let mailer = Mailer::rejecting_stub();
        let email = contact_email("Ada", "ada@example.com", "Hi", "Hello");
        assert!(mailer.deliver(&email).await.is_err());
        assert_eq!(mailer.delivery_attempts(), 1);
    }
}
