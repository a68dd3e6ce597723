//! Contact relay: validates a contact submission and fans it out as two emails.
//!
//! A valid submission produces an owner notification followed by an
//! acknowledgement to the submitter. The two sends run sequentially and the
//! operation only succeeds when both do; there is no partial success and no
//! retry. Each send is bounded by the relay's own timeout.

pub mod mailer;
pub mod templates;

use std::sync::Arc;
use std::time::Duration;

use regex::Regex;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, error, info};

use crate::branding::OWNER_NAME;

pub use mailer::{MailError, Mailer, OutboundEmail};

#[cfg(feature = "web")]
pub use mailer::SmtpMailer;

/// Accepted email shape: something@something.something, no whitespace.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Sender display name on owner notifications.
pub const NOTIFICATION_SENDER: &str = "Portfolio Contact";

/// Body of `POST /api/contact`. Every field is optional at the wire level so
/// that missing fields reach validation instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContactRequest {
    /// Sender name
    #[serde(default)]
    pub name: Option<String>,
    /// Sender email
    #[serde(default)]
    pub email: Option<String>,
    /// Message body
    #[serde(default)]
    pub message: Option<String>,
}

/// A validated submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    /// Trimmed sender name
    pub name: String,
    /// Trimmed sender email
    pub email: String,
    /// Message body as submitted
    pub message: String,
}

/// Outcome of a delivered submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactReceipt {
    /// Mailbox that received the notification
    pub notified: String,
    /// Address that received the acknowledgement
    pub acknowledged: String,
}

/// Why a submission was not relayed.
#[derive(Debug, Error)]
pub enum RelayError {
    /// A field was absent or blank
    #[error("All fields are required")]
    MissingFields,

    /// The email does not look like an address
    #[error("Invalid email address")]
    InvalidEmail,

    /// One of the two sends failed or timed out
    #[error("Failed to send email. Please try again later.")]
    Delivery(#[source] MailError),
}

impl RelayError {
    /// Whether the caller sent bad input (as opposed to a delivery failure).
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::MissingFields | Self::InvalidEmail)
    }

    /// Underlying delivery failure, if any.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::Delivery(source) => Some(source.to_string()),
            Self::MissingFields | Self::InvalidEmail => None,
        }
    }
}

fn required(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Relays contact submissions through a [`Mailer`].
pub struct ContactRelay {
    mailer: Arc<dyn Mailer>,
    mailbox: Option<String>,
    send_timeout: Duration,
    email_pattern: Regex,
}

impl std::fmt::Debug for ContactRelay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactRelay")
            .field("mailbox", &self.mailbox)
            .field("send_timeout", &self.send_timeout)
            .finish_non_exhaustive()
    }
}

impl ContactRelay {
    /// Creates a relay delivering to `mailbox`.
    ///
    /// A relay without a mailbox still validates input but fails every
    /// delivery with [`MailError::NotConfigured`].
    pub fn new(
        mailer: Arc<dyn Mailer>,
        mailbox: Option<String>,
        send_timeout: Duration,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            mailer,
            mailbox,
            send_timeout,
            email_pattern: Regex::new(EMAIL_PATTERN)?,
        })
    }

    /// Owner mailbox, if configured.
    #[must_use]
    pub fn mailbox(&self) -> Option<&str> {
        self.mailbox.as_deref()
    }

    /// Per-send timeout.
    #[must_use]
    pub fn send_timeout(&self) -> Duration {
        self.send_timeout
    }

    /// Checks a request without sending anything.
    pub fn validate(&self, request: &ContactRequest) -> Result<ContactSubmission, RelayError> {
        let (Some(name), Some(email), Some(message)) = (
            required(request.name.as_deref()),
            required(request.email.as_deref()),
            required(request.message.as_deref()),
        ) else {
            return Err(RelayError::MissingFields);
        };

        let email = email.trim();
        if !self.email_pattern.is_match(email) {
            return Err(RelayError::InvalidEmail);
        }

        Ok(ContactSubmission {
            name: name.trim().to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }

    /// Validates `request` and sends both emails.
    pub async fn submit(&self, request: &ContactRequest) -> Result<ContactReceipt, RelayError> {
        let submission = self.validate(request).inspect_err(|e| debug!("Rejected contact: {e}"))?;

        let result = self.deliver(&submission).await;
        match &result {
            Ok(receipt) => info!(
                "Relayed contact message from {} to {}",
                receipt.acknowledged, receipt.notified
            ),
            Err(e) => error!("Email error: {}", e.detail().unwrap_or_default()),
        }
        result
    }

    async fn deliver(&self, submission: &ContactSubmission) -> Result<ContactReceipt, RelayError> {
        let mailbox = self
            .mailbox
            .clone()
            .ok_or(RelayError::Delivery(MailError::NotConfigured))?;

        let notification = OutboundEmail {
            from_name: NOTIFICATION_SENDER.to_string(),
            from: mailbox.clone(),
            to: mailbox.clone(),
            reply_to: Some(submission.email.clone()),
            subject: templates::notification_subject(submission),
            html: templates::notification_html(submission),
        };
        self.send_bounded(&notification).await?;

        let acknowledgement = OutboundEmail {
            from_name: OWNER_NAME.to_string(),
            from: mailbox.clone(),
            to: submission.email.clone(),
            reply_to: None,
            subject: templates::acknowledgement_subject(submission),
            html: templates::acknowledgement_html(submission),
        };
        self.send_bounded(&acknowledgement).await?;

        Ok(ContactReceipt {
            notified: mailbox,
            acknowledged: submission.email.clone(),
        })
    }

    async fn send_bounded(&self, email: &OutboundEmail) -> Result<(), RelayError> {
        match tokio::time::timeout(self.send_timeout, self.mailer.send(email)).await {
            Ok(result) => result.map_err(RelayError::Delivery),
            Err(_) => Err(RelayError::Delivery(MailError::Timeout(self.send_timeout))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records sends; fails the nth (1-based) send when asked to.
    #[derive(Default)]
    struct RecordingMailer {
        sent: Mutex<Vec<OutboundEmail>>,
        fail_on: Option<usize>,
        stall: bool,
    }

    #[async_trait]
    impl Mailer for RecordingMailer {
        async fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
            if self.stall {
                tokio::time::sleep(Duration::from_secs(3600)).await;
            }
            let mut sent = self.sent.lock().unwrap();
            sent.push(email.clone());
            if self.fail_on == Some(sent.len()) {
                return Err(MailError::Transport("535 authentication failed".to_string()));
            }
            Ok(())
        }
    }

    fn relay(mailer: Arc<RecordingMailer>) -> ContactRelay {
        ContactRelay::new(
            mailer,
            Some("owner@example.com".to_string()),
            Duration::from_millis(50),
        )
        .unwrap()
    }

    fn request(name: &str, email: &str, message: &str) -> ContactRequest {
        ContactRequest {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            message: Some(message.to_string()),
        }
    }

    #[tokio::test]
    async fn test_both_sends_in_order() {
        let mailer = Arc::new(RecordingMailer::default());
        let receipt = relay(mailer.clone())
            .submit(&request("Ann", "ann@example.com", "Hello\nthere"))
            .await
            .unwrap();

        assert_eq!(receipt.notified, "owner@example.com");
        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 2);

        assert_eq!(sent[0].to, "owner@example.com");
        assert_eq!(sent[0].reply_to.as_deref(), Some("ann@example.com"));
        assert_eq!(sent[0].from_name, NOTIFICATION_SENDER);
        assert!(sent[0].html.contains("Hello<br>there"));

        assert_eq!(sent[1].to, "ann@example.com");
        assert_eq!(sent[1].subject, "Thanks for reaching out, Ann! ✨");
    }

    #[tokio::test]
    async fn test_blank_field_sends_nothing() {
        let mailer = Arc::new(RecordingMailer::default());
        let err = relay(mailer.clone())
            .submit(&request("   ", "ann@example.com", "hi"))
            .await
            .unwrap_err();

        assert!(matches!(err, RelayError::MissingFields));
        assert_eq!(err.to_string(), "All fields are required");
        assert!(mailer.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_field() {
        let mailer = Arc::new(RecordingMailer::default());
        let partial = ContactRequest {
            name: Some("Ann".to_string()),
            ..ContactRequest::default()
        };
        let err = relay(mailer).submit(&partial).await.unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_invalid_email() {
        let mailer = Arc::new(RecordingMailer::default());
        let relay = relay(mailer.clone());
        for bad in ["not-an-email", "a@b", "a b@c.d", "@x.io"] {
            let err = relay.submit(&request("Ann", bad, "hi")).await.unwrap_err();
            assert!(matches!(err, RelayError::InvalidEmail), "{bad}");
        }
        assert!(mailer.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_second_send_failure_fails_whole_submission() {
        let mailer = Arc::new(RecordingMailer {
            fail_on: Some(2),
            ..RecordingMailer::default()
        });
        let err = relay(mailer.clone())
            .submit(&request("Ann", "ann@example.com", "hi"))
            .await
            .unwrap_err();

        assert!(!err.is_validation());
        assert_eq!(err.detail().as_deref(), Some("535 authentication failed"));
        assert_eq!(mailer.sent.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_first_send_failure_skips_acknowledgement() {
        let mailer = Arc::new(RecordingMailer {
            fail_on: Some(1),
            ..RecordingMailer::default()
        });
        let result = relay(mailer.clone())
            .submit(&request("Ann", "ann@example.com", "hi"))
            .await;

        assert!(result.is_err());
        assert_eq!(mailer.sent.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_send_timeout() {
        let mailer = Arc::new(RecordingMailer {
            stall: true,
            ..RecordingMailer::default()
        });
        let err = relay(mailer)
            .submit(&request("Ann", "ann@example.com", "hi"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            RelayError::Delivery(MailError::Timeout(_))
        ));
    }

    #[tokio::test]
    async fn test_unconfigured_mailbox() {
        let mailer = Arc::new(RecordingMailer::default());
        let relay = ContactRelay::new(mailer.clone(), None, Duration::from_secs(1)).unwrap();
        let err = relay
            .submit(&request("Ann", "ann@example.com", "hi"))
            .await
            .unwrap_err();

        assert!(matches!(err, RelayError::Delivery(MailError::NotConfigured)));
        assert!(mailer.sent.lock().unwrap().is_empty());
    }

    #[test]
    fn test_validate_trims_name_and_email() {
        let relay = relay(Arc::new(RecordingMailer::default()));
        let submission = relay
            .validate(&request(" Ann ", " ann@example.com ", " hi "))
            .unwrap();
        assert_eq!(submission.name, "Ann");
        assert_eq!(submission.email, "ann@example.com");
        assert_eq!(submission.message, " hi ");
    }
}
