//! Outbound mail seam.
//!
//! [`Mailer`] is the only thing the relay knows about mail delivery. The SMTP
//! implementation lives behind the `web` feature together with the server;
//! tests substitute a recording mock.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// Failure delivering a single message.
#[derive(Debug, Error)]
pub enum MailError {
    /// No sender mailbox configured
    #[error("mail sender is not configured (set EMAIL_USER and EMAIL_PASS)")]
    NotConfigured,

    /// An address could not be parsed
    #[error("invalid address {address}: {reason}")]
    Address {
        /// Offending address
        address: String,
        /// Parser message
        reason: String,
    },

    /// The message could not be assembled
    #[error("failed to build message: {0}")]
    Build(String),

    /// The transport rejected or failed to deliver the message
    #[error("{0}")]
    Transport(String),

    /// The send did not finish in time
    #[error("mail send timed out after {0:?}")]
    Timeout(Duration),
}

/// A fully addressed HTML email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    /// Display name of the sender
    pub from_name: String,
    /// Sender address
    pub from: String,
    /// Recipient address
    pub to: String,
    /// Optional reply-to address
    pub reply_to: Option<String>,
    /// Subject line
    pub subject: String,
    /// HTML body
    pub html: String,
}

/// Sends one email.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Delivers `email`, returning once the transport has accepted it.
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError>;
}

#[cfg(feature = "web")]
pub use smtp::SmtpMailer;

#[cfg(feature = "web")]
mod smtp {
    use async_trait::async_trait;
    use lettre::message::header::ContentType;
    use lettre::message::Mailbox;
    use lettre::transport::smtp::authentication::Credentials;
    use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
    use tracing::debug;

    use super::{MailError, Mailer, OutboundEmail};
    use crate::config::MailConfig;

    /// SMTP delivery over an implicit-TLS relay.
    pub struct SmtpMailer {
        transport: AsyncSmtpTransport<Tokio1Executor>,
    }

    impl std::fmt::Debug for SmtpMailer {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("SmtpMailer").finish_non_exhaustive()
        }
    }

    impl SmtpMailer {
        /// Builds a pooled transport for the configured relay host.
        ///
        /// # Errors
        ///
        /// Returns an error if the relay host cannot be used for TLS.
        pub fn from_config(config: &MailConfig) -> Result<Self, MailError> {
            let mut builder = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
                .map_err(|e| MailError::Transport(e.to_string()))?
                .timeout(Some(config.timeout()));

            if let (Some(user), Some(pass)) = (&config.user, &config.pass) {
                builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
            }

            Ok(Self {
                transport: builder.build(),
            })
        }
    }

    fn parse_address(address: &str) -> Result<Address, MailError> {
        address.parse().map_err(|e: lettre::address::AddressError| MailError::Address {
            address: address.to_string(),
            reason: e.to_string(),
        })
    }

    #[async_trait]
    impl Mailer for SmtpMailer {
        async fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
            let from = Mailbox::new(Some(email.from_name.clone()), parse_address(&email.from)?);
            let to = Mailbox::new(None, parse_address(&email.to)?);

            let mut builder = Message::builder()
                .from(from)
                .to(to)
                .subject(email.subject.clone())
                .header(ContentType::TEXT_HTML);
            if let Some(reply_to) = &email.reply_to {
                builder = builder.reply_to(Mailbox::new(None, parse_address(reply_to)?));
            }
            let message = builder
                .body(email.html.clone())
                .map_err(|e| MailError::Build(e.to_string()))?;

            let response = self
                .transport
                .send(message)
                .await
                .map_err(|e| MailError::Transport(e.to_string()))?;
            debug!("SMTP accepted message to {}: {:?}", email.to, response.code());

            Ok(())
        }
    }
}
