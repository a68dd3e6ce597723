//! Shared test fixtures.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use folio::relay::{ContactRelay, MailError, Mailer, OutboundEmail};
use serde_json::{json, Value};

/// Mailbox the relay under test delivers notifications to.
pub const OWNER_MAILBOX: &str = "owner@example.com";

/// Mailer that records every message and can fail a given send.
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<OutboundEmail>>,
    /// 1-based index of the send that fails, if any
    fail_on: Option<usize>,
}

impl RecordingMailer {
    /// A mailer that accepts everything.
    pub fn accepting() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// A mailer whose `n`th send fails.
    pub fn failing_on(n: usize) -> Arc<Self> {
        Arc::new(Self {
            fail_on: Some(n),
            ..Self::default()
        })
    }

    /// Messages handed to the mailer so far, failed ones included.
    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
        let mut sent = self.sent.lock().unwrap();
        sent.push(email.clone());
        if self.fail_on == Some(sent.len()) {
            return Err(MailError::Transport(
                "Invalid login: 535 Username and Password not accepted".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builds a relay around `mailer` delivering to [`OWNER_MAILBOX`].
pub fn test_relay(mailer: Arc<RecordingMailer>) -> ContactRelay {
    ContactRelay::new(
        mailer,
        Some(OWNER_MAILBOX.to_string()),
        Duration::from_secs(5),
    )
    .expect("relay")
}

/// A well-formed contact body.
pub fn valid_contact() -> Value {
    json!({
        "name": "Ann Example",
        "email": "ann@example.com",
        "message": "Hello!\nLoved the projects."
    })
}
