//! Contact section: info cards and the message form.
//!
//! The form keeps ordinary per-instance UI state in [`ContactForm`]: field
//! values and a submission status that falls back to idle a few seconds after
//! a success or failure.

use std::time::{Duration, Instant};

use maud::{html, Markup};

use super::{section_header, vars, RenderContext};
use crate::branding::ACCENT;
use crate::relay::ContactRequest;

/// How long a success or error banner stays up.
pub const STATUS_RESET_AFTER: Duration = Duration::from_secs(5);

/// Submission status of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    /// Nothing in flight, no banner
    #[default]
    Idle,
    /// Request in flight
    Sending,
    /// Last submission succeeded
    Success,
    /// Last submission failed
    Error,
}

/// A form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    /// Sender name
    Name,
    /// Sender email
    Email,
    /// Message body
    Message,
}

/// Local state of one contact form instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    /// Sender name
    pub name: String,
    /// Sender email
    pub email: String,
    /// Message body
    pub message: String,
    status: FormStatus,
    status_since: Option<Instant>,
}

impl ContactForm {
    /// Creates an empty, idle form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> FormStatus {
        self.status
    }

    /// Updates one field.
    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    /// Marks the form as sending and returns the request to submit.
    ///
    /// Returns `None` while a submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<ContactRequest> {
        if self.status == FormStatus::Sending {
            return None;
        }

        self.status = FormStatus::Sending;
        self.status_since = None;
        Some(ContactRequest {
            name: Some(self.name.clone()),
            email: Some(self.email.clone()),
            message: Some(self.message.clone()),
        })
    }

    /// Records the outcome of a submission at `now`.
    ///
    /// Success clears the fields; failure keeps them for another attempt.
    pub fn finish_submit(&mut self, succeeded: bool, now: Instant) {
        if succeeded {
            self.name.clear();
            self.email.clear();
            self.message.clear();
            self.status = FormStatus::Success;
        } else {
            self.status = FormStatus::Error;
        }
        self.status_since = Some(now);
    }

    /// Drops a success/error banner once it has been shown long enough.
    pub fn tick(&mut self, now: Instant) {
        if let Some(since) = self.status_since {
            if now.saturating_duration_since(since) >= STATUS_RESET_AFTER {
                self.status = FormStatus::Idle;
                self.status_since = None;
            }
        }
    }
}

/// An info card on the left of the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactInfo {
    /// Caption, e.g. "EMAIL"
    pub title: &'static str,
    /// Displayed value
    pub value: String,
    /// Link target
    pub href: String,
}

/// Contact inputs.
#[derive(Debug, Clone)]
pub struct ContactProps<'a> {
    /// Intro under the heading
    pub intro: &'a str,
    /// Info cards
    pub info: &'a [ContactInfo],
    /// Form state
    pub form: &'a ContactForm,
    /// Endpoint the form posts to
    pub action: &'a str,
}

/// Renders the contact section.
pub fn render(ctx: &RenderContext, props: &ContactProps<'_>) -> Markup {
    let form = props.form;
    let sending = form.status() == FormStatus::Sending;
    let columns = if ctx.viewport.is_single_column() {
        "1fr"
    } else {
        "1fr 1.4fr"
    };
    let input_style = format!(
        "background:{};border:1.5px solid {};color:{}",
        vars::INPUT_BG,
        vars::INPUT_BORDER,
        vars::HEADING
    );

    html! {
        section #contact style={
            "background:" (vars::SECTION_BG_GRADIENT4) ";padding:" (ctx.section_padding())
        } {
            (section_header("CONTACT ME", "Let's work", "together", Some(props.intro)))
            div.grid style={ "grid-template-columns:" (columns) } {
                div.info-cards {
                    @for info in props.info {
                        @let external = info.href.starts_with("http");
                        a.card.info href=(info.href)
                            target=[external.then_some("_blank")]
                            rel=[external.then_some("noopener noreferrer")]
                            style={ "background:" (vars::CARD_BG) ";border:1px solid " (vars::CARD_BORDER) } {
                            span.caption style={ "color:" (vars::TEXT_LIGHTER) } { (info.title) }
                            span.value style={ "color:" (vars::HEADING_ALT) } { (info.value) }
                        }
                    }
                }
                form.contact-form method="post" action=(props.action) style={
                    "background:" (vars::GLASS_BG_LIGHT) ";border:1px solid " (vars::CARD_BORDER)
                } {
                    input name="name" type="text" placeholder="Your Name" required
                        value=(form.name) style=(input_style);
                    input name="email" type="email" placeholder="Your Email" required
                        value=(form.email) style=(input_style);
                    textarea name="message" rows="5" placeholder="Your Message" required
                        style=(input_style) { (form.message) }
                    button type="submit" disabled[sending] style={ "background:" (ACCENT) ";color:#fff" } {
                        (if sending { "Sending..." } else { "Send Message" })
                    }
                    @match form.status() {
                        FormStatus::Success => {
                            p.status.success role="status" style="color:#10B981" {
                                "Message sent successfully!"
                            }
                        }
                        FormStatus::Error => {
                            p.status.error role="alert" style="color:#EF4444" {
                                "Failed to send. Please try again or email directly."
                            }
                        }
                        FormStatus::Idle | FormStatus::Sending => {}
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_form(form: &ContactForm) -> String {
        render(
            &RenderContext::default(),
            &ContactProps {
                intro: "Say hi",
                info: &[ContactInfo {
                    title: "EMAIL",
                    value: "me@example.com".to_string(),
                    href: "mailto:me@example.com".to_string(),
                }],
                form,
                action: "/api/contact",
            },
        )
        .into_string()
    }

    #[test]
    fn test_begin_submit_snapshot() {
        let mut form = ContactForm::new();
        form.set_field(ContactField::Name, "Jo");
        form.set_field(ContactField::Email, "jo@example.com");
        form.set_field(ContactField::Message, "hi");

        let request = form.begin_submit().unwrap();
        assert_eq!(request.name.as_deref(), Some("Jo"));
        assert_eq!(form.status(), FormStatus::Sending);

        // No double submit while in flight
        assert!(form.begin_submit().is_none());
    }

    #[test]
    fn test_success_clears_fields_and_resets_after_five_seconds() {
        let start = Instant::now();
        let mut form = ContactForm::new();
        form.set_field(ContactField::Name, "Jo");
        form.begin_submit();
        form.finish_submit(true, start);

        assert_eq!(form.status(), FormStatus::Success);
        assert!(form.name.is_empty());

        form.tick(start + Duration::from_secs(4));
        assert_eq!(form.status(), FormStatus::Success);

        form.tick(start + STATUS_RESET_AFTER);
        assert_eq!(form.status(), FormStatus::Idle);
    }

    #[test]
    fn test_error_keeps_fields() {
        let start = Instant::now();
        let mut form = ContactForm::new();
        form.set_field(ContactField::Message, "keep me");
        form.begin_submit();
        form.finish_submit(false, start);

        assert_eq!(form.status(), FormStatus::Error);
        assert_eq!(form.message, "keep me");

        form.tick(start + Duration::from_secs(6));
        assert_eq!(form.status(), FormStatus::Idle);
    }

    #[test]
    fn test_tick_does_not_cancel_sending() {
        let mut form = ContactForm::new();
        form.begin_submit();
        form.tick(Instant::now() + Duration::from_secs(60));
        assert_eq!(form.status(), FormStatus::Sending);
    }

    #[test]
    fn test_render_states() {
        let mut form = ContactForm::new();
        assert!(render_form(&form).contains("Send Message"));

        form.set_field(ContactField::Name, "<Jo>");
        form.begin_submit();
        let sending = render_form(&form);
        assert!(sending.contains("Sending..."));
        assert!(sending.contains(" disabled"));
        assert!(sending.contains("value=\"&lt;Jo&gt;\""));

        form.finish_submit(false, Instant::now());
        assert!(render_form(&form).contains("Failed to send."));

        form.begin_submit();
        form.finish_submit(true, Instant::now());
        assert!(render_form(&form).contains("Message sent successfully!"));
    }

    #[test]
    fn test_field_values_stay_inside_their_attributes() {
        let mut form = ContactForm::new();
        form.set_field(ContactField::Email, "x\" autofocus onfocus=\"alert(1)");
        form.set_field(ContactField::Message, "</textarea><script>alert(1)</script>");
        let html = render_form(&form);

        assert!(html.contains("value=\"x&quot; autofocus onfocus=&quot;alert(1)\""));
        assert!(html.contains("&lt;/textarea&gt;&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
