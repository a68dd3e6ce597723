//! HTML bodies for the two contact emails.

use maud::{html, Markup};

use crate::branding::{ACCENT, OWNER_NAME, OWNER_TITLE};

use super::ContactSubmission;

const WRAPPER_STYLE: &str = "font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; \
     border: 1px solid #e5e5e5; border-radius: 12px; overflow: hidden;";
const PARAGRAPH_STYLE: &str = "margin: 0 0 12px; font-size: 15px; color: #333;";

fn layout(heading: &str, body: Markup) -> String {
    html! {
        div style=(WRAPPER_STYLE) {
            div style={ "background: " (ACCENT) "; padding: 24px 28px;" } {
                h2 style="margin: 0; color: #fff; font-size: 20px;" { (heading) }
            }
            div style="padding: 28px;" { (body) }
        }
    }
    .into_string()
}

/// A message with its line breaks turned into `<br>`.
#[must_use]
pub fn message_html(message: &str) -> Markup {
    let normalized = message.replace("\r\n", "\n");
    html! {
        @for (index, line) in normalized.split('\n').enumerate() {
            @if index > 0 { br; }
            (line)
        }
    }
}

/// Subject of the mail sent to the owner.
#[must_use]
pub fn notification_subject(submission: &ContactSubmission) -> String {
    format!("📩 New message from {} — Portfolio", submission.name)
}

/// Body of the mail sent to the owner.
#[must_use]
pub fn notification_html(submission: &ContactSubmission) -> String {
    let body = html! {
        p style=(PARAGRAPH_STYLE) { strong { "Name:" } " " (submission.name) }
        p style=(PARAGRAPH_STYLE) {
            strong { "Email:" } " "
            a href={ "mailto:" (submission.email) } { (submission.email) }
        }
        p style="margin: 0 0 8px; font-size: 15px; color: #333;" { strong { "Message:" } }
        div style="background: #f9f9f9; border-radius: 8px; padding: 16px; font-size: 15px; \
                   color: #444; line-height: 1.6;" {
            (message_html(&submission.message))
        }
    };

    layout("New Contact Form Message", body)
}

/// Subject of the acknowledgement sent to the submitter.
#[must_use]
pub fn acknowledgement_subject(submission: &ContactSubmission) -> String {
    format!("Thanks for reaching out, {}! ✨", submission.name)
}

/// Body of the acknowledgement sent to the submitter.
#[must_use]
pub fn acknowledgement_html(submission: &ContactSubmission) -> String {
    let body = html! {
        p style="font-size: 15px; color: #333; line-height: 1.6;" {
            "Hi " strong { (submission.name) } ","
            br; br;
            "Thank you for contacting me! I've received your message and will get back to you \
             as soon as possible."
            br; br;
            "Best regards,"
            br;
            strong { (OWNER_NAME) }
            br;
            (OWNER_TITLE)
        }
    };

    layout("Thanks for your message!", body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "Ann <script>".to_string(),
            email: "ann@example.com".to_string(),
            message: "line one\nline <two>\r\nthree".to_string(),
        }
    }

    #[test]
    fn test_message_newlines_become_breaks() {
        assert_eq!(
            message_html("line one\nline <two>\r\nthree").into_string(),
            "line one<br>line &lt;two&gt;<br>three"
        );
    }

    #[test]
    fn test_notification_escapes_user_values() {
        let html = notification_html(&submission());
        assert!(html.contains("Ann &lt;script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("mailto:ann@example.com"));
        assert!(html.contains("line one<br>line &lt;two&gt;"));
    }

    #[test]
    fn test_subjects() {
        let s = ContactSubmission {
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            message: "hi".to_string(),
        };
        assert_eq!(notification_subject(&s), "📩 New message from Ann — Portfolio");
        assert_eq!(acknowledgement_subject(&s), "Thanks for reaching out, Ann! ✨");
        assert!(acknowledgement_html(&s).contains("Hi <strong>Ann</strong>"));
    }
}
