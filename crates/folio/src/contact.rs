// SPDX-License-Identifier: Apache-2.0

//! Contact hand-off — renders the contact form.
//!
//! Submission is a plain HTTP POST from the browser straight to the
//! operator-configured external endpoint; this system never sees the
//! request. A hidden `_next` field tells the external service where to
//! redirect afterwards. There is no retry, no failure detection, and no
//! delivery confirmation on our side.

use crate::config::ContactConfig;
use maud::html;

/// Render the contact form for the configured external endpoint.
///
/// `name`, `email`, and `message` carry the HTML `required` attribute;
/// `subject` is optional. Enforcement beyond that is the browser's and
/// the external service's problem, not ours.
pub fn render_contact_form(contact: &ContactConfig, redirect_url: &str) -> String {
    html! {
        form class="contact-form" method="post" action=(contact.endpoint) {
            input type="hidden" name="_next" value=(redirect_url);
            p {
                label for="name" { "Name" }
                input type="text" id="name" name="name" required;
            }
            p {
                label for="email" { "Email" }
                input type="email" id="email" name="email" required;
            }
            p {
                label for="subject" { "Subject" }
                input type="text" id="subject" name="subject";
            }
            p {
                label for="message" { "Message" }
                textarea id="message" name="message" rows="8" required {}
            }
            p {
                button type="submit" { "Send" }
            }
        }
    }
    .into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_contact() -> ContactConfig {
        ContactConfig {
            endpoint: "https://formsubmit.example.com/f/abc".to_string(),
            thanks_path: "/contact/thanks".to_string(),
        }
    }

    #[test]
    fn test_form_posts_to_external_endpoint() {
        let html = render_contact_form(&test_contact(), "/contact/thanks");
        assert!(html.contains(r#"method="post""#));
        assert!(html.contains(r#"action="https://formsubmit.example.com/f/abc""#));
    }

    #[test]
    fn test_required_fields() {
        let html = render_contact_form(&test_contact(), "/contact/thanks");
        assert!(html.contains(r#"name="name" required"#));
        assert!(html.contains(r#"name="email" required"#));
        assert!(html.contains(r#"name="message" rows="8" required"#));
        // Subject stays optional
        assert!(html.contains(r#"name="subject""#));
        assert!(!html.contains(r#"name="subject" required"#));
    }

    #[test]
    fn test_redirect_field() {
        let html = render_contact_form(&test_contact(), "/contact/thanks");
        assert!(html.contains(r#"type="hidden" name="_next" value="/contact/thanks""#));
    }
}
