//! Marketing page contact form. Submitting opens WhatsApp with the visitor's
//! message, clears the form and briefly shows "Message Sent!" on the button.

use log::info;
use shared::ContactSubmission;
use std::time::Duration;

use super::message_composer::MessageComposer;
use super::timers::Timeout;

#[derive(Debug, Clone)]
pub struct ContactForm {
    confirmation_duration: Duration,
    confirmation: Option<Timeout>,
}

impl ContactForm {
    pub fn new(confirmation_duration: Duration) -> Self {
        Self {
            confirmation_duration,
            confirmation: None,
        }
    }

    pub fn is_showing_confirmation(&self) -> bool {
        self.confirmation.is_some()
    }

    /// Build the deep link for a submission and start the button confirmation
    pub fn submit(&mut self, composer: &MessageComposer, submission: &ContactSubmission) -> String {
        let message =
            composer.format_contact_message(&submission.name, &submission.email, &submission.message);
        self.confirmation = Some(Timeout::new(self.confirmation_duration));
        info!("Contact form submitted by {}", submission.name);
        composer.build_deep_link(&message)
    }

    /// Returns true when the button should go back to its normal look
    pub fn tick(&mut self, dt: Duration) -> bool {
        let expired = self
            .confirmation
            .as_mut()
            .is_some_and(|timer| timer.advance(dt));
        if expired {
            self.confirmation = None;
        }
        expired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::deep_link::encode_uri_component;

    #[test]
    fn test_submit_builds_link_and_confirms() {
        let mut form = ContactForm::new(Duration::from_millis(3000));
        let composer = MessageComposer::default();
        let submission = ContactSubmission {
            name: "Ravi".to_string(),
            email: "ravi@example.com".to_string(),
            message: "Need 20 hampers for Diwali".to_string(),
        };

        let url = form.submit(&composer, &submission);

        assert_eq!(
            url,
            format!(
                "https://wa.me/91XXXXXXXXXX?text={}",
                encode_uri_component("Hi! I'm Ravi (ravi@example.com). Need 20 hampers for Diwali")
            )
        );
        assert!(form.is_showing_confirmation());
        assert!(!form.tick(Duration::from_millis(2000)));
        assert!(form.tick(Duration::from_millis(1000)));
        assert!(!form.is_showing_confirmation());
    }
}
