//! Simulated contact form.
//!
//! Nothing is sent anywhere: submitting disables the button for a fixed
//! delay, then the form is cleared and the page shows a success toast.

use crate::clock::Millis;
use crate::effect::{Effect, Msg};
use serde::Serialize;

pub const FORM_ID: &str = "contact-form";
pub const SUBMIT_LABEL: &str = "Send Message";
pub const PENDING_LABEL: &str = "Sending...";
pub const SEND_DELAY: Millis = Millis(2000);
pub const SENT_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    /// DOM id of the input.
    pub fn id(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactPayload {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    fn slot(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    fields: ContactPayload,
    sending: bool,
}

impl ContactForm {
    pub fn fields(&self) -> &ContactPayload {
        &self.fields
    }

    pub fn is_sending(&self) -> bool {
        self.sending
    }

    pub fn submit_label(&self) -> &'static str {
        if self.sending {
            PENDING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    pub fn input(&mut self, field: ContactField, value: String) {
        *self.fields.slot(field) = value;
    }

    /// Start the fake send. A submit while one is pending is ignored.
    pub fn submit(&mut self) -> Option<Effect> {
        if self.sending {
            return None;
        }
        self.sending = true;
        match serde_json::to_string(&self.fields) {
            Ok(json) => log::debug!("[folio] contact: simulated submit {}", json),
            Err(e) => log::warn!("[folio] contact: payload not serializable: {}", e),
        }
        Some(Effect::Schedule {
            after: SEND_DELAY,
            msg: Msg::ContactDelivered,
        })
    }

    /// The fake delay elapsed: clear the form and re-enable the button.
    /// Returns the payload that was "sent".
    pub fn delivered(&mut self) -> Option<ContactPayload> {
        if !self.sending {
            return None;
        }
        self.sending = false;
        Some(std::mem::take(&mut self.fields))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        for field in ContactField::ALL {
            form.input(field, format!("{} value", field.id()));
        }
        form
    }

    #[test]
    fn submit_disables_and_schedules_delivery() {
        let mut form = filled();
        let effect = form.submit();
        assert_eq!(
            effect,
            Some(Effect::Schedule {
                after: Millis(2000),
                msg: Msg::ContactDelivered
            })
        );
        assert!(form.is_sending());
        assert_eq!(form.submit_label(), "Sending...");
        assert_eq!(form.submit(), None);
    }

    #[test]
    fn delivery_clears_fields_and_restores_label() {
        let mut form = filled();
        form.submit();
        let sent = form.delivered().unwrap();
        assert_eq!(sent.email, "email value");
        assert_eq!(form.fields(), &ContactPayload::default());
        assert_eq!(form.submit_label(), SUBMIT_LABEL);
        assert!(form.delivered().is_none());
    }

    #[test]
    fn empty_form_still_submits() {
        let mut form = ContactForm::default();
        assert!(form.submit().is_some());
    }
}
