//! Contact form model.
//!
//! The form has no backend. A submission is logged and then dropped.

use std::str::FromStr;

use serde::Serialize;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown contact subject: {0}")]
pub struct UnknownSubject(pub String);

/// Options of the subject select.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Subject {
    #[default]
    General,
    Restaurant,
    Driver,
    Investment,
    Press,
    Support,
}

impl Subject {
    pub const ALL: &'static [Subject] = &[
        Subject::General,
        Subject::Restaurant,
        Subject::Driver,
        Subject::Investment,
        Subject::Press,
        Subject::Support,
    ];

    /// Form value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Subject::General => "general",
            Subject::Restaurant => "restaurant",
            Subject::Driver => "driver",
            Subject::Investment => "investment",
            Subject::Press => "press",
            Subject::Support => "support",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Subject::General => "General Inquiry",
            Subject::Restaurant => "Restaurant Partnership",
            Subject::Driver => "Driver Application",
            Subject::Investment => "Investment Opportunity",
            Subject::Press => "Press Inquiry",
            Subject::Support => "Customer Support",
        }
    }
}

impl FromStr for Subject {
    type Err = UnknownSubject;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Subject::ALL
            .iter()
            .copied()
            .find(|subject| subject.as_str() == s)
            .ok_or_else(|| UnknownSubject(s.to_string()))
    }
}

/// Named form fields, matching the inputs' `name` attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

/// Current values of the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: Subject,
    pub message: String,
}

impl ContactSubmission {
    /// Apply one input change. An unrecognised subject keeps the previous one.
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
            ContactField::Subject => match value.parse() {
                Ok(subject) => self.subject = subject,
                Err(e) => tracing::warn!("Ignoring contact subject: {}", e),
            },
        }
    }

    /// The fields marked `required` in the markup are non-empty.
    ///
    /// Mirrors native requiredness only; email format is left to the browser.
    pub fn has_required_fields(&self) -> bool {
        [&self.name, &self.email, &self.message]
            .iter()
            .all(|v| !v.trim().is_empty())
    }

    /// Log the submission. Nothing leaves the page.
    ///
    /// Returns `false` without logging when a required field is blank.
    pub fn submit(&self) -> bool {
        if !self.has_required_fields() {
            tracing::debug!("Contact form submitted with blank required fields");
            return false;
        }
        match serde_json::to_string(self) {
            Ok(json) => tracing::info!(submission = %json, "Contact form submitted"),
            Err(e) => tracing::warn!("Failed to serialize contact submission: {}", e),
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subjects_parse_from_form_values() {
        for subject in Subject::ALL {
            assert_eq!(subject.as_str().parse::<Subject>(), Ok(*subject));
        }
        assert_eq!(
            "catering".parse::<Subject>(),
            Err(UnknownSubject("catering".to_string()))
        );
    }

    #[test]
    fn defaults_to_general_inquiry() {
        let form = ContactSubmission::default();
        assert_eq!(form.subject, Subject::General);
        assert_eq!(form.subject.label(), "General Inquiry");
        assert!(!form.has_required_fields());
    }

    #[test]
    fn set_updates_the_named_field() {
        let mut form = ContactSubmission::default();
        form.set(ContactField::Name, "Layla".into());
        form.set(ContactField::Email, "layla@example.com".into());
        form.set(ContactField::Subject, "press".into());
        form.set(ContactField::Message, "Hello".into());
        assert_eq!(form.name, "Layla");
        assert_eq!(form.subject, Subject::Press);
        assert!(form.has_required_fields());
    }

    #[test]
    fn unknown_subject_keeps_previous_value() {
        let mut form = ContactSubmission::default();
        form.set(ContactField::Subject, "driver".into());
        form.set(ContactField::Subject, "bogus".into());
        assert_eq!(form.subject, Subject::Driver);
    }

    #[test]
    fn whitespace_does_not_satisfy_required() {
        let form = ContactSubmission {
            name: "  ".into(),
            email: "a@b.c".into(),
            subject: Subject::Support,
            message: "hi".into(),
        };
        assert!(!form.has_required_fields());
        assert!(!form.submit());
    }

    #[test]
    fn complete_form_is_submitted() {
        let mut form = ContactSubmission::default();
        assert!(!form.submit());
        form.set(ContactField::Name, "Ahmed".into());
        form.set(ContactField::Email, "ahmed@example.com".into());
        form.set(ContactField::Message, "Catering for 40?".into());
        assert!(form.submit());
    }

    #[test]
    fn serializes_subject_as_form_value() {
        let form = ContactSubmission {
            subject: Subject::Investment,
            ..Default::default()
        };
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["subject"], "investment");
    }
}
