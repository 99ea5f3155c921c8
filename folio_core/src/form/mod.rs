//! Contact form data model
//!
//! `FormPayload` holds the four contact fields exactly as the user typed
//! them. Validation only checks for presence; trimming is used for the
//! check but the payload itself is never rewritten.

pub mod mailto;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use mailto::MailtoDraft;

/// One input of the contact form, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    SenderName,
    SenderEmail,
    Subject,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::SenderName,
        FormField::SenderEmail,
        FormField::Subject,
        FormField::Message,
    ];

    /// Name of the input in the page form, also the relay template key
    pub fn form_name(self) -> &'static str {
        match self {
            FormField::SenderName => "from_name",
            FormField::SenderEmail => "from_email",
            FormField::Subject => "subject",
            FormField::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::SenderName => "Name",
            FormField::SenderEmail => "Email",
            FormField::Subject => "Subject",
            FormField::Message => "Message",
        }
    }

    pub fn join_labels(fields: &[FormField]) -> String {
        fields
            .iter()
            .map(|f| f.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Visual state of a form input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldMark {
    /// Default border
    Neutral,
    /// Focused, or left with content
    Accent,
    /// Empty at submission time
    Invalid,
}

impl FieldMark {
    pub fn border_color(self) -> &'static str {
        match self {
            FieldMark::Neutral => "#FDF0D5",
            FieldMark::Accent => "#669BBC",
            FieldMark::Invalid => "#C1121F",
        }
    }

    /// Mark applied when an input loses focus
    pub fn on_blur(value: &str) -> Self {
        if value.trim().is_empty() {
            FieldMark::Neutral
        } else {
            FieldMark::Accent
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormPayload {
    pub sender_name: String,
    pub sender_email: String,
    pub subject: String,
    pub message: String,
}

impl FormPayload {
    pub fn new(
        sender_name: impl Into<String>,
        sender_email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            sender_name: sender_name.into(),
            sender_email: sender_email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::SenderName => &self.sender_name,
            FormField::SenderEmail => &self.sender_email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::SenderName => self.sender_name = value,
            FormField::SenderEmail => self.sender_email = value,
            FormField::Subject => self.subject = value,
            FormField::Message => self.message = value,
        }
    }

    /// Fields that are empty or whitespace-only, in form order
    pub fn missing_fields(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|&f| self.get(f).trim().is_empty())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}
