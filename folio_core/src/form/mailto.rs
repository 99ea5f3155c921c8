//! `mailto:` fallback used when the relay cannot deliver a message

use super::FormPayload;
use std::fmt;

/// A pre-filled message for the user's own mail client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailtoDraft {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl MailtoDraft {
    pub fn from_payload(recipient: impl Into<String>, payload: &FormPayload) -> Self {
        Self {
            recipient: recipient.into(),
            subject: payload.subject.clone(),
            body: format!(
                "Name: {}\nEmail: {}\n\nMessage:\n{}",
                payload.sender_name, payload.sender_email, payload.message
            ),
        }
    }

    /// `mailto:` URI with percent-encoded subject and body
    pub fn to_uri(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        )
    }
}

impl fmt::Display for MailtoDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_uri())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_body_layout() {
        let payload = FormPayload::new("Ann", "a@b.com", "Hi", "Hello");
        let draft = MailtoDraft::from_payload("kavin22cs024@gmail.com", &payload);
        assert_eq!(draft.body, "Name: Ann\nEmail: a@b.com\n\nMessage:\nHello");
    }

    #[test]
    fn test_uri_encodes_subject_and_body() {
        let payload = FormPayload::new("Ann", "a@b.com", "Hi", "Hello");
        let uri = MailtoDraft::from_payload("kavin22cs024@gmail.com", &payload).to_uri();
        assert_eq!(
            uri,
            "mailto:kavin22cs024@gmail.com?subject=Hi&body=\
             Name%3A%20Ann%0AEmail%3A%20a%40b.com%0A%0AMessage%3A%0AHello"
        );
    }

    #[test]
    fn test_reserved_characters_in_subject_are_escaped() {
        let payload = FormPayload::new("Ann", "a@b.com", "Q&A = fun?", "x");
        let uri = MailtoDraft::from_payload("me@example.com", &payload).to_uri();
        assert!(uri.contains("subject=Q%26A%20%3D%20fun%3F&body="));
    }
}
