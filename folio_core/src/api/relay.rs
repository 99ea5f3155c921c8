//! Email-relay collaborator
//!
//! The relay is addressed by `(service_id, template_id)` and receives a flat
//! string map of template parameters. Only status 200 counts as delivered.

use async_trait::async_trait;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::form::{FormField, FormPayload};
use crate::utils::config::OwnerIdentity;
use crate::utils::error::RelayError;

/// Template parameters sent to the relay
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TemplateParams(BTreeMap<String, String>);

impl TemplateParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Parameters for the message delivered to the site owner
    pub fn for_message(payload: &FormPayload, owner: &OwnerIdentity) -> Self {
        FormField::ALL
            .into_iter()
            .fold(Self::new(), |params, field| {
                params.with(field.form_name(), payload.get(field))
            })
            .with("to_name", owner.name.as_str())
            .with("to_email", owner.email.as_str())
            .with("reply_to", payload.sender_email.as_str())
    }

    /// Parameters for the thank-you note sent back to the submitter
    pub fn for_auto_reply(payload: &FormPayload, owner: &OwnerIdentity) -> Self {
        let message = format!(
            "Hi {name},\n\nThank you for reaching out! I have received your message regarding \"{subject}\" \
             and will get back to you as soon as possible.\n\nBest regards,\n{owner}\n{title}\n{email}",
            name = payload.sender_name,
            subject = payload.subject,
            owner = owner.name,
            title = owner.title,
            email = owner.email,
        );

        Self::new()
            .with("to_name", payload.sender_name.as_str())
            .with("to_email", payload.sender_email.as_str())
            .with("from_name", owner.name.as_str())
            .with("subject", "Thank you for contacting me!")
            .with("message", message)
    }
}

/// Raw answer from the relay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayResponse {
    pub status: u16,
    pub text: String,
}

impl RelayResponse {
    pub fn ok() -> Self {
        Self {
            status: 200,
            text: "OK".to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == 200
    }

    /// Turn a non-200 answer into an error so callers have a single failure path
    pub fn into_result(self) -> Result<Self, RelayError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(RelayError::from_status(self.status, self.text))
        }
    }
}

#[async_trait]
pub trait EmailRelay: Send + Sync {
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        params: &TemplateParams,
    ) -> Result<RelayResponse, RelayError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn payload() -> FormPayload {
        FormPayload::new("Ann", "a@b.com", "Hi", "Hello")
    }

    #[test]
    fn test_message_params() {
        let params = TemplateParams::for_message(&payload(), &OwnerIdentity::default());
        assert_eq!(params.len(), 7);
        assert_eq!(params.get("from_name"), Some("Ann"));
        assert_eq!(params.get("from_email"), Some("a@b.com"));
        assert_eq!(params.get("subject"), Some("Hi"));
        assert_eq!(params.get("message"), Some("Hello"));
        assert_eq!(params.get("to_name"), Some("KAVIN P"));
        assert_eq!(params.get("to_email"), Some("kavin22cs024@gmail.com"));
        assert_eq!(params.get("reply_to"), Some("a@b.com"));
    }

    #[test]
    fn test_auto_reply_params_address_sender() {
        let params = TemplateParams::for_auto_reply(&payload(), &OwnerIdentity::default());
        assert_eq!(params.get("to_email"), Some("a@b.com"));
        assert_eq!(params.get("from_name"), Some("KAVIN P"));
        assert_eq!(params.get("subject"), Some("Thank you for contacting me!"));

        let message = params.get("message").unwrap();
        assert!(message.starts_with("Hi Ann,\n\n"));
        assert!(message.contains("regarding \"Hi\" and will get back"));
        assert!(message.ends_with("KAVIN P\nUI/UX Designer & Software Engineer\nkavin22cs024@gmail.com"));
    }

    #[test]
    fn test_non_200_is_an_error() {
        let response = RelayResponse {
            status: 202,
            text: "Accepted".to_string(),
        };
        let err = response.into_result().unwrap_err();
        assert_eq!(err.status_code(), Some(202));
        assert!(RelayResponse::ok().into_result().is_ok());
    }

    #[test]
    fn test_params_serialize_flat() {
        let params = TemplateParams::new().with("a", "1");
        assert_eq!(serde_json::to_string(&params).unwrap(), r#"{"a":"1"}"#);
    }
}
