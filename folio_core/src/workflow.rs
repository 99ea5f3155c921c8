//! Contact-form submission workflow
//!
//! One call to [`SubmissionWorkflow::submit`] takes a payload from the
//! user's click to a terminal notification:
//!
//! 1. validate, marking every field, and stop early if anything is empty
//! 2. mark the submit control busy for as long as the relay send is in flight
//! 3. on success reset the form, report it, then try the auto-reply
//! 4. on failure keep the form and offer the `mailto:` fallback as an action
//!
//! Overlapping calls run one after another, so busy begin/end pairs on the
//! host never interleave.

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::api::relay::{EmailRelay, RelayResponse, TemplateParams};
use crate::form::{FieldMark, FormField, FormPayload, MailtoDraft};
use crate::host::{FormControls, FormEvent, UrlOpener};
use crate::notify::{NotificationAction, NotificationKind, Notifier};
use crate::utils::config::{Config, OwnerIdentity};
use crate::utils::error::{FolioError, RelayError};
use crate::utils::logger;

pub const VALIDATION_MESSAGE: &str = "Please fill in all required fields.";
pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
pub const FAILURE_MESSAGE: &str =
    "Failed to send via web form. Would you like to use your email client instead?";
pub const FALLBACK_LABEL: &str = "Open Email Client";
pub const BUSY_CAPTION: &str = "Sending...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success,
    RemoteFailure(String),
    ValidationFailure(Vec<FormField>),
}

/// Relay addressing and the identity messages are sent to
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowSettings {
    pub service_id: String,
    pub template_id: String,
    pub auto_reply_template_id: String,
    pub owner: OwnerIdentity,
}

impl WorkflowSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            service_id: config.relay.service_id.clone(),
            template_id: config.relay.template_id.clone(),
            auto_reply_template_id: config.relay.auto_reply_template_id.clone(),
            owner: config.owner.clone(),
        }
    }
}

/// Keeps the submit control busy until dropped
struct BusyGuard<'a> {
    form: &'a dyn FormControls,
}

impl<'a> BusyGuard<'a> {
    fn engage(form: &'a dyn FormControls, caption: &str) -> Self {
        form.begin_busy(caption);
        Self { form }
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.form.end_busy();
    }
}

pub struct SubmissionWorkflow {
    settings: WorkflowSettings,
    relay: Arc<dyn EmailRelay>,
    form: Arc<dyn FormControls>,
    opener: Arc<dyn UrlOpener>,
    notifier: Notifier,
    submitting: Mutex<()>,
}

impl SubmissionWorkflow {
    pub fn new(
        settings: WorkflowSettings,
        relay: Arc<dyn EmailRelay>,
        form: Arc<dyn FormControls>,
        opener: Arc<dyn UrlOpener>,
        notifier: Notifier,
    ) -> Self {
        Self {
            settings,
            relay,
            form,
            opener,
            notifier,
            submitting: Mutex::new(()),
        }
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn settings(&self) -> &WorkflowSettings {
        &self.settings
    }

    /// Dispatch one host event. Only `Submit` produces an outcome.
    pub async fn handle_event(&self, event: FormEvent) -> Option<SubmissionOutcome> {
        match event {
            FormEvent::Focus(field) => {
                self.form.mark_field(field, FieldMark::Accent);
                None
            }
            FormEvent::Blur { field, value } => {
                self.form.mark_field(field, FieldMark::on_blur(&value));
                None
            }
            FormEvent::Submit(payload) => Some(self.submit(&payload).await),
        }
    }

    pub async fn submit(&self, payload: &FormPayload) -> SubmissionOutcome {
        let _turn = self.submitting.lock().await;

        let missing = self.validate(payload);
        if !missing.is_empty() {
            logger::debug(
                &FolioError::Validation {
                    fields: missing.clone(),
                }
                .to_string(),
            );
            self.notifier.show(VALIDATION_MESSAGE, NotificationKind::Error);
            return SubmissionOutcome::ValidationFailure(missing);
        }

        let result = {
            let _busy = BusyGuard::engage(self.form.as_ref(), BUSY_CAPTION);
            let params = TemplateParams::for_message(payload, &self.settings.owner);
            self.send(&self.settings.template_id, &params).await
        };

        match result {
            Ok(()) => {
                self.form.reset();
                self.notifier.show(SUCCESS_MESSAGE, NotificationKind::Success);
                self.send_auto_reply(payload).await;
                SubmissionOutcome::Success
            }
            Err(err) => {
                let reason = err.to_string();
                logger::error(&FolioError::RemoteSend(err).to_string());
                self.offer_fallback(payload);
                SubmissionOutcome::RemoteFailure(reason)
            }
        }
    }

    /// The draft the fallback action opens for `payload`
    pub fn fallback_for(&self, payload: &FormPayload) -> MailtoDraft {
        MailtoDraft::from_payload(&self.settings.owner.email, payload)
    }

    fn validate(&self, payload: &FormPayload) -> Vec<FormField> {
        let missing = payload.missing_fields();
        for field in FormField::ALL {
            let mark = if missing.contains(&field) {
                FieldMark::Invalid
            } else {
                FieldMark::Neutral
            };
            self.form.mark_field(field, mark);
        }
        missing
    }

    async fn send(&self, template_id: &str, params: &TemplateParams) -> Result<(), RelayError> {
        self.relay
            .send(&self.settings.service_id, template_id, params)
            .await
            .and_then(RelayResponse::into_result)
            .map(|_| ())
    }

    async fn send_auto_reply(&self, payload: &FormPayload) {
        let params = TemplateParams::for_auto_reply(payload, &self.settings.owner);
        if let Err(err) = self.send(&self.settings.auto_reply_template_id, &params).await {
            logger::info(&FolioError::AutoReply(err).to_string());
        }
    }

    fn offer_fallback(&self, payload: &FormPayload) {
        let uri = self.fallback_for(payload).to_uri();
        let opener = Arc::clone(&self.opener);
        let notifier = self.notifier.clone();
        let owner_email = self.settings.owner.email.clone();

        let action = NotificationAction::new(FALLBACK_LABEL, move || {
            if let Err(err) = opener.open_in_new_context(&uri) {
                logger::warn(&err.to_string());
            }
            notifier.show(
                format!(
                    "Opening your default email client. If it doesn't work, please email me directly at {}",
                    owner_email
                ),
                NotificationKind::Info,
            );
        });

        self.notifier
            .show_with_action(FAILURE_MESSAGE, NotificationKind::Error, action);
    }
}
