pub mod api;
pub mod form;
pub mod host;
pub mod notify;
pub mod utils;
pub mod workflow;

#[cfg(test)]
pub(crate) mod testing;

pub use api::{EmailJsClient, EmailRelay, RelayResponse, TemplateParams};
pub use form::{FieldMark, FormField, FormPayload, MailtoDraft};
pub use host::{FormControls, FormEvent, UrlOpener};
pub use notify::{
    Notification, NotificationAction, NotificationId, NotificationKind, NotificationSurface,
    Notifier, NotifierTimings, Phase,
};
pub use utils::config::Config;
pub use utils::error::{FolioError, FolioResult, RelayError, ResultExt};
pub use workflow::{SubmissionOutcome, SubmissionWorkflow, WorkflowSettings};
