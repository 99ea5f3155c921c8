//! Capabilities the page (or any other host) exposes to the core

use crate::form::{FieldMark, FormField, FormPayload};
use crate::utils::error::FolioError;

/// The contact form as rendered by the host
pub trait FormControls: Send + Sync {
    fn mark_field(&self, field: FormField, mark: FieldMark);

    /// Disable the submit control and show `caption` on it
    fn begin_busy(&self, caption: &str);

    /// Re-enable the submit control with its original caption
    fn end_busy(&self);

    /// Clear every input
    fn reset(&self);
}

/// Opens a URL in a new browsing context (tab, window or external app)
pub trait UrlOpener: Send + Sync {
    fn open_in_new_context(&self, url: &str) -> Result<(), FolioError>;
}

/// Events the host forwards from the contact form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Focus(FormField),
    Blur { field: FormField, value: String },
    Submit(FormPayload),
}
