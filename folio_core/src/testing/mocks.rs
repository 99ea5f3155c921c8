//! Mock implementations for testing

use async_trait::async_trait;
use mockall::mock;
use std::collections::BTreeSet;
use std::sync::Mutex;

use crate::api::relay::{EmailRelay, RelayResponse, TemplateParams};
use crate::form::{FieldMark, FormField};
use crate::host::{FormControls, UrlOpener};
use crate::notify::{Notification, NotificationId, NotificationSurface};
use crate::utils::error::{FolioError, RelayError};

mock! {
    pub EmailRelay {}

    #[async_trait]
    impl EmailRelay for EmailRelay {
        async fn send(
            &self,
            service_id: &str,
            template_id: &str,
            params: &TemplateParams,
        ) -> Result<RelayResponse, RelayError>;
    }
}

mock! {
    pub FormControls {}

    impl FormControls for FormControls {
        fn mark_field(&self, field: FormField, mark: FieldMark);
        fn begin_busy(&self, caption: &str);
        fn end_busy(&self);
        fn reset(&self);
    }
}

mock! {
    pub UrlOpener {}

    impl UrlOpener for UrlOpener {
        fn open_in_new_context(&self, url: &str) -> Result<(), FolioError>;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    Insert(NotificationId),
    SlideIn(NotificationId),
    SlideOut(NotificationId),
    Remove(NotificationId),
}

#[derive(Default)]
struct SurfaceState {
    events: Vec<SurfaceEvent>,
    present: BTreeSet<NotificationId>,
    max_present: usize,
}

/// In-memory surface that records every call and tracks present instances
#[derive(Default)]
pub struct RecordingSurface {
    state: Mutex<SurfaceState>,
}

impl RecordingSurface {
    pub fn events(&self) -> Vec<SurfaceEvent> {
        self.state.lock().unwrap().events.clone()
    }

    pub fn present(&self) -> Vec<NotificationId> {
        self.state.lock().unwrap().present.iter().copied().collect()
    }

    pub fn present_count(&self) -> usize {
        self.state.lock().unwrap().present.len()
    }

    /// Highest number of simultaneously present instances seen so far
    pub fn max_present(&self) -> usize {
        self.state.lock().unwrap().max_present
    }
}

impl NotificationSurface for RecordingSurface {
    fn insert(&self, notification: &Notification) {
        let mut state = self.state.lock().unwrap();
        state.events.push(SurfaceEvent::Insert(notification.id));
        state.present.insert(notification.id);
        state.max_present = state.max_present.max(state.present.len());
    }

    fn slide_in(&self, id: NotificationId) {
        self.state.lock().unwrap().events.push(SurfaceEvent::SlideIn(id));
    }

    fn slide_out(&self, id: NotificationId) {
        self.state.lock().unwrap().events.push(SurfaceEvent::SlideOut(id));
    }

    fn remove(&self, id: NotificationId) {
        let mut state = self.state.lock().unwrap();
        state.events.push(SurfaceEvent::Remove(id));
        state.present.remove(&id);
    }
}
