//! Hand-rolled host doubles for integration tests

#![allow(dead_code)]

use folio_core::{
    FieldMark, FolioError, FormControls, FormField, Notification, NotificationId,
    NotificationSurface, UrlOpener,
};
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
pub struct FakeForm {
    pub marks: Mutex<HashMap<FormField, FieldMark>>,
    pub busy_caption: Mutex<Option<String>>,
    pub busy_transitions: Mutex<Vec<bool>>,
    pub resets: Mutex<usize>,
}

impl FakeForm {
    pub fn mark(&self, field: FormField) -> Option<FieldMark> {
        self.marks.lock().unwrap().get(&field).copied()
    }

    pub fn is_busy(&self) -> bool {
        self.busy_caption.lock().unwrap().is_some()
    }

    pub fn reset_count(&self) -> usize {
        *self.resets.lock().unwrap()
    }
}

impl FormControls for FakeForm {
    fn mark_field(&self, field: FormField, mark: FieldMark) {
        self.marks.lock().unwrap().insert(field, mark);
    }

    fn begin_busy(&self, caption: &str) {
        *self.busy_caption.lock().unwrap() = Some(caption.to_string());
        self.busy_transitions.lock().unwrap().push(true);
    }

    fn end_busy(&self) {
        *self.busy_caption.lock().unwrap() = None;
        self.busy_transitions.lock().unwrap().push(false);
    }

    fn reset(&self) {
        *self.resets.lock().unwrap() += 1;
    }
}

#[derive(Default)]
pub struct FakeOpener {
    pub opened: Mutex<Vec<String>>,
}

impl UrlOpener for FakeOpener {
    fn open_in_new_context(&self, url: &str) -> Result<(), FolioError> {
        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeSurface {
    pub present: Mutex<Vec<NotificationId>>,
    pub max_present: Mutex<usize>,
    pub shown: Mutex<Vec<Notification>>,
}

impl NotificationSurface for FakeSurface {
    fn insert(&self, notification: &Notification) {
        let mut present = self.present.lock().unwrap();
        present.push(notification.id);
        let mut max = self.max_present.lock().unwrap();
        *max = (*max).max(present.len());
        self.shown.lock().unwrap().push(notification.clone());
    }

    fn slide_in(&self, _id: NotificationId) {}

    fn slide_out(&self, _id: NotificationId) {}

    fn remove(&self, id: NotificationId) {
        self.present.lock().unwrap().retain(|p| *p != id);
    }
}
