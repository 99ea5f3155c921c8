//! Transient status notifications
//!
//! The [`Notifier`] owns a single slot. Every [`Notifier::show`] replaces
//! whatever occupies it, so at most one notification is ever present on the
//! surface. Each instance moves through
//! `Created -> Visible -> Dismissing -> Removed`; close, action and the
//! auto-dismiss timer race for the `Dismissing` transition and only the first
//! one has an effect.
//!
//! Timers run as tokio tasks, so `show` must be called inside a runtime.

pub mod surface;

use std::collections::VecDeque;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, Weak};
use std::time::Duration;
use tokio::task::JoinHandle;

use crate::utils::config::NotificationConfig;
use crate::utils::debug::debug_print_module;

pub use surface::NotificationSurface;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Info,
    Error,
}

impl NotificationKind {
    pub fn icon(self) -> &'static str {
        match self {
            NotificationKind::Success => "✓",
            NotificationKind::Info => "ℹ",
            NotificationKind::Error => "⚠",
        }
    }

    pub fn background_color(self) -> &'static str {
        match self {
            NotificationKind::Success => "#669BBC",
            NotificationKind::Info => "#003049",
            NotificationKind::Error => "#C1121F",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Created,
    Visible,
    Dismissing,
    Removed,
}

impl Phase {
    fn is_live(self) -> bool {
        matches!(self, Phase::Created | Phase::Visible)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissTrigger {
    Close,
    Action,
    Timeout,
}

pub type ActionHandler = Box<dyn FnOnce() + Send + 'static>;

/// A labelled button and the callback it runs
pub struct NotificationAction {
    pub label: String,
    handler: ActionHandler,
}

impl NotificationAction {
    pub fn new(label: impl Into<String>, handler: impl FnOnce() + Send + 'static) -> Self {
        Self {
            label: label.into(),
            handler: Box::new(handler),
        }
    }
}

impl fmt::Debug for NotificationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationAction")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// What a surface needs to render one notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub kind: NotificationKind,
    pub action_label: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotifierTimings {
    pub auto_dismiss: Duration,
    pub transition: Duration,
    pub enter_delay: Duration,
}

impl Default for NotifierTimings {
    fn default() -> Self {
        NotificationConfig::default().into()
    }
}

impl From<NotificationConfig> for NotifierTimings {
    fn from(config: NotificationConfig) -> Self {
        Self {
            auto_dismiss: Duration::from_millis(config.auto_dismiss_ms),
            transition: Duration::from_millis(config.transition_ms),
            enter_delay: Duration::from_millis(config.enter_delay_ms),
        }
    }
}

struct Slot {
    view: Notification,
    phase: Phase,
    handler: Option<ActionHandler>,
    timers: Vec<JoinHandle<()>>,
}

impl Slot {
    fn abort_timers(&mut self) {
        for timer in self.timers.drain(..) {
            timer.abort();
        }
    }
}

/// A surface call recorded under the slot lock and delivered after it is released
enum SurfaceEffect {
    Insert(Notification),
    SlideIn(NotificationId),
    SlideOut(NotificationId),
    Remove(NotificationId),
}

struct Inner {
    surface: Arc<dyn NotificationSurface>,
    timings: NotifierTimings,
    slot: Mutex<Option<Slot>>,
    effects: Mutex<VecDeque<SurfaceEffect>>,
    draining: AtomicBool,
    next_id: AtomicU64,
}

#[derive(Clone)]
pub struct Notifier {
    inner: Arc<Inner>,
}

impl Notifier {
    pub fn new(surface: Arc<dyn NotificationSurface>, timings: NotifierTimings) -> Self {
        Self {
            inner: Arc::new(Inner {
                surface,
                timings,
                slot: Mutex::new(None),
                effects: Mutex::new(VecDeque::new()),
                draining: AtomicBool::new(false),
                next_id: AtomicU64::new(1),
            }),
        }
    }

    pub fn timings(&self) -> NotifierTimings {
        self.inner.timings
    }

    /// Show a plain notification, replacing any current one
    pub fn show(&self, message: impl Into<String>, kind: NotificationKind) -> NotificationId {
        self.inner.show(message.into(), kind, None)
    }

    /// Show a notification with one action button, replacing any current one
    pub fn show_with_action(
        &self,
        message: impl Into<String>,
        kind: NotificationKind,
        action: NotificationAction,
    ) -> NotificationId {
        self.inner.show(message.into(), kind, Some(action))
    }

    /// Close button. Returns false if the instance was no longer live.
    pub fn close(&self, id: NotificationId) -> bool {
        self.inner.dismiss(id, DismissTrigger::Close)
    }

    /// Action button: run the handler, then dismiss.
    /// Returns false if the instance has no action or is no longer live.
    pub fn activate_action(&self, id: NotificationId) -> bool {
        let handler = {
            let mut slot = self.inner.lock_slot();
            match slot.as_mut() {
                Some(current) if current.view.id == id && current.phase.is_live() => {
                    current.handler.take()
                }
                _ => None,
            }
        };

        // The handler may call `show` itself, so the slot lock must be released here
        match handler {
            Some(handler) => {
                handler();
                self.inner.dismiss(id, DismissTrigger::Action);
                true
            }
            None => false,
        }
    }

    pub fn current(&self) -> Option<Notification> {
        self.inner.lock_slot().as_ref().map(|slot| slot.view.clone())
    }

    /// Phase of an instance; anything no longer in the slot is `Removed`
    pub fn phase(&self, id: NotificationId) -> Phase {
        match self.inner.lock_slot().as_ref() {
            Some(slot) if slot.view.id == id => slot.phase,
            _ => Phase::Removed,
        }
    }
}

/// Clears the draining flag even if a surface callback panics
struct DrainGuard<'a>(&'a AtomicBool);

impl Drop for DrainGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Inner {
    fn lock_slot(&self) -> MutexGuard<'_, Option<Slot>> {
        self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn lock_effects(&self) -> MutexGuard<'_, VecDeque<SurfaceEffect>> {
        self.effects.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Queue a surface call. Must be called with the slot lock held so the
    /// queue order matches the order of state transitions.
    fn emit(&self, effect: SurfaceEffect) {
        self.lock_effects().push_back(effect);
    }

    /// Deliver queued surface calls with no lock held.
    ///
    /// A surface may call back into the notifier from any callback; effects
    /// produced that way are queued and delivered by the outer drain, after
    /// the call that triggered them returns.
    fn flush(&self) {
        loop {
            if self.draining.swap(true, Ordering::Acquire) {
                return;
            }
            {
                let _guard = DrainGuard(&self.draining);
                loop {
                    let next = self.lock_effects().pop_front();
                    match next {
                        Some(effect) => self.deliver(effect),
                        None => break,
                    }
                }
            }
            // Another thread may have queued after the last pop
            if self.lock_effects().is_empty() {
                return;
            }
        }
    }

    fn deliver(&self, effect: SurfaceEffect) {
        match effect {
            SurfaceEffect::Insert(view) => self.surface.insert(&view),
            SurfaceEffect::SlideIn(id) => self.surface.slide_in(id),
            SurfaceEffect::SlideOut(id) => self.surface.slide_out(id),
            SurfaceEffect::Remove(id) => self.surface.remove(id),
        }
    }

    fn show(
        self: &Arc<Self>,
        message: String,
        kind: NotificationKind,
        action: Option<NotificationAction>,
    ) -> NotificationId {
        let id = NotificationId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let (action_label, handler) = match action {
            Some(action) => (Some(action.label), Some(action.handler)),
            None => (None, None),
        };
        let view = Notification {
            id,
            message,
            kind,
            action_label,
        };

        {
            let mut slot = self.lock_slot();
            if let Some(mut previous) = slot.take() {
                previous.abort_timers();
                self.emit(SurfaceEffect::Remove(previous.view.id));
                debug_print_module("NOTIFY", &format!("{} replaced by {}", previous.view.id, id));
            }

            self.emit(SurfaceEffect::Insert(view.clone()));
            let timers = vec![
                self.after(self.timings.enter_delay, move |inner| inner.reveal(id)),
                self.after(self.timings.auto_dismiss, move |inner| {
                    inner.dismiss(id, DismissTrigger::Timeout);
                }),
            ];

            *slot = Some(Slot {
                view,
                phase: Phase::Created,
                handler,
                timers,
            });
        }

        self.flush();
        id
    }

    fn after<F>(self: &Arc<Self>, delay: Duration, f: F) -> JoinHandle<()>
    where
        F: FnOnce(Arc<Inner>) + Send + 'static,
    {
        let weak: Weak<Inner> = Arc::downgrade(self);
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Some(inner) = weak.upgrade() {
                f(inner);
            }
        })
    }

    fn reveal(&self, id: NotificationId) {
        {
            let mut slot = self.lock_slot();
            if let Some(current) = slot.as_mut() {
                if current.view.id == id && current.phase == Phase::Created {
                    current.phase = Phase::Visible;
                    self.emit(SurfaceEffect::SlideIn(id));
                }
            }
        }
        self.flush();
    }

    fn dismiss(self: &Arc<Self>, id: NotificationId, trigger: DismissTrigger) -> bool {
        {
            let mut slot = self.lock_slot();
            let Some(current) = slot.as_mut() else {
                return false;
            };
            if current.view.id != id || !current.phase.is_live() {
                return false;
            }

            current.phase = Phase::Dismissing;
            current.abort_timers();
            self.emit(SurfaceEffect::SlideOut(id));
            current
                .timers
                .push(self.after(self.timings.transition, move |inner| inner.finish_removal(id)));
        }

        debug_print_module("NOTIFY", &format!("{} dismissed by {:?}", id, trigger));
        self.flush();
        true
    }

    fn finish_removal(&self, id: NotificationId) {
        {
            let mut slot = self.lock_slot();
            let done = matches!(
                slot.as_ref(),
                Some(current) if current.view.id == id && current.phase == Phase::Dismissing
            );
            if done {
                self.emit(SurfaceEffect::Remove(id));
                *slot = None;
            }
        }
        self.flush();
    }
}
