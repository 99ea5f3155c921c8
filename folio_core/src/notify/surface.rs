use super::{Notification, NotificationId};

/// Where notifications are rendered.
///
/// Calls for one instance always arrive in the order
/// `insert`, `slide_in`, `slide_out`, `remove`. An instance closed or
/// actioned during the enter delay skips `slide_in` (`insert`, `slide_out`,
/// `remove`); one replaced by a newer instance skips whatever it had not
/// reached yet and goes straight to `remove`. A `remove` for an instance
/// always happens before the `insert` of its replacement.
///
/// No notifier lock is held during these calls, so an implementation may
/// call back into the [`Notifier`](super::Notifier). Surface calls caused by
/// such a callback are delivered after the current one returns.
pub trait NotificationSurface: Send + Sync {
    fn insert(&self, notification: &Notification);
    fn slide_in(&self, id: NotificationId);
    fn slide_out(&self, id: NotificationId);
    fn remove(&self, id: NotificationId);
}
