//! Notifications rendered as styled terminal lines

use console::{style, Term};
use folio_core::utils::debug::debug_print_module;
use folio_core::{Notification, NotificationId, NotificationKind, NotificationSurface};

pub struct TerminalSurface {
    term: Term,
}

impl TerminalSurface {
    pub fn new(term: Term) -> Self {
        Self { term }
    }
}

/// One line for a notification, including the action hint if any
pub fn format_notification(notification: &Notification) -> String {
    let kind = notification.kind;
    let head = format!("{} {}", kind.icon(), notification.message);
    let head = match kind {
        NotificationKind::Success => style(head).green().bold(),
        NotificationKind::Info => style(head).cyan(),
        NotificationKind::Error => style(head).red().bold(),
    };

    match &notification.action_label {
        Some(label) => format!("{}  {}", head, style(format!("[{}]", label)).yellow()),
        None => head.to_string(),
    }
}

impl NotificationSurface for TerminalSurface {
    fn insert(&self, notification: &Notification) {
        let _ = self.term.write_line(&format_notification(notification));
    }

    fn slide_in(&self, id: NotificationId) {
        debug_print_module("SURFACE", &format!("{} visible", id));
    }

    fn slide_out(&self, id: NotificationId) {
        debug_print_module("SURFACE", &format!("{} dismissing", id));
    }

    fn remove(&self, id: NotificationId) {
        debug_print_module("SURFACE", &format!("{} removed", id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{NotificationAction, Notifier, NotifierTimings};
    use pretty_assertions::assert_eq;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct Capture(Mutex<Vec<Notification>>);

    impl NotificationSurface for Capture {
        fn insert(&self, notification: &Notification) {
            self.0.lock().unwrap().push(notification.clone());
        }
        fn slide_in(&self, _id: NotificationId) {}
        fn slide_out(&self, _id: NotificationId) {}
        fn remove(&self, _id: NotificationId) {}
    }

    #[tokio::test]
    async fn test_format_includes_icon_and_action_hint() {
        let capture = Arc::new(Capture::default());
        let notifier = Notifier::new(capture.clone(), NotifierTimings::default());
        notifier.show("Message sent", NotificationKind::Success);
        notifier.show_with_action(
            "Failed to send",
            NotificationKind::Error,
            NotificationAction::new("Open Email Client", || {}),
        );

        let lines: Vec<String> = capture
            .0
            .lock()
            .unwrap()
            .iter()
            .map(|n| console::strip_ansi_codes(&format_notification(n)).to_string())
            .collect();
        assert_eq!(
            lines,
            vec![
                "✓ Message sent".to_string(),
                "⚠ Failed to send  [Open Email Client]".to_string(),
            ]
        );
    }
}
