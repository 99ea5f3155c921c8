use console::{style, Term};
use indicatif::{ProgressBar, ProgressStyle};
use std::io;
use std::sync::Mutex;
use std::time::Duration;
use tokio::sync::oneshot;

use folio_core::utils::debug::debug_print_module;
use folio_core::{FieldMark, FormControls, FormField};

/// The contact form as a sequence of terminal prompts
pub struct TerminalForm {
    term: Term,
    spinner: Mutex<Option<ProgressBar>>,
}

impl TerminalForm {
    pub fn new(term: Term) -> Self {
        Self {
            term,
            spinner: Mutex::new(None),
        }
    }

    pub fn is_interactive(&self) -> bool {
        self.term.is_term()
    }

    /// Prompt for one field without blocking the runtime.
    ///
    /// The read runs on a detached thread so a pending prompt never keeps the
    /// process alive on exit.
    pub async fn prompt(&self, field: FormField) -> io::Result<String> {
        self.term
            .write_str(&format!("{} ", style(format!("{}:", field.label())).bold()))?;
        read_line(self.term.clone()).await
    }

    fn spinner_slot(&self) -> std::sync::MutexGuard<'_, Option<ProgressBar>> {
        self.spinner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

pub async fn read_line(term: Term) -> io::Result<String> {
    let (tx, rx) = oneshot::channel();
    std::thread::spawn(move || {
        let _ = tx.send(term.read_line());
    });
    rx.await
        .unwrap_or_else(|_| Err(io::Error::new(io::ErrorKind::Interrupted, "prompt abandoned")))
}

impl FormControls for TerminalForm {
    fn mark_field(&self, field: FormField, mark: FieldMark) {
        debug_print_module("FORM", &format!("{} -> {}", field, mark.border_color()));
        if mark == FieldMark::Invalid {
            let _ = self
                .term
                .write_line(&style(format!("  ✗ {} is required", field.label())).red().to_string());
        }
    }

    fn begin_busy(&self, caption: &str) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(caption.to_string());
        spinner.enable_steady_tick(Duration::from_millis(100));
        *self.spinner_slot() = Some(spinner);
    }

    fn end_busy(&self) {
        if let Some(spinner) = self.spinner_slot().take() {
            spinner.finish_and_clear();
        }
    }

    fn reset(&self) {
        let _ = self.term.write_line(&style("Form cleared.").dim().to_string());
    }
}
