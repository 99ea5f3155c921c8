pub mod ui;

pub use ui::{SystemOpener, TerminalForm, TerminalSurface};
