//! Terminal implementations of the host capabilities

pub mod form;
pub mod opener;
pub mod surface;

pub use form::TerminalForm;
pub use opener::SystemOpener;
pub use surface::TerminalSurface;
