//! Utility modules for folio
//!
//! Contains configuration management, error types, and logging helpers.

pub mod config;
pub mod debug;
pub mod error;
pub mod logger;

// Available exports via submodules:
// debug::{is_debug_enabled, debug_print_module}
// error::{FolioError, FolioResult, RelayError, ResultExt}
