//! Debug output helpers
//!
//! # Environment Variables
//!
//! - `FOLIO_DEBUG=1` - Enable debug output to console and log file

use std::sync::OnceLock;

static DEBUG_ENABLED: OnceLock<bool> = OnceLock::new();

/// Check if debug mode is enabled
///
/// The result is cached after the first call. Set `FOLIO_DEBUG` before any
/// debug output happens.
#[inline]
pub fn is_debug_enabled() -> bool {
    *DEBUG_ENABLED.get_or_init(|| {
        std::env::var("FOLIO_DEBUG")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false)
    })
}

/// Debug print with module prefix
#[inline]
pub fn debug_print_module(module: &str, msg: &str) {
    if is_debug_enabled() {
        println!("🔧 [{}] {}", module, msg);
        crate::utils::logger::debug(&format!("[{}] {}", module, msg));
    }
}
