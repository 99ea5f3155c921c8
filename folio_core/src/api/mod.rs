//! Email-relay communication
//!
//! # Module Structure
//!
//! - `relay` - `EmailRelay` trait, template parameters and responses
//! - `emailjs` - EmailJS REST client
//! - `http_client` - reqwest client construction

pub mod emailjs;
pub mod http_client;
pub mod relay;

pub use emailjs::EmailJsClient;
pub use relay::{EmailRelay, RelayResponse, TemplateParams};
