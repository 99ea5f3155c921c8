//! Test doubles shared by unit tests

mod mocks;

pub use mocks::*;
