//! Belote test support utilities
//!
//! Shared tooling for the engine's unit and integration tests: one-time
//! tracing initialization and the project-wide proptest configuration.

pub mod logging;
pub mod proptest_prelude;
