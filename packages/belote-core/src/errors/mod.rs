//! Error handling for the Belote engine.

pub mod domain;
pub mod error_code;

pub use domain::{DomainError, InfraErrorKind, ValidationKind};
pub use error_code::ErrorCode;
