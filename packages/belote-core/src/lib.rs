//! Rules engine for Belote: four players in two teams, a 32-card deck,
//! trump selection from a turned-up card, and tricks scored to a target.
//!
//! Callers drive a [`domain::Game`] directly or through
//! [`domain::GameCommand`], and observe it through [`domain::snapshot`].

#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod errors;

pub use config::GameConfig;
pub use errors::domain::DomainError;
