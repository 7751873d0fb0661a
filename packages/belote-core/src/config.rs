//! Game configuration, with defaults and an environment-variable loader.

use std::env;

use serde::{Deserialize, Serialize};

use crate::domain::rules::DEFAULT_TARGET_SCORE;
use crate::domain::PlayerId;
use crate::errors::domain::{DomainError, InfraErrorKind};

pub const ENV_TARGET_SCORE: &str = "BELOTE_TARGET_SCORE";
pub const ENV_STARTING_SEAT: &str = "BELOTE_STARTING_SEAT";
pub const ENV_RNG_SEED: &str = "BELOTE_RNG_SEED";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// The game ends once a team's total reaches this.
    pub target_score: u32,
    /// Starting player of the first hand; later hands rotate clockwise.
    pub starting_player: PlayerId,
    /// Fixed seed for reproducible dealing. `None` shuffles from OS entropy.
    pub rng_seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            target_score: DEFAULT_TARGET_SCORE,
            starting_player: PlayerId::P1,
            rng_seed: None,
        }
    }
}

impl GameConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn with_target_score(mut self, target_score: u32) -> Self {
        self.target_score = target_score;
        self
    }

    pub fn with_starting_player(mut self, starting_player: PlayerId) -> Self {
        self.starting_player = starting_player;
        self
    }

    /// Load from `BELOTE_*` environment variables; unset variables keep
    /// their defaults.
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_TARGET_SCORE) {
            config.target_score = match raw.trim().parse::<u32>() {
                Ok(score) if score > 0 => score,
                _ => return Err(config_error(ENV_TARGET_SCORE, "a positive integer", &raw)),
            };
        }

        if let Some(raw) = lookup(ENV_STARTING_SEAT) {
            config.starting_player = raw
                .trim()
                .parse::<u8>()
                .ok()
                .and_then(|seat| PlayerId::from_seat_number(seat).ok())
                .ok_or_else(|| config_error(ENV_STARTING_SEAT, "a seat number 1-4", &raw))?;
        }

        if let Some(raw) = lookup(ENV_RNG_SEED) {
            let seed = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| config_error(ENV_RNG_SEED, "an unsigned 64-bit integer", &raw))?;
            config.rng_seed = Some(seed);
        }

        Ok(config)
    }
}

fn config_error(name: &str, expected: &str, got: &str) -> DomainError {
    DomainError::infra(
        InfraErrorKind::Config,
        format!("{name} must be {expected}, got '{got}'"),
    )
}
