//! Domain-level error type returned by every engine operation.
//!
//! Rule violations are `Validation` errors: the caller may report them to the
//! acting player and let them retry. `Infra` errors mean the engine itself is
//! misconfigured or an internal invariant broke (e.g. the dealer ran dry).
//! No operation mutates state before it has decided to succeed.

use thiserror::Error;

use super::error_code::ErrorCode;

/// Rule, turn-order and protocol violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationKind {
    // Turn order
    NotPlayersTurn,
    NotSelectionTurn,
    // Card legality
    CardNotOwned,
    MustFollowLeadSuit,
    MustPlayTrump,
    MustPlayHigherTrump,
    // Trump selection protocol
    AlreadyVoted,
    LastPlayerMustChoose,
    SameSuitAsTableTrump,
    // Wrong state for the operation
    TrickComplete,
    TrickNotComplete,
    PhaseMismatch,
    HandIsFinished,
    GameNotInProgress,
    GameAlreadyStarted,
    // Input decoding
    ParseCard,
    InvalidSeat,
    InvalidCommand,
}

/// Operational failures that no player action can cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfraErrorKind {
    DeckExhausted,
    Config,
    InvariantViolated,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Player action rejected by the rules
    #[error("validation error {0:?}: {1}")]
    Validation(ValidationKind, String),
    /// Engine invariant or configuration failure
    #[error("infra {0:?}: {1}")]
    Infra(InfraErrorKind, String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }

    pub fn invariant(detail: impl Into<String>) -> Self {
        Self::Infra(
            InfraErrorKind::InvariantViolated,
            format!("Invariant violated: {}", detail.into()),
        )
    }

    /// The validation kind, if this is a rule violation.
    pub fn validation_kind(&self) -> Option<ValidationKind> {
        match self {
            DomainError::Validation(kind, _) => Some(*kind),
            DomainError::Infra(..) => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, DomainError::Validation(..))
    }

    pub fn detail(&self) -> &str {
        match self {
            DomainError::Validation(_, d) | DomainError::Infra(_, d) => d,
        }
    }

    /// Stable code for the collaborator layer.
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::Validation(kind, _) => match kind {
                ValidationKind::NotPlayersTurn => ErrorCode::NotPlayersTurn,
                ValidationKind::NotSelectionTurn => ErrorCode::NotSelectionTurn,
                ValidationKind::CardNotOwned => ErrorCode::CardNotOwned,
                ValidationKind::MustFollowLeadSuit => ErrorCode::MustFollowLeadSuit,
                ValidationKind::MustPlayTrump => ErrorCode::MustPlayTrump,
                ValidationKind::MustPlayHigherTrump => ErrorCode::MustPlayHigherTrump,
                ValidationKind::AlreadyVoted => ErrorCode::AlreadyVoted,
                ValidationKind::LastPlayerMustChoose => ErrorCode::LastPlayerMustChoose,
                ValidationKind::SameSuitAsTableTrump => ErrorCode::SameSuitAsTableTrump,
                ValidationKind::TrickComplete => ErrorCode::TrickComplete,
                ValidationKind::TrickNotComplete => ErrorCode::TrickNotComplete,
                ValidationKind::PhaseMismatch => ErrorCode::PhaseMismatch,
                ValidationKind::HandIsFinished => ErrorCode::HandIsFinished,
                ValidationKind::GameNotInProgress => ErrorCode::GameNotInProgress,
                ValidationKind::GameAlreadyStarted => ErrorCode::GameAlreadyStarted,
                ValidationKind::ParseCard => ErrorCode::ParseCard,
                ValidationKind::InvalidSeat => ErrorCode::InvalidSeat,
                ValidationKind::InvalidCommand => ErrorCode::InvalidCommand,
            },
            DomainError::Infra(kind, _) => match kind {
                InfraErrorKind::DeckExhausted => ErrorCode::DeckExhausted,
                InfraErrorKind::Config => ErrorCode::ConfigError,
                InfraErrorKind::InvariantViolated => ErrorCode::Internal,
            },
        }
    }
}
