//! Error codes handed to the collaborator layer.
//!
//! All codes are SCREAMING_SNAKE_CASE. Add new codes here; never pass ad-hoc
//! strings as error codes.

use core::fmt;

use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
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

    // State
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

    // System
    DeckExhausted,
    ConfigError,
    Internal,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotPlayersTurn => "NOT_PLAYERS_TURN",
            Self::NotSelectionTurn => "NOT_SELECTION_TURN",

            Self::CardNotOwned => "CARD_NOT_OWNED",
            Self::MustFollowLeadSuit => "MUST_FOLLOW_LEAD_SUIT",
            Self::MustPlayTrump => "MUST_PLAY_TRUMP",
            Self::MustPlayHigherTrump => "MUST_PLAY_HIGHER_TRUMP",

            Self::AlreadyVoted => "ALREADY_VOTED",
            Self::LastPlayerMustChoose => "LAST_PLAYER_MUST_CHOOSE",
            Self::SameSuitAsTableTrump => "SAME_SUIT_AS_TABLE_TRUMP",

            Self::TrickComplete => "TRICK_COMPLETE",
            Self::TrickNotComplete => "TRICK_NOT_COMPLETE",
            Self::PhaseMismatch => "PHASE_MISMATCH",
            Self::HandIsFinished => "HAND_IS_FINISHED",
            Self::GameNotInProgress => "GAME_NOT_IN_PROGRESS",
            Self::GameAlreadyStarted => "GAME_ALREADY_STARTED",

            Self::ParseCard => "PARSE_CARD",
            Self::InvalidSeat => "INVALID_SEAT",
            Self::InvalidCommand => "INVALID_COMMAND",

            Self::DeckExhausted => "DECK_EXHAUSTED",
            Self::ConfigError => "CONFIG_ERROR",
            Self::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for ErrorCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
