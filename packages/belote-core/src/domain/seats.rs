use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::rules::PLAYERS;
use crate::errors::domain::{DomainError, ValidationKind};

/// One of the four fixed seats, in clockwise play order.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum PlayerId {
    P1,
    P2,
    P3,
    P4,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TeamId {
    Team1,
    Team2,
}

impl PlayerId {
    pub const ALL: [PlayerId; PLAYERS] = [PlayerId::P1, PlayerId::P2, PlayerId::P3, PlayerId::P4];

    /// Zero-based seat index (P1 → 0).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// One-based seat number as shown to players (P1 → 1).
    pub const fn seat_number(self) -> u8 {
        self as u8 + 1
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn from_seat_number(seat: u8) -> Result<Self, DomainError> {
        usize::from(seat)
            .checked_sub(1)
            .and_then(Self::from_index)
            .ok_or_else(|| {
                DomainError::validation(
                    ValidationKind::InvalidSeat,
                    format!("Seat must be 1..=4, got {seat}"),
                )
            })
    }

    /// Seats 1 & 3 play for Team1, seats 2 & 4 for Team2.
    pub const fn team(self) -> TeamId {
        match self {
            PlayerId::P1 | PlayerId::P3 => TeamId::Team1,
            PlayerId::P2 | PlayerId::P4 => TeamId::Team2,
        }
    }

    pub fn teammate(self) -> PlayerId {
        nth_from(self, 2)
    }

    /// Next seat clockwise (P4 wraps to P1).
    pub fn next(self) -> PlayerId {
        seat_offset(self, 1)
    }

    pub fn previous(self) -> PlayerId {
        seat_offset(self, -1)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.seat_number())
    }
}

// Seats travel as their one-based number.
impl Serialize for PlayerId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.seat_number())
    }
}

impl<'de> Deserialize<'de> for PlayerId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let seat = u8::deserialize(deserializer)?;
        PlayerId::from_seat_number(seat)
            .map_err(|e| serde::de::Error::custom(e.detail().to_string()))
    }
}

impl TeamId {
    pub const ALL: [TeamId; 2] = [TeamId::Team1, TeamId::Team2];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn players(self) -> [PlayerId; 2] {
        match self {
            TeamId::Team1 => [PlayerId::P1, PlayerId::P3],
            TeamId::Team2 => [PlayerId::P2, PlayerId::P4],
        }
    }

    pub const fn opponent(self) -> TeamId {
        match self {
            TeamId::Team1 => TeamId::Team2,
            TeamId::Team2 => TeamId::Team1,
        }
    }
}

/// Seat / turn math helpers (4 fixed seats).
///
/// Clockwise direction is positive (+1).
#[inline]
pub fn seat_offset(seat: PlayerId, delta: i8) -> PlayerId {
    let idx = (seat.index() as i16 + delta as i16).rem_euclid(PLAYERS as i16) as usize;
    PlayerId::ALL[idx]
}

/// Returns the seat `n` steps clockwise from `start`.
#[inline]
pub fn nth_from(start: PlayerId, n: usize) -> PlayerId {
    PlayerId::ALL[(start.index() + n) % PLAYERS]
}

/// Expected actor seat during a trick.
///
/// `first_player` is the trick leader; `play_count` is how many cards
/// have already been played into the trick.
#[inline]
pub fn expected_actor(first_player: PlayerId, play_count: usize) -> PlayerId {
    nth_from(first_player, play_count)
}

/// Starting seat of a 0-based hand: rotates one seat per hand.
#[inline]
pub fn hand_starting_seat(first_start: PlayerId, hand_no: u32) -> PlayerId {
    nth_from(first_start, (hand_no % PLAYERS as u32) as usize)
}
