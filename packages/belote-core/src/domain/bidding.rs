//! Trump-selection ballots.
//!
//! Both selection rounds (accepting the table card, then naming a free trump)
//! poll the four seats round-robin from the hand's starting player. A seat
//! votes at most once per ballot.

use crate::domain::rules::PLAYERS;
use crate::domain::seats::{nth_from, PlayerId};
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrumpBallot {
    starting_player: PlayerId,
    voted: [bool; PLAYERS],
}

impl TrumpBallot {
    pub fn new(starting_player: PlayerId) -> Self {
        Self {
            starting_player,
            voted: [false; PLAYERS],
        }
    }

    pub fn has_voted(&self, player: PlayerId) -> bool {
        self.voted[player.index()]
    }

    pub fn votes_cast(&self) -> usize {
        self.voted.iter().filter(|v| **v).count()
    }

    pub fn is_closed(&self) -> bool {
        self.votes_cast() == PLAYERS
    }

    /// First seat, round-robin from the starting player, that has not voted.
    pub fn next_voter(&self) -> Option<PlayerId> {
        (0..PLAYERS)
            .map(|n| nth_from(self.starting_player, n))
            .find(|p| !self.has_voted(*p))
    }

    /// The round-robin-final seat, which may not pass on a free-trump ballot.
    pub fn last_voter(&self) -> PlayerId {
        nth_from(self.starting_player, PLAYERS - 1)
    }

    pub fn check_turn(&self, player: PlayerId) -> Result<(), DomainError> {
        if self.has_voted(player) {
            return Err(DomainError::validation(
                ValidationKind::AlreadyVoted,
                format!("{player} has already voted"),
            ));
        }
        match self.next_voter() {
            Some(expected) if expected == player => Ok(()),
            Some(expected) => Err(DomainError::validation(
                ValidationKind::NotSelectionTurn,
                format!("It is {expected}'s turn to choose trump, not {player}'s"),
            )),
            // Every seat has voted, so `player` was caught above.
            None => Err(DomainError::validation(
                ValidationKind::AlreadyVoted,
                "All players have voted",
            )),
        }
    }

    pub(crate) fn record(&mut self, player: PlayerId) {
        self.voted[player.index()] = true;
    }
}
