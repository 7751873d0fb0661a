use serde::Serialize;

use crate::domain::cards_logic::{card_beats, highest_trump};
use crate::domain::player_hand::PlayerHand;
use crate::domain::rules::PLAYERS;
use crate::domain::seats::{expected_actor, PlayerId};
use crate::domain::{Card, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

/// Outcome of a completed trick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrickResult {
    pub winner: PlayerId,
    pub points: u16,
}

/// One round of up to four plays under a fixed trump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trick {
    starting_player: PlayerId,
    trump: Suit,
    /// Plays in turn order starting at `starting_player`.
    plays: Vec<(PlayerId, Card)>,
}

impl Trick {
    pub fn new(starting_player: PlayerId, trump: Suit) -> Self {
        Self {
            starting_player,
            trump,
            plays: Vec::with_capacity(PLAYERS),
        }
    }

    pub fn starting_player(&self) -> PlayerId {
        self.starting_player
    }

    pub fn trump(&self) -> Suit {
        self.trump
    }

    pub fn plays(&self) -> &[(PlayerId, Card)] {
        &self.plays
    }

    pub fn card_of(&self, player: PlayerId) -> Option<Card> {
        self.plays
            .iter()
            .find(|(who, _)| *who == player)
            .map(|(_, card)| *card)
    }

    pub fn is_complete(&self) -> bool {
        self.plays.len() == PLAYERS
    }

    /// Suit of the starting player's card, once it has been played.
    pub fn lead_suit(&self) -> Option<Suit> {
        self.plays.first().map(|(_, card)| card.suit)
    }

    pub fn current_turn(&self) -> Result<PlayerId, DomainError> {
        if self.is_complete() {
            return Err(DomainError::validation(
                ValidationKind::TrickComplete,
                "Trick is complete",
            ));
        }
        Ok(expected_actor(self.starting_player, self.plays.len()))
    }

    /// Play `card` for `player`, removing it from `hand`.
    ///
    /// Nothing is mutated unless every check passes.
    pub fn play(
        &mut self,
        player: PlayerId,
        card: Card,
        hand: &mut PlayerHand,
    ) -> Result<(), DomainError> {
        let turn = self.current_turn()?;
        if turn != player {
            return Err(DomainError::validation(
                ValidationKind::NotPlayersTurn,
                format!("It is {turn}'s turn, not {player}'s"),
            ));
        }

        self.check_card(card, hand)?;

        hand.remove(card);
        self.plays.push((player, card));
        Ok(())
    }

    /// Cards from `hand` that the next player may legally play.
    pub fn legal_moves(&self, hand: &PlayerHand) -> Vec<Card> {
        if self.is_complete() {
            return Vec::new();
        }
        hand.iter()
            .copied()
            .filter(|card| self.check_card(*card, hand).is_ok())
            .collect()
    }

    fn check_card(&self, card: Card, hand: &PlayerHand) -> Result<(), DomainError> {
        if !hand.contains(card) {
            return Err(DomainError::validation(
                ValidationKind::CardNotOwned,
                format!("Card not in hand: {card}"),
            ));
        }

        let Some(lead) = self.lead_suit() else {
            return Ok(());
        };

        let required = if hand.has_suit(lead) {
            lead
        } else if hand.has_suit(self.trump) {
            self.trump
        } else {
            return Ok(());
        };

        if card.suit != required {
            return Err(if required == lead {
                DomainError::validation(
                    ValidationKind::MustFollowLeadSuit,
                    format!("Must follow lead suit {lead}"),
                )
            } else {
                DomainError::validation(
                    ValidationKind::MustPlayTrump,
                    format!("Must play trump {}", self.trump),
                )
            });
        }

        if required == self.trump {
            self.check_over_trump(card, hand)?;
        }
        Ok(())
    }

    /// A forced trump must beat the trick's best trump when the hand can.
    fn check_over_trump(&self, card: Card, hand: &PlayerHand) -> Result<(), DomainError> {
        let Some(best_in_trick) = self.highest_trump_played() else {
            return Ok(());
        };
        let Some(best_in_hand) = hand.highest_trump(self.trump) else {
            return Ok(());
        };

        let to_beat = best_in_trick.rank.trump_order();
        if best_in_hand.rank.trump_order() > to_beat && card.rank.trump_order() < to_beat {
            return Err(DomainError::validation(
                ValidationKind::MustPlayHigherTrump,
                format!("Must play a trump higher than {best_in_trick}"),
            ));
        }
        Ok(())
    }

    fn highest_trump_played(&self) -> Option<Card> {
        highest_trump(self.plays.iter().map(|(_, card)| card), self.trump)
    }

    pub fn result(&self) -> Result<TrickResult, DomainError> {
        if !self.is_complete() {
            return Err(DomainError::validation(
                ValidationKind::TrickNotComplete,
                "Trick is not complete",
            ));
        }

        let points = self.plays.iter().map(|(_, c)| c.points(self.trump)).sum();

        let (mut winner, mut best) = self.plays[0];
        for &(player, card) in &self.plays[1..] {
            if card_beats(card, best, self.trump) {
                winner = player;
                best = card;
            }
        }

        Ok(TrickResult { winner, points })
    }
}
