//! Dealers: one shuffled 32-card deck handed out one card at a time.

use std::collections::VecDeque;
use std::fmt;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::domain::seed_derivation::derive_dealing_seed;
use crate::domain::{full_deck, Card};
use crate::errors::domain::{DomainError, InfraErrorKind};

/// Source of cards for a single hand.
pub trait Dealer: fmt::Debug + Send {
    /// Next card off the deck; `DeckExhausted` once the deck is empty.
    fn deal(&mut self) -> Result<Card, DomainError>;

    /// Cards left to deal.
    fn remaining(&self) -> usize;
}

/// Produces a fresh dealer for every hand of a game.
pub trait DealerSource: fmt::Debug + Send {
    fn dealer_for_hand(&mut self, hand_no: u32) -> Box<dyn Dealer>;
}

fn deck_exhausted() -> DomainError {
    DomainError::infra(InfraErrorKind::DeckExhausted, "Deck is empty")
}

/// A uniformly shuffled 32-card deck.
#[derive(Debug, Clone)]
pub struct ShuffledDealer {
    deck: Vec<Card>,
    next: usize,
}

impl ShuffledDealer {
    /// Shuffle with fresh OS entropy.
    pub fn new() -> Self {
        Self::from_rng(&mut ChaCha20Rng::from_os_rng())
    }

    /// Deterministic shuffle for a given seed.
    pub fn from_seed(seed: u64) -> Self {
        Self::from_rng(&mut ChaCha20Rng::seed_from_u64(seed))
    }

    pub fn from_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = full_deck();
        deck.shuffle(rng);
        Self { deck, next: 0 }
    }
}

impl Default for ShuffledDealer {
    fn default() -> Self {
        Self::new()
    }
}

impl Dealer for ShuffledDealer {
    fn deal(&mut self) -> Result<Card, DomainError> {
        let card = *self.deck.get(self.next).ok_or_else(deck_exhausted)?;
        self.next += 1;
        Ok(card)
    }

    fn remaining(&self) -> usize {
        self.deck.len() - self.next
    }
}

/// Deals a fixed sequence of cards in order.
///
/// Useful for replays and scripted games; the caller is responsible for
/// handing it a valid deck.
#[derive(Debug, Clone)]
pub struct StackedDealer {
    cards: VecDeque<Card>,
}

impl StackedDealer {
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// The unshuffled deck, suit-major.
    pub fn in_order() -> Self {
        Self::new(full_deck())
    }
}

impl Dealer for StackedDealer {
    fn deal(&mut self) -> Result<Card, DomainError> {
        self.cards.pop_front().ok_or_else(deck_exhausted)
    }

    fn remaining(&self) -> usize {
        self.cards.len()
    }
}

/// Shuffled dealers whose seeds derive from one game seed.
#[derive(Debug, Clone)]
pub struct SeededDealerSource {
    game_seed: u64,
}

impl SeededDealerSource {
    pub fn new(game_seed: u64) -> Self {
        Self { game_seed }
    }

    /// Pick a random game seed from OS entropy.
    pub fn from_os_rng() -> Self {
        Self::new(rand::rng().random::<u64>())
    }

    pub fn game_seed(&self) -> u64 {
        self.game_seed
    }
}

impl DealerSource for SeededDealerSource {
    fn dealer_for_hand(&mut self, hand_no: u32) -> Box<dyn Dealer> {
        Box::new(ShuffledDealer::from_seed(derive_dealing_seed(
            self.game_seed,
            hand_no,
        )))
    }
}
