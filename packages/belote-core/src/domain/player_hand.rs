use std::collections::BTreeSet;

use crate::domain::cards_logic::{hand_has_suit, highest_trump};
use crate::domain::{Card, Suit};

/// Cards currently held by one player during a hand.
///
/// Backed by an ordered set so there are never duplicates and iteration is
/// stable (suit, then rank) for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerHand {
    cards: BTreeSet<Card>,
}

impl PlayerHand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn has_suit(&self, suit: Suit) -> bool {
        hand_has_suit(&self.cards, suit)
    }

    pub fn highest_trump(&self, trump: Suit) -> Option<Card> {
        highest_trump(&self.cards, trump)
    }

    /// Sorted copy of the held cards.
    pub fn to_vec(&self) -> Vec<Card> {
        self.cards.iter().copied().collect()
    }

    /// Returns false if the card was already held.
    pub(crate) fn insert(&mut self, card: Card) -> bool {
        self.cards.insert(card)
    }

    pub(crate) fn remove(&mut self, card: Card) -> bool {
        self.cards.remove(&card)
    }
}

impl FromIterator<Card> for PlayerHand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PlayerHand {
    type Item = &'a Card;
    type IntoIter = std::collections::btree_set::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
