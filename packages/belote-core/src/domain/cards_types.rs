//! Core card-related types: Card, Rank, Suit, and the rank tables

use std::fmt;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    pub const fn name(self) -> &'static str {
        match self {
            Suit::Spades => "Spades",
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rank of a card. The discriminant indexes the static order/point tables.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(u8)]
pub enum Rank {
    Seven = 0,
    Eight = 1,
    Nine = 2,
    Ten = 3,
    Jack = 4,
    Queen = 5,
    King = 6,
    Ace = 7,
}

// Indexed by `Rank as usize`:               7  8  9  10 J  Q  K  A
const NON_TRUMP_ORDER: [u8; 8] = [0, 1, 2, 6, 3, 4, 5, 7];
const TRUMP_ORDER: [u8; 8] = [0, 1, 6, 4, 7, 2, 3, 5];
const NON_TRUMP_POINTS: [u16; 8] = [0, 0, 0, 10, 2, 3, 4, 11];
const TRUMP_POINTS: [u16; 8] = [0, 0, 14, 10, 20, 3, 4, 11];

impl Rank {
    pub const ALL: [Rank; 8] = [
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    const fn index(self) -> usize {
        self as usize
    }

    /// Strength within a non-trump suit: 7 < 8 < 9 < J < Q < K < 10 < A.
    pub const fn non_trump_order(self) -> u8 {
        NON_TRUMP_ORDER[self.index()]
    }

    /// Strength within the trump suit: 7 < 8 < Q < K < 10 < A < 9 < J.
    pub const fn trump_order(self) -> u8 {
        TRUMP_ORDER[self.index()]
    }

    pub const fn non_trump_points(self) -> u16 {
        NON_TRUMP_POINTS[self.index()]
    }

    pub const fn trump_points(self) -> u16 {
        TRUMP_POINTS[self.index()]
    }

    pub const fn order(self, is_trump: bool) -> u8 {
        if is_trump {
            self.trump_order()
        } else {
            self.non_trump_order()
        }
    }

    pub const fn points(self, is_trump: bool) -> u16 {
        if is_trump {
            self.trump_points()
        } else {
            self.non_trump_points()
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    pub fn is_trump(self, trump: Suit) -> bool {
        self.suit == trump
    }

    /// Points this card is worth in a hand played with `trump`.
    pub fn points(self, trump: Suit) -> u16 {
        self.rank.points(self.is_trump(trump))
    }
}

// Note: Ord on Card is only for stable sorting (suit, then rank discriminant).
// Trick resolution never uses it; see `cards_logic::card_beats`.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.suit.cmp(&other.suit) {
            std::cmp::Ordering::Equal => self.rank.cmp(&other.rank),
            ord => ord,
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank.name(), self.suit.name())
    }
}

/// The 32-card Belote deck in suit-major order.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(Suit::ALL.len() * Rank::ALL.len());
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card { suit, rank });
        }
    }
    deck
}
