//! Card parsing from short tokens (e.g., "AS", "TD", "7H") and stored names

use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

fn parse_error(s: &str) -> DomainError {
    DomainError::validation(ValidationKind::ParseCard, format!("Parse card: {s}"))
}

fn rank_from_char(ch: char) -> Option<Rank> {
    match ch {
        '7' => Some(Rank::Seven),
        '8' => Some(Rank::Eight),
        '9' => Some(Rank::Nine),
        'T' => Some(Rank::Ten),
        'J' => Some(Rank::Jack),
        'Q' => Some(Rank::Queen),
        'K' => Some(Rank::King),
        'A' => Some(Rank::Ace),
        _ => None,
    }
}

fn suit_from_char(ch: char) -> Option<Suit> {
    match ch {
        'S' => Some(Suit::Spades),
        'H' => Some(Suit::Hearts),
        'D' => Some(Suit::Diamonds),
        'C' => Some(Suit::Clubs),
        _ => None,
    }
}

impl Suit {
    pub const fn to_char(self) -> char {
        match self {
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
        }
    }
}

impl Rank {
    pub const fn to_char(self) -> char {
        match self {
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }
}

impl Card {
    /// Two-character token, the inverse of `FromStr`.
    pub fn token(self) -> String {
        let mut s = String::with_capacity(2);
        s.push(self.rank.to_char());
        s.push(self.suit.to_char());
        s
    }
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(rank_ch), Some(suit_ch), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(parse_error(s));
        };
        let rank = rank_from_char(rank_ch).ok_or_else(|| parse_error(s))?;
        let suit = suit_from_char(suit_ch).ok_or_else(|| parse_error(s))?;
        Ok(Card { suit, rank })
    }
}

impl FromStr for Suit {
    type Err = DomainError;

    /// Accepts the single letter (`"H"`) or the full name (`"Hearts"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            if let Some(suit) = suit_from_char(ch) {
                return Ok(suit);
            }
        }
        Suit::ALL
            .into_iter()
            .find(|suit| suit.name() == s)
            .ok_or_else(|| {
                DomainError::validation(ValidationKind::ParseCard, format!("Invalid suit: {s}"))
            })
    }
}

/// Non-panicking helper to parse card tokens into Card instances.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}

pub(crate) fn suit_from_stored(suit_str: &str) -> Result<Suit, DomainError> {
    match suit_str {
        "SPADES" => Ok(Suit::Spades),
        "HEARTS" => Ok(Suit::Hearts),
        "DIAMONDS" => Ok(Suit::Diamonds),
        "CLUBS" => Ok(Suit::Clubs),
        _ => Err(DomainError::validation(
            ValidationKind::ParseCard,
            format!("Invalid suit: {suit_str}"),
        )),
    }
}

pub(crate) fn rank_from_stored(rank_str: &str) -> Result<Rank, DomainError> {
    match rank_str {
        "SEVEN" => Ok(Rank::Seven),
        "EIGHT" => Ok(Rank::Eight),
        "NINE" => Ok(Rank::Nine),
        "TEN" => Ok(Rank::Ten),
        "JACK" => Ok(Rank::Jack),
        "QUEEN" => Ok(Rank::Queen),
        "KING" => Ok(Rank::King),
        "ACE" => Ok(Rank::Ace),
        _ => Err(DomainError::validation(
            ValidationKind::ParseCard,
            format!("Invalid rank: {rank_str}"),
        )),
    }
}

pub(crate) const fn suit_stored_name(suit: Suit) -> &'static str {
    match suit {
        Suit::Spades => "SPADES",
        Suit::Hearts => "HEARTS",
        Suit::Diamonds => "DIAMONDS",
        Suit::Clubs => "CLUBS",
    }
}

pub(crate) const fn rank_stored_name(rank: Rank) -> &'static str {
    match rank {
        Rank::Seven => "SEVEN",
        Rank::Eight => "EIGHT",
        Rank::Nine => "NINE",
        Rank::Ten => "TEN",
        Rank::Jack => "JACK",
        Rank::Queen => "QUEEN",
        Rank::King => "KING",
        Rank::Ace => "ACE",
    }
}
