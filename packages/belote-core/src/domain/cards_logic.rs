//! Card game logic: checking suits in hands, comparing card strength

use super::cards_types::{Card, Suit};

pub fn hand_has_suit<'a>(cards: impl IntoIterator<Item = &'a Card>, suit: Suit) -> bool {
    cards.into_iter().any(|c| c.suit == suit)
}

/// Highest card of the trump suit among `cards`, by trump order.
pub fn highest_trump<'a>(cards: impl IntoIterator<Item = &'a Card>, trump: Suit) -> Option<Card> {
    cards
        .into_iter()
        .filter(|c| c.suit == trump)
        .max_by_key(|c| c.rank.trump_order())
        .copied()
}

/// Whether `challenger` takes the trick from the currently winning `best`.
///
/// A non-trump card off the best card's suit never wins, so the lead suit is
/// implied by `best` once the first card has been played.
pub fn card_beats(challenger: Card, best: Card, trump: Suit) -> bool {
    let best_trump = best.suit == trump;
    let challenger_trump = challenger.suit == trump;

    if best_trump {
        return challenger_trump && challenger.rank.trump_order() > best.rank.trump_order();
    }
    if challenger_trump {
        return true;
    }
    challenger.suit == best.suit && challenger.rank.non_trump_order() > best.rank.non_trump_order()
}
