//! Domain layer: Belote rules, deal sequencing and match scoring.

pub mod bidding;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod commands;
pub mod dealing;
pub mod game;
pub mod hand;
pub mod player_hand;
pub mod rules;
pub mod scoring;
pub mod seats;
pub mod seed_derivation;
pub mod snapshot;
pub mod tricks;

#[cfg(test)]
mod tests_hand;
#[cfg(test)]
mod tests_props_trick_winner;

// Re-exports for ergonomics
pub use cards_logic::{card_beats, hand_has_suit};
pub use cards_types::{full_deck, Card, Rank, Suit};
pub use commands::GameCommand;
pub use dealing::{Dealer, DealerSource, SeededDealerSource, ShuffledDealer, StackedDealer};
pub use game::{Game, GameState};
pub use hand::{Hand, HandState, PlayOutcome};
pub use player_hand::PlayerHand;
pub use scoring::TeamScores;
pub use seats::{PlayerId, TeamId};
pub use seed_derivation::derive_dealing_seed;
pub use tricks::{Trick, TrickResult};
