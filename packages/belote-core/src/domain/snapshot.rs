//! Public snapshot API for observing game state without exposing internals.
//!
//! Snapshots are owned copies rebuilt on demand. [`GameSnapshot`] holds only
//! what every seat may see. [`PlayerView`] adds one player's own cards.

use serde::Serialize;

use crate::domain::game::{Game, GameState};
use crate::domain::hand::{Hand, HandState};
use crate::domain::rules::PLAYERS;
use crate::domain::scoring::TeamScores;
use crate::domain::tricks::{Trick, TrickResult};
use crate::domain::{Card, PlayerId, Suit, TeamId};

/// Cards on the table for one trick, in play order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TrickSnapshot {
    pub starting_player: PlayerId,
    pub trump: Suit,
    pub plays: Vec<(PlayerId, Card)>,
    /// Winner and points once all four cards are down.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<TrickResult>,
}

impl From<&Trick> for TrickSnapshot {
    fn from(trick: &Trick) -> Self {
        Self {
            starting_player: trick.starting_player(),
            trump: trick.trump(),
            plays: trick.plays().to_vec(),
            result: trick.result().ok(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HandSnapshot {
    pub state: HandState,
    pub starting_player: PlayerId,
    pub trump: Option<Suit>,
    pub table_trump: Card,
    pub to_act: Option<PlayerId>,
    pub current_trick: Option<TrickSnapshot>,
    pub last_trick: Option<TrickSnapshot>,
    pub points: TeamScores,
    pub tricks_played: usize,
    /// Cards held per seat, indexed P1..P4.
    pub cards_left: [usize; PLAYERS],
}

impl From<&Hand> for HandSnapshot {
    fn from(hand: &Hand) -> Self {
        Self {
            state: hand.state(),
            starting_player: hand.starting_player(),
            trump: hand.trump(),
            table_trump: hand.table_trump(),
            to_act: hand.current_turn().ok(),
            current_trick: hand.current_trick().map(TrickSnapshot::from),
            last_trick: hand.last_trick().map(TrickSnapshot::from),
            points: hand.points(),
            tricks_played: hand.tricks_played(),
            cards_left: PlayerId::ALL.map(|p| hand.player_cards(p).len()),
        }
    }
}

/// Game-wide public state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub state: GameState,
    pub scores: TeamScores,
    pub hand_no: u32,
    pub target_score: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<TeamId>,
    pub hand: Option<HandSnapshot>,
}

/// Public state plus the cards only `player` may see.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlayerView {
    pub game: GameSnapshot,
    pub player: PlayerId,
    pub team: TeamId,
    pub cards: Vec<Card>,
    /// Cards `player` may play right now; empty when not their turn to play.
    pub playable: Vec<Card>,
}

/// Entry point: produce a public snapshot of the current game state.
pub fn snapshot(game: &Game) -> GameSnapshot {
    GameSnapshot {
        state: game.state(),
        scores: game.scores(),
        hand_no: game.hand_no(),
        target_score: game.target_score(),
        winner: game.winner(),
        hand: game.hand().map(HandSnapshot::from),
    }
}

pub fn player_view(game: &Game, player: PlayerId) -> PlayerView {
    let (cards, playable) = match game.hand() {
        Some(hand) => (hand.player_cards(player).to_vec(), hand.legal_moves(player)),
        None => (Vec::new(), Vec::new()),
    };

    PlayerView {
        game: snapshot(game),
        player,
        team: player.team(),
        cards,
        playable,
    }
}
