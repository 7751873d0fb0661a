//! Player commands as they arrive from a transport layer.
//!
//! A command is decoded once from JSON and then applied to a [`Game`] on behalf
//! of the seat that sent it:
//!
//! ```json
//! {"command": "acceptTrump", "accepted": true}
//! {"command": "selectTrump", "trump": "HEARTS"}
//! {"command": "selectTrump", "trump": null}
//! {"command": "playCard", "card": "TD"}
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::game::Game;
use crate::domain::hand::PlayOutcome;
use crate::domain::{Card, PlayerId, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum GameCommand {
    StartGame,
    AcceptTrump {
        accepted: bool,
    },
    SelectTrump {
        /// `None` passes.
        #[serde(default)]
        trump: Option<Suit>,
    },
    PlayCard {
        card: Card,
    },
}

impl GameCommand {
    pub fn from_json(raw: &str) -> Result<Self, DomainError> {
        serde_json::from_str(raw).map_err(|e| {
            DomainError::validation(ValidationKind::InvalidCommand, format!("Invalid command: {e}"))
        })
    }

    /// Apply this command as `player`. Only `PlayCard` can produce an outcome.
    pub fn apply(self, player: PlayerId, game: &mut Game) -> Result<Option<PlayOutcome>, DomainError> {
        debug!(player = %player, command = ?self, "Applying command");
        match self {
            GameCommand::StartGame => game.start().map(|()| None),
            GameCommand::AcceptTrump { accepted } => {
                game.accept_table_trump(player, accepted).map(|()| None)
            }
            GameCommand::SelectTrump { trump } => game.select_trump(player, trump).map(|()| None),
            GameCommand::PlayCard { card } => game.play_card(player, card).map(Some),
        }
    }
}
