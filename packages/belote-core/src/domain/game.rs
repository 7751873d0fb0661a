//! A full match: hands are dealt one after another until a team reaches the
//! target score.
//!
//! `Game` is the only entry point callers drive. It owns the current
//! [`Hand`] and hands out a fresh [`Dealer`](crate::domain::dealing::Dealer)
//! per hand from its [`DealerSource`].

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::domain::dealing::{DealerSource, SeededDealerSource};
use crate::domain::hand::{Hand, PlayOutcome};
use crate::domain::scoring::TeamScores;
use crate::domain::seats::{hand_starting_seat, PlayerId, TeamId};
use crate::domain::{Card, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum GameState {
    Ready,
    InProgress,
    Finished,
}

#[derive(Debug)]
pub struct Game {
    state: GameState,
    scores: TeamScores,
    first_starting_player: PlayerId,
    hand_no: u32,
    target_score: u32,
    hand: Option<Hand>,
    dealer_source: Box<dyn DealerSource>,
}

impl Game {
    pub fn new(config: GameConfig, dealer_source: Box<dyn DealerSource>) -> Self {
        Self {
            state: GameState::Ready,
            scores: TeamScores::default(),
            first_starting_player: config.starting_player,
            hand_no: 0,
            target_score: config.target_score,
            hand: None,
            dealer_source,
        }
    }

    /// Shuffled dealing, seeded from `config.rng_seed` when set.
    pub fn from_config(config: GameConfig) -> Self {
        let source = match config.rng_seed {
            Some(seed) => SeededDealerSource::new(seed),
            None => SeededDealerSource::from_os_rng(),
        };
        Self::new(config, Box::new(source))
    }

    pub fn start(&mut self) -> Result<(), DomainError> {
        if self.state != GameState::Ready {
            return Err(DomainError::validation(
                ValidationKind::GameAlreadyStarted,
                format!("Game already started (state {:?})", self.state),
            ));
        }

        self.hand = Some(self.deal_hand(0)?);
        self.hand_no = 0;
        self.state = GameState::InProgress;
        info!(
            starting_player = %self.first_starting_player,
            target_score = self.target_score,
            "Game started"
        );
        Ok(())
    }

    pub fn accept_table_trump(&mut self, player: PlayerId, accept: bool) -> Result<(), DomainError> {
        self.hand_mut()?.accept_table_trump(player, accept)
    }

    pub fn select_trump(&mut self, player: PlayerId, suit: Option<Suit>) -> Result<(), DomainError> {
        self.hand_mut()?.select_trump(player, suit)
    }

    /// Play a card. When it completes the hand and the game goes on, the
    /// next hand is dealt first; a dealing failure rejects the card and
    /// leaves the game as it was.
    pub fn play_card(&mut self, player: PlayerId, card: Card) -> Result<PlayOutcome, DomainError> {
        let next_hand = self.prepare_next_hand(player, card)?;
        let outcome = self.hand_mut()?.play_card(player, card)?;
        if outcome.hand_finished {
            self.finish_hand(next_hand)?;
        }
        Ok(outcome)
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// The hand being played; `None` before start and after the game ends.
    pub fn hand(&self) -> Option<&Hand> {
        self.hand.as_ref()
    }

    pub fn scores(&self) -> TeamScores {
        self.scores
    }

    /// Zero-based index of the current (or final) hand.
    pub fn hand_no(&self) -> u32 {
        self.hand_no
    }

    pub fn target_score(&self) -> u32 {
        self.target_score
    }

    pub fn first_starting_player(&self) -> PlayerId {
        self.first_starting_player
    }

    /// Whose action the game is waiting on, if any.
    pub fn current_turn(&self) -> Option<PlayerId> {
        self.hand.as_ref().and_then(|h| h.current_turn().ok())
    }

    /// Winning team once finished; `None` while playing or on an exact tie.
    pub fn winner(&self) -> Option<TeamId> {
        match self.state {
            GameState::Finished => self.scores.leader(),
            _ => None,
        }
    }

    fn hand_mut(&mut self) -> Result<&mut Hand, DomainError> {
        if self.state != GameState::InProgress {
            return Err(DomainError::validation(
                ValidationKind::GameNotInProgress,
                format!("Game is not in progress (state {:?})", self.state),
            ));
        }
        self.hand
            .as_mut()
            .ok_or_else(|| DomainError::invariant("game in progress without a hand"))
    }

    fn deal_hand(&mut self, hand_no: u32) -> Result<Hand, DomainError> {
        let starting_player = hand_starting_seat(self.first_starting_player, hand_no);
        let dealer = self.dealer_source.dealer_for_hand(hand_no);
        Hand::new(starting_player, dealer)
    }

    /// The hand that follows the current one, dealt only when `card`
    /// completes the current hand without ending the game.
    fn prepare_next_hand(&mut self, player: PlayerId, card: Card) -> Result<Option<Hand>, DomainError> {
        let hand = self.hand_mut()?;
        if !hand.is_on_last_card() {
            return Ok(None);
        }
        let mut totals = hand.points_after(player, card)?;
        totals.absorb(self.scores);
        if totals.any_reached(self.target_score) {
            return Ok(None);
        }
        self.deal_hand(self.hand_no + 1).map(Some)
    }

    fn finish_hand(&mut self, next_hand: Option<Hand>) -> Result<(), DomainError> {
        let hand_points = self
            .hand
            .as_ref()
            .map(Hand::points)
            .ok_or_else(|| DomainError::invariant("finished hand is missing"))?;
        let mut totals = self.scores;
        totals.absorb(hand_points);
        let game_over = totals.any_reached(self.target_score);
        if !game_over && next_hand.is_none() {
            return Err(DomainError::invariant("next hand was not dealt"));
        }
        self.scores = totals;

        info!(
            hand_no = self.hand_no,
            hand_team1 = hand_points.get(TeamId::Team1),
            hand_team2 = hand_points.get(TeamId::Team2),
            team1 = self.scores.get(TeamId::Team1),
            team2 = self.scores.get(TeamId::Team2),
            "Hand scored"
        );

        if game_over {
            self.state = GameState::Finished;
            self.hand = None;
            info!(
                winner = ?self.scores.leader(),
                hands_played = self.hand_no + 1,
                "Game finished"
            );
            return Ok(());
        }

        self.hand = next_hand;
        self.hand_no += 1;
        debug!(hand_no = self.hand_no, "Next hand dealt");
        Ok(())
    }
}
