//! One deal: trump selection followed by eight tricks.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::bidding::TrumpBallot;
use crate::domain::dealing::Dealer;
use crate::domain::player_hand::PlayerHand;
use crate::domain::rules::{CARDS_BEFORE_TRUMP, CARDS_PER_PLAYER, PLAYERS};
use crate::domain::scoring::TeamScores;
use crate::domain::seats::{nth_from, PlayerId, TeamId};
use crate::domain::tricks::{Trick, TrickResult};
use crate::domain::{Card, Suit};
use crate::errors::domain::{DomainError, InfraErrorKind, ValidationKind};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum HandState {
    /// Players in turn may take the face-up table card's suit as trump.
    TableTrumpSelection,
    /// Everyone declined the table card; players in turn may name a suit.
    FreeTrumpSelection,
    /// Trump is locked and tricks are being played.
    HandInProgress,
    /// All eight tricks have been played.
    HandFinished,
}

/// What a successful card play changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlayOutcome {
    /// Set when this card completed a trick.
    pub trick: Option<TrickResult>,
    /// Set when that trick was the last one of the hand.
    pub hand_finished: bool,
}

#[derive(Debug)]
pub struct Hand {
    state: HandState,
    starting_player: PlayerId,
    table_ballot: TrumpBallot,
    free_ballot: TrumpBallot,
    table_trump: Card,
    trump: Option<Suit>,
    player_hands: [PlayerHand; PLAYERS],
    current_trick: Option<Trick>,
    last_trick: Option<Trick>,
    points: TeamScores,
    tricks_played: usize,
    dealer: Box<dyn Dealer>,
}

impl Hand {
    /// Turn up the table card and deal five cards to each player, seat by
    /// seat from `starting_player`.
    pub fn new(starting_player: PlayerId, mut dealer: Box<dyn Dealer>) -> Result<Self, DomainError> {
        let table_trump = dealer.deal()?;

        let mut player_hands: [PlayerHand; PLAYERS] = Default::default();
        for n in 0..PLAYERS {
            let hand = &mut player_hands[nth_from(starting_player, n).index()];
            while hand.len() < CARDS_BEFORE_TRUMP {
                hand.insert(dealer.deal()?);
            }
        }

        debug!(
            starting_player = %starting_player,
            table_trump = %table_trump,
            "Hand dealt"
        );

        Ok(Self {
            state: HandState::TableTrumpSelection,
            starting_player,
            table_ballot: TrumpBallot::new(starting_player),
            free_ballot: TrumpBallot::new(starting_player),
            table_trump,
            trump: None,
            player_hands,
            current_trick: None,
            last_trick: None,
            points: TeamScores::default(),
            tricks_played: 0,
            dealer,
        })
    }

    pub fn state(&self) -> HandState {
        self.state
    }

    pub fn starting_player(&self) -> PlayerId {
        self.starting_player
    }

    /// The face-up candidate card (stays visible after someone takes it).
    pub fn table_trump(&self) -> Card {
        self.table_trump
    }

    /// Locked trump suit; `None` during selection.
    pub fn trump(&self) -> Option<Suit> {
        self.trump
    }

    pub fn current_trick(&self) -> Option<&Trick> {
        self.current_trick.as_ref()
    }

    /// Most recently completed trick of this hand.
    pub fn last_trick(&self) -> Option<&Trick> {
        self.last_trick.as_ref()
    }

    pub fn points(&self) -> TeamScores {
        self.points
    }

    pub fn tricks_played(&self) -> usize {
        self.tricks_played
    }

    pub fn player_cards(&self, player: PlayerId) -> &PlayerHand {
        &self.player_hands[player.index()]
    }

    pub fn table_ballot(&self) -> &TrumpBallot {
        &self.table_ballot
    }

    pub fn free_ballot(&self) -> &TrumpBallot {
        &self.free_ballot
    }

    pub fn current_turn(&self) -> Result<PlayerId, DomainError> {
        match self.state {
            HandState::TableTrumpSelection => self.ballot_turn(&self.table_ballot),
            HandState::FreeTrumpSelection => self.ballot_turn(&self.free_ballot),
            HandState::HandInProgress => self.trick()?.current_turn(),
            HandState::HandFinished => Err(hand_finished()),
        }
    }

    /// Cards `player` may play right now; empty when it is not their turn.
    pub fn legal_moves(&self, player: PlayerId) -> Vec<Card> {
        match (&self.current_trick, self.state) {
            (Some(trick), HandState::HandInProgress)
                if trick.current_turn().ok() == Some(player) =>
            {
                trick.legal_moves(self.player_cards(player))
            }
            _ => Vec::new(),
        }
    }

    pub fn accept_table_trump(&mut self, player: PlayerId, accept: bool) -> Result<(), DomainError> {
        self.require_state(HandState::TableTrumpSelection)?;
        self.table_ballot.check_turn(player)?;

        if accept {
            return self.lock_trump(player, self.table_trump.suit);
        }

        self.table_ballot.record(player);
        debug!(player = %player, table_trump = %self.table_trump, "Table trump declined");

        if self.table_ballot.is_closed() {
            self.state = HandState::FreeTrumpSelection;
            debug!("Table trump declined by all players");
        }
        Ok(())
    }

    pub fn select_trump(&mut self, player: PlayerId, suit: Option<Suit>) -> Result<(), DomainError> {
        self.require_state(HandState::FreeTrumpSelection)?;
        self.free_ballot.check_turn(player)?;

        match suit {
            None if player == self.free_ballot.last_voter() => Err(DomainError::validation(
                ValidationKind::LastPlayerMustChoose,
                format!("{player} votes last and must choose a trump suit"),
            )),
            None => {
                self.free_ballot.record(player);
                debug!(player = %player, "Free trump passed");
                Ok(())
            }
            Some(suit) if suit == self.table_trump.suit => Err(DomainError::validation(
                ValidationKind::SameSuitAsTableTrump,
                format!("{suit} was already declined as table trump"),
            )),
            Some(suit) => self.lock_trump(player, suit),
        }
    }

    pub fn play_card(&mut self, player: PlayerId, card: Card) -> Result<PlayOutcome, DomainError> {
        self.require_state(HandState::HandInProgress)?;

        let trick = self
            .current_trick
            .as_mut()
            .ok_or_else(|| DomainError::invariant("hand in progress without a trick"))?;
        trick.play(player, card, &mut self.player_hands[player.index()])?;
        debug!(player = %player, card = %card, "Card played");

        if !trick.is_complete() {
            return Ok(PlayOutcome {
                trick: None,
                hand_finished: false,
            });
        }

        let result = trick.result()?;
        let leader = trick.starting_player();
        let trump = trick.trump();

        self.points.add(result.winner.team(), u32::from(result.points));
        self.tricks_played += 1;
        self.last_trick = self.current_trick.take();
        debug!(
            winner = %result.winner,
            points = result.points,
            tricks_played = self.tricks_played,
            "Trick resolved"
        );

        let hand_finished = self.player_hands[leader.index()].is_empty();
        if hand_finished {
            self.state = HandState::HandFinished;
            info!(
                team1 = self.points.get(TeamId::Team1),
                team2 = self.points.get(TeamId::Team2),
                "Hand finished"
            );
        } else {
            self.current_trick = Some(Trick::new(result.winner, trump));
        }

        Ok(PlayOutcome {
            trick: Some(result),
            hand_finished,
        })
    }

    /// True when the next card played completes the final trick.
    pub fn is_on_last_card(&self) -> bool {
        self.state == HandState::HandInProgress
            && self.tricks_played + 1 == CARDS_PER_PLAYER
            && self
                .current_trick
                .as_ref()
                .is_some_and(|t| t.plays().len() + 1 == PLAYERS)
    }

    /// Hand points as they would stand after `player` plays `card`. Runs the
    /// same checks as `play_card` on copies; nothing is committed.
    pub fn points_after(&self, player: PlayerId, card: Card) -> Result<TeamScores, DomainError> {
        self.require_state(HandState::HandInProgress)?;
        let mut trick = self.trick()?.clone();
        let mut cards = self.player_cards(player).clone();
        trick.play(player, card, &mut cards)?;

        let mut points = self.points;
        if trick.is_complete() {
            let result = trick.result()?;
            points.add(result.winner.team(), u32::from(result.points));
        }
        Ok(points)
    }

    /// Give the table card to `taker`, fix trump and deal everyone up to
    /// eight cards.
    fn lock_trump(&mut self, taker: PlayerId, trump: Suit) -> Result<(), DomainError> {
        // Check the deck can cover the top-up before touching anything
        let held: usize = self.player_hands.iter().map(PlayerHand::len).sum::<usize>() + 1;
        let needed = (PLAYERS * CARDS_PER_PLAYER).saturating_sub(held);
        if self.dealer.remaining() < needed {
            return Err(DomainError::infra(
                InfraErrorKind::DeckExhausted,
                format!(
                    "Need {needed} cards to complete the deal, {} left",
                    self.dealer.remaining()
                ),
            ));
        }

        self.player_hands[taker.index()].insert(self.table_trump);
        for n in 0..PLAYERS {
            let hand = &mut self.player_hands[nth_from(self.starting_player, n).index()];
            while hand.len() < CARDS_PER_PLAYER {
                hand.insert(self.dealer.deal()?);
            }
        }

        self.trump = Some(trump);
        self.current_trick = Some(Trick::new(self.starting_player, trump));
        self.state = HandState::HandInProgress;
        info!(taker = %taker, trump = %trump, "Trump locked");
        Ok(())
    }

    fn require_state(&self, expected: HandState) -> Result<(), DomainError> {
        if self.state == expected {
            return Ok(());
        }
        if self.state == HandState::HandFinished {
            return Err(hand_finished());
        }
        Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            format!("Expected {expected:?}, hand is in {:?}", self.state),
        ))
    }

    fn ballot_turn(&self, ballot: &TrumpBallot) -> Result<PlayerId, DomainError> {
        ballot
            .next_voter()
            .ok_or_else(|| DomainError::invariant("open ballot without a next voter"))
    }

    fn trick(&self) -> Result<&Trick, DomainError> {
        self.current_trick
            .as_ref()
            .ok_or_else(|| DomainError::invariant("hand in progress without a trick"))
    }
}

fn hand_finished() -> DomainError {
    DomainError::validation(ValidationKind::HandIsFinished, "Hand is finished")
}
