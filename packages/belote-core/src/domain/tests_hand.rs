use std::collections::HashSet;

use proptest::prelude::*;

use crate::domain::dealing::{ShuffledDealer, StackedDealer};
use crate::domain::hand::{Hand, HandState};
use crate::domain::seats::nth_from;
use crate::domain::rules::{CARDS_BEFORE_TRUMP, CARDS_PER_PLAYER, DECK_SIZE, HAND_POINTS};
use crate::domain::{full_deck, test_gens, test_prelude, Card, PlayerId, Suit, TeamId};
use crate::errors::domain::ValidationKind;

fn card(token: &str) -> Card {
    token.parse().expect("hardcoded valid card token")
}

// Unshuffled deck: table card 7S, then five cards per seat from the starting
// player, then the top-up.
fn ordered_hand(start: PlayerId) -> Hand {
    Hand::new(start, Box::new(StackedDealer::in_order())).unwrap()
}

fn decline_all(hand: &mut Hand) {
    for n in 0..4 {
        let p = nth_from(hand.starting_player(), n);
        hand.accept_table_trump(p, false).unwrap();
    }
}

/// Play out the rest of the hand, always choosing the first legal card.
/// Returns every card played, in order.
fn play_out(hand: &mut Hand) -> Vec<Card> {
    let mut played = Vec::new();
    let mut trick_points = 0u32;
    while hand.state() == HandState::HandInProgress {
        let player = hand.current_turn().unwrap();
        let choice = hand.legal_moves(player)[0];
        let outcome = hand.play_card(player, choice).unwrap();
        played.push(choice);
        if let Some(result) = outcome.trick {
            trick_points += u32::from(result.points);
            assert_eq!(
                hand.last_trick().unwrap().result().unwrap(),
                result,
                "last trick must be the one just resolved"
            );
            if !outcome.hand_finished {
                assert_eq!(
                    hand.current_trick().unwrap().starting_player(),
                    result.winner,
                    "trick winner leads the next trick"
                );
            }
        }
    }
    assert_eq!(trick_points, hand.points().total());
    played
}

fn held_cards(hand: &Hand) -> Vec<Card> {
    PlayerId::ALL
        .iter()
        .flat_map(|p| hand.player_cards(*p).to_vec())
        .collect()
}

#[test]
fn new_hand_deals_five_each_and_turns_up_table_card() {
    let hand = ordered_hand(PlayerId::P2);
    assert_eq!(hand.state(), HandState::TableTrumpSelection);
    assert_eq!(hand.table_trump(), card("7S"));
    assert_eq!(hand.trump(), None);
    assert!(hand.current_trick().is_none());
    for p in PlayerId::ALL {
        assert_eq!(hand.player_cards(p).len(), CARDS_BEFORE_TRUMP);
    }
    // P2 starts, so P2 gets the five cards right after the table card
    assert_eq!(
        hand.player_cards(PlayerId::P2).to_vec(),
        ["8S", "9S", "TS", "JS", "QS"].map(card).to_vec()
    );
    assert_eq!(hand.current_turn().unwrap(), PlayerId::P2);
}

#[test]
fn accepting_table_trump_locks_and_tops_up() {
    let mut hand = ordered_hand(PlayerId::P1);
    hand.accept_table_trump(PlayerId::P1, false).unwrap();
    hand.accept_table_trump(PlayerId::P2, true).unwrap();

    assert_eq!(hand.state(), HandState::HandInProgress);
    assert_eq!(hand.trump(), Some(Suit::Spades));
    assert!(hand.player_cards(PlayerId::P2).contains(card("7S")));
    for p in PlayerId::ALL {
        assert_eq!(hand.player_cards(p).len(), CARDS_PER_PLAYER);
    }
    let unique: HashSet<Card> = held_cards(&hand).into_iter().collect();
    assert_eq!(unique.len(), DECK_SIZE);

    let trick = hand.current_trick().unwrap();
    assert_eq!(trick.starting_player(), PlayerId::P1);
    assert_eq!(trick.trump(), Suit::Spades);
    assert_eq!(hand.current_turn().unwrap(), PlayerId::P1);
}

#[test]
fn table_ballot_enforces_turn_order() {
    let mut hand = ordered_hand(PlayerId::P3);
    let err = hand.accept_table_trump(PlayerId::P1, true).unwrap_err();
    assert_eq!(err.validation_kind(), Some(ValidationKind::NotSelectionTurn));

    hand.accept_table_trump(PlayerId::P3, false).unwrap();
    let err = hand.accept_table_trump(PlayerId::P3, true).unwrap_err();
    assert_eq!(err.validation_kind(), Some(ValidationKind::AlreadyVoted));

    assert_eq!(hand.current_turn().unwrap(), PlayerId::P4);
    assert_eq!(hand.table_ballot().votes_cast(), 1);
    assert_eq!(hand.state(), HandState::TableTrumpSelection);
}

#[test]
fn four_declines_open_free_selection() {
    let mut hand = ordered_hand(PlayerId::P4);
    decline_all(&mut hand);
    assert_eq!(hand.state(), HandState::FreeTrumpSelection);
    assert_eq!(hand.current_turn().unwrap(), PlayerId::P4);

    let err = hand.accept_table_trump(PlayerId::P4, true).unwrap_err();
    assert_eq!(err.validation_kind(), Some(ValidationKind::PhaseMismatch));
}

#[test]
fn free_selection_rules() {
    let mut hand = ordered_hand(PlayerId::P1);
    decline_all(&mut hand);

    let err = hand.select_trump(PlayerId::P1, Some(Suit::Spades)).unwrap_err();
    assert_eq!(err.validation_kind(), Some(ValidationKind::SameSuitAsTableTrump));

    let err = hand.select_trump(PlayerId::P2, Some(Suit::Hearts)).unwrap_err();
    assert_eq!(err.validation_kind(), Some(ValidationKind::NotSelectionTurn));

    hand.select_trump(PlayerId::P1, None).unwrap();
    hand.select_trump(PlayerId::P2, None).unwrap();
    hand.select_trump(PlayerId::P3, None).unwrap();

    let err = hand.select_trump(PlayerId::P4, None).unwrap_err();
    assert_eq!(err.validation_kind(), Some(ValidationKind::LastPlayerMustChoose));
    assert_eq!(hand.state(), HandState::FreeTrumpSelection);

    hand.select_trump(PlayerId::P4, Some(Suit::Clubs)).unwrap();
    assert_eq!(hand.state(), HandState::HandInProgress);
    assert_eq!(hand.trump(), Some(Suit::Clubs));
    assert!(hand.player_cards(PlayerId::P4).contains(card("7S")));
    assert_eq!(hand.table_trump(), card("7S"));
}

#[test]
fn actions_in_wrong_phase_are_rejected() {
    let mut hand = ordered_hand(PlayerId::P1);
    let err = hand.select_trump(PlayerId::P1, Some(Suit::Hearts)).unwrap_err();
    assert_eq!(err.validation_kind(), Some(ValidationKind::PhaseMismatch));

    let err = hand.play_card(PlayerId::P1, card("8S")).unwrap_err();
    assert_eq!(err.validation_kind(), Some(ValidationKind::PhaseMismatch));
    assert!(hand.legal_moves(PlayerId::P1).is_empty());
}

#[test]
fn short_deck_fails_before_any_change() {
    // Enough for the first deal but not the top-up
    let deck: Vec<Card> = full_deck().into_iter().take(25).collect();
    let mut hand = Hand::new(PlayerId::P1, Box::new(StackedDealer::new(deck))).unwrap();

    let err = hand.accept_table_trump(PlayerId::P1, true).unwrap_err();
    assert_eq!(err.code().as_str(), "DECK_EXHAUSTED");
    assert!(!err.is_validation());
    assert_eq!(hand.state(), HandState::TableTrumpSelection);
    assert_eq!(hand.trump(), None);
    assert_eq!(hand.player_cards(PlayerId::P1).len(), CARDS_BEFORE_TRUMP);
    assert!(!hand.player_cards(PlayerId::P1).contains(card("7S")));
}

#[test]
fn too_few_cards_to_deal_fails() {
    let deck: Vec<Card> = full_deck().into_iter().take(10).collect();
    let err = Hand::new(PlayerId::P1, Box::new(StackedDealer::new(deck))).unwrap_err();
    assert_eq!(err.code().as_str(), "DECK_EXHAUSTED");
}

#[test]
fn out_of_turn_card_is_rejected() {
    let mut hand = ordered_hand(PlayerId::P1);
    hand.accept_table_trump(PlayerId::P1, true).unwrap();
    let err = hand.play_card(PlayerId::P2, card("KS")).unwrap_err();
    assert_eq!(err.validation_kind(), Some(ValidationKind::NotPlayersTurn));
    assert!(hand.legal_moves(PlayerId::P2).is_empty());
    assert!(!hand.legal_moves(PlayerId::P1).is_empty());
}

#[test]
fn full_hand_totals_152_and_finishes() {
    let mut hand = ordered_hand(PlayerId::P1);
    hand.accept_table_trump(PlayerId::P1, true).unwrap();
    let played = play_out(&mut hand);

    assert_eq!(hand.state(), HandState::HandFinished);
    assert_eq!(hand.tricks_played(), CARDS_PER_PLAYER);
    assert_eq!(played.len(), DECK_SIZE);
    assert_eq!(played.iter().collect::<HashSet<_>>().len(), DECK_SIZE);
    assert_eq!(hand.points().total(), u32::from(HAND_POINTS));
    assert!(held_cards(&hand).is_empty());
    assert!(hand.current_trick().is_none());

    let err = hand.play_card(PlayerId::P1, card("8S")).unwrap_err();
    assert_eq!(err.validation_kind(), Some(ValidationKind::HandIsFinished));
    let err = hand.current_turn().unwrap_err();
    assert_eq!(err.validation_kind(), Some(ValidationKind::HandIsFinished));
    let err = hand.accept_table_trump(PlayerId::P1, true).unwrap_err();
    assert_eq!(err.validation_kind(), Some(ValidationKind::HandIsFinished));
}

/// Table card 8D. P1 holds 7C, P2 9D, P3 AC and P4 JD, and nobody after the
/// clubs lead can follow except P3.
fn scripted_diamonds_hand() -> Hand {
    let deck = [
        "8D", // table card
        "7C", "8C", "7H", "8H", "9H", // P1
        "9D", "7S", "8S", "9S", "TS", // P2
        "AC", "JH", "QH", "KH", "AH", // P3
        "JD", "JS", "QS", "KS", "AS", // P4
        "9C", "TC", // P1 top-up after taking 8D
        "TH", "7D", "TD", // P2
        "JC", "QC", "KC", // P3
        "QD", "KD", "AD", // P4
    ]
    .map(card);
    let mut hand = Hand::new(PlayerId::P1, Box::new(StackedDealer::new(deck))).unwrap();
    hand.accept_table_trump(PlayerId::P1, true).unwrap();
    hand
}

#[test]
fn trick_points_go_to_the_winning_team() {
    let mut hand = scripted_diamonds_hand();
    assert_eq!(hand.trump(), Some(Suit::Diamonds));

    for (player, token) in [
        (PlayerId::P1, "7C"),
        (PlayerId::P2, "9D"),
        (PlayerId::P3, "AC"),
    ] {
        let outcome = hand.play_card(player, card(token)).unwrap();
        assert_eq!(outcome.trick, None);
        assert_eq!(hand.points().total(), 0);
    }

    // P4 has no clubs and must over-trump 9D; only JD does
    assert_eq!(hand.legal_moves(PlayerId::P4), vec![card("JD")]);
    let outcome = hand.play_card(PlayerId::P4, card("JD")).unwrap();
    let result = outcome.trick.unwrap();
    assert_eq!(result.winner, PlayerId::P4);
    assert_eq!(result.points, 45);
    assert!(!outcome.hand_finished);

    assert_eq!(hand.points().get(TeamId::Team2), 45);
    assert_eq!(hand.points().get(TeamId::Team1), 0);
    assert_eq!(hand.current_turn().unwrap(), PlayerId::P4);
    assert_eq!(hand.tricks_played(), 1);
}

#[test]
fn points_after_previews_without_playing() {
    let mut hand = scripted_diamonds_hand();
    for (player, token) in [
        (PlayerId::P1, "7C"),
        (PlayerId::P2, "9D"),
        (PlayerId::P3, "AC"),
    ] {
        hand.play_card(player, card(token)).unwrap();
    }

    let preview = hand.points_after(PlayerId::P4, card("JD")).unwrap();
    assert_eq!(preview.get(TeamId::Team2), 45);
    assert_eq!(preview.get(TeamId::Team1), 0);
    assert_eq!(hand.points().total(), 0);
    assert!(hand.player_cards(PlayerId::P4).contains(card("JD")));
    assert_eq!(hand.current_turn().unwrap(), PlayerId::P4);

    let err = hand.points_after(PlayerId::P4, card("QD")).unwrap_err();
    assert!(err.is_validation());
    assert!(!hand.is_on_last_card());
}

#[test]
fn full_hand_is_on_last_card_only_before_the_final_play() {
    let mut hand = ordered_hand(PlayerId::P2);
    hand.accept_table_trump(PlayerId::P2, true).unwrap();
    let mut flagged = 0;
    while hand.state() == HandState::HandInProgress {
        let on_last = hand.is_on_last_card();
        let player = hand.current_turn().unwrap();
        let choice = hand.legal_moves(player)[0];
        let outcome = hand.play_card(player, choice).unwrap();
        assert_eq!(on_last, outcome.hand_finished);
        flagged += usize::from(on_last);
    }
    assert_eq!(flagged, 1);
    assert!(!hand.is_on_last_card());
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: every shuffled hand conserves cards and sums to 152 points,
    /// whoever takes trump.
    #[test]
    fn prop_hand_conserves_cards_and_points(
        seed in any::<u64>(),
        takers_skipped in 0usize..8,
        free_suit in test_gens::suit(),
    ) {
        let mut hand = Hand::new(PlayerId::P2, Box::new(ShuffledDealer::from_seed(seed))).unwrap();
        let table_suit = hand.table_trump().suit;

        // Declines first, then accept (or choose) on the next voter
        for _ in 0..takers_skipped.min(4) {
            let p = hand.current_turn().unwrap();
            hand.accept_table_trump(p, false).unwrap();
        }
        if hand.state() == HandState::TableTrumpSelection {
            let p = hand.current_turn().unwrap();
            hand.accept_table_trump(p, true).unwrap();
        } else {
            for _ in 4..takers_skipped {
                let p = hand.current_turn().unwrap();
                hand.select_trump(p, None).unwrap();
            }
            let p = hand.current_turn().unwrap();
            let suit = if free_suit == table_suit {
                Suit::ALL.into_iter().find(|s| *s != table_suit).unwrap()
            } else {
                free_suit
            };
            hand.select_trump(p, Some(suit)).unwrap();
        }

        prop_assert_eq!(hand.state(), HandState::HandInProgress);
        prop_assert_eq!(held_cards(&hand).len(), DECK_SIZE);

        let played = play_out(&mut hand);
        let unique: HashSet<Card> = played.iter().copied().collect();
        prop_assert_eq!(unique.len(), DECK_SIZE);
        prop_assert_eq!(hand.points().total(), u32::from(HAND_POINTS));
    }
}
