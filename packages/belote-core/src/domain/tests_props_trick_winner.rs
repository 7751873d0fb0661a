use proptest::prelude::*;

use crate::domain::player_hand::PlayerHand;
use crate::domain::rules::HAND_POINTS;
use crate::domain::tricks::Trick;
use crate::domain::{card_beats, full_deck, test_gens, test_prelude, Card, PlayerId, Suit};

/// Independent winner computation: best trump if any, else best of lead suit.
fn oracle_winner(plays: &[(PlayerId, Card)], trump: Suit) -> PlayerId {
    let lead = plays[0].1.suit;
    let trumps = plays.iter().filter(|(_, c)| c.suit == trump);
    if let Some((p, _)) = trumps.max_by_key(|(_, c)| c.rank.trump_order()) {
        return *p;
    }
    plays
        .iter()
        .filter(|(_, c)| c.suit == lead)
        .max_by_key(|(_, c)| c.rank.non_trump_order())
        .map(|(p, _)| *p)
        .unwrap_or(plays[0].0)
}

/// One-card hands make every play legal, so any four cards can be resolved.
fn resolved(leader: PlayerId, plays: &[(PlayerId, Card)], trump: Suit) -> Trick {
    let mut trick = Trick::new(leader, trump);
    for (player, card) in plays {
        let mut single: PlayerHand = std::iter::once(*card).collect();
        trick.play(*player, *card, &mut single).unwrap();
    }
    trick
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: The trick winner matches the oracle for every trump.
    #[test]
    fn prop_trick_winner_matches_oracle(
        (leader, plays, trump) in test_gens::complete_trick(),
    ) {
        let trick = resolved(leader, &plays, trump);
        let result = trick.result().unwrap();
        prop_assert_eq!(result.winner, oracle_winner(&plays, trump),
            "trump={:?} plays={:?}", trump, plays);
    }

    /// Property: Trick points are the sum of each card's value under trump.
    #[test]
    fn prop_trick_points_sum(
        (leader, plays, trump) in test_gens::complete_trick(),
    ) {
        let trick = resolved(leader, &plays, trump);
        let expected: u16 = plays.iter().map(|(_, c)| c.points(trump)).sum();
        prop_assert_eq!(trick.result().unwrap().points, expected);
    }

    /// Property: An off-suit, non-trump card never wins.
    #[test]
    fn prop_discards_never_win(
        (leader, plays, trump) in test_gens::complete_trick(),
    ) {
        let trick = resolved(leader, &plays, trump);
        let winner = trick.result().unwrap().winner;
        let card = trick.card_of(winner).unwrap();
        let lead = plays[0].1.suit;
        prop_assert!(card.suit == lead || card.suit == trump);
    }

    /// Property: The whole deck is worth 152 whatever the trump.
    #[test]
    fn prop_deck_totals_152(trump in test_gens::suit()) {
        let total: u16 = full_deck().iter().map(|c| c.points(trump)).sum();
        prop_assert_eq!(total, HAND_POINTS);
    }

    /// Property: Two distinct cards never beat each other.
    #[test]
    fn prop_card_beats_is_asymmetric(
        a in test_gens::card(),
        b in test_gens::card(),
        trump in test_gens::suit(),
    ) {
        prop_assert!(!(card_beats(a, b, trump) && card_beats(b, a, trump)),
            "{} and {} beat each other under {}", a, b, trump);
        prop_assert!(!card_beats(a, a, trump));
    }
}
