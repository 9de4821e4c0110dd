//! Property tests for the round tracker (pure domain, no HTTP).
//!
//! Moves are generated slightly outside the legal ranges on purpose so that
//! every rejection path is exercised alongside accepted moves.

use proptest::prelude::*;

use crate::domain::errors::DomainError;
use crate::domain::test_prelude;
use crate::domain::tracker::{ClaimParams, DiceRoundTracker, MoveParams};

fn arb_move(player_count: u32) -> impl Strategy<Value = MoveParams> {
    (0..=player_count + 1, 0u32..=7, 0u32..=7).prop_map(|(p, d, v)| MoveParams::new(p, d, v))
}

fn arb_round() -> impl Strategy<Value = (u32, Vec<MoveParams>)> {
    (1u32..=8).prop_flat_map(|players| {
        (
            Just(players),
            prop::collection::vec(arb_move(players), 0..40),
        )
    })
}

/// Replays moves, ignoring rejected ones.
fn play(players: u32, moves: &[MoveParams]) -> DiceRoundTracker {
    let mut tracker = DiceRoundTracker::new(players).unwrap();
    for mv in moves {
        let _ = tracker.record_move(*mv);
    }
    tracker
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: the running total always equals the per-face sum and never
    /// exceeds the pool.
    #[test]
    fn prop_total_matches_face_sum((players, moves) in arb_round()) {
        let mut tracker = DiceRoundTracker::new(players).unwrap();
        for mv in moves {
            let _ = tracker.record_move(mv);
            let sum: u32 = tracker.face_counts().iter().sum();
            prop_assert_eq!(tracker.total_revealed(), sum);
            prop_assert!(tracker.total_revealed() <= players * 5);
        }
    }

    /// Property: a rejected move leaves the tracker exactly as it was, and an
    /// accepted one adds its dice to its face only.
    #[test]
    fn prop_moves_apply_atomically((players, moves) in arb_round()) {
        let mut tracker = DiceRoundTracker::new(players).unwrap();
        for mv in moves {
            let before = tracker.clone();
            match tracker.record_move(mv) {
                Ok(()) => {
                    let (dice, value) = (mv.dice.unwrap(), mv.value.unwrap());
                    prop_assert_eq!(tracker.total_revealed(), before.total_revealed() + dice);
                    for face in 1..=6 {
                        let expected = before.face_count(face) + if face == value { dice } else { 0 };
                        prop_assert_eq!(tracker.face_count(face), expected);
                    }
                }
                Err(err) => {
                    prop_assert_eq!(&tracker, &before);
                    let player = mv.player.unwrap();
                    let valid_player = (1..=players).contains(&player);
                    match err {
                        DomainError::InvalidPlayer { .. } => prop_assert!(!valid_player),
                        DomainError::DicePoolExhausted { .. } => prop_assert!(valid_player),
                        DomainError::InvalidFaceValue(v) => prop_assert!(!(1..=6).contains(&v)),
                        DomainError::InvalidArguments(_) => prop_assert!(false, "all fields were set"),
                    }
                }
            }
        }
    }

    /// Property: a claim is proven iff revealed dice already cover it, and
    /// proven claims always evaluate to exactly 100%.
    #[test]
    fn prop_proven_iff_revealed_covers_claim(
        (players, moves) in arb_round(),
        claimed in 0u32..=45,
        value in 0u32..=7,
    ) {
        let tracker = play(players, &moves);
        let params = ClaimParams::new(claimed, value);
        let proven = tracker.is_claim_proven(params).unwrap();
        prop_assert_eq!(proven, claimed <= tracker.face_count(value));

        if proven {
            prop_assert_eq!(tracker.claim_probability(params).unwrap().probability, 100.0);
        }
    }

    /// Property: raising the claimed count never makes it more likely.
    #[test]
    fn prop_probability_non_increasing_in_claim(
        (players, moves) in arb_round(),
        value in 1u32..=6,
    ) {
        let tracker = play(players, &moves);
        let mut previous = 100.0;
        for claimed in 0..=players * 5 + 1 {
            let p = tracker.claim_probability(ClaimParams::new(claimed, value)).unwrap().probability;
            prop_assert!((0.0..=100.0).contains(&p));
            prop_assert!(p <= previous + 1e-9, "claim {claimed}: {p} > {previous}");
            previous = p;
        }
    }
}
