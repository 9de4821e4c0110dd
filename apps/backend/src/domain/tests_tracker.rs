use crate::domain::claim_message::ClaimBand;
use crate::domain::errors::DomainError;
use crate::domain::tracker::{ClaimParams, DiceRoundTracker, MoveParams};

fn four_player_round() -> DiceRoundTracker {
    DiceRoundTracker::new(4).unwrap()
}

/// Two players reveal three threes between them.
fn after_opening_moves() -> DiceRoundTracker {
    let mut tracker = four_player_round();
    tracker.record_move(MoveParams::new(1, 2, 3)).unwrap();
    tracker.record_move(MoveParams::new(2, 1, 3)).unwrap();
    tracker
}

#[test]
fn new_round_starts_empty() {
    let tracker = four_player_round();
    assert_eq!(tracker.player_count(), 4);
    assert_eq!(tracker.pool_size(), 20);
    assert_eq!(tracker.total_revealed(), 0);
    assert_eq!(tracker.remaining_hidden(), 20);
    assert_eq!(tracker.face_counts(), &[0; 6]);
}

#[test]
fn zero_players_is_rejected() {
    let err = DiceRoundTracker::new(0).unwrap_err();
    assert!(matches!(err, DomainError::InvalidArguments(_)));
}

#[test]
fn oversized_player_count_is_rejected() {
    let err = DiceRoundTracker::new(u32::MAX).unwrap_err();
    assert!(matches!(err, DomainError::InvalidArguments(_)));
}

#[test]
fn opening_moves_tally_threes() {
    let tracker = after_opening_moves();
    assert_eq!(tracker.face_count(3), 3);
    assert_eq!(tracker.total_revealed(), 3);
}

#[test]
fn claim_of_nineteen_threes_is_outrageous() {
    let tracker = after_opening_moves();
    let odds = tracker.claim_probability(ClaimParams::new(19, 3)).unwrap();

    assert_eq!(odds.band, ClaimBand::Outrageous);
    assert_eq!(odds.message, "An outrageous claim ->  0.000000000508%");
    assert!((odds.probability - 5.0807e-10).abs() < 1e-13);
}

#[test]
fn last_hidden_die_gives_one_in_six() {
    let mut tracker = after_opening_moves();
    for (player, dice) in [(3, 5), (4, 5), (1, 3), (2, 3)] {
        tracker.record_move(MoveParams::new(player, dice, 3)).unwrap();
    }
    assert_eq!(tracker.face_count(3), 19);
    assert_eq!(tracker.total_revealed(), 19);

    let odds = tracker.claim_probability(ClaimParams::new(20, 3)).unwrap();
    assert_eq!(odds.band, ClaimBand::WellMaybe);
    assert_eq!(odds.message, "Well, maybe -> 16.67%");
}

#[test]
fn move_missing_any_field_is_rejected_without_mutation() {
    let mut tracker = after_opening_moves();
    let before = tracker.clone();

    let partials = [
        MoveParams { player: None, ..MoveParams::new(1, 2, 3) },
        MoveParams { dice: None, ..MoveParams::new(1, 2, 3) },
        MoveParams { value: None, ..MoveParams::new(1, 2, 3) },
        MoveParams::default(),
    ];
    for params in partials {
        let err = tracker.record_move(params).unwrap_err();
        assert!(matches!(err, DomainError::InvalidArguments(_)), "{params:?}");
    }
    assert_eq!(tracker, before);
}

#[test]
fn missing_field_names_are_reported() {
    let mut tracker = four_player_round();
    let err = tracker
        .record_move(MoveParams { player: None, value: None, dice: Some(1) })
        .unwrap_err();
    assert!(err.to_string().contains("player, value"), "{err}");
}

#[test]
fn players_outside_the_table_are_rejected() {
    let mut tracker = four_player_round();
    for player in [0, 5, 99] {
        let err = tracker.record_move(MoveParams::new(player, 1, 2)).unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidPlayer {
                player,
                player_count: 4
            }
        );
    }
    assert_eq!(tracker.total_revealed(), 0);
}

#[test]
fn move_past_the_pool_is_rejected_without_mutation() {
    let mut tracker = four_player_round();
    tracker.record_move(MoveParams::new(1, 5, 2)).unwrap();
    tracker.record_move(MoveParams::new(2, 5, 2)).unwrap();
    tracker.record_move(MoveParams::new(3, 5, 2)).unwrap();
    let before = tracker.clone();

    let err = tracker.record_move(MoveParams::new(4, 6, 2)).unwrap_err();
    assert_eq!(
        err,
        DomainError::DicePoolExhausted {
            requested: 6,
            revealed: 15,
            pool: 20
        }
    );
    assert_eq!(tracker, before);
}

#[test]
fn the_final_die_of_the_pool_can_be_revealed() {
    let mut tracker = DiceRoundTracker::new(1).unwrap();
    tracker.record_move(MoveParams::new(1, 5, 4)).unwrap();
    assert_eq!(tracker.remaining_hidden(), 0);

    let err = tracker.record_move(MoveParams::new(1, 1, 4)).unwrap_err();
    assert!(matches!(err, DomainError::DicePoolExhausted { .. }));
}

#[test]
fn pool_check_only_counts_the_round_total() {
    // one player may reveal more than five dice while others hold theirs
    let mut tracker = DiceRoundTracker::new(2).unwrap();
    tracker.record_move(MoveParams::new(1, 4, 1)).unwrap();
    tracker.record_move(MoveParams::new(1, 4, 2)).unwrap();
    assert_eq!(tracker.total_revealed(), 8);
}

#[test]
fn overflowing_dice_count_reports_exhaustion() {
    let mut tracker = four_player_round();
    tracker.record_move(MoveParams::new(1, 1, 1)).unwrap();
    let err = tracker
        .record_move(MoveParams::new(1, u32::MAX, 1))
        .unwrap_err();
    assert!(matches!(err, DomainError::DicePoolExhausted { .. }));
}

#[test]
fn invalid_faces_are_rejected_without_mutation() {
    let mut tracker = four_player_round();
    for value in [0, 7, 12] {
        let err = tracker.record_move(MoveParams::new(1, 1, value)).unwrap_err();
        assert_eq!(err, DomainError::InvalidFaceValue(value));
    }
    assert_eq!(tracker.total_revealed(), 0);
}

#[test]
fn pool_is_checked_before_face_value() {
    let mut tracker = four_player_round();
    let err = tracker.record_move(MoveParams::new(1, 21, 9)).unwrap_err();
    assert!(matches!(err, DomainError::DicePoolExhausted { .. }));
}

#[test]
fn player_is_checked_before_pool() {
    let mut tracker = four_player_round();
    let err = tracker.record_move(MoveParams::new(9, 21, 9)).unwrap_err();
    assert!(matches!(err, DomainError::InvalidPlayer { .. }));
}

#[test]
fn revealed_claims_are_proven() {
    let tracker = after_opening_moves();
    assert!(tracker.is_claim_proven(ClaimParams::new(3, 3)).unwrap());
    assert!(tracker.is_claim_proven(ClaimParams::new(0, 5)).unwrap());
    assert!(!tracker.is_claim_proven(ClaimParams::new(4, 3)).unwrap());
    assert!(!tracker.is_claim_proven(ClaimParams::new(1, 6)).unwrap());
}

#[test]
fn proven_claims_are_certain() {
    let tracker = after_opening_moves();
    let odds = tracker.claim_probability(ClaimParams::new(3, 3)).unwrap();
    assert_eq!(odds.probability, 100.0);
    assert_eq!(odds.band, ClaimBand::GoodChance);
}

#[test]
fn zero_claim_is_certain() {
    let tracker = four_player_round();
    let odds = tracker.claim_probability(ClaimParams::new(0, 6)).unwrap();
    assert_eq!(odds.probability, 100.0);
}

#[test]
fn claim_beyond_hidden_dice_is_impossible() {
    let tracker = after_opening_moves();
    let odds = tracker.claim_probability(ClaimParams::new(21, 3)).unwrap();
    assert_eq!(odds.probability, 0.0);
    assert_eq!(odds.band, ClaimBand::SnowballsChance);
}

#[test]
fn out_of_range_face_counts_nothing_revealed() {
    let tracker = after_opening_moves();
    // 17 hidden dice, need one of them to show the face
    let odds = tracker.claim_probability(ClaimParams::new(1, 9)).unwrap();
    let expected = (1.0 - (5.0f64 / 6.0).powi(17)) * 100.0;
    assert!((odds.probability - expected).abs() < 1e-9);
    assert!(!tracker.is_claim_proven(ClaimParams::new(1, 9)).unwrap());
    assert!(tracker.is_claim_proven(ClaimParams::new(0, 9)).unwrap());
}

#[test]
fn claims_require_both_fields() {
    let tracker = after_opening_moves();
    let partials = [
        ClaimParams { dice: None, value: Some(12) },
        ClaimParams { dice: Some(4), value: None },
    ];
    for params in partials {
        assert!(matches!(
            tracker.claim_probability(params),
            Err(DomainError::InvalidArguments(_))
        ));
        assert!(matches!(
            tracker.is_claim_proven(params),
            Err(DomainError::InvalidArguments(_))
        ));
    }
}

#[test]
fn large_tables_stay_finite() {
    let mut tracker = DiceRoundTracker::new(2_000).unwrap();
    tracker.record_move(MoveParams::new(1, 5, 2)).unwrap();

    let odds = tracker.claim_probability(ClaimParams::new(1_671, 2)).unwrap();
    assert!(odds.probability.is_finite());
    assert!(odds.probability > 40.0 && odds.probability < 60.0, "{odds:?}");
}

#[test]
fn huge_tables_evaluate_claims_without_pool_sized_work() {
    let mut tracker = DiceRoundTracker::new(200_000_000).unwrap();
    assert_eq!(tracker.pool_size(), 1_000_000_000);
    tracker.record_move(MoveParams::new(7, 5, 3)).unwrap();

    let odds = tracker.claim_probability(ClaimParams::new(1, 3)).unwrap();
    assert_eq!(odds.probability, 100.0);

    let odds = tracker.claim_probability(ClaimParams::new(1, 4)).unwrap();
    assert!(odds.probability.is_finite());
    assert!((odds.probability - 100.0).abs() < 1e-9, "{odds:?}");

    let odds = tracker
        .claim_probability(ClaimParams::new(166_666_670, 4))
        .unwrap();
    assert!(odds.probability > 40.0 && odds.probability < 60.0, "{odds:?}");
}
