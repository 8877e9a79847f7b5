use crate::category::Category;
use crate::dice::ScriptedDieSource;
use crate::error::GameError;
use crate::game::{Game, TurnPhase, REROLLS_PER_TURN, SCORE_UPPER_BOUND, TOTAL_ROUNDS};

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;

fn two_players() -> Vec<String> {
    vec!["Alice".to_string(), "Bob".to_string()]
}

fn assert_invariants(game: &Game) {
    assert!(game.current_player_index() < game.player_count());
    assert!(game.current_round() <= TOTAL_ROUNDS);
    assert!(game.rerolls_left() <= REROLLS_PER_TURN);
    for face in game.dice() {
        assert!((1..=6).contains(&face));
    }
}

/// Complete sheets with flat scores per player, then finalize.
fn game_with_totals(totals: &[i32]) -> Game {
    let names: Vec<String> = (0..totals.len()).map(|i| format!("P{}", i + 1)).collect();
    let mut game = Game::seeded(names, 0).unwrap();
    for &total in totals {
        for cat in Category::ALL.iter().take(12) {
            game.fill_current_player(*cat, 0).unwrap();
        }
        game.fill_current_player(Category::Yahtzee, total).unwrap();
        game.advance_player();
    }
    game.finalize_scores().unwrap();
    game
}

#[test]
fn construction_requires_two_players() {
    let err = Game::seeded(vec!["Solo".to_string()], 1).unwrap_err();
    assert!(matches!(err, GameError::NotEnoughPlayers { got: 1, .. }));

    let err = Game::seeded(Vec::new(), 1).unwrap_err();
    assert!(matches!(err, GameError::NotEnoughPlayers { got: 0, .. }));

    let game = Game::seeded(two_players(), 1).unwrap();
    assert_eq!(game.player_count(), 2);
    assert_eq!(game.current_player().name(), "Alice");
    assert_eq!(game.current_round(), 0);
}

#[test]
fn opening_roll_starts_the_reroll_budget() {
    let mut game = Game::seeded(two_players(), 3).unwrap();
    assert_eq!(game.phase(), TurnPhase::AwaitingRoll);
    assert_eq!(game.rerolls_left(), REROLLS_PER_TURN);

    game.roll_all().unwrap();
    assert_eq!(game.phase(), TurnPhase::AwaitingDecision { rerolls_left: 2 });

    game.roll_all().unwrap();
    assert_eq!(game.rerolls_left(), 1);
    game.roll_keeping(&[0, 1]).unwrap();
    assert_eq!(game.rerolls_left(), 0);
}

#[test]
fn third_reroll_is_rejected() {
    let mut game = Game::seeded(two_players(), 3).unwrap();
    game.roll_all().unwrap();
    game.roll_all().unwrap();
    game.roll_keeping(&[]).unwrap();

    let err = game.roll_all().unwrap_err();
    assert!(matches!(err, GameError::RerollsExhausted));
    let err = game.roll_keeping(&[0]).unwrap_err();
    assert!(matches!(err, GameError::RerollsExhausted));
}

#[test]
fn keep_requires_an_opening_roll() {
    let mut game = Game::seeded(two_players(), 3).unwrap();
    let err = game.roll_keeping(&[0, 1, 2, 3, 4]).unwrap_err();
    assert!(matches!(err, GameError::RollRequired));
}

#[test]
fn bad_keep_position_costs_no_reroll() {
    let mut game = Game::seeded(two_players(), 3).unwrap();
    game.roll_all().unwrap();
    let before = game.dice();

    let err = game.roll_keeping(&[5]).unwrap_err();
    assert!(matches!(err, GameError::DiePositionOutOfRange { pos: 5 }));
    assert_eq!(game.dice(), before);
    assert_eq!(game.rerolls_left(), REROLLS_PER_TURN);
}

#[test]
fn advance_player_wraps_and_resets_the_turn() {
    let names = vec!["A".to_string(), "B".to_string(), "C".to_string()];
    let mut game = Game::seeded(names, 9).unwrap();
    game.roll_all().unwrap();
    game.roll_all().unwrap();
    assert_eq!(game.rerolls_left(), 1);

    game.advance_player();
    assert_eq!(game.current_player_index(), 1);
    assert_eq!(game.phase(), TurnPhase::AwaitingRoll);
    assert_eq!(game.rerolls_left(), REROLLS_PER_TURN);

    game.advance_player();
    game.advance_player();
    assert_eq!(game.current_player_index(), 0);
}

#[test]
fn scripted_dice_flow_through_the_game() {
    let source = ScriptedDieSource::new(vec![2, 2, 3, 3, 3]);
    let mut game = Game::new(two_players(), Box::new(source)).unwrap();
    game.roll_all().unwrap();
    assert_eq!(game.dice(), [2, 2, 3, 3, 3]);

    let scores = game.available_scores();
    assert_eq!(scores.len(), 13);
    let (_, full_house) = scores
        .iter()
        .find(|(c, _)| *c == Category::FullHouse)
        .unwrap();
    assert_eq!(*full_house, 25);

    game.fill_current_player(Category::FullHouse, *full_house).unwrap();
    assert!(game.current_player().sheet().is_filled(Category::FullHouse));
    assert_eq!(game.available_categories().len(), 12);
}

#[test]
fn fill_twice_propagates_the_sheet_error() {
    let mut game = Game::seeded(two_players(), 5).unwrap();
    game.roll_all().unwrap();
    game.fill_current_player(Category::Chance, 17).unwrap();
    let err = game.fill_current_player(Category::Chance, 20).unwrap_err();
    assert!(matches!(err, GameError::CategoryAlreadyFilled(Category::Chance)));
}

#[test]
fn rounds_saturate_and_finish_after_thirteen() {
    let mut game = Game::seeded(two_players(), 5).unwrap();
    assert!(!game.is_finished());
    for _ in 0..TOTAL_ROUNDS {
        game.advance_round();
    }
    assert!(game.is_finished());
    assert_eq!(game.current_round(), TOTAL_ROUNDS);

    game.advance_round();
    assert_eq!(game.current_round(), TOTAL_ROUNDS);
}

#[test]
fn finalize_stores_nothing_when_a_sheet_is_incomplete() {
    let mut game = Game::seeded(two_players(), 11).unwrap();

    // First sheet complete, second untouched.
    for cat in Category::ALL {
        game.fill_current_player(cat, 10).unwrap();
    }
    let err = game.finalize_scores().unwrap_err();
    assert!(matches!(err, GameError::SheetIncomplete { unfilled: 13 }));
    assert_eq!(game.players()[0].total_score(), 0);
    assert_eq!(game.players()[1].total_score(), 0);
}

#[test]
fn winners_before_finalize_is_everyone_at_zero() {
    let game = Game::seeded(two_players(), 2).unwrap();
    let winners = game.winners();
    assert_eq!(winners.len(), 2);
    assert!(winners.iter().all(|p| p.total_score() == 0));
}

#[test]
fn single_winner_takes_the_highest_total() {
    let game = game_with_totals(&[100, 110, 120]);
    let winners = game.winners();
    assert_eq!(winners.len(), 1);
    assert_eq!(winners[0].name(), "P3");
    assert_eq!(winners[0].total_score(), 120);
}

#[test]
fn two_way_tie_returns_both_players() {
    let game = game_with_totals(&[100, 120, 120]);
    let winners = game.winners();
    assert_eq!(winners.len(), 2);
    let names: Vec<&str> = winners.iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["P2", "P3"]);
}

#[test]
fn full_tie_returns_everyone() {
    let game = game_with_totals(&[100, 100, 100]);
    assert_eq!(game.winners().len(), 3);
}

#[test]
fn finalized_totals_include_the_upper_bonus() {
    let mut game = Game::seeded(two_players(), 0).unwrap();
    // Alice: upper section exactly 63, everything else 0, so 63 + 35 = 98.
    let upper = [10, 10, 10, 10, 10, 13];
    for (cat, score) in Category::ALL.iter().take(6).zip(upper) {
        game.fill_current_player(*cat, score).unwrap();
    }
    for cat in Category::ALL.iter().skip(6) {
        game.fill_current_player(*cat, 0).unwrap();
    }
    game.advance_player();
    for cat in Category::ALL {
        game.fill_current_player(cat, 0).unwrap();
    }
    game.finalize_scores().unwrap();

    assert_eq!(game.players()[0].total_score(), 98);
    assert_eq!(game.players()[1].total_score(), 0);
    let winners = game.winners();
    assert_eq!(winners.len(), 1);
    assert_eq!(winners[0].name(), "Alice");
}

#[test]
fn same_seed_same_dice_stream() {
    let mut g1 = Game::seeded(two_players(), 99).unwrap();
    let mut g2 = Game::seeded(two_players(), 99).unwrap();

    g1.roll_all().unwrap();
    g2.roll_all().unwrap();
    assert_eq!(g1.dice(), g2.dice());

    g1.roll_keeping(&[0, 2]).unwrap();
    g2.roll_keeping(&[0, 2]).unwrap();
    assert_eq!(g1.dice(), g2.dice());
}

#[test]
fn random_playout_completes_thirteen_rounds() {
    let mut game = Game::seeded(two_players(), 1234).unwrap();
    let mut chooser = ChaCha8Rng::seed_from_u64(7);

    while !game.is_finished() {
        for _seat in 0..game.player_count() {
            assert_invariants(&game);
            game.roll_all().unwrap();

            // Spend a random share of the reroll budget with random keeps.
            for _ in 0..chooser.gen_range(0..=REROLLS_PER_TURN) {
                let keep: Vec<usize> = (0..5).filter(|_| chooser.gen_bool(0.5)).collect();
                game.roll_keeping(&keep).unwrap();
            }

            let options = game.available_scores();
            assert!(!options.is_empty());
            let (cat, score) = options[chooser.gen_range(0..options.len())];
            game.fill_current_player(cat, score).unwrap();
            game.advance_player();
        }
        game.advance_round();
    }

    assert_eq!(game.current_round(), TOTAL_ROUNDS);
    for p in game.players() {
        assert!(p.sheet().is_complete());
    }

    game.finalize_scores().unwrap();
    for p in game.players() {
        assert!(p.total_score() >= 0);
        assert!(p.total_score() < SCORE_UPPER_BOUND, "total {} out of range", p.total_score());
    }
    assert!(!game.winners().is_empty());
}
