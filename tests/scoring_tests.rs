//! Scoring tests - combo rules and high score persistence

use block_puzzle::core::{calculate_points, MemoryHighScore, ScoreKeeper};
use block_puzzle::types::BASE_POINTS;

#[test]
fn test_points_formula() {
    for lines in 1..=4 {
        for combo in 1..=5 {
            assert_eq!(calculate_points(lines, combo), lines * BASE_POINTS * combo);
        }
    }
    // combo 0 still scores at multiplier 1
    assert_eq!(calculate_points(2, 0), 200);
}

#[test]
fn test_second_consecutive_clear_scores_more() {
    for lines in 1..=4 {
        let mut keeper = ScoreKeeper::new(MemoryHighScore::default());
        let first = keeper.register_clear(lines);
        let second = keeper.register_clear(lines);
        assert!(second.points > first.points, "lines = {lines}");
        assert_eq!(first.combo, 1);
        assert_eq!(second.combo, 2);
    }
}

#[test]
fn test_streak_then_reset() {
    let mut keeper = ScoreKeeper::new(MemoryHighScore::default());
    assert_eq!(keeper.register_clear(1).points, 100);
    assert_eq!(keeper.register_clear(2).points, 400);
    assert_eq!(keeper.register_clear(1).points, 300);
    assert_eq!(keeper.score(), 800);
    assert_eq!(keeper.lines(), 4);

    let miss = keeper.register_clear(0);
    assert_eq!(miss.points, 0);
    assert_eq!(miss.score, 800);
    assert_eq!(keeper.combo(), 0);

    let again = keeper.register_clear(1);
    assert_eq!(again.combo, 1);
    assert_eq!(again.points, 100);
    assert_eq!(keeper.score(), 900);
}

#[test]
fn test_high_score_loaded_and_raised() {
    let mut keeper = ScoreKeeper::new(MemoryHighScore::new(250));
    assert_eq!(keeper.high_score(), 250);

    assert!(!keeper.register_clear(2).new_high_score);
    let update = keeper.register_clear(1);
    assert!(update.new_high_score);
    assert_eq!(keeper.high_score(), 400);
    assert_eq!(keeper.store().value(), 400);

    keeper.reset();
    assert_eq!(keeper.score(), 0);
    assert_eq!(keeper.high_score(), 400);
    assert!(!keeper.register_clear(1).new_high_score);
}
