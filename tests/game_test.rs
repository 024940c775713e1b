//! Memory game: deck shape, the flip/match flag machine, the mismatch
//! lock, scoring and best-result tracking.

use rust_keysmith::game::{
    BestStats, CardState, Difficulty, FlipOutcome, GameSummary, MemoryGame, Theme,
};
use rust_keysmith::rng::SeededRandom;

fn new_game(seed: u64) -> MemoryGame {
    let mut rng = SeededRandom::new(seed);
    MemoryGame::new(Difficulty::Easy, Theme::Animals, &mut rng)
}

/// Indices of the two cards showing `face`.
fn pair_indices(game: &MemoryGame, face: &str) -> (usize, usize) {
    let positions: Vec<usize> = game
        .cards()
        .iter()
        .enumerate()
        .filter(|(_, card)| card.face == face)
        .map(|(i, _)| i)
        .collect();
    (positions[0], positions[1])
}

#[test]
fn deck_has_shuffled_face_pairs() {
    let game = new_game(1);
    assert_eq!(game.cards().len(), 12);
    assert_eq!(game.total_pairs(), 6);
    for card in game.cards() {
        let twins = game.cards().iter().filter(|c| c.face == card.face).count();
        assert_eq!(twins, 2);
        assert_eq!(card.state, CardState::Hidden);
    }
}

#[test]
fn first_flip_turns_card_up() {
    let mut game = new_game(2);
    assert_eq!(game.flip(0), FlipOutcome::FirstUp);
    assert_eq!(game.cards()[0].state, CardState::FaceUp);
}

#[test]
fn reflipping_the_same_card_is_ignored() {
    let mut game = new_game(2);
    game.flip(0);
    assert_eq!(game.flip(0), FlipOutcome::Ignored);
    assert_eq!(game.moves(), 0);
}

#[test]
fn out_of_range_flip_is_ignored() {
    let mut game = new_game(2);
    assert_eq!(game.flip(99), FlipOutcome::Ignored);
}

#[test]
fn matching_pair_scores_and_stays_up() {
    let mut game = new_game(3);
    let face = game.cards()[0].face;
    let (a, b) = pair_indices(&game, face);

    assert_eq!(game.flip(a), FlipOutcome::FirstUp);
    // Instant match: full 20-second bonus on top of the base 100.
    assert_eq!(game.flip(b), FlipOutcome::Matched { points: 200 });
    assert_eq!(game.cards()[a].state, CardState::Matched);
    assert_eq!(game.cards()[b].state, CardState::Matched);
    assert_eq!(game.moves(), 1);
    assert_eq!(game.score(), 200);
}

#[test]
fn slow_match_earns_a_smaller_bonus() {
    let mut game = new_game(3);
    let face = game.cards()[0].face;
    let (a, b) = pair_indices(&game, face);

    game.flip(a);
    // 12 seconds over 6 pairs leaves 18 bonus steps of 5 points.
    for _ in 0..12 {
        game.tick();
    }
    assert_eq!(game.flip(b), FlipOutcome::Matched { points: 100 + 18 * 5 });
}

#[test]
fn mismatch_locks_board_until_concealed() {
    let mut game = new_game(4);
    let first_face = game.cards()[0].face;
    let other = game
        .cards()
        .iter()
        .position(|card| card.face != first_face)
        .unwrap();

    game.flip(0);
    assert_eq!(game.flip(other), FlipOutcome::Mismatch);
    assert!(game.is_locked());
    assert_eq!(game.flip(2), FlipOutcome::Ignored);

    game.conceal_mismatch();
    assert!(!game.is_locked());
    assert_eq!(game.cards()[0].state, CardState::Hidden);
    assert_eq!(game.cards()[other].state, CardState::Hidden);
    assert_eq!(game.moves(), 1);
}

#[test]
fn conceal_without_pending_mismatch_is_a_noop() {
    let mut game = new_game(4);
    game.flip(0);
    game.conceal_mismatch();
    assert_eq!(game.cards()[0].state, CardState::FaceUp);
}

#[test]
fn clock_only_runs_after_first_flip() {
    let mut game = new_game(5);
    game.tick();
    assert_eq!(game.seconds(), 0);

    game.flip(0);
    game.tick();
    game.tick();
    assert_eq!(game.seconds(), 2);
}

#[test]
fn perfect_game_wins_with_five_stars() {
    let mut game = new_game(6);
    let faces: Vec<&str> = {
        let mut seen = Vec::new();
        for card in game.cards() {
            if !seen.contains(&card.face) {
                seen.push(card.face);
            }
        }
        seen
    };

    let mut last = FlipOutcome::Ignored;
    for face in faces {
        let (a, b) = pair_indices(&game, face);
        game.flip(a);
        last = game.flip(b);
    }

    let FlipOutcome::Won { summary } = last else {
        panic!("expected the final flip to win the game");
    };
    assert!(game.is_won());
    assert_eq!(summary.moves, 6);
    assert_eq!(summary.score, 6 * 200);
    assert_eq!(summary.stars, 5);
    assert_eq!(game.progress(), 1.0);
}

#[test]
fn wasteful_game_earns_fewer_stars() {
    let mut game = new_game(7);
    let first_face = game.cards()[0].face;
    let other = game
        .cards()
        .iter()
        .position(|card| card.face != first_face)
        .unwrap();

    // Burn 30 mismatching moves before clearing the board.
    for _ in 0..30 {
        game.flip(0);
        game.flip(other);
        game.conceal_mismatch();
    }

    let faces: Vec<&str> = {
        let mut seen = Vec::new();
        for card in game.cards() {
            if !seen.contains(&card.face) {
                seen.push(card.face);
            }
        }
        seen
    };
    let mut last = FlipOutcome::Ignored;
    for face in faces {
        let (a, b) = pair_indices(&game, face);
        game.flip(a);
        last = game.flip(b);
    }

    let FlipOutcome::Won { summary } = last else {
        panic!("expected the final flip to win the game");
    };
    // 36 moves against 12 perfect is a ratio of 1/3.
    assert_eq!(summary.stars, 2);
}

#[test]
fn reset_deals_a_fresh_deck_and_drops_pending_mismatch() {
    let mut game = new_game(8);
    let first_face = game.cards()[0].face;
    let other = game
        .cards()
        .iter()
        .position(|card| card.face != first_face)
        .unwrap();
    game.flip(0);
    game.flip(other);
    assert!(game.is_locked());

    let mut rng = SeededRandom::new(9);
    game.reset(&mut rng);
    assert!(!game.is_locked());
    assert_eq!(game.moves(), 0);
    assert_eq!(game.score(), 0);
    assert_eq!(game.seconds(), 0);
    assert!(game.cards().iter().all(|c| c.state == CardState::Hidden));
}

#[test]
fn best_stats_keep_only_improvements() {
    let mut stats = BestStats::default();
    let first = GameSummary { seconds: 60, moves: 20, score: 900, stars: 3 };
    assert!(stats.record(&first));
    assert_eq!(stats.best_time, Some(60));

    let worse = GameSummary { seconds: 90, moves: 30, score: 700, stars: 2 };
    assert!(!stats.record(&worse));
    assert_eq!(stats.best_time, Some(60));
    assert_eq!(stats.best_moves, Some(20));
    assert_eq!(stats.best_score, Some(900));

    let faster = GameSummary { seconds: 45, moves: 25, score: 800, stars: 4 };
    assert!(stats.record(&faster));
    assert_eq!(stats.best_time, Some(45));
    assert_eq!(stats.best_moves, Some(20));
    assert_eq!(stats.best_score, Some(900));
}
