// src/strength.rs
//! Deterministic password strength heuristic. Pure function, no
//! randomness; the same input always yields the same assessment.

use crate::models::{GenerationMode, StrengthAssessment, StrengthLabel};

/// Run tables for the sequential-pattern penalty. Any three adjacent
/// characters of the password found inside one of these (case-insensitive)
/// trips the penalty.
const ALPHA_RUNS: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGIT_RUNS: &str = "01234567890";

/// Scores a password and maps the score to a label.
///
/// The mode matters only for the PIN cap: PIN output, and any purely
/// numeric password shorter than ten characters, can never score above
/// 50 no matter how the other factors add up.
pub fn evaluate(password: &str, mode: GenerationMode) -> StrengthAssessment {
    let length = password.chars().count();

    let mut score: i32 = match length {
        0..=5 => 5,
        6..=7 => 10,
        8..=11 => 20,
        12..=15 => 30,
        _ => 40,
    };

    let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lowercase = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digits = password.chars().any(|c| c.is_ascii_digit());
    // Anything outside ASCII letters and digits counts as a symbol,
    // including non-ASCII letters.
    let has_symbols = password.chars().any(|c| !c.is_ascii_alphanumeric());

    let class_count = [has_uppercase, has_lowercase, has_digits, has_symbols]
        .iter()
        .filter(|present| **present)
        .count() as i32;
    score += class_count * 15;

    score += (length as i32).min(20);

    let lowered: Vec<char> = password.to_lowercase().chars().collect();
    if has_sequential_run(&lowered) {
        score -= 10;
    }
    if has_repeat_run(&lowered) {
        score -= 10;
    }

    let purely_numeric = !password.is_empty() && password.chars().all(|c| c.is_ascii_digit());
    if mode == GenerationMode::Pin || (purely_numeric && length < 10) {
        score = score.min(50);
    }

    StrengthAssessment {
        score,
        label: StrengthLabel::from_score(score),
    }
}

fn has_sequential_run(lowered: &[char]) -> bool {
    lowered.windows(3).any(|window| {
        let run: String = window.iter().collect();
        ALPHA_RUNS.contains(&run) || DIGIT_RUNS.contains(&run)
    })
}

fn has_repeat_run(lowered: &[char]) -> bool {
    lowered
        .windows(3)
        .any(|window| window[0] == window[1] && window[1] == window[2])
}
