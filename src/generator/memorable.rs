// src/generator/memorable.rs
use super::charset;
use crate::models::MemorableOptions;
use crate::rng::{pick_ascii, RandomSource};

/// Fixed word list for memorable passwords. Words are drawn independently
/// and with replacement.
pub const WORDS: &[&str] = &[
    // Common nouns
    "apple", "banana", "orange", "grape", "melon", "house", "garden",
    "beach", "mountain", "river", "coffee", "pizza", "burger", "pasta",
    "salad", "cloud", "tiger", "eagle", "horse", "dragon", "castle",
    "guitar", "piano", "ocean", "planet", "rocket", "camera", "pencil",
    // Common adjectives
    "happy", "sunny", "cloudy", "windy", "rainy", "bright", "dark",
    "fast", "slow", "cold", "hot", "tall", "short", "round", "square",
    "loud", "quiet", "fresh", "sweet", "sour", "clean", "dirty", "soft",
    "hard", "smooth", "rough", "light", "heavy", "early", "late", "new",
    "old", "young", "rich", "poor", "busy", "calm", "brave", "wise",
];

/// Memorable-mode generation: words joined by the configured separator,
/// optionally followed by a 0-99 number word and a single symbol word.
pub fn generate(opts: &MemorableOptions, rng: &mut dyn RandomSource) -> String {
    let mut words: Vec<String> = Vec::with_capacity(opts.word_count + 2);

    for _ in 0..opts.word_count {
        let mut word = WORDS[rng.next_index(WORDS.len())].to_string();
        if opts.capitalize {
            word = capitalize_first(&word);
        }
        words.push(word);
    }

    if opts.append_number {
        words.push(rng.next_index(100).to_string());
    }

    if opts.append_symbol {
        words.push(pick_ascii(rng, charset::SYMBOLS).to_string());
    }

    words.join(&opts.separator)
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
