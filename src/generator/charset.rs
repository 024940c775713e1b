// src/generator/charset.rs
use serde::{Deserialize, Serialize};

use crate::models::RandomOptions;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?/";

/// Characters that look alike in many fonts, dropped by `exclude_similar`.
pub const SIMILAR: &str = "il1Lo0O";

/// Punctuation that is easy to mistranscribe, dropped by
/// `exclude_ambiguous`.
pub const AMBIGUOUS: &str = r#"{}[]()/\'"`~,;:.<>"#;

/// The four fixed character classes. Array order is also the order in
/// which required representatives are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    pub fn table(&self) -> &'static str {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Symbol => SYMBOLS,
        }
    }
}

/// Whether the options include a class as a membership source.
pub fn class_included(opts: &RandomOptions, class: CharacterClass) -> bool {
    match class {
        CharacterClass::Uppercase => opts.include_uppercase,
        CharacterClass::Lowercase => opts.include_lowercase,
        CharacterClass::Digit => opts.include_numbers,
        CharacterClass::Symbol => opts.include_symbols,
    }
}

/// Builds the effective character pool for random mode: the union of the
/// included class tables, fully replaced by `custom_chars` when that is
/// non-empty, then filtered by the exclusion flags. May come back empty;
/// the caller decides what that means.
pub fn effective_set(opts: &RandomOptions) -> Vec<char> {
    let mut pool = String::new();
    for class in CharacterClass::ALL {
        if class_included(opts, class) {
            pool.push_str(class.table());
        }
    }

    if !opts.custom_chars.is_empty() {
        pool = opts.custom_chars.clone();
    }

    let mut chars: Vec<char> = pool.chars().collect();
    if opts.exclude_similar {
        chars.retain(|c| !SIMILAR.contains(*c));
    }
    if opts.exclude_ambiguous {
        chars.retain(|c| !AMBIGUOUS.contains(*c));
    }
    chars
}
