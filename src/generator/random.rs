// src/generator/random.rs
use std::collections::HashSet;

use super::charset::{self, CharacterClass};
use super::{GeneratorError, Result};
use crate::models::RandomOptions;
use crate::rng::{self, pick_ascii, RandomSource};

/// Random-mode generation.
///
/// Length usually equals `opts.length`; with `avoid_duplicates` set the
/// result stops early once every distinct pool character has been used,
/// which is graceful degradation rather than an error.
pub fn generate(opts: &RandomOptions, rng: &mut dyn RandomSource) -> Result<String> {
    let pool = charset::effective_set(opts);
    if pool.is_empty() {
        return Err(GeneratorError::NoCharactersAvailable);
    }

    // Representatives intentionally come from the base class tables, not
    // the custom pool, even when one overrides set membership. A
    // representative may therefore fall outside the advertised pool.
    let mut required: Vec<char> = Vec::new();
    if opts.require_every_type {
        for class in CharacterClass::ALL {
            if charset::class_included(opts, class) {
                required.push(pick_ascii(rng, class.table()));
            }
        }
    }
    required.truncate(opts.length);

    let mut result: Vec<char> = Vec::with_capacity(opts.length);
    let mut used: HashSet<char> = HashSet::new();
    for &c in &required {
        result.push(c);
        if opts.avoid_duplicates {
            used.insert(c);
        }
    }

    let distinct = pool.iter().copied().collect::<HashSet<char>>().len();
    while result.len() < opts.length {
        let c = pool[rng.next_index(pool.len())];
        if opts.avoid_duplicates && used.contains(&c) {
            if used.len() >= distinct {
                break;
            }
            continue;
        }
        result.push(c);
        if opts.avoid_duplicates {
            used.insert(c);
        }
    }

    // Mix the required characters into random positions instead of
    // leaving them clustered at the front.
    if !required.is_empty() {
        rng::shuffle(rng, &mut result);
    }

    Ok(result.into_iter().collect())
}
