// src/rng.rs
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A uniform random source injected into every generation and shuffling
/// path so callers (and tests) control determinism.
pub trait RandomSource {
    /// Returns a uniform index in `[0, bound)`. `bound` must be non-zero.
    fn next_index(&mut self, bound: usize) -> usize;
}

/// Production source backed by the thread-local generator. Uniform but
/// not security-grade, matching the original tools.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRandom;

impl SystemRandom {
    pub fn new() -> Self {
        SystemRandom
    }
}

impl RandomSource for SystemRandom {
    fn next_index(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0);
        rand::thread_rng().gen_range(0..bound)
    }
}

/// Deterministic source for reproducible output.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    inner: ChaCha8Rng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_index(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0);
        self.inner.gen_range(0..bound)
    }
}

/// Fisher-Yates permutation driven by a [`RandomSource`].
pub fn shuffle<T>(rng: &mut dyn RandomSource, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.next_index(i + 1);
        items.swap(i, j);
    }
}

/// Draws one character from an ASCII-only table.
pub(crate) fn pick_ascii(rng: &mut dyn RandomSource, table: &str) -> char {
    debug_assert!(table.is_ascii());
    table.as_bytes()[rng.next_index(table.len())] as char
}
