// src/generator/mod.rs
use lazy_static::lazy_static;
use thiserror::Error;

use crate::models::{GeneratedPassword, GenerationRequest, PinOptions};
use crate::rng::{pick_ascii, RandomSource};
use crate::strength;

pub mod charset;
pub mod memorable;
pub mod random;

pub use charset::CharacterClass;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("no characters available after applying the selected filters")]
    NoCharactersAvailable,
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

lazy_static! {
    /// Pool backing the `@` pattern token: every class table concatenated.
    static ref ANY_CLASS: String = [
        charset::UPPERCASE,
        charset::LOWERCASE,
        charset::DIGITS,
        charset::SYMBOLS,
    ]
    .concat();
}

/// Stateless engine: a pure function of (request, random source).
pub struct PasswordEngine;

impl PasswordEngine {
    pub fn new() -> Self {
        PasswordEngine
    }

    /// Generates a password for the requested mode and scores it.
    ///
    /// The only failure is an empty effective character set in random
    /// mode; every other request produces a password, possibly empty for
    /// an empty pattern template.
    pub fn generate(
        &self,
        request: &GenerationRequest,
        rng: &mut dyn RandomSource,
    ) -> Result<GeneratedPassword> {
        let password = match request {
            GenerationRequest::Random(opts) => random::generate(opts, rng)?,
            GenerationRequest::Memorable(opts) => memorable::generate(opts, rng),
            GenerationRequest::Pin(opts) => generate_pin(opts, rng),
            GenerationRequest::Pattern(opts) => generate_pattern(&opts.template, rng),
        };
        let strength = strength::evaluate(&password, request.mode());
        Ok(GeneratedPassword { password, strength })
    }
}

impl Default for PasswordEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn generate_pin(opts: &PinOptions, rng: &mut dyn RandomSource) -> String {
    (0..opts.length)
        .map(|_| pick_ascii(rng, charset::DIGITS))
        .collect()
}

fn generate_pattern(template: &str, rng: &mut dyn RandomSource) -> String {
    template
        .chars()
        .map(|token| match token {
            'A' => pick_ascii(rng, charset::UPPERCASE),
            'x' => pick_ascii(rng, charset::LOWERCASE),
            'n' => pick_ascii(rng, charset::DIGITS),
            'S' => pick_ascii(rng, charset::SYMBOLS),
            '@' => pick_ascii(rng, &ANY_CLASS),
            literal => literal,
        })
        .collect()
}
