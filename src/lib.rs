// src/lib.rs
//! Engines behind a small bundle of client-side utilities: a password
//! generator with strength scoring, a tile-matching memory game, and a
//! countdown timer.
//!
//! Everything here is pure, synchronous computation. Rendering, event
//! wiring and scheduling belong to the embedding application; the only
//! collaborators the engines know about are the [`rng::RandomSource`],
//! [`history::HistoryStore`] and [`clipboard::ClipboardSink`] seams.

pub mod clipboard;
pub mod config;
pub mod countdown;
pub mod game;
pub mod generator;
pub mod history;
pub mod models;
pub mod rng;
pub mod strength;
pub mod utils;

pub use crate::config::Config;
pub use crate::generator::{GeneratorError, PasswordEngine};
pub use crate::models::{
    GeneratedPassword, GenerationMode, GenerationRequest, StrengthAssessment, StrengthLabel,
};
pub use crate::rng::{RandomSource, SeededRandom, SystemRandom};
