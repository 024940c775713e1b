// src/game.rs
//! Tile-matching memory game core: deck creation, the flip/match state
//! machine, scoring and best-result tracking. Board rendering and the
//! one-second clock driving [`MemoryGame::tick`] live with the caller.

use serde::{Deserialize, Serialize};

use crate::rng::{self, RandomSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    /// Board dimensions as (rows, columns).
    pub fn dimensions(&self) -> (usize, usize) {
        match self {
            Difficulty::Easy => (3, 4),
            Difficulty::Medium => (4, 4),
            Difficulty::Hard => (4, 6),
            Difficulty::Expert => (6, 6),
        }
    }

    pub fn pair_count(&self) -> usize {
        let (rows, cols) = self.dimensions();
        rows * cols / 2
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Animals,
    Food,
    Tech,
    Nature,
}

impl Theme {
    pub fn faces(&self) -> &'static [&'static str] {
        match self {
            Theme::Animals => &[
                "🐶", "🐱", "🐭", "🐹", "🐰", "🦊", "🐻", "🐼", "🐨", "🐯",
                "🦁", "🐮", "🐷", "🐸", "🐵", "🐔", "🐧", "🦆", "🦉", "🐺",
            ],
            Theme::Food => &[
                "🍎", "🍐", "🍊", "🍋", "🍌", "🍉", "🍇", "🍓", "🍒", "🍑",
                "🍍", "🥥", "🥝", "🍅", "🍆", "🥑", "🍔", "🍕",
            ],
            Theme::Tech => &[
                "💻", "📱", "⌚", "📷", "🎮", "🎧", "📺", "📠", "💾", "🖨️",
                "🖥️", "⌨️", "🖱️", "🔌", "💡", "🔋", "📡", "⚙️",
            ],
            Theme::Nature => &[
                "🌵", "🌲", "🌴", "🌿", "☘️", "🍀", "🌺", "🌻", "🌼", "🌷",
                "🌹", "🌸", "🌈", "☀️", "⛅", "☁️", "⛈️", "❄️",
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardState {
    Hidden,
    FaceUp,
    Matched,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub face: &'static str,
    pub state: CardState,
}

/// What a single flip did to the board.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlipOutcome {
    /// Locked board, out-of-range index, or an already revealed card.
    Ignored,
    /// First card of a pair turned face up.
    FirstUp,
    /// Second card matched the first.
    Matched { points: u32 },
    /// Second card did not match; the board stays locked until
    /// [`MemoryGame::conceal_mismatch`] runs.
    Mismatch,
    /// The match that completed the board.
    Won { summary: GameSummary },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub seconds: u32,
    pub moves: u32,
    pub score: u32,
    pub stars: u8,
}

pub struct MemoryGame {
    difficulty: Difficulty,
    theme: Theme,
    cards: Vec<Card>,
    first: Option<usize>,
    pending_mismatch: Option<(usize, usize)>,
    total_pairs: usize,
    matched_pairs: usize,
    moves: u32,
    score: u32,
    seconds: u32,
    running: bool,
}

impl MemoryGame {
    /// Deals a shuffled deck of face pairs for the difficulty and theme.
    pub fn new(difficulty: Difficulty, theme: Theme, rng: &mut dyn RandomSource) -> Self {
        let total_pairs = difficulty.pair_count().min(theme.faces().len());
        let mut cards: Vec<Card> = theme.faces()[..total_pairs]
            .iter()
            .flat_map(|&face| {
                [
                    Card { face, state: CardState::Hidden },
                    Card { face, state: CardState::Hidden },
                ]
            })
            .collect();
        rng::shuffle(rng, &mut cards);

        Self {
            difficulty,
            theme,
            cards,
            first: None,
            pending_mismatch: None,
            total_pairs,
            matched_pairs: 0,
            moves: 0,
            score: 0,
            seconds: 0,
            running: false,
        }
    }

    /// Reveals the card at `index` and resolves the pair when it is the
    /// second one up. The first flip of a game starts the clock.
    pub fn flip(&mut self, index: usize) -> FlipOutcome {
        if self.pending_mismatch.is_some() {
            return FlipOutcome::Ignored;
        }
        let Some(card) = self.cards.get(index) else {
            return FlipOutcome::Ignored;
        };
        if card.state != CardState::Hidden {
            return FlipOutcome::Ignored;
        }

        self.cards[index].state = CardState::FaceUp;
        self.running = true;

        let Some(first) = self.first.take() else {
            self.first = Some(index);
            return FlipOutcome::FirstUp;
        };

        self.moves += 1;

        if self.cards[first].face == self.cards[index].face {
            self.cards[first].state = CardState::Matched;
            self.cards[index].state = CardState::Matched;
            self.matched_pairs += 1;

            let elapsed_per_pair = self.seconds / self.total_pairs as u32;
            let time_bonus = 20u32.saturating_sub(elapsed_per_pair.min(20)) * 5;
            let points = 100 + time_bonus;
            self.score += points;

            if self.matched_pairs == self.total_pairs {
                self.running = false;
                return FlipOutcome::Won { summary: self.summary() };
            }
            FlipOutcome::Matched { points }
        } else {
            self.pending_mismatch = Some((first, index));
            FlipOutcome::Mismatch
        }
    }

    /// Flips a mismatched pair back down and unlocks the board. The
    /// caller schedules this after its flip-back delay; a reset in the
    /// meantime simply supersedes it. No-op without a pending mismatch.
    pub fn conceal_mismatch(&mut self) {
        if let Some((a, b)) = self.pending_mismatch.take() {
            self.cards[a].state = CardState::Hidden;
            self.cards[b].state = CardState::Hidden;
        }
    }

    /// Advances the elapsed-seconds clock while a game is in progress.
    pub fn tick(&mut self) {
        if self.running {
            self.seconds += 1;
        }
    }

    /// Fresh shuffled deck, all counters cleared. Drops any pending
    /// mismatch, so a flip-back scheduled before the reset lands on
    /// nothing.
    pub fn reset(&mut self, rng: &mut dyn RandomSource) {
        *self = Self::new(self.difficulty, self.theme, rng);
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            seconds: self.seconds,
            moves: self.moves,
            score: self.score,
            stars: self.stars(),
        }
    }

    /// Rating from the ratio of the nominal perfect move count (two per
    /// pair) to the moves actually taken.
    fn stars(&self) -> u8 {
        if self.moves == 0 {
            return 3;
        }
        let ratio = (self.total_pairs as f64 * 2.0) / f64::from(self.moves);
        if ratio > 0.9 {
            5
        } else if ratio > 0.7 {
            4
        } else if ratio >= 0.5 {
            3
        } else {
            2
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn is_locked(&self) -> bool {
        self.pending_mismatch.is_some()
    }

    pub fn is_won(&self) -> bool {
        self.matched_pairs == self.total_pairs
    }

    pub fn progress(&self) -> f32 {
        self.matched_pairs as f32 / self.total_pairs as f32
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    pub fn total_pairs(&self) -> usize {
        self.total_pairs
    }
}

/// Best results across games, persisted by the caller as an opaque blob.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestStats {
    pub best_time: Option<u32>,
    pub best_moves: Option<u32>,
    pub best_score: Option<u32>,
}

impl BestStats {
    /// Folds a finished game in, keeping the lowest time, lowest move
    /// count and highest score. Returns whether anything improved.
    pub fn record(&mut self, summary: &GameSummary) -> bool {
        let mut improved = false;
        if self.best_time.map_or(true, |t| summary.seconds < t) {
            self.best_time = Some(summary.seconds);
            improved = true;
        }
        if self.best_moves.map_or(true, |m| summary.moves < m) {
            self.best_moves = Some(summary.moves);
            improved = true;
        }
        if self.best_score.map_or(true, |s| summary.score > s) {
            self.best_score = Some(summary.score);
            improved = true;
        }
        improved
    }
}
