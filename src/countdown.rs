// src/countdown.rs
//! Countdown timer engine. The engine owns the remaining-time
//! bookkeeping and state transitions; the caller owns the one-second
//! interval that drives [`Countdown::tick`] and whatever it does when
//! the countdown finishes.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CountdownError {
    #[error("countdown duration must be greater than zero")]
    ZeroDuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownState {
    Idle,
    Running,
    Paused,
    Finished,
}

/// Result of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Not running; nothing changed.
    Idle { remaining: u32 },
    Running { remaining: u32 },
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    total: u32,
    remaining: u32,
    state: CountdownState,
}

impl Countdown {
    pub fn new() -> Self {
        Self {
            total: 0,
            remaining: 0,
            state: CountdownState::Idle,
        }
    }

    /// Arms and starts the countdown. Restarting a running countdown is
    /// allowed and replaces the previous duration.
    pub fn start(&mut self, hours: u32, minutes: u32, seconds: u32) -> Result<(), CountdownError> {
        let total = hours * 3600 + minutes * 60 + seconds;
        if total == 0 {
            return Err(CountdownError::ZeroDuration);
        }
        self.total = total;
        self.remaining = total;
        self.state = CountdownState::Running;
        Ok(())
    }

    /// One-second step. Only a running countdown moves; reaching zero
    /// transitions to `Finished`.
    pub fn tick(&mut self) -> Tick {
        match self.state {
            CountdownState::Running => {
                self.remaining -= 1;
                if self.remaining == 0 {
                    self.state = CountdownState::Finished;
                    Tick::Finished
                } else {
                    Tick::Running { remaining: self.remaining }
                }
            }
            CountdownState::Finished => Tick::Finished,
            _ => Tick::Idle { remaining: self.remaining },
        }
    }

    pub fn pause(&mut self) {
        if self.state == CountdownState::Running {
            self.state = CountdownState::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.state == CountdownState::Paused {
            self.state = CountdownState::Running;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn state(&self) -> CountdownState {
        self.state
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// Fraction elapsed, 0.0 before start.
    pub fn progress(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            (self.total - self.remaining) as f32 / self.total as f32
        }
    }

    /// Remaining time as (hours, minutes, seconds).
    pub fn remaining_hms(&self) -> (u32, u32, u32) {
        (
            self.remaining / 3600,
            self.remaining % 3600 / 60,
            self.remaining % 60,
        )
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new()
    }
}
