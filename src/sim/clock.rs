//! Countdown clock for a round
//!
//! Ticks once per clock period, independent of the movement tick.

use serde::{Deserialize, Serialize};

/// Emitted on every clock tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerEvent {
    /// Seconds left after this tick
    pub remaining: u32,
    /// True only on the tick that exhausted the clock
    pub expired: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameClock {
    initial: u32,
    remaining: u32,
    expired: bool,
}

impl GameClock {
    pub fn new(seconds: u32) -> Self {
        Self {
            initial: seconds,
            remaining: seconds,
            expired: false,
        }
    }

    /// Consume one second.
    ///
    /// Once expired, further ticks return `remaining = 0, expired = false`
    /// until `reset`.
    pub fn tick(&mut self) -> TimerEvent {
        if self.expired {
            return TimerEvent {
                remaining: 0,
                expired: false,
            };
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.expired = true;
        }
        TimerEvent {
            remaining: self.remaining,
            expired: self.expired,
        }
    }

    pub fn reset(&mut self) {
        self.remaining = self.initial;
        self.expired = false;
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_expired(&self) -> bool {
        self.expired
    }
}
