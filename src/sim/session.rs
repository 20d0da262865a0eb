//! Session phase machine
//!
//! Idle -> Running (activate) -> Ended (time up or quit) -> Running (activate).
//! Only `begin` and `finish` move between phases.

use serde::{Deserialize, Serialize};

/// Current phase of the session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Before the first round
    #[default]
    Idle,
    /// Round in progress
    Running,
    /// Round over; state kept for the summary until the next activation
    Ended,
}

/// Why a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    TimeUp,
    Quit,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    phase: GamePhase,
    last_end: Option<EndReason>,
    rounds_started: u32,
}

impl Session {
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn last_end(&self) -> Option<EndReason> {
        self.last_end
    }

    pub fn rounds_started(&self) -> u32 {
        self.rounds_started
    }

    /// Enter Running from any phase. Returns the previous phase.
    pub fn begin(&mut self) -> GamePhase {
        let prev = self.phase;
        self.phase = GamePhase::Running;
        self.last_end = None;
        self.rounds_started += 1;
        prev
    }

    /// Leave Running. Returns false (and does nothing) outside Running.
    pub fn finish(&mut self, reason: EndReason) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        self.phase = GamePhase::Ended;
        self.last_end = Some(reason);
        true
    }
}
