//! Platform abstraction layer
//!
//! Handles the seams between the simulation and the outside world:
//! - Tick timing (`time::Scheduler`)
//! - Rendering (`RenderSink`)
//! - Driving a session end to end (`driver::Driver`)

pub mod driver;
pub mod time;

pub use driver::Driver;
pub use time::Scheduler;

use crate::format_clock;
use crate::sim::{GamePhase, Snapshot};

/// Consumes read-only snapshots for display
pub trait RenderSink {
    fn present(&mut self, snapshot: &Snapshot);
}

/// Draws nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl RenderSink for NullRenderer {
    fn present(&mut self, _snapshot: &Snapshot) {}
}

/// Text HUD: keeps the header line and logs it whenever it changes
#[derive(Debug, Default, Clone)]
pub struct TextHud {
    line: String,
    frames: u64,
}

impl TextHud {
    pub fn line(&self) -> &str {
        &self.line
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn render_line(snapshot: &Snapshot) -> String {
        let status = match snapshot.phase {
            GamePhase::Idle => "Press Play",
            GamePhase::Running => "Playing",
            GamePhase::Ended => "Game Over! Press Restart to play again.",
        };
        format!(
            "Score: {}  Time: {}  Pathogens: {}  [{}]",
            snapshot.score,
            format_clock(snapshot.remaining),
            snapshot.entities.iter().filter(|e| e.kind.is_pathogen()).count(),
            status
        )
    }
}

impl RenderSink for TextHud {
    fn present(&mut self, snapshot: &Snapshot) {
        self.frames += 1;
        let line = Self::render_line(snapshot);
        if line != self.line {
            log::debug!("{line}");
            self.line = line;
        }
    }
}
