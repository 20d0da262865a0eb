//! Virtual-time tick source
//!
//! Turns elapsed milliseconds into the three periodic driver signals:
//! movement, clock and spawn. Deadlines are absolute, so irregular frame
//! times never drift the cadence.

use crate::sim::DriverEvent;

#[derive(Debug, Clone)]
pub struct Scheduler {
    movement_ms: u64,
    clock_ms: u64,
    now_ms: u64,
    next_movement: u64,
    next_clock: u64,
    /// Unset until the next spawn delay is known
    next_spawn: Option<u64>,
    active: bool,
}

impl Scheduler {
    pub fn new(movement_ms: u32, clock_ms: u32) -> Self {
        Self {
            movement_ms: u64::from(movement_ms.max(1)),
            clock_ms: u64::from(clock_ms.max(1)),
            now_ms: 0,
            next_movement: 0,
            next_clock: 0,
            next_spawn: None,
            active: false,
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Restart all cadences from now (a round just began)
    pub fn rebase(&mut self, first_spawn_ms: u32) {
        self.next_movement = self.now_ms + self.movement_ms;
        self.next_clock = self.now_ms + self.clock_ms;
        self.next_spawn = Some(self.now_ms + u64::from(first_spawn_ms));
        self.active = true;
    }

    /// Stop emitting ticks until the next `rebase`
    pub fn halt(&mut self) {
        self.active = false;
        self.next_spawn = None;
    }

    /// Schedule the next spawn tick `delay_ms` after now
    pub fn set_next_spawn(&mut self, delay_ms: u32) {
        self.next_spawn = Some(self.now_ms + u64::from(delay_ms));
    }

    /// Pop the earliest tick due at or before `until`, moving `now` to it.
    ///
    /// Simultaneous deadlines fire spawn, then movement, then clock.
    pub fn pop_due(&mut self, until: u64) -> Option<DriverEvent> {
        if !self.active {
            return None;
        }
        let spawn = self.next_spawn.unwrap_or(u64::MAX);
        let earliest = spawn.min(self.next_movement).min(self.next_clock);
        if earliest > until {
            return None;
        }
        self.now_ms = earliest;

        if spawn == earliest {
            self.next_spawn = None;
            Some(DriverEvent::SpawnTick)
        } else if self.next_movement == earliest {
            self.next_movement += self.movement_ms;
            Some(DriverEvent::MovementTick)
        } else {
            self.next_clock += self.clock_ms;
            Some(DriverEvent::ClockTick)
        }
    }

    /// Move `now` forward without firing anything
    pub fn advance_to(&mut self, until: u64) {
        self.now_ms = self.now_ms.max(until);
    }
}
