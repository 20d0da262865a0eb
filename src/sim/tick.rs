//! Event dispatch
//!
//! The driver feeds one `DriverEvent` at a time; each is applied
//! synchronously and reports what happened as `GameEvent`s.

use serde::{Deserialize, Serialize};

use super::entity::{EntityId, EntityKind};
use super::movement::Direction;
use super::session::{EndReason, GamePhase};
use super::state::{GameState, SessionSummary, SpawnOutcome};

/// Input to the simulation, in arrival order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DriverEvent {
    /// Movement + collision tick
    MovementTick,
    /// One second of the countdown
    ClockTick,
    /// Spawn timer fired
    SpawnTick,
    KeyDown(Direction),
    KeyUp(Direction),
    /// Play / Restart button
    Activate,
    /// Explicit quit; ends a running round
    Quit,
    /// Window resized
    Resize { width: f32, height: f32 },
}

/// What happened while applying a `DriverEvent`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A round began (first play or restart)
    Started { restarted: bool },
    Spawned { id: EntityId, kind: EntityKind },
    /// Spawn tick fired at capacity
    SpawnSkipped,
    Collected { id: EntityId, kind: EntityKind, reward: u32 },
    TimerTick { remaining: u32 },
    Ended(SessionSummary),
}

/// Apply one driver event
pub fn handle_event(state: &mut GameState, event: &DriverEvent) -> Vec<GameEvent> {
    let mut events = Vec::new();

    match *event {
        DriverEvent::MovementTick => {
            // Move first so overlaps use the post-move position
            state.move_player();
            let report = state.collide();
            for removal in report.removed {
                log::debug!(
                    "Collected {} #{} (+{}), score {}",
                    removal.kind.label(),
                    removal.id,
                    removal.reward,
                    state.score()
                );
                events.push(GameEvent::Collected {
                    id: removal.id,
                    kind: removal.kind,
                    reward: removal.reward,
                });
            }
        }

        DriverEvent::ClockTick => {
            if let Some(timer) = state.clock_tick() {
                events.push(GameEvent::TimerTick {
                    remaining: timer.remaining,
                });
                if timer.expired {
                    end(state, EndReason::TimeUp, &mut events);
                }
            }
        }

        DriverEvent::SpawnTick => match state.spawn() {
            SpawnOutcome::Spawned(entity) => {
                log::debug!(
                    "Spawned {} #{} at ({:.0}, {:.0})",
                    entity.kind.label(),
                    entity.id,
                    entity.pos.x,
                    entity.pos.y
                );
                events.push(GameEvent::Spawned {
                    id: entity.id,
                    kind: entity.kind,
                });
            }
            SpawnOutcome::Skipped => {
                log::debug!("Spawn skipped ({} active)", state.entities().len());
                events.push(GameEvent::SpawnSkipped);
            }
            SpawnOutcome::Inactive => {}
        },

        DriverEvent::KeyDown(dir) => {
            if state.is_running() {
                state.input_mut().press(dir);
            }
        }

        DriverEvent::KeyUp(dir) => {
            state.input_mut().release(dir);
        }

        DriverEvent::Activate => {
            let prev = state.start_round();
            let restarted = prev != GamePhase::Idle;
            log::info!(
                "Round {} started ({} s){}",
                state.session().rounds_started(),
                state.remaining(),
                if restarted { ", restart" } else { "" }
            );
            events.push(GameEvent::Started { restarted });
        }

        DriverEvent::Quit => {
            end(state, EndReason::Quit, &mut events);
        }

        DriverEvent::Resize { width, height } => {
            if state.resize(width, height) {
                log::debug!("Resized to {width}x{height}");
            } else {
                log::warn!("Ignoring resize to {width}x{height}: not a usable window size");
            }
        }
    }

    events
}

fn end(state: &mut GameState, reason: EndReason, events: &mut Vec<GameEvent>) {
    if let Some(summary) = state.end_round(reason) {
        match reason {
            EndReason::TimeUp => log::info!("Time's up! Score: {}", summary.score),
            EndReason::Quit => log::info!("Round quit with score {}", summary.score),
        }
        events.push(GameEvent::Ended(summary));
    }
}
