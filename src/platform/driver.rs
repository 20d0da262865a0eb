//! Single-threaded session driver
//!
//! Owns the game state, the tick scheduler and the render/audio
//! collaborators. Input is dispatched immediately; `advance` fires every tick
//! that came due and then presents one snapshot.

use crate::audio::AudioSink;
use crate::settings::Settings;
use crate::sim::{DriverEvent, Extents, GameEvent, GameState, handle_event};

use super::RenderSink;
use super::time::Scheduler;

pub struct Driver<R: RenderSink, A: AudioSink> {
    state: GameState,
    scheduler: Scheduler,
    render: R,
    audio: A,
}

impl<R: RenderSink, A: AudioSink> Driver<R, A> {
    pub fn new(state: GameState, scheduler: Scheduler, render: R, audio: A) -> Self {
        Self {
            state,
            scheduler,
            render,
            audio,
        }
    }

    /// Build a driver from settings with the given sprite extents and seed
    pub fn from_settings(settings: &Settings, extents: Extents, seed: u64, render: R, audio: A) -> Self {
        let state = GameState::new(settings.sim_config(extents), seed);
        let scheduler = Scheduler::new(settings.movement_tick_ms, settings.clock_tick_ms);
        Self::new(state, scheduler, render, audio)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn render(&self) -> &R {
        &self.render
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    /// Dispatch an input event now
    pub fn push(&mut self, event: DriverEvent) -> Vec<GameEvent> {
        self.dispatch(event)
    }

    /// Let `elapsed_ms` of time pass, firing due ticks in order, then present
    pub fn advance(&mut self, elapsed_ms: u64) -> Vec<GameEvent> {
        let until = self.scheduler.now_ms() + elapsed_ms;
        let mut events = Vec::new();

        while let Some(tick) = self.scheduler.pop_due(until) {
            events.extend(self.dispatch(tick));
            if tick == DriverEvent::SpawnTick && self.state.is_running() {
                let delay = self.state.next_spawn_interval_ms();
                self.scheduler.set_next_spawn(delay);
            }
        }
        self.scheduler.advance_to(until);

        self.render.present(&self.state.snapshot());
        events
    }

    fn dispatch(&mut self, event: DriverEvent) -> Vec<GameEvent> {
        let events = handle_event(&mut self.state, &event);
        for ev in &events {
            match ev {
                GameEvent::Started { .. } => {
                    let first_spawn = self.state.next_spawn_interval_ms();
                    self.scheduler.rebase(first_spawn);
                    self.audio.session_started();
                }
                GameEvent::Ended(_) => {
                    self.scheduler.halt();
                    self.audio.session_stopped();
                }
                _ => {}
            }
        }
        events
    }
}
