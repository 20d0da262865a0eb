//! Game state and round bookkeeping
//!
//! Everything a round needs lives in one owned `GameState`. Score and clock
//! only change while the session is Running; entities are cleared when a new
//! round begins, not when one ends.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::clock::{GameClock, TimerEvent};
use super::collision::{CollisionReport, CollisionRules, resolve_collisions};
use super::entity::{Entity, EntityId, EntityKind, Extents};
use super::layout::Layout;
use super::movement::{self, InputState};
use super::session::{EndReason, GamePhase, Session};
use super::spawn::Spawner;
use crate::consts::*;

/// Player entity id; spawned entities start at 1
pub const PLAYER_ID: EntityId = 0;

/// Tunables for the simulation
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub round_seconds: u32,
    pub player_speed: f32,
    pub collision: CollisionRules,
    pub spawner: Spawner,
    pub extents: Extents,
    pub layout: Layout,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            round_seconds: ROUND_SECONDS,
            player_speed: PLAYER_SPEED,
            collision: CollisionRules::default(),
            spawner: Spawner::default(),
            extents: Extents::default(),
            layout: Layout::default(),
        }
    }
}

/// Per-round counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundStats {
    pub spawned: u32,
    pub spawns_skipped: u32,
    pub pathogens_collected: u32,
    pub pickups_collected: u32,
}

/// End-of-round summary ("Time's up! Your score: N")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub score: u32,
    pub pathogens_collected: u32,
    pub pickups_collected: u32,
    pub remaining: u32,
    pub reason: EndReason,
}

/// One sprite as the renderer sees it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteView {
    pub id: EntityId,
    pub kind: EntityKind,
    pub pos: Vec2,
    pub half: Vec2,
}

impl From<&Entity> for SpriteView {
    fn from(e: &Entity) -> Self {
        Self {
            id: e.id,
            kind: e.kind,
            pos: e.pos,
            half: e.half,
        }
    }
}

/// Read-only view of the state for rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub player: SpriteView,
    /// Sorted by id
    pub entities: Vec<SpriteView>,
    pub score: u32,
    pub remaining: u32,
    pub play_field: Aabb,
    pub last_end: Option<EndReason>,
}

/// Outcome of a spawn tick
#[derive(Debug, Clone, PartialEq)]
pub enum SpawnOutcome {
    Spawned(Entity),
    /// Cap reached or no kinds enabled
    Skipped,
    /// Not running
    Inactive,
}

/// Complete game state (deterministic for a given seed and event sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed for reproducibility
    pub seed: u64,
    pub config: SimConfig,
    rng: Pcg32,
    session: Session,
    /// Player-controlled T cell
    player: Entity,
    /// Active pathogens and pickups
    entities: Vec<Entity>,
    /// Held arrow keys
    input: InputState,
    score: u32,
    clock: GameClock,
    stats: RoundStats,
    layout: Layout,
    /// Next entity ID
    next_id: EntityId,
}

impl GameState {
    /// Create an idle game with the given seed
    pub fn new(config: SimConfig, seed: u64) -> Self {
        let layout = config.layout;
        let player = Entity::new(
            PLAYER_ID,
            EntityKind::Player,
            layout.play_field().center(),
            &config.extents,
        );
        let clock = GameClock::new(config.round_seconds);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            session: Session::default(),
            player,
            entities: Vec::new(),
            input: InputState::default(),
            score: 0,
            clock,
            stats: RoundStats::default(),
            layout,
            next_id: PLAYER_ID + 1,
            config,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn phase(&self) -> GamePhase {
        self.session.phase()
    }

    pub fn is_running(&self) -> bool {
        self.session.is_running()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn remaining(&self) -> u32 {
        self.clock.remaining()
    }

    pub fn player(&self) -> &Entity {
        &self.player
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    pub fn stats(&self) -> RoundStats {
        self.stats
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn play_field(&self) -> Aabb {
        self.layout.play_field()
    }

    /// Reset everything and enter Running. Returns the previous phase.
    pub fn start_round(&mut self) -> GamePhase {
        self.entities.clear();
        self.score = 0;
        self.clock.reset();
        self.stats = RoundStats::default();
        self.input.clear();
        self.player.pos = self.play_field().center();
        self.session.begin()
    }

    /// End the running round. Returns `None` outside Running.
    pub fn end_round(&mut self, reason: EndReason) -> Option<SessionSummary> {
        if self.session.finish(reason) {
            Some(self.summary(reason))
        } else {
            None
        }
    }

    /// Summary of the current (or just-ended) round
    pub fn summary(&self, reason: EndReason) -> SessionSummary {
        SessionSummary {
            score: self.score,
            pathogens_collected: self.stats.pathogens_collected,
            pickups_collected: self.stats.pickups_collected,
            remaining: self.clock.remaining(),
            reason,
        }
    }

    /// Apply held input to the player
    pub fn move_player(&mut self) {
        if !self.is_running() {
            return;
        }
        self.player.pos = movement::step(
            &self.input,
            self.player.pos,
            &self.layout.play_field(),
            self.player.half,
            self.config.player_speed,
        );
    }

    /// Remove and score whatever the player overlaps
    pub fn collide(&mut self) -> CollisionReport {
        if !self.is_running() {
            return CollisionReport::default();
        }
        let report = resolve_collisions(&self.player, &mut self.entities, &self.config.collision);
        self.score = self.score.saturating_add(report.score_delta);
        for removal in &report.removed {
            if removal.kind.is_pathogen() {
                self.stats.pathogens_collected += 1;
            } else {
                self.stats.pickups_collected += 1;
            }
        }
        report
    }

    /// Entities sharing a cap pool with `kind`. Decorative pickups can never
    /// be cleared, so they are counted apart from what the player can collect.
    pub fn active_in_pool(&self, kind: EntityKind) -> usize {
        let collectible = |k: EntityKind| self.config.collision.reward_for(k).is_some();
        let pool = collectible(kind);
        self.entities
            .iter()
            .filter(|e| collectible(e.kind) == pool)
            .count()
    }

    /// Try to add one entity
    pub fn spawn(&mut self) -> SpawnOutcome {
        if !self.is_running() {
            return SpawnOutcome::Inactive;
        }
        let Some(kind) = self.config.spawner.pick_kind(&mut self.rng) else {
            self.stats.spawns_skipped += 1;
            return SpawnOutcome::Skipped;
        };
        if !self.config.spawner.has_room(self.active_in_pool(kind)) {
            self.stats.spawns_skipped += 1;
            return SpawnOutcome::Skipped;
        }
        let id = self.next_entity_id();
        let field = self.play_field();
        let entity = self
            .config
            .spawner
            .place(&mut self.rng, id, kind, &field, &self.config.extents);
        self.stats.spawned += 1;
        self.entities.push(entity.clone());
        SpawnOutcome::Spawned(entity)
    }

    /// Delay until the next spawn tick
    pub fn next_spawn_interval_ms(&mut self) -> u32 {
        self.config.spawner.next_interval_ms(&mut self.rng)
    }

    /// Advance the countdown. `None` outside Running.
    pub fn clock_tick(&mut self) -> Option<TimerEvent> {
        if !self.is_running() {
            return None;
        }
        Some(self.clock.tick())
    }

    /// Recompute the play field for a new window size and pull the player
    /// and entities back inside it. Returns false if the new size leaves no
    /// playable area.
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        let layout = self.layout.with_window(width, height);
        if !layout.is_playable() {
            return false;
        }
        self.layout = layout;
        let field = layout.play_field();
        self.player.pos = field.shrink(self.player.half).clamp_point(self.player.pos);
        for entity in &mut self.entities {
            entity.pos = field.shrink(entity.half).clamp_point(entity.pos);
        }
        true
    }

    pub fn snapshot(&self) -> Snapshot {
        let mut entities: Vec<SpriteView> = self.entities.iter().map(SpriteView::from).collect();
        entities.sort_by_key(|s| s.id);
        Snapshot {
            phase: self.phase(),
            player: SpriteView::from(&self.player),
            entities,
            score: self.score,
            remaining: self.clock.remaining(),
            play_field: self.play_field(),
            last_end: self.session.last_end(),
        }
    }

    /// Place an entity directly (scripted scenarios and tests).
    /// Returns its id, or `None` outside Running.
    pub fn insert_entity(&mut self, kind: EntityKind, pos: Vec2) -> Option<EntityId> {
        if !self.is_running() || kind == EntityKind::Player {
            return None;
        }
        let id = self.next_entity_id();
        self.entities
            .push(Entity::new(id, kind, pos, &self.config.extents));
        Some(id)
    }

    /// Teleport the player, clamped to the play field
    pub fn place_player(&mut self, pos: Vec2) {
        self.player.pos = self.play_field().shrink(self.player.half).clamp_point(pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::PickupPolicy;

    #[test]
    fn test_new_is_idle() {
        let state = GameState::new(SimConfig::default(), 1);
        assert_eq!(state.phase(), GamePhase::Idle);
        assert_eq!(state.score(), 0);
        assert_eq!(state.remaining(), 60);
        assert_eq!(state.player().pos, Vec2::new(400.0, 305.0));
        assert!(state.entities().is_empty());
    }

    #[test]
    fn test_ticks_ignored_while_idle() {
        let mut state = GameState::new(SimConfig::default(), 1);
        assert_eq!(state.spawn(), SpawnOutcome::Inactive);
        assert!(state.clock_tick().is_none());
        assert!(state.collide().is_empty());
        assert_eq!(state.remaining(), 60);
    }

    #[test]
    fn test_spawn_respects_cap() {
        let mut config = SimConfig::default();
        config.spawner.max_active = 2;
        config.spawner.kinds = EntityKind::PATHOGENS.to_vec();
        let mut state = GameState::new(config, 5);
        state.start_round();

        assert!(matches!(state.spawn(), SpawnOutcome::Spawned(_)));
        assert!(matches!(state.spawn(), SpawnOutcome::Spawned(_)));
        assert_eq!(state.spawn(), SpawnOutcome::Skipped);
        assert_eq!(state.entities().len(), 2);
        assert_eq!(state.stats().spawns_skipped, 1);
    }

    #[test]
    fn test_decorative_pickups_do_not_block_pathogens() {
        let mut config = SimConfig::default();
        config.spawner.max_active = 3;
        let mut state = GameState::new(config, 11);
        state.start_round();
        for x in [200.0, 400.0, 600.0] {
            state.insert_entity(EntityKind::WhiteBloodCell, Vec2::new(x, 200.0));
        }
        assert_eq!(state.active_in_pool(EntityKind::WhiteBloodCell), 3);
        assert_eq!(state.active_in_pool(EntityKind::Virus), 0);

        let mut pathogens = 0;
        for _ in 0..60 {
            match state.spawn() {
                SpawnOutcome::Spawned(e) => {
                    assert!(e.kind.is_pathogen(), "pickup pool is full");
                    pathogens += 1;
                }
                SpawnOutcome::Skipped => {}
                SpawnOutcome::Inactive => panic!("round is running"),
            }
        }
        assert_eq!(pathogens, 3);
        assert_eq!(state.active_in_pool(EntityKind::WhiteBloodCell), 3);
        assert_eq!(state.entities().len(), 6);
    }

    #[test]
    fn test_collectible_pickups_share_the_pathogen_pool() {
        let mut config = SimConfig::default();
        config.spawner.max_active = 2;
        config.collision.pickups = PickupPolicy::Collect { reward: 5 };
        let mut state = GameState::new(config, 11);
        state.start_round();
        state.insert_entity(EntityKind::WhiteBloodCell, Vec2::new(200.0, 200.0));
        state.insert_entity(EntityKind::Bacterium, Vec2::new(600.0, 200.0));

        for _ in 0..20 {
            assert_eq!(state.spawn(), SpawnOutcome::Skipped);
        }
        assert_eq!(state.active_in_pool(EntityKind::Virus), 2);
    }

    #[test]
    fn test_non_finite_resize_ignored() {
        let mut state = GameState::new(SimConfig::default(), 4);
        state.start_round();
        let field = state.play_field();

        assert!(!state.resize(f32::INFINITY, 800.0));
        assert!(!state.resize(1200.0, f32::NAN));
        assert!(!state.resize(f32::MAX, f32::MAX));
        assert_eq!(state.play_field(), field);
        assert!(matches!(state.spawn(), SpawnOutcome::Spawned(_)));
    }

    #[test]
    fn test_end_keeps_state_and_start_clears() {
        let mut state = GameState::new(SimConfig::default(), 9);
        state.start_round();
        state.place_player(Vec2::new(400.0, 300.0));
        state.insert_entity(EntityKind::Virus, Vec2::new(405.0, 305.0));
        state.insert_entity(EntityKind::Bacterium, Vec2::new(650.0, 200.0));
        assert_eq!(state.collide().score_delta, 10);

        let summary = state.end_round(EndReason::Quit).expect("was running");
        assert_eq!(summary.score, 10);
        assert_eq!(summary.pathogens_collected, 1);
        assert_eq!(state.entities().len(), 1);
        assert_eq!(state.score(), 10);
        assert!(state.end_round(EndReason::TimeUp).is_none());

        // Inserting after the round ended is refused
        assert!(state.insert_entity(EntityKind::Virus, Vec2::new(300.0, 300.0)).is_none());

        state.start_round();
        assert!(state.entities().is_empty());
        assert_eq!(state.score(), 0);
        assert_eq!(state.remaining(), 60);
        assert_eq!(state.stats(), RoundStats::default());
    }

    #[test]
    fn test_resize_reclamps() {
        let mut state = GameState::new(SimConfig::default(), 2);
        state.start_round();
        state.place_player(Vec2::new(700.0, 440.0));
        state.insert_entity(EntityKind::Bacterium, Vec2::new(720.0, 400.0));

        assert!(state.resize(600.0, 500.0));
        let field = state.play_field();
        assert_eq!(field.max, Vec2::new(550.0, 360.0));
        assert_eq!(state.player().pos, Vec2::new(535.0, 345.0));
        assert_eq!(state.entities()[0].pos, Vec2::new(540.0, 350.0));

        assert!(!state.resize(0.0, 0.0));
        assert_eq!(state.play_field(), field);
    }

    #[test]
    fn test_snapshot_sorted() {
        let mut state = GameState::new(SimConfig::default(), 3);
        state.start_round();
        for _ in 0..5 {
            state.spawn();
        }
        state.entities.reverse();
        let snap = state.snapshot();
        let ids: Vec<_> = snap.entities.iter().map(|s| s.id).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
        assert_eq!(snap.phase, GamePhase::Running);
    }

    #[test]
    fn test_determinism() {
        let mut a = GameState::new(SimConfig::default(), 99999);
        let mut b = GameState::new(SimConfig::default(), 99999);
        a.start_round();
        b.start_round();
        for _ in 0..10 {
            a.spawn();
            b.spawn();
            assert_eq!(a.next_spawn_interval_ms(), b.next_spawn_interval_ms());
        }
        assert_eq!(a.entities(), b.entities());
    }
}
