//! Pathogen and pickup spawning
//!
//! Spawn positions are uniform over the play field shrunk by the spawn inset
//! and the sprite's half-extent, so a sprite never renders outside the field.

use glam::Vec2;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::entity::{Entity, EntityId, EntityKind, Extents};
use crate::consts::*;

/// How long to wait between spawn ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum SpawnPolicy {
    /// Constant interval
    Fixed { interval_ms: u32 },
    /// Re-rolled after every spawn, inclusive range
    Randomized { min_ms: u32, max_ms: u32 },
}

impl Default for SpawnPolicy {
    fn default() -> Self {
        SpawnPolicy::Randomized {
            min_ms: RANDOM_SPAWN_MIN_MS,
            max_ms: RANDOM_SPAWN_MAX_MS,
        }
    }
}

impl SpawnPolicy {
    /// Delay until the next spawn tick
    pub fn next_interval_ms<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        match *self {
            SpawnPolicy::Fixed { interval_ms } => interval_ms,
            SpawnPolicy::Randomized { min_ms, max_ms } => {
                if min_ms >= max_ms {
                    min_ms
                } else {
                    rng.random_range(min_ms..=max_ms)
                }
            }
        }
    }
}

/// Spawns entities at random positions inside the play field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spawner {
    pub policy: SpawnPolicy,
    /// Kinds picked uniformly at random
    pub kinds: Vec<EntityKind>,
    /// Extra margin kept clear inside the play field
    pub inset: f32,
    /// Maximum concurrently active spawned entities (0 disables spawning)
    pub max_active: usize,
}

impl Default for Spawner {
    fn default() -> Self {
        Self {
            policy: SpawnPolicy::default(),
            kinds: EntityKind::SPAWNABLE.to_vec(),
            inset: SPAWN_INSET,
            max_active: DEFAULT_MAX_ACTIVE,
        }
    }
}

impl Spawner {
    /// Whether another entity may join a pool with `active` already alive
    pub fn has_room(&self, active: usize) -> bool {
        active < self.max_active
    }

    /// Area in which a sprite of the given half-extent may be centred
    pub fn spawn_area(&self, field: &Aabb, half: Vec2) -> Aabb {
        field.shrink(Vec2::splat(self.inset) + half)
    }

    /// Pick the next kind. `None` when no kinds are enabled.
    pub fn pick_kind<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<EntityKind> {
        self.kinds.choose(rng).copied()
    }

    /// Place an entity of `kind` at a random point of its spawn area
    pub fn place<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        id: EntityId,
        kind: EntityKind,
        field: &Aabb,
        extents: &Extents,
    ) -> Entity {
        let half = extents.get(kind);
        let area = self.spawn_area(field, half);
        let center = area.center();

        let mut axis = |lo: f32, hi: f32, mid: f32| {
            if lo < hi && (hi - lo).is_finite() {
                rng.random_range(lo..=hi)
            } else {
                mid
            }
        };
        let pos = Vec2::new(
            axis(area.min.x, area.max.x, center.x),
            axis(area.min.y, area.max.y, center.y),
        );

        Entity::with_half_extent(id, kind, pos, half)
    }

    /// Create one entity. Returns `None` when no kinds are enabled.
    pub fn spawn_one<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        id: EntityId,
        field: &Aabb,
        extents: &Extents,
    ) -> Option<Entity> {
        let kind = self.pick_kind(rng)?;
        Some(self.place(rng, id, kind, field, extents))
    }

    pub fn next_interval_ms<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        self.policy.next_interval_ms(rng)
    }
}
