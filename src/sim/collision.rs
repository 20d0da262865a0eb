//! Collision detection and scoring
//!
//! The player's box is tested against every active entity with a strict
//! axis-aligned overlap test. Overlapping pathogens are removed and scored;
//! white blood cells follow the configured `PickupPolicy`.

use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityId, EntityKind};
use crate::consts::PATHOGEN_REWARD;

/// What touching a white blood cell does
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum PickupPolicy {
    /// Pickups are scenery: never collected, never scored
    #[default]
    Decorative,
    /// Pickups are removed on contact and award `reward`
    Collect { reward: u32 },
}

/// Scoring rules for one collision pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollisionRules {
    pub pathogen_reward: u32,
    pub pickups: PickupPolicy,
}

impl Default for CollisionRules {
    fn default() -> Self {
        Self {
            pathogen_reward: PATHOGEN_REWARD,
            pickups: PickupPolicy::Decorative,
        }
    }
}

impl CollisionRules {
    /// Reward for colliding with `kind`, or `None` if it is not collectible
    pub fn reward_for(&self, kind: EntityKind) -> Option<u32> {
        match kind {
            EntityKind::Bacterium | EntityKind::Virus => Some(self.pathogen_reward),
            EntityKind::WhiteBloodCell => match self.pickups {
                PickupPolicy::Decorative => None,
                PickupPolicy::Collect { reward } => Some(reward),
            },
            EntityKind::Player => None,
        }
    }
}

/// A single removed entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Removal {
    pub id: EntityId,
    pub kind: EntityKind,
    pub reward: u32,
}

/// Result of a collision pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollisionReport {
    /// Removed entities in their original collection order
    pub removed: Vec<Removal>,
    pub score_delta: u32,
}

impl CollisionReport {
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty()
    }

    pub fn removed_ids(&self) -> Vec<EntityId> {
        self.removed.iter().map(|r| r.id).collect()
    }
}

/// Remove every collectible entity overlapping the player.
///
/// Removed entities are gone from `entities` on return, so a second call
/// without intervening movement removes nothing.
pub fn resolve_collisions(
    player: &Entity,
    entities: &mut Vec<Entity>,
    rules: &CollisionRules,
) -> CollisionReport {
    let player_box = player.bounds();
    let mut report = CollisionReport::default();

    entities.retain(|entity| {
        let Some(reward) = rules.reward_for(entity.kind) else {
            return true;
        };
        if !player_box.overlaps(&entity.bounds()) {
            return true;
        }
        report.removed.push(Removal {
            id: entity.id,
            kind: entity.kind,
            reward,
        });
        report.score_delta = report.score_delta.saturating_add(reward);
        false
    });

    report
}
