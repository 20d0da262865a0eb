//! Entity model: the player cell, pathogens and pickups
//!
//! Entities are passive data. Collision geometry is derived from
//! position + per-kind half-extents.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use crate::consts::*;

/// Entity identifier (allocated by `GameState`, never reused)
pub type EntityId = u32;

/// What an entity is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityKind {
    /// The player-controlled T cell (singleton)
    Player,
    Bacterium,
    Virus,
    /// Beneficial white blood cell pickup
    WhiteBloodCell,
}

impl EntityKind {
    pub const ALL: [EntityKind; 4] = [
        Self::Player,
        Self::Bacterium,
        Self::Virus,
        Self::WhiteBloodCell,
    ];

    /// Kinds the spawner may produce
    pub const SPAWNABLE: [EntityKind; 3] = [Self::Bacterium, Self::Virus, Self::WhiteBloodCell];

    /// Pathogen kinds only
    pub const PATHOGENS: [EntityKind; 2] = [Self::Bacterium, Self::Virus];

    pub fn is_pathogen(self) -> bool {
        matches!(self, Self::Bacterium | Self::Virus)
    }

    pub fn is_pickup(self) -> bool {
        self == Self::WhiteBloodCell
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Player => "T cell",
            Self::Bacterium => "bacterium",
            Self::Virus => "virus",
            Self::WhiteBloodCell => "white blood cell",
        }
    }
}

/// Half-extents per entity kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Extents {
    pub player: Vec2,
    pub bacterium: Vec2,
    pub virus: Vec2,
    pub white_blood_cell: Vec2,
}

impl Default for Extents {
    fn default() -> Self {
        Self {
            player: Vec2::splat(PLAYER_HALF_EXTENT),
            bacterium: Vec2::splat(BACTERIUM_HALF_EXTENT),
            virus: Vec2::splat(VIRUS_HALF_EXTENT),
            white_blood_cell: Vec2::splat(WHITE_BLOOD_CELL_HALF_EXTENT),
        }
    }
}

impl Extents {
    /// Same half-extent for every kind
    pub fn uniform(half: f32) -> Self {
        let half = Vec2::splat(half);
        Self {
            player: half,
            bacterium: half,
            virus: half,
            white_blood_cell: half,
        }
    }

    pub fn get(&self, kind: EntityKind) -> Vec2 {
        match kind {
            EntityKind::Player => self.player,
            EntityKind::Bacterium => self.bacterium,
            EntityKind::Virus => self.virus,
            EntityKind::WhiteBloodCell => self.white_blood_cell,
        }
    }

    pub fn set(&mut self, kind: EntityKind, half: Vec2) {
        match kind {
            EntityKind::Player => self.player = half,
            EntityKind::Bacterium => self.bacterium = half,
            EntityKind::Virus => self.virus = half,
            EntityKind::WhiteBloodCell => self.white_blood_cell = half,
        }
    }
}

/// A positioned entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub kind: EntityKind,
    /// Sprite centre
    pub pos: Vec2,
    /// Bounding-box half-extents, fixed for the entity's lifetime
    pub half: Vec2,
}

impl Entity {
    /// Construct with the half-extent configured for `kind`
    pub fn new(id: EntityId, kind: EntityKind, pos: Vec2, extents: &Extents) -> Self {
        Self::with_half_extent(id, kind, pos, extents.get(kind))
    }

    pub fn with_half_extent(id: EntityId, kind: EntityKind, pos: Vec2, half: Vec2) -> Self {
        Self { id, kind, pos, half }
    }

    #[inline]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, self.half)
    }
}
