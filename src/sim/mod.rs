//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Event-driven only (the driver owns the clocks)
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod aabb;
pub mod clock;
pub mod collision;
pub mod entity;
pub mod layout;
pub mod movement;
pub mod session;
pub mod spawn;
pub mod state;
pub mod tick;

pub use aabb::Aabb;
pub use clock::{GameClock, TimerEvent};
pub use collision::{CollisionReport, CollisionRules, PickupPolicy, Removal, resolve_collisions};
pub use entity::{Entity, EntityId, EntityKind, Extents};
pub use layout::Layout;
pub use movement::{Direction, InputState, step};
pub use session::{EndReason, GamePhase, Session};
pub use spawn::{SpawnPolicy, Spawner};
pub use state::{
    GameState, PLAYER_ID, RoundStats, SessionSummary, SimConfig, Snapshot, SpawnOutcome, SpriteView,
};
pub use tick::{DriverEvent, GameEvent, handle_event};
