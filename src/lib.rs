//! Immune Rush - a one-minute immune-system arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawning, movement, collisions, session)
//! - `platform`: Render/tick seams and the headless driver
//! - `settings`: Data-driven configuration (JSON)
//! - `assets`: Asset manifest checks and sprite-size fallbacks
//! - `audio`: Audio collaborator (background music start/stop)

pub mod assets;
pub mod audio;
pub mod platform;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Length of one round in seconds
    pub const ROUND_SECONDS: u32 = 60;
    /// Score awarded per pathogen cleared
    pub const PATHOGEN_REWARD: u32 = 10;

    /// Movement/collision tick period (20 Hz)
    pub const MOVEMENT_TICK_MS: u32 = 50;
    /// Countdown clock period
    pub const CLOCK_TICK_MS: u32 = 1000;
    /// Player displacement per movement tick, per held direction
    pub const PLAYER_SPEED: f32 = 10.0;

    /// Spawn interval for the fixed policy
    pub const FIXED_SPAWN_MS: u32 = 2000;
    /// Inclusive bounds for the randomized spawn policy
    pub const RANDOM_SPAWN_MIN_MS: u32 = 300;
    pub const RANDOM_SPAWN_MAX_MS: u32 = 700;
    /// Extra inner margin between the play-field edge and spawn positions
    pub const SPAWN_INSET: f32 = 50.0;
    /// Default cap on concurrently active spawned entities
    pub const DEFAULT_MAX_ACTIVE: usize = 32;

    /// Window layout defaults
    pub const WINDOW_WIDTH: f32 = 800.0;
    pub const WINDOW_HEIGHT: f32 = 600.0;
    pub const PADDING: f32 = 50.0;
    pub const HEADER_HEIGHT: f32 = 100.0;
    pub const MARGIN: f32 = 30.0;
    pub const FOOTER_HEIGHT: f32 = 60.0;
    /// Largest accepted window width or height
    pub const MAX_WINDOW_EXTENT: f32 = 16384.0;

    /// Sprite half-extents (sprites are 30, 20, 20 and 25 px square)
    pub const PLAYER_HALF_EXTENT: f32 = 15.0;
    pub const BACTERIUM_HALF_EXTENT: f32 = 10.0;
    pub const VIRUS_HALF_EXTENT: f32 = 10.0;
    pub const WHITE_BLOOD_CELL_HALF_EXTENT: f32 = 12.5;
    /// Used when a sprite's size could not be determined
    pub const FALLBACK_HALF_EXTENT: f32 = 15.0;
}

/// Format remaining seconds as `m:ss` for the HUD
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
