//! Game settings
//!
//! Loaded from a JSON file; every field is optional and falls back to the
//! defaults below.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::assets::{AssetManifest, SpriteSizes};
use crate::consts::*;
use crate::sim::{CollisionRules, EntityKind, Extents, Layout, PickupPolicy, SimConfig, SpawnPolicy, Spawner};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Round ===
    /// Countdown length in seconds
    pub round_seconds: u32,
    /// Score per pathogen cleared
    pub pathogen_reward: u32,
    /// What white blood cells do on contact
    pub pickups: PickupPolicy,

    // === Timing ===
    pub movement_tick_ms: u32,
    pub clock_tick_ms: u32,
    /// Player displacement per movement tick
    pub player_speed: f32,

    // === Spawning ===
    pub spawn: SpawnPolicy,
    /// Margin kept clear inside the play field
    pub spawn_inset: f32,
    /// Cap on concurrently active pathogens/pickups
    pub max_active: usize,
    /// Spawn white blood cells alongside pathogens
    pub include_pickups: bool,

    // === Presentation ===
    pub layout: Layout,
    pub sprite_sizes: SpriteSizes,
    pub assets: AssetManifest,

    /// Fixed RNG seed (random per run when absent)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            round_seconds: ROUND_SECONDS,
            pathogen_reward: PATHOGEN_REWARD,
            pickups: PickupPolicy::Decorative,

            movement_tick_ms: MOVEMENT_TICK_MS,
            clock_tick_ms: CLOCK_TICK_MS,
            player_speed: PLAYER_SPEED,

            spawn: SpawnPolicy::default(),
            spawn_inset: SPAWN_INSET,
            max_active: DEFAULT_MAX_ACTIVE,
            include_pickups: true,

            layout: Layout::default(),
            sprite_sizes: SpriteSizes::default(),
            assets: AssetManifest::default(),

            seed: None,
        }
    }
}

impl Settings {
    /// Settings matching the simpler variant: fixed 2 s spawns, pathogens only
    pub fn classic() -> Self {
        Self {
            spawn: SpawnPolicy::Fixed {
                interval_ms: FIXED_SPAWN_MS,
            },
            include_pickups: false,
            ..Self::default()
        }
    }

    /// Reject settings the simulation cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.movement_tick_ms == 0 || self.clock_tick_ms == 0 {
            return Err(SettingsError::Invalid("tick periods must be non-zero".into()));
        }
        match self.spawn {
            SpawnPolicy::Fixed { interval_ms: 0 } => {
                return Err(SettingsError::Invalid("spawn interval must be non-zero".into()));
            }
            SpawnPolicy::Randomized { min_ms, max_ms } if min_ms == 0 || min_ms > max_ms => {
                return Err(SettingsError::Invalid(format!(
                    "spawn interval range {min_ms}..={max_ms} is empty or starts at zero"
                )));
            }
            _ => {}
        }
        if !self.player_speed.is_finite() || self.player_speed < 0.0 {
            return Err(SettingsError::Invalid(format!(
                "player speed {} must be a non-negative number",
                self.player_speed
            )));
        }
        if !self.spawn_inset.is_finite() || self.spawn_inset < 0.0 {
            return Err(SettingsError::Invalid("spawn inset must be non-negative".into()));
        }
        if !self.layout.is_playable() {
            return Err(SettingsError::Invalid(format!(
                "a {}x{} window has no usable play field",
                self.layout.width, self.layout.height
            )));
        }
        Ok(())
    }

    /// Kinds the spawner may produce
    pub fn spawn_kinds(&self) -> Vec<EntityKind> {
        if self.include_pickups {
            EntityKind::SPAWNABLE.to_vec()
        } else {
            EntityKind::PATHOGENS.to_vec()
        }
    }

    /// Build the simulation config with the given sprite extents
    pub fn sim_config(&self, extents: Extents) -> SimConfig {
        SimConfig {
            round_seconds: self.round_seconds,
            player_speed: self.player_speed,
            collision: CollisionRules {
                pathogen_reward: self.pathogen_reward,
                pickups: self.pickups,
            },
            spawner: Spawner {
                policy: self.spawn,
                kinds: self.spawn_kinds(),
                inset: self.spawn_inset,
                max_active: self.max_active,
            },
            extents,
            layout: self.layout,
        }
    }

    /// Load and validate settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Settings = serde_json::from_str(&json)?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any problem
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
