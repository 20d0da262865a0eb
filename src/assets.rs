//! Asset manifest and non-fatal asset checks
//!
//! Images and music are loaded by the platform layer. This module only knows
//! where they should be, reports which ones are missing, and derives sprite
//! bounding boxes with a fallback for sprites that could not be loaded.

use std::fmt;
use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::FALLBACK_HALF_EXTENT;
use crate::sim::{EntityKind, Extents};

/// Identifies one asset in the manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetId {
    Background,
    Sprite(EntityKind),
    Music,
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetId::Background => write!(f, "background image"),
            AssetId::Sprite(kind) => write!(f, "{} sprite", kind.label()),
            AssetId::Music => write!(f, "background music"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssetError {
    #[error("{asset} not found at {}", .path.display())]
    Missing { asset: AssetId, path: PathBuf },
    #[error("{asset} has unusable size {width}x{height}")]
    BadSize { asset: AssetId, width: u32, height: u32 },
}

impl AssetError {
    pub fn asset(&self) -> AssetId {
        match self {
            AssetError::Missing { asset, .. } | AssetError::BadSize { asset, .. } => *asset,
        }
    }
}

/// Where each asset lives, relative to `root`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetManifest {
    pub root: PathBuf,
    pub background: PathBuf,
    pub player: PathBuf,
    pub bacterium: PathBuf,
    pub virus: PathBuf,
    pub white_blood_cell: PathBuf,
    pub music: PathBuf,
}

impl Default for AssetManifest {
    fn default() -> Self {
        Self {
            root: PathBuf::from("assets"),
            background: PathBuf::from("images/background.png"),
            player: PathBuf::from("images/tcell.png"),
            bacterium: PathBuf::from("images/bacteria.png"),
            virus: PathBuf::from("images/virus.png"),
            white_blood_cell: PathBuf::from("images/wbcell.png"),
            music: PathBuf::from("sounds/komiku.mp3"),
        }
    }
}

impl AssetManifest {
    /// Manifest with the default file names under another root
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }

    pub fn path_of(&self, asset: AssetId) -> PathBuf {
        let rel = match asset {
            AssetId::Background => &self.background,
            AssetId::Sprite(EntityKind::Player) => &self.player,
            AssetId::Sprite(EntityKind::Bacterium) => &self.bacterium,
            AssetId::Sprite(EntityKind::Virus) => &self.virus,
            AssetId::Sprite(EntityKind::WhiteBloodCell) => &self.white_blood_cell,
            AssetId::Music => &self.music,
        };
        self.root.join(rel)
    }

    pub fn all(&self) -> Vec<AssetId> {
        let mut ids = vec![AssetId::Background];
        ids.extend(EntityKind::ALL.iter().map(|&k| AssetId::Sprite(k)));
        ids.push(AssetId::Music);
        ids
    }

    /// Check every asset exists. Failures are logged, never fatal.
    pub fn verify(&self) -> AssetReport {
        self.verify_with(|path| path.is_file())
    }

    /// `verify` with a custom existence probe
    pub fn verify_with(&self, exists: impl Fn(&Path) -> bool) -> AssetReport {
        let mut report = AssetReport::default();
        for asset in self.all() {
            let path = self.path_of(asset);
            if !exists(&path) {
                let err = AssetError::Missing { asset, path };
                log::warn!("{err}; continuing without it");
                report.problems.push(err);
            }
        }
        report
    }
}

/// Sprite pixel sizes (sprites are scaled to these on load)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteSizes {
    pub player: [u32; 2],
    pub bacterium: [u32; 2],
    pub virus: [u32; 2],
    pub white_blood_cell: [u32; 2],
}

impl Default for SpriteSizes {
    fn default() -> Self {
        Self {
            player: [30, 30],
            bacterium: [20, 20],
            virus: [20, 20],
            white_blood_cell: [25, 25],
        }
    }
}

impl SpriteSizes {
    pub fn get(&self, kind: EntityKind) -> [u32; 2] {
        match kind {
            EntityKind::Player => self.player,
            EntityKind::Bacterium => self.bacterium,
            EntityKind::Virus => self.virus,
            EntityKind::WhiteBloodCell => self.white_blood_cell,
        }
    }
}

/// Problems found while checking assets
#[derive(Debug, Default, PartialEq, Eq)]
pub struct AssetReport {
    pub problems: Vec<AssetError>,
}

impl AssetReport {
    pub fn is_ok(&self) -> bool {
        self.problems.is_empty()
    }

    pub fn has_problem(&self, asset: AssetId) -> bool {
        self.problems.iter().any(|p| p.asset() == asset)
    }

    /// Half-extents for every kind: half the sprite size, or
    /// `FALLBACK_HALF_EXTENT` when the sprite is missing or has a zero size.
    pub fn sprite_extents(&mut self, sizes: &SpriteSizes) -> Extents {
        let mut extents = Extents::default();
        for kind in EntityKind::ALL {
            let asset = AssetId::Sprite(kind);
            let [width, height] = sizes.get(kind);
            let half = if self.has_problem(asset) {
                Vec2::splat(FALLBACK_HALF_EXTENT)
            } else if width == 0 || height == 0 {
                let err = AssetError::BadSize { asset, width, height };
                log::warn!("{err}; using fallback bounding box");
                self.problems.push(err);
                Vec2::splat(FALLBACK_HALF_EXTENT)
            } else {
                Vec2::new(width as f32, height as f32) * 0.5
            };
            extents.set(kind, half);
        }
        extents
    }
}
