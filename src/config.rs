//! Game configuration
//!
//! Static values loaded once at startup. Every field has a default, so a
//! partial JSON file only overrides what it names.

use std::fs;
use std::path::Path;

use anyhow::Context;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Where each wave's bricks come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum BrickSource {
    /// Bundled figures, picked by level
    #[default]
    Figures,
    /// Full rectangular grid sized to the board
    Auto,
}

/// What happens once the last brick of a wave is destroyed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum WavePolicy {
    /// Bump the level and lay out a fresh set of bricks
    #[default]
    AdvanceLevel,
    /// Bring every brick of the current wave back to life
    ReviveAll,
}

impl WavePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            WavePolicy::AdvanceLevel => "advanceLevel",
            WavePolicy::ReviveAll => "reviveAll",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "advancelevel" | "advance" | "level" => Some(WavePolicy::AdvanceLevel),
            "reviveall" | "revive" => Some(WavePolicy::ReviveAll),
            _ => None,
        }
    }
}

/// Board size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

impl ScreenConfig {
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn center_x(&self) -> f32 {
        self.width / 2.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    pub screen: ScreenConfig,
    /// Lives at the start of a session
    pub lives: u32,
    /// Rows in the automatic grid
    pub auto_nb_brick_lines: u32,
    /// Gap between bricks in the automatic grid
    pub auto_brick_margin: f32,
    /// Velocity applied to the ball on launch
    pub ball_velocity: Vec2,
    pub brick_source: BrickSource,
    pub wave_policy: WavePolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen: ScreenConfig::default(),
            lives: 3,
            auto_nb_brick_lines: 5,
            auto_brick_margin: 20.0,
            ball_velocity: Vec2::new(0.0, -300.0),
            brick_source: BrickSource::Figures,
            wave_policy: WavePolicy::AdvanceLevel,
        }
    }
}

impl GameConfig {
    /// Single endless wave: automatic grid, revived on clear, angled launch
    pub fn classic() -> Self {
        Self {
            ball_velocity: Vec2::new(-75.0, -300.0),
            brick_source: BrickSource::Auto,
            wave_policy: WavePolicy::ReviveAll,
            ..Self::default()
        }
    }

    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Load a config file from disk
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config = Self::from_json_str(&json)
            .with_context(|| format!("parse config {}", path.display()))?;
        log::info!(
            "Loaded config from {} ({} lives, {:?}, {})",
            path.display(),
            config.lives,
            config.brick_source,
            config.wave_policy.as_str()
        );
        Ok(config)
    }
}
