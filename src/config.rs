use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::animation::{AnimationBuilder, DEFAULT_FRAME_DELAY};

/// Default limit before the texture cache starts to complain
pub const DEFAULT_MAX_TEXTURES: usize = 4096;

/// Frames settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Asset directory, relative to the base path
    pub asset_root: PathBuf,
    /// Delay in seconds used when an animation doesn't set one
    pub default_delay: f32,
    pub max_textures: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            asset_root: PathBuf::from("assets"),
            default_delay: DEFAULT_FRAME_DELAY,
            max_textures: DEFAULT_MAX_TEXTURES,
        }
    }
}

impl Config {
    /// Start an animation using the configured default delay
    pub fn animation(&self, name: impl Into<String>) -> AnimationBuilder {
        AnimationBuilder::new(name).default_delay(self.default_delay)
    }
}
