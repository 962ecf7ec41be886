use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Bytes per pixel in the RGBA8 framebuffer
pub const COLOR_CHANNELS: usize = 4;

/// Size in bytes of a `width` x `height` framebuffer, if it fits in memory
pub fn buffer_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(COLOR_CHANNELS)
}

/// Render settings, optionally read from a toml file. Missing keys fall back to the defaults.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub width: u32,
    pub height: u32,
    /// Vertical field of view in degrees
    pub fov: f32,
    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            fov: 60.0,
            output: PathBuf::from("out.png"),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {:?}", path))?;

        Self::parse(&text).with_context(|| format!("Invalid config: {:?}", path))
    }

    pub fn parse(text: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(text)?;

        if config.width == 0 || config.height == 0 {
            bail!("image size must be non-zero, got {}x{}", config.width, config.height);
        }
        if buffer_len(config.width, config.height).is_none() {
            bail!("image size {}x{} is too large", config.width, config.height);
        }
        if !(config.fov > 0.0 && config.fov < 180.0) {
            bail!("fov must be between 0 and 180 degrees, got {}", config.fov);
        }

        Ok(config)
    }
}
