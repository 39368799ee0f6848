//! Lively configuration file handling

use anyhow::{Context, Result};
use lively_core::ContextConfig;
use lively_motion::{MotionType, TriggerType};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File name looked up in the working directory
pub const CONFIG_FILE: &str = "lively.toml";

/// Top-level Lively configuration (lively.toml)
#[derive(Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct LivelyConfig {
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

/// Animation defaults
#[derive(Debug, PartialEq, Deserialize, Serialize)]
pub struct AnimationConfig {
    /// Animations globally enabled
    #[serde(default = "default_true")]
    pub animated: bool,
    /// Force the reduced-motion preference instead of asking the OS
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reduced_motion: Option<bool>,
    /// Motion used when neither the command line nor the icon picks one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motion: Option<MotionType>,
    #[serde(default)]
    pub trigger: TriggerType,
}

fn default_true() -> bool {
    true
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            animated: true,
            reduced_motion: None,
            motion: None,
            trigger: TriggerType::default(),
        }
    }
}

impl AnimationConfig {
    /// Settings for the animation context
    pub fn context(&self) -> ContextConfig {
        ContextConfig {
            animated: self.animated,
            reduced_motion: self.reduced_motion,
        }
    }
}

/// Rendering defaults
#[derive(Debug, PartialEq, Deserialize, Serialize)]
pub struct RenderConfig {
    #[serde(default = "default_size")]
    pub size: f32,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f32,
}

fn default_size() -> f32 {
    lively_icons::DEFAULT_SIZE
}

fn default_stroke_width() -> f32 {
    lively_icons::STROKE_WIDTH
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            stroke_width: default_stroke_width(),
        }
    }
}

impl LivelyConfig {
    /// Load from an explicit path, which must exist
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Load lively.toml from a directory, or defaults when it has none
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_FILE);
        if !config_path.exists() {
            tracing::debug!("No {} in {}, using defaults", CONFIG_FILE, dir.display());
            return Ok(Self::default());
        }
        Self::load(&config_path)
    }

    /// Parse TOML text
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = LivelyConfig::parse("").unwrap();
        assert_eq!(config, LivelyConfig::default());
        assert!(config.animation.animated);
        assert_eq!(config.render.size, 24.0);
    }

    #[test]
    fn test_partial_tables() {
        let config = LivelyConfig::parse(
            r#"
            [animation]
            animated = false
            reduced_motion = true
            motion = "bounce"
            trigger = "in-view"

            [render]
            size = 48
            "#,
        )
        .unwrap();

        assert_eq!(
            config.animation.context(),
            ContextConfig {
                animated: false,
                reduced_motion: Some(true),
            }
        );
        assert_eq!(config.animation.motion, Some(MotionType::Bounce));
        assert_eq!(config.animation.trigger, TriggerType::InView);
        assert_eq!(config.render.size, 48.0);
        assert_eq!(config.render.stroke_width, 2.0);
    }

    #[test]
    fn test_unknown_motion_names_fall_back() {
        let config = LivelyConfig::parse("[animation]\nmotion = \"wobble\"\n").unwrap();
        assert_eq!(config.animation.motion, Some(MotionType::Scale));
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = LivelyConfig::default();
        let text = config.to_toml().unwrap();
        assert_eq!(LivelyConfig::parse(&text).unwrap(), config);
    }
}
