//! Subcommand implementations

use anyhow::{anyhow, bail, Context, Result};
use lively_core::{AnimationContext, PreferenceSource, StaticPreference};
use lively_icons::{icons, render_with, IconProps};
use lively_motion::{preset, MotionType, TriggerType};
use lively_platform::SystemPreferences;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::{LivelyConfig, CONFIG_FILE};

/// Motion, trigger and override picked on the command line
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub motion: Option<MotionType>,
    pub trigger: Option<TriggerType>,
    pub animated: Option<bool>,
}

impl Selection {
    /// Parse names leniently, like the hook does
    pub fn new(motion: Option<String>, trigger: Option<String>, animated: Option<bool>) -> Self {
        Self {
            motion: motion.as_deref().map(MotionType::from_name),
            trigger: trigger.as_deref().map(TriggerType::from_name),
            animated,
        }
    }

    fn trigger_or(&self, config: &LivelyConfig) -> TriggerType {
        self.trigger.unwrap_or(config.animation.trigger)
    }

    fn motion_or(&self, config: &LivelyConfig) -> Option<MotionType> {
        self.motion.or(config.animation.motion)
    }
}

/// Output options for `render`
#[derive(Debug, Default)]
pub struct RenderOptions {
    pub size: Option<f32>,
    pub stroke_width: Option<f32>,
    pub label: Option<String>,
    pub class: Option<String>,
    pub json: bool,
    pub out: Option<PathBuf>,
}

/// Context from config, asking the OS only when nothing forces the preference
fn build_context(config: &LivelyConfig, force_reduced_motion: bool) -> AnimationContext {
    let mut settings = config.animation.context();
    if force_reduced_motion {
        settings.reduced_motion = Some(true);
    }

    let system: Arc<dyn PreferenceSource> = match settings.reduced_motion {
        Some(_) => Arc::new(StaticPreference(false)),
        None => Arc::new(SystemPreferences::detect()),
    };
    AnimationContext::from_config(&settings, system)
}

pub fn resolve(config: &LivelyConfig, selection: Selection, reduced_motion: bool) -> Result<()> {
    let ctx = build_context(config, reduced_motion);
    let motion = selection.motion_or(config).unwrap_or_default();
    let trigger = selection.trigger_or(config);

    tracing::debug!(?ctx, %motion, %trigger, "resolving");
    let animation = ctx.use_icon_animation(selection.animated, motion, trigger);
    println!("{}", serde_json::to_string_pretty(&animation)?);
    Ok(())
}

pub fn render(
    config: &LivelyConfig,
    name: &str,
    selection: Selection,
    options: RenderOptions,
) -> Result<()> {
    let icon = lively_icons::find(name).ok_or_else(|| {
        anyhow!(
            "Unknown icon `{}`. Run `lively list` to see available icons.",
            name
        )
    })?;
    let ctx = build_context(config, false);

    let mut props = IconProps::new()
        .size(options.size.unwrap_or(config.render.size))
        .stroke_width(options.stroke_width.unwrap_or(config.render.stroke_width))
        .trigger(selection.trigger_or(config));
    if let Some(motion) = selection.motion_or(config) {
        props = props.motion(motion);
    }
    if let Some(animated) = selection.animated {
        props = props.animated(animated);
    }
    if let Some(label) = options.label {
        props = props.aria_label(label);
    }
    if let Some(class) = options.class {
        props = props.class_name(class);
    }

    let element = render_with(&ctx, icon, &props);
    let output = if options.json {
        serde_json::to_string_pretty(&element)?
    } else {
        element.to_svg()
    };

    match options.out {
        Some(path) => {
            fs::write(&path, output + "\n")
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {} to {}", icon.name, path.display());
        }
        None => println!("{}", output),
    }
    Ok(())
}

pub fn list() -> Result<()> {
    for icon in icons::ALL {
        println!("{:<16} {}", icon.name, icon.default_motion);
    }
    Ok(())
}

pub fn preview(config: &LivelyConfig, motion: Option<String>, frames: usize) -> Result<()> {
    let motion = motion
        .as_deref()
        .map(MotionType::from_name)
        .or(config.animation.motion)
        .unwrap_or_default();
    let preset = preset(motion);

    println!("{} {}", motion, serde_json::to_string(&preset.transition)?);
    println!(
        "{:>8} {:>8} {:>8} {:>8} {:>8} {:>8} {:>10}",
        "progress", "scale", "rotate", "x", "y", "opacity", "pathLength"
    );
    for progress in sample_points(frames) {
        let t = preset.sample(progress);
        println!(
            "{:>8.2} {:>8.3} {:>8.2} {:>8.2} {:>8.2} {:>8.3} {:>10.3}",
            progress, t.scale, t.rotate, t.x, t.y, t.opacity, t.path_length
        );
    }
    Ok(())
}

/// Evenly spaced progress values from 0 to 1, at least both ends
fn sample_points(frames: usize) -> Vec<f32> {
    let frames = frames.max(2);
    (0..frames)
        .map(|i| i as f32 / (frames - 1) as f32)
        .collect()
}

pub fn init(dir: &Path, force: bool) -> Result<()> {
    let path = write_default_config(dir, force)?;
    println!("Created {}", path.display());
    Ok(())
}

fn write_default_config(dir: &Path, force: bool) -> Result<PathBuf> {
    let path = dir.join(CONFIG_FILE);
    if path.exists() && !force {
        bail!("{} already exists. Use --force to overwrite.", path.display());
    }

    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    fs::write(&path, LivelyConfig::default().to_toml()?)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_parses_leniently() {
        let selection = Selection::new(Some("DRAW".into()), Some("in_view".into()), Some(false));
        assert_eq!(selection.motion, Some(MotionType::Draw));
        assert_eq!(selection.trigger, Some(TriggerType::InView));

        let selection = Selection::new(Some("???".into()), Some("click".into()), None);
        assert_eq!(selection.motion, Some(MotionType::Scale));
        assert_eq!(selection.trigger, Some(TriggerType::Hover));
    }

    #[test]
    fn test_selection_falls_back_to_config() {
        let mut config = LivelyConfig::default();
        config.animation.motion = Some(MotionType::Spin);
        config.animation.trigger = TriggerType::Loop;

        let selection = Selection::default();
        assert_eq!(selection.motion_or(&config), Some(MotionType::Spin));
        assert_eq!(selection.trigger_or(&config), TriggerType::Loop);
    }

    #[test]
    fn test_forced_reduced_motion_disables_animation() {
        let ctx = build_context(&LivelyConfig::default(), true);
        assert!(ctx.prefers_reduced_motion());
        let animation = ctx.use_icon_animation(None, MotionType::Scale, TriggerType::Hover);
        assert!(!animation.is_animated);
    }

    #[test]
    fn test_sample_points_cover_both_ends() {
        assert_eq!(sample_points(0), vec![0.0, 1.0]);
        assert_eq!(sample_points(5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = std::env::temp_dir().join(format!("lively-init-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);

        let path = write_default_config(&dir, false).unwrap();
        assert!(LivelyConfig::load(&path).is_ok());
        assert!(write_default_config(&dir, false).is_err());
        assert!(write_default_config(&dir, true).is_ok());

        fs::remove_dir_all(&dir).unwrap();
    }
}
