//! Lively CLI
//!
//! Inspect how icons resolve their animation, render icons to SVG, and preview
//! motion presets from the terminal.

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::LivelyConfig;

/// Animated icon toolkit
#[derive(Parser, Debug)]
#[command(name = "lively")]
#[command(about = "Inspect, render and preview Lively animated icons")]
#[command(version)]
struct Cli {
    /// Config file (defaults to ./lively.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the resolved animation bundles as JSON
    Resolve {
        /// Motion type (scale, rotate, translate, shake, pulse, bounce, draw, spin, none)
        #[arg(short, long)]
        motion: Option<String>,

        /// Trigger (hover, loop, mount, inView)
        #[arg(short, long)]
        trigger: Option<String>,

        /// Explicit animated override
        #[arg(long)]
        animated: Option<bool>,

        /// Pretend the OS asks for reduced motion
        #[arg(long)]
        reduced_motion: bool,
    },

    /// Render an icon to SVG
    Render {
        /// Icon name (see `lively list`)
        icon: String,

        #[arg(short, long)]
        motion: Option<String>,

        #[arg(short, long)]
        trigger: Option<String>,

        #[arg(long)]
        animated: Option<bool>,

        /// Size in pixels
        #[arg(long)]
        size: Option<f32>,

        #[arg(long)]
        stroke_width: Option<f32>,

        /// Accessible label (icon is decorative without one)
        #[arg(long)]
        label: Option<String>,

        /// Extra CSS classes
        #[arg(long)]
        class: Option<String>,

        /// Print the element tree as JSON instead of SVG
        #[arg(long)]
        json: bool,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// List built-in icons
    List,

    /// Sample a motion preset over its activated transition
    Preview {
        #[arg(short, long)]
        motion: Option<String>,

        /// Number of samples, including both ends
        #[arg(short, long, default_value = "5")]
        frames: usize,
    },

    /// Write a default lively.toml
    Init {
        /// Directory to write into
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => LivelyConfig::load(path)?,
        None => LivelyConfig::load_from_dir(&std::env::current_dir()?)?,
    };

    match cli.command {
        Commands::Resolve {
            motion,
            trigger,
            animated,
            reduced_motion,
        } => commands::resolve(
            &config,
            commands::Selection::new(motion, trigger, animated),
            reduced_motion,
        ),
        Commands::Render {
            icon,
            motion,
            trigger,
            animated,
            size,
            stroke_width,
            label,
            class,
            json,
            out,
        } => commands::render(
            &config,
            &icon,
            commands::Selection::new(motion, trigger, animated),
            commands::RenderOptions {
                size,
                stroke_width,
                label,
                class,
                json,
                out,
            },
        ),
        Commands::List => commands::list(),
        Commands::Preview { motion, frames } => commands::preview(&config, motion, frames),
        Commands::Init { path, force } => commands::init(&path, force),
    }
}
