//! System reduced-motion preference

use crate::error::{PlatformError, Result};
use lively_core::PreferenceSource;
use std::process::Command;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Environment variable that overrides the OS preference
pub const REDUCED_MOTION_ENV: &str = "LIVELY_REDUCED_MOTION";

/// Operating systems with a known preference query
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    Linux,
    MacOS,
    Windows,
    Other,
}

impl Platform {
    /// The platform this binary was compiled for
    pub fn current() -> Self {
        if cfg!(target_os = "linux") {
            Platform::Linux
        } else if cfg!(target_os = "macos") {
            Platform::MacOS
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Other
        }
    }
}

/// Query the reduced-motion preference once
///
/// The environment override is consulted first, then the OS.
pub fn query_reduced_motion() -> Result<bool> {
    if let Ok(value) = std::env::var(REDUCED_MOTION_ENV) {
        match parse_env_flag(&value) {
            Some(reduced) => return Ok(reduced),
            None => tracing::warn!(
                "Ignoring {}={:?}: expected a boolean",
                REDUCED_MOTION_ENV,
                value
            ),
        }
    }
    query_platform(Platform::current())
}

fn query_platform(platform: Platform) -> Result<bool> {
    match platform {
        Platform::Linux => run(
            "gsettings",
            &["get", "org.gnome.desktop.interface", "enable-animations"],
        )
        .and_then(|out| parse_gsettings(&out)),
        Platform::MacOS => run(
            "defaults",
            &["read", "com.apple.universalaccess", "reduceMotion"],
        )
        .and_then(|out| parse_macos_defaults(&out)),
        Platform::Windows => run(
            "reg",
            &[
                "query",
                r"HKCU\Control Panel\Desktop\WindowMetrics",
                "/v",
                "MinAnimate",
            ],
        )
        .and_then(|out| parse_windows_registry(&out)),
        Platform::Other => Err(PlatformError::Unsupported(std::env::consts::OS.to_string())),
    }
}

fn run(program: &str, args: &[&str]) -> Result<String> {
    let command = format!("{} {}", program, args.join(" "));
    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|source| PlatformError::QueryFailed {
            command: command.clone(),
            source,
        })?;

    if !output.status.success() {
        return Err(PlatformError::QueryStatus {
            command,
            status: output.status.to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Parse a boolean-ish environment value
pub(crate) fn parse_env_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" | "reduce" => Some(true),
        "0" | "false" | "no" | "off" | "no-preference" => Some(false),
        _ => None,
    }
}

/// GNOME reports whether animations are *enabled*
pub(crate) fn parse_gsettings(output: &str) -> Result<bool> {
    match output.trim() {
        "true" => Ok(false),
        "false" => Ok(true),
        other => Err(PlatformError::Parse(other.to_string())),
    }
}

pub(crate) fn parse_macos_defaults(output: &str) -> Result<bool> {
    match output.trim() {
        "1" => Ok(true),
        "0" => Ok(false),
        other => Err(PlatformError::Parse(other.to_string())),
    }
}

/// `MinAnimate` is `1` when window animations are on
pub(crate) fn parse_windows_registry(output: &str) -> Result<bool> {
    let value = output
        .lines()
        .find(|line| line.trim_start().starts_with("MinAnimate"))
        .and_then(|line| line.split_whitespace().last())
        .ok_or_else(|| PlatformError::Parse(output.trim().to_string()))?;

    match value {
        "0" => Ok(true),
        "1" => Ok(false),
        other => Err(PlatformError::Parse(other.to_string())),
    }
}

/// Live system preference
///
/// Holds the last value read from the OS. [`refresh`](Self::refresh) re-queries;
/// a [`PreferenceWatcher`](crate::PreferenceWatcher) does so periodically.
/// Failed queries are logged and leave the last known value in place, which
/// starts as "no preference".
#[derive(Clone, Debug, Default)]
pub struct SystemPreferences {
    reduced_motion: Arc<AtomicBool>,
}

impl SystemPreferences {
    /// Create with a known starting value, without querying
    pub fn new(reduced_motion: bool) -> Self {
        Self {
            reduced_motion: Arc::new(AtomicBool::new(reduced_motion)),
        }
    }

    /// Query the system once and start from its answer
    ///
    /// The result is a snapshot: later OS changes are only picked up by
    /// [`refresh`](Self::refresh) or a running watcher. Use
    /// [`detect_live`](Self::detect_live) to get both at once.
    pub fn detect() -> Self {
        let prefs = Self::default();
        prefs.refresh();
        prefs
    }

    /// Re-query the system, returning the current value
    pub fn refresh(&self) -> bool {
        match query_reduced_motion() {
            Ok(reduced) => {
                self.set(reduced);
                reduced
            }
            Err(err) => {
                tracing::warn!("Reduced-motion query failed: {}", err);
                self.is_reduced_motion()
            }
        }
    }

    /// Store a value, logging changes
    pub fn set(&self, reduced_motion: bool) {
        let previous = self.reduced_motion.swap(reduced_motion, Ordering::SeqCst);
        if previous != reduced_motion {
            tracing::debug!(
                "SystemPreferences - reduced motion changed from {} to {}",
                previous,
                reduced_motion
            );
        }
    }
}

impl PreferenceSource for SystemPreferences {
    fn is_reduced_motion(&self) -> bool {
        self.reduced_motion.load(Ordering::SeqCst)
    }
}
