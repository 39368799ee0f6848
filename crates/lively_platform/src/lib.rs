//! Lively Platform
//!
//! Reads the user's reduced-motion preference from the operating system and
//! exposes it as a live [`PreferenceSource`](lively_core::PreferenceSource).
//!
//! | Platform | Query |
//! |----------|-------|
//! | any      | `LIVELY_REDUCED_MOTION` environment variable |
//! | Linux    | `gsettings get org.gnome.desktop.interface enable-animations` |
//! | macOS    | `defaults read com.apple.universalaccess reduceMotion` |
//! | Windows  | `reg query "HKCU\Control Panel\Desktop\WindowMetrics" /v MinAnimate` |

pub mod error;
pub mod preference;
pub mod watcher;

pub use error::{PlatformError, Result};
pub use preference::{query_reduced_motion, Platform, SystemPreferences, REDUCED_MOTION_ENV};
pub use watcher::{PreferenceWatcher, WatcherConfig};
