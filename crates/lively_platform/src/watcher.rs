//! Background preference watcher
//!
//! Polls the OS on a fixed interval and updates a [`SystemPreferences`], so
//! icons pick up a changed accessibility setting on their next render.

use crate::preference::SystemPreferences;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Watcher settings
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WatcherConfig {
    /// Time between queries
    pub interval: Duration,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(2),
        }
    }
}

/// Running watcher thread; stops when dropped
#[derive(Debug)]
pub struct PreferenceWatcher {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl PreferenceWatcher {
    /// Start polling into `prefs`
    pub fn spawn(prefs: SystemPreferences, config: WatcherConfig) -> std::io::Result<Self> {
        Self::spawn_with(config, move || {
            prefs.refresh();
        })
    }

    fn spawn_with(
        config: WatcherConfig,
        mut poll: impl FnMut() + Send + 'static,
    ) -> std::io::Result<Self> {
        let stop = Arc::new(AtomicBool::new(false));
        let stopped = stop.clone();

        let handle = thread::Builder::new()
            .name("lively-preference-watcher".into())
            .spawn(move || {
                tracing::debug!("Preference watcher started ({:?})", config.interval);
                while !stopped.load(Ordering::SeqCst) {
                    poll();
                    thread::park_timeout(config.interval);
                }
                tracing::debug!("Preference watcher stopped");
            })?;

        Ok(Self {
            stop,
            handle: Some(handle),
        })
    }

    /// Stop polling and wait for the thread to exit
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            handle.thread().unpark();
            if handle.join().is_err() {
                tracing::warn!("Preference watcher thread panicked");
            }
        }
    }
}

impl Drop for PreferenceWatcher {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl SystemPreferences {
    /// Poll the OS in the background until the returned watcher is dropped
    pub fn spawn_watcher(&self, config: WatcherConfig) -> std::io::Result<PreferenceWatcher> {
        PreferenceWatcher::spawn(self.clone(), config)
    }

    /// Detect the preference and keep it current while the watcher lives
    pub fn detect_live(config: WatcherConfig) -> std::io::Result<(Self, PreferenceWatcher)> {
        let prefs = Self::detect();
        let watcher = prefs.spawn_watcher(config)?;
        Ok((prefs, watcher))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preference::REDUCED_MOTION_ENV;
    use lively_core::PreferenceSource;
    use std::sync::atomic::AtomicUsize;
    use std::time::Instant;

    #[test]
    fn test_watcher_polls_until_stopped() {
        let polls = Arc::new(AtomicUsize::new(0));
        let counter = polls.clone();
        let watcher = PreferenceWatcher::spawn_with(
            WatcherConfig {
                interval: Duration::from_millis(5),
            },
            move || {
                counter.fetch_add(1, Ordering::SeqCst);
            },
        )
        .unwrap();

        let deadline = Instant::now() + Duration::from_secs(5);
        while polls.load(Ordering::SeqCst) < 3 && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
        }
        watcher.stop();

        let after_stop = polls.load(Ordering::SeqCst);
        assert!(after_stop >= 3);
        thread::sleep(Duration::from_millis(30));
        assert_eq!(polls.load(Ordering::SeqCst), after_stop);
    }

    #[test]
    fn test_drop_stops_long_interval_promptly() {
        let watcher = PreferenceWatcher::spawn_with(
            WatcherConfig {
                interval: Duration::from_secs(3600),
            },
            || {},
        )
        .unwrap();

        let started = Instant::now();
        drop(watcher);
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn test_detect_live_follows_environment_changes() {
        // Only test in the crate that touches the override variable
        std::env::set_var(REDUCED_MOTION_ENV, "1");
        let (prefs, watcher) = SystemPreferences::detect_live(WatcherConfig {
            interval: Duration::from_millis(5),
        })
        .unwrap();
        assert!(prefs.is_reduced_motion());

        std::env::set_var(REDUCED_MOTION_ENV, "0");
        let deadline = Instant::now() + Duration::from_secs(5);
        while prefs.is_reduced_motion() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
        }
        watcher.stop();
        std::env::remove_var(REDUCED_MOTION_ENV);

        assert!(!prefs.is_reduced_motion());
    }
}
