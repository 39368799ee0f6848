//! Animation context
//!
//! `AnimationContext` is the provider behind every icon: it owns the app-wide
//! "animations enabled" switch and the reduced-motion [`PreferenceSource`].
//!
//! # Lifecycle
//!
//! Create one at app startup and either pass it around explicitly or install it
//! as the process-wide instance:
//!
//! ```ignore
//! AnimationContext::init(AnimationContext::new(true, SystemPreferences::detect()))?;
//!
//! // Later, from a settings screen
//! AnimationContext::current().set_animated(false);
//! ```
//!
//! Icons only read the context. Writes go through [`AnimationContext::set_animated`]
//! which notifies subscribed listeners so the host can re-render.

use crate::error::{ContextError, Result};
use crate::preference::{PreferenceSource, StaticPreference};
use serde::{Deserialize, Serialize};
use slotmap::{new_key_type, SlotMap};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

/// Installed process-wide context
static ANIMATION_CONTEXT: OnceLock<AnimationContext> = OnceLock::new();

/// Context used before anything is installed
static DEFAULT_CONTEXT: OnceLock<AnimationContext> = OnceLock::new();

new_key_type! {
    pub struct ListenerId;
}

/// Callback invoked with the new "animated" value
pub type ChangeListener = Arc<dyn Fn(bool) + Send + Sync>;

/// Serializable context settings
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextConfig {
    /// Animations globally enabled
    #[serde(default = "default_true")]
    pub animated: bool,
    /// Force the reduced-motion preference instead of asking the platform
    #[serde(default)]
    pub reduced_motion: Option<bool>,
}

fn default_true() -> bool {
    true
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            animated: true,
            reduced_motion: None,
        }
    }
}

/// App-wide animation settings read by every icon
pub struct AnimationContext {
    animated: AtomicBool,
    preferences: Arc<dyn PreferenceSource>,
    listeners: Mutex<SlotMap<ListenerId, ChangeListener>>,
}

impl AnimationContext {
    /// Create a context with an initial "animated" value and a preference source
    pub fn new(animated: bool, preferences: impl PreferenceSource + 'static) -> Self {
        Self::with_shared_preferences(animated, Arc::new(preferences))
    }

    /// Create a context sharing an existing preference source
    pub fn with_shared_preferences(animated: bool, preferences: Arc<dyn PreferenceSource>) -> Self {
        Self {
            animated: AtomicBool::new(animated),
            preferences,
            listeners: Mutex::new(SlotMap::with_key()),
        }
    }

    /// Build from config, asking `system` unless the config forces a preference
    pub fn from_config(config: &ContextConfig, system: Arc<dyn PreferenceSource>) -> Self {
        let preferences: Arc<dyn PreferenceSource> = match config.reduced_motion {
            Some(forced) => Arc::new(StaticPreference(forced)),
            None => system,
        };
        Self::with_shared_preferences(config.animated, preferences)
    }

    /// Install the process-wide context (call once at app startup)
    pub fn init(context: AnimationContext) -> Result<&'static AnimationContext> {
        ANIMATION_CONTEXT
            .set(context)
            .map_err(|_| ContextError::AlreadyInitialized)?;
        tracing::debug!("AnimationContext installed");
        Ok(Self::current())
    }

    /// Get the installed context (returns None if not initialized)
    pub fn try_get() -> Option<&'static AnimationContext> {
        ANIMATION_CONTEXT.get()
    }

    /// Check if a process-wide context has been installed
    pub fn is_initialized() -> bool {
        ANIMATION_CONTEXT.get().is_some()
    }

    /// The installed context, or an animated, no-preference default
    pub fn current() -> &'static AnimationContext {
        Self::try_get().unwrap_or_else(|| {
            DEFAULT_CONTEXT.get_or_init(|| AnimationContext::new(true, StaticPreference(false)))
        })
    }

    // ========== Animated flag ==========

    /// Whether animations are globally enabled
    pub fn is_animated(&self) -> bool {
        self.animated.load(Ordering::SeqCst)
    }

    /// Enable or disable animations, notifying listeners on change
    pub fn set_animated(&self, animated: bool) {
        let previous = self.animated.swap(animated, Ordering::SeqCst);
        if previous != animated {
            tracing::debug!(
                "AnimationContext::set_animated - switching from {} to {}",
                previous,
                animated
            );
            self.notify(animated);
        }
    }

    /// Flip the animated flag
    pub fn toggle_animated(&self) {
        self.set_animated(!self.is_animated());
    }

    // ========== Preferences ==========

    /// Live reduced-motion preference
    pub fn prefers_reduced_motion(&self) -> bool {
        self.preferences.is_reduced_motion()
    }

    /// The preference source in use
    pub fn preferences(&self) -> &Arc<dyn PreferenceSource> {
        &self.preferences
    }

    // ========== Listeners ==========

    /// Register a callback for changes to the animated flag
    pub fn subscribe(&self, listener: impl Fn(bool) + Send + Sync + 'static) -> ListenerId {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(Arc::new(listener))
    }

    /// Remove a callback, returning whether it was registered
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(id)
            .is_some()
    }

    fn notify(&self, animated: bool) {
        // Call outside the lock so listeners may subscribe or read the context
        let listeners: Vec<ChangeListener> = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect();
        for listener in listeners {
            listener(animated);
        }
    }
}

impl Default for AnimationContext {
    fn default() -> Self {
        Self::new(true, StaticPreference(false))
    }
}

impl fmt::Debug for AnimationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationContext")
            .field("animated", &self.is_animated())
            .field("reduced_motion", &self.prefers_reduced_motion())
            .finish()
    }
}
