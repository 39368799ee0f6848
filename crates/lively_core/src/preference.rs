//! Reduced-motion preference
//!
//! The hook never talks to the OS directly. It asks a [`PreferenceSource`],
//! which a platform layer implements for real and tests implement with a
//! fixed or flippable value.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Live source of the user's reduced-motion preference
pub trait PreferenceSource: Send + Sync {
    /// Whether the user asked for reduced motion, read at call time
    fn is_reduced_motion(&self) -> bool;
}

impl<T: PreferenceSource + ?Sized> PreferenceSource for Arc<T> {
    fn is_reduced_motion(&self) -> bool {
        (**self).is_reduced_motion()
    }
}

/// A preference that never changes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StaticPreference(pub bool);

impl PreferenceSource for StaticPreference {
    fn is_reduced_motion(&self) -> bool {
        self.0
    }
}

/// A preference that can be flipped at runtime from any clone
#[derive(Clone, Debug, Default)]
pub struct SharedPreference(Arc<AtomicBool>);

impl SharedPreference {
    pub fn new(reduced_motion: bool) -> Self {
        Self(Arc::new(AtomicBool::new(reduced_motion)))
    }

    pub fn set(&self, reduced_motion: bool) {
        self.0.store(reduced_motion, Ordering::SeqCst);
    }
}

impl PreferenceSource for SharedPreference {
    fn is_reduced_motion(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}
