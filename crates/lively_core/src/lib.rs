//! Lively Core Runtime
//!
//! This crate decides whether, and how, an icon animates:
//!
//! - **Animation context**: The app-wide "animations enabled" switch
//! - **Preferences**: The user's reduced-motion setting, behind [`PreferenceSource`]
//! - **Hook**: [`use_icon_animation`] turns those plus the icon's own motion and
//!   trigger into ready-to-apply directive bundles
//!
//! # Example
//!
//! ```rust
//! use lively_core::{AnimationContext, StaticPreference};
//! use lively_motion::{MotionType, TriggerType, VariantLabel, AnimationTarget};
//!
//! let ctx = AnimationContext::new(true, StaticPreference(false));
//! let anim = ctx.use_icon_animation(None, MotionType::Bounce, TriggerType::Hover);
//!
//! assert!(anim.is_animated);
//! assert_eq!(
//!     anim.animation_props.while_hover,
//!     Some(AnimationTarget::Label(VariantLabel::Hover))
//! );
//! ```

pub mod context_state;
pub mod error;
pub mod hooks;
pub mod preference;

pub use context_state::{AnimationContext, ContextConfig, ListenerId};
pub use error::{ContextError, Result};
pub use hooks::{
    resolve_animated, use_icon_animation, use_icon_animation_with, IconAnimation,
    IconAnimationArgs,
};
pub use preference::{PreferenceSource, SharedPreference, StaticPreference};
