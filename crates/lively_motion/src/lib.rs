//! Lively Motion
//!
//! The declarative animation model shared by every Lively icon.
//!
//! # Features
//!
//! - **Motion presets**: One idle/activated variant pair per [`MotionType`]
//! - **Directives**: [`AnimationProps`] bundles (`initial`, `animate`, `whileHover`,
//!   `whileInView`, `viewport`, `variants`, `transition`) handed to the animation runtime
//! - **Keyframes**: Single values or keyframe sequences, with sampling for previews
//! - **Easing**: The runtime's named curves plus cubic bezier
//!
//! Nothing in this crate plays an animation. It only describes target states and
//! how to interpolate between them; the consuming runtime does the playback.

pub mod easing;
pub mod keyframe;
pub mod motion;
pub mod presets;
pub mod props;
pub mod transition;
pub mod variants;

pub use easing::Easing;
pub use keyframe::{KeyframeValue, ResolvedTarget, TargetState};
pub use motion::{MotionType, TriggerType};
pub use presets::{preset, MotionPreset};
pub use props::{AnimationProps, AnimationTarget, Viewport};
pub use transition::{Repeat, RepeatType, Transition, TransitionKind};
pub use variants::{VariantLabel, Variants};
