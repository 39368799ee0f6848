//! # Lively Icons
//!
//! Lucide-style SVG icons that animate through the icon animation hook.
//!
//! Each icon is static geometry plus a default motion. Rendering calls
//! [`use_icon_animation`](lively_core::use_icon_animation) once and attaches
//! the resulting bundles: the root `<svg>` gets `animationProps` (or
//! `drawWrapperProps` for `draw`), and with `draw` every shape gets
//! `pathAnimationProps`.
//!
//! ## Usage
//!
//! ```ignore
//! use lively_icons::{icons, render, IconProps};
//! use lively_motion::TriggerType;
//!
//! let svg = render(&icons::BELL, &IconProps::new().trigger(TriggerType::Loop)).to_svg();
//! ```

pub mod icons;
pub mod props;
pub mod render;
pub mod shape;

pub use icons::{find, IconDef};
pub use props::IconProps;
pub use render::{render, render_with, SvgElement};
pub use shape::Shape;

/// Default Lucide viewBox (all icons are 24x24)
pub const VIEW_BOX: (f32, f32, f32, f32) = (0.0, 0.0, 24.0, 24.0);

/// Default stroke width for Lucide icons
pub const STROKE_WIDTH: f32 = 2.0;

/// Default rendered size in pixels
pub const DEFAULT_SIZE: f32 = 24.0;
