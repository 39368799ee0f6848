//! Icon component props

use crate::icons::IconDef;
use crate::{DEFAULT_SIZE, STROKE_WIDTH};
use lively_core::IconAnimationArgs;
use lively_motion::{MotionType, TriggerType};

/// Caller-supplied options for rendering an icon
#[derive(Clone, Debug, PartialEq)]
pub struct IconProps {
    /// Width and height in pixels
    pub size: f32,
    pub stroke_width: f32,
    /// Extra CSS classes for the root element
    pub class_name: Option<String>,
    /// Explicit animation override
    pub animated: Option<bool>,
    /// Motion; the icon's default when unset
    pub motion: Option<MotionType>,
    pub trigger: TriggerType,
    /// Accessible name; the icon is decorative when unset
    pub aria_label: Option<String>,
}

impl Default for IconProps {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            stroke_width: STROKE_WIDTH,
            class_name: None,
            animated: None,
            motion: None,
            trigger: TriggerType::default(),
            aria_label: None,
        }
    }
}

impl IconProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn stroke_width(mut self, stroke_width: f32) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn animated(mut self, animated: bool) -> Self {
        self.animated = Some(animated);
        self
    }

    pub fn motion(mut self, motion: MotionType) -> Self {
        self.motion = Some(motion);
        self
    }

    pub fn trigger(mut self, trigger: TriggerType) -> Self {
        self.trigger = trigger;
        self
    }

    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    /// Hook arguments for `icon`, filling in its default motion
    pub fn animation_args(&self, icon: &IconDef) -> IconAnimationArgs {
        IconAnimationArgs {
            animated: self.animated,
            motion: self.motion.unwrap_or(icon.default_motion),
            trigger: self.trigger,
        }
    }
}
