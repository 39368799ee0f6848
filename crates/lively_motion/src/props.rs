//! Animation directive bundles
//!
//! An [`AnimationProps`] is what an element receives: which state to start in,
//! what activates the animation, and the variants/transition to use. Unset
//! fields are omitted when serialized, so an empty bundle is `{}`.

use crate::keyframe::TargetState;
use crate::transition::Transition;
use crate::variants::{VariantLabel, Variants};
use serde::{Deserialize, Serialize};

/// A variant label or an inline target state
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnimationTarget {
    Label(VariantLabel),
    State(TargetState),
}

impl From<VariantLabel> for AnimationTarget {
    fn from(label: VariantLabel) -> Self {
        AnimationTarget::Label(label)
    }
}

impl From<TargetState> for AnimationTarget {
    fn from(state: TargetState) -> Self {
        AnimationTarget::State(state)
    }
}

/// Viewport options for in-view activation
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Activate only the first time the element enters the viewport
    pub once: bool,
    /// Visible fraction required to activate (0.0 to 1.0)
    pub amount: f32,
}

impl Viewport {
    /// Activate once, when half the element is visible
    pub const ONCE_HALF: Viewport = Viewport {
        once: true,
        amount: 0.5,
    };
}

/// Declarative animation directives for one element
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial: Option<AnimationTarget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animate: Option<AnimationTarget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub while_hover: Option<AnimationTarget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub while_in_view: Option<AnimationTarget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewport: Option<Viewport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variants: Option<Variants>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition: Option<Transition>,
}

impl AnimationProps {
    /// The empty bundle
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when no directive is set
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Builder: set the initial state
    pub fn initial(mut self, target: impl Into<AnimationTarget>) -> Self {
        self.initial = Some(target.into());
        self
    }

    /// Builder: animate toward a state immediately
    pub fn animate(mut self, target: impl Into<AnimationTarget>) -> Self {
        self.animate = Some(target.into());
        self
    }

    /// Builder: activate while hovered
    pub fn while_hover(mut self, target: impl Into<AnimationTarget>) -> Self {
        self.while_hover = Some(target.into());
        self
    }

    /// Builder: activate while in view
    pub fn while_in_view(mut self, target: impl Into<AnimationTarget>) -> Self {
        self.while_in_view = Some(target.into());
        self
    }

    /// Builder: set viewport options
    pub fn viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = Some(viewport);
        self
    }

    /// Builder: set variants
    pub fn variants(mut self, variants: Variants) -> Self {
        self.variants = Some(variants);
        self
    }

    /// Builder: set transition
    pub fn transition(mut self, transition: Transition) -> Self {
        self.transition = Some(transition);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_bundle_serializes_to_empty_object() {
        let json = serde_json::to_string(&AnimationProps::empty()).unwrap();
        assert_eq!(json, "{}");
        assert!(AnimationProps::empty().is_empty());
    }

    #[test]
    fn test_labels_and_inline_states() {
        let props = AnimationProps::default()
            .initial(TargetState::default().with_path_length(0.0))
            .while_in_view(VariantLabel::Hover)
            .viewport(Viewport::ONCE_HALF);

        let json = serde_json::to_value(&props).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "initial": { "pathLength": 0.0 },
                "whileInView": "hover",
                "viewport": { "once": true, "amount": 0.5 },
            })
        );
        assert!(!props.is_empty());
    }
}
