//! Named variant states

use crate::keyframe::TargetState;
use serde::{Deserialize, Serialize};

/// Variant label
///
/// `Hover` names the activated state for every trigger, not only pointer hover.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VariantLabel {
    Initial,
    Hover,
}

impl VariantLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            VariantLabel::Initial => "initial",
            VariantLabel::Hover => "hover",
        }
    }
}

/// Idle and activated states of an element
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Variants {
    pub initial: TargetState,
    pub hover: TargetState,
}

impl Variants {
    pub fn new(initial: TargetState, hover: TargetState) -> Self {
        Self { initial, hover }
    }

    /// Get the state for a label
    pub fn get(&self, label: VariantLabel) -> &TargetState {
        match label {
            VariantLabel::Initial => &self.initial,
            VariantLabel::Hover => &self.hover,
        }
    }
}
