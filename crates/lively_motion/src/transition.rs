//! Transition descriptions handed to the animation runtime

use crate::easing::Easing;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Interpolation model
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransitionKind {
    Tween,
    Spring,
}

/// How a repeating animation restarts
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RepeatType {
    /// Jump back to the start
    Loop,
    /// Play backwards, then forwards again
    Reverse,
    /// Swap the start and end values each iteration
    Mirror,
}

/// Repeat count
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RepeatRepr", into = "RepeatRepr")]
pub enum Repeat {
    Count(u32),
    /// Serialized as the string `"Infinity"`
    Infinite,
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RepeatRepr {
    Count(u32),
    Float(f64),
    Text(String),
}

impl From<Repeat> for RepeatRepr {
    fn from(repeat: Repeat) -> Self {
        match repeat {
            Repeat::Count(n) => RepeatRepr::Count(n),
            Repeat::Infinite => RepeatRepr::Text("Infinity".to_string()),
        }
    }
}

impl TryFrom<RepeatRepr> for Repeat {
    type Error = String;

    fn try_from(repr: RepeatRepr) -> Result<Self, Self::Error> {
        match repr {
            RepeatRepr::Count(n) => Ok(Repeat::Count(n)),
            RepeatRepr::Float(f) if f.is_infinite() && f > 0.0 => Ok(Repeat::Infinite),
            RepeatRepr::Float(f) if f >= 0.0 && f.fract() == 0.0 && f <= u32::MAX as f64 => {
                Ok(Repeat::Count(f as u32))
            }
            RepeatRepr::Text(s) if s == "Infinity" => Ok(Repeat::Infinite),
            RepeatRepr::Float(f) => Err(format!("invalid repeat count {f}")),
            RepeatRepr::Text(s) => Err(format!("invalid repeat `{s}`")),
        }
    }
}

/// How to interpolate toward a target state
///
/// Every field is optional; unset fields defer to the runtime's defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transition {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<TransitionKind>,
    /// Duration in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f32>,
    /// Delay in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ease: Option<Easing>,
    /// Keyframe offsets (0.0 to 1.0), one per key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub times: Option<SmallVec<[f32; 4]>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat: Option<Repeat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat_type: Option<RepeatType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stiffness: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damping: Option<f32>,
}

impl Transition {
    /// Tween of the given duration (seconds)
    pub fn tween(duration: f32, ease: Easing) -> Self {
        Self {
            duration: Some(duration),
            ease: Some(ease),
            ..Default::default()
        }
    }

    /// Spring with stiffness and damping
    pub fn spring(stiffness: f32, damping: f32) -> Self {
        Self {
            kind: Some(TransitionKind::Spring),
            stiffness: Some(stiffness),
            damping: Some(damping),
            ..Default::default()
        }
    }

    /// Zero-duration transition that disables movement
    pub fn instant() -> Self {
        Self {
            duration: Some(0.0),
            ..Default::default()
        }
    }

    /// Builder: set keyframe offsets
    pub fn with_times(mut self, times: impl IntoIterator<Item = f32>) -> Self {
        self.times = Some(times.into_iter().collect());
        self
    }

    /// Builder: set repeat
    pub fn with_repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = Some(repeat);
        self
    }

    /// Builder: set repeat type
    pub fn with_repeat_type(mut self, repeat_type: RepeatType) -> Self {
        self.repeat_type = Some(repeat_type);
        self
    }

    /// Builder: set delay
    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Overlay the fields set in `other` onto a copy of `self`
    pub fn merge(&self, other: &Transition) -> Transition {
        Transition {
            kind: other.kind.or(self.kind),
            duration: other.duration.or(self.duration),
            delay: other.delay.or(self.delay),
            ease: other.ease.or(self.ease),
            times: other.times.clone().or_else(|| self.times.clone()),
            repeat: other.repeat.or(self.repeat),
            repeat_type: other.repeat_type.or(self.repeat_type),
            stiffness: other.stiffness.or(self.stiffness),
            damping: other.damping.or(self.damping),
        }
    }

    /// Merge in an infinite loop repeat
    pub fn looped(&self) -> Transition {
        self.merge(
            &Transition::default()
                .with_repeat(Repeat::Infinite)
                .with_repeat_type(RepeatType::Loop),
        )
    }

    /// Easing used when sampling, linear when unset
    pub fn easing(&self) -> Easing {
        self.ease.unwrap_or_default()
    }
}
