//! Keyframe values and target states
//!
//! A target state lists the visual properties an element should reach. Each
//! property is either a single value or a keyframe sequence the runtime walks
//! through in order (`pathLength: [1, 0, 1]`).

use crate::easing::Easing;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A single animated value or a keyframe sequence
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeyframeValue {
    Single(f32),
    Sequence(SmallVec<[f32; 4]>),
}

impl KeyframeValue {
    /// First value the runtime renders
    pub fn first(&self) -> f32 {
        match self {
            KeyframeValue::Single(v) => *v,
            KeyframeValue::Sequence(keys) => keys.first().copied().unwrap_or(0.0),
        }
    }

    /// Value held once the animation settles
    pub fn last(&self) -> f32 {
        match self {
            KeyframeValue::Single(v) => *v,
            KeyframeValue::Sequence(keys) => keys.last().copied().unwrap_or(0.0),
        }
    }

    /// Whether this is a keyframe sequence
    pub fn is_sequence(&self) -> bool {
        matches!(self, KeyframeValue::Sequence(_))
    }

    /// Sample the value at `progress` (0.0 to 1.0), starting from `from` when
    /// this is a single value.
    ///
    /// Sequences ignore `from` and interpolate between their own keys. `times`
    /// gives explicit offsets per key; when absent or of the wrong length the
    /// keys are spaced evenly. The easing applies to each segment.
    pub fn sample(&self, from: f32, progress: f32, times: Option<&[f32]>, easing: Easing) -> f32 {
        let progress = progress.clamp(0.0, 1.0);
        match self {
            KeyframeValue::Single(to) => from + (to - from) * easing.apply(progress),
            KeyframeValue::Sequence(keys) => sample_sequence(keys, progress, times, easing),
        }
    }
}

fn sample_sequence(keys: &[f32], progress: f32, times: Option<&[f32]>, easing: Easing) -> f32 {
    match keys.len() {
        0 => return 0.0,
        1 => return keys[0],
        _ => {}
    }

    let segments = keys.len() - 1;
    let offset = |i: usize| match times {
        Some(times) if times.len() == keys.len() => times[i],
        _ => i as f32 / segments as f32,
    };

    // Find the segment containing progress
    let mut index = 0;
    while index < segments - 1 && progress > offset(index + 1) {
        index += 1;
    }

    let start = offset(index);
    let end = offset(index + 1);
    if (end - start).abs() < f32::EPSILON {
        return keys[index + 1];
    }

    let local = ((progress - start) / (end - start)).clamp(0.0, 1.0);
    let eased = easing.apply(local);
    keys[index] + (keys[index + 1] - keys[index]) * eased
}

impl From<f32> for KeyframeValue {
    fn from(value: f32) -> Self {
        KeyframeValue::Single(value)
    }
}

impl From<f64> for KeyframeValue {
    fn from(value: f64) -> Self {
        KeyframeValue::Single(value as f32)
    }
}

impl<const N: usize> From<[f32; N]> for KeyframeValue {
    fn from(keys: [f32; N]) -> Self {
        KeyframeValue::Sequence(keys.iter().copied().collect())
    }
}

impl<const N: usize> From<[f64; N]> for KeyframeValue {
    fn from(keys: [f64; N]) -> Self {
        KeyframeValue::Sequence(keys.iter().map(|k| *k as f32).collect())
    }
}

impl From<Vec<f32>> for KeyframeValue {
    fn from(keys: Vec<f32>) -> Self {
        KeyframeValue::Sequence(keys.into_iter().collect())
    }
}

/// Visual properties an element animates toward
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetState {
    /// Uniform scale factor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<KeyframeValue>,
    /// Rotation in degrees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotate: Option<KeyframeValue>,
    /// Horizontal translation in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<KeyframeValue>,
    /// Vertical translation in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<KeyframeValue>,
    /// Opacity (0.0 to 1.0)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<KeyframeValue>,
    /// Drawn fraction of a stroke (0.0 to 1.0)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_length: Option<KeyframeValue>,
}

impl TargetState {
    /// Builder: set scale
    pub fn with_scale(mut self, value: impl Into<KeyframeValue>) -> Self {
        self.scale = Some(value.into());
        self
    }

    /// Builder: set rotation
    pub fn with_rotate(mut self, value: impl Into<KeyframeValue>) -> Self {
        self.rotate = Some(value.into());
        self
    }

    /// Builder: set horizontal translation
    pub fn with_x(mut self, value: impl Into<KeyframeValue>) -> Self {
        self.x = Some(value.into());
        self
    }

    /// Builder: set vertical translation
    pub fn with_y(mut self, value: impl Into<KeyframeValue>) -> Self {
        self.y = Some(value.into());
        self
    }

    /// Builder: set opacity
    pub fn with_opacity(mut self, value: impl Into<KeyframeValue>) -> Self {
        self.opacity = Some(value.into());
        self
    }

    /// Builder: set path length
    pub fn with_path_length(mut self, value: impl Into<KeyframeValue>) -> Self {
        self.path_length = Some(value.into());
        self
    }

    /// True when no property is set
    pub fn is_empty(&self) -> bool {
        self.scale.is_none()
            && self.rotate.is_none()
            && self.x.is_none()
            && self.y.is_none()
            && self.opacity.is_none()
            && self.path_length.is_none()
    }

    /// Settled values with unset properties at their rest defaults
    pub fn resolved(&self) -> ResolvedTarget {
        let rest = ResolvedTarget::default();
        ResolvedTarget {
            scale: self.scale.as_ref().map_or(rest.scale, KeyframeValue::last),
            rotate: self.rotate.as_ref().map_or(rest.rotate, KeyframeValue::last),
            x: self.x.as_ref().map_or(rest.x, KeyframeValue::last),
            y: self.y.as_ref().map_or(rest.y, KeyframeValue::last),
            opacity: self.opacity.as_ref().map_or(rest.opacity, KeyframeValue::last),
            path_length: self
                .path_length
                .as_ref()
                .map_or(rest.path_length, KeyframeValue::last),
        }
    }

    /// Sample the values at `progress` of a transition from `from` to `self`
    pub fn sample_from(
        &self,
        from: &TargetState,
        progress: f32,
        times: Option<&[f32]>,
        easing: Easing,
    ) -> ResolvedTarget {
        let start = from.resolved();
        let pick = |to: &Option<KeyframeValue>, from: f32| {
            to.as_ref()
                .map_or(from, |to| to.sample(from, progress, times, easing))
        };
        ResolvedTarget {
            scale: pick(&self.scale, start.scale),
            rotate: pick(&self.rotate, start.rotate),
            x: pick(&self.x, start.x),
            y: pick(&self.y, start.y),
            opacity: pick(&self.opacity, start.opacity),
            path_length: pick(&self.path_length, start.path_length),
        }
    }
}

/// Concrete property values at one instant
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTarget {
    pub scale: f32,
    pub rotate: f32,
    pub x: f32,
    pub y: f32,
    pub opacity: f32,
    pub path_length: f32,
}

impl Default for ResolvedTarget {
    fn default() -> Self {
        Self {
            scale: 1.0,
            rotate: 0.0,
            x: 0.0,
            y: 0.0,
            opacity: 1.0,
            path_length: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_value_interpolates_from_start() {
        let value = KeyframeValue::from(2.0);
        assert!((value.sample(1.0, 0.0, None, Easing::Linear) - 1.0).abs() < 1e-5);
        assert!((value.sample(1.0, 0.5, None, Easing::Linear) - 1.5).abs() < 1e-5);
        assert!((value.sample(1.0, 1.0, None, Easing::Linear) - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_sequence_hits_every_key() {
        let value = KeyframeValue::from([1.0, 0.0, 1.0]);
        assert!((value.sample(5.0, 0.0, None, Easing::Linear) - 1.0).abs() < 1e-5);
        assert!((value.sample(5.0, 0.5, None, Easing::Linear) - 0.0).abs() < 1e-5);
        assert!((value.sample(5.0, 1.0, None, Easing::Linear) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_sequence_respects_explicit_times() {
        let value = KeyframeValue::from([0.0, 1.0, 1.0, 0.0]);
        let times = [0.0, 0.4, 0.6, 1.0];
        assert!((value.sample(0.0, 0.2, Some(&times), Easing::Linear) - 0.5).abs() < 1e-5);
        assert!((value.sample(0.0, 0.5, Some(&times), Easing::Linear) - 1.0).abs() < 1e-5);
        assert!((value.sample(0.0, 0.8, Some(&times), Easing::Linear) - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_mismatched_times_fall_back_to_even_spacing() {
        let value = KeyframeValue::from([0.0, 1.0]);
        let times = [0.0, 0.9, 1.0];
        assert!((value.sample(0.0, 0.5, Some(&times), Easing::Linear) - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_target_state_serializes_camel_case() {
        let state = TargetState::default()
            .with_path_length([1.0, 0.0, 1.0])
            .with_opacity(1.0);
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "opacity": 1.0, "pathLength": [1.0, 0.0, 1.0] })
        );
    }

    #[test]
    fn test_resolved_uses_rest_defaults() {
        let resolved = TargetState::default().with_rotate(15.0).resolved();
        assert_eq!(resolved.rotate, 15.0);
        assert_eq!(resolved.scale, 1.0);
        assert_eq!(resolved.opacity, 1.0);
    }
}
