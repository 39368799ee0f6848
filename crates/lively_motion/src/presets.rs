//! Motion presets
//!
//! One idle/activated variant pair per [`MotionType`], with the transition
//! that moves between them. The table is total: `draw` maps to an identity
//! preset (paths animate on their own) and `none` to empty states.

use crate::easing::Easing;
use crate::keyframe::{ResolvedTarget, TargetState};
use crate::motion::MotionType;
use crate::transition::{Transition, TransitionKind};
use crate::variants::Variants;
use serde::Serialize;

/// Variants and transition for one motion type
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MotionPreset {
    pub variants: Variants,
    pub transition: Transition,
}

impl MotionPreset {
    fn new(initial: TargetState, hover: TargetState, transition: Transition) -> Self {
        Self {
            variants: Variants::new(initial, hover),
            transition,
        }
    }

    /// Sample the activated transition at `progress` (0.0 to 1.0)
    ///
    /// Springs are approximated with an overshooting curve; the runtime's real
    /// spring integration is not reproduced here.
    pub fn sample(&self, progress: f32) -> ResolvedTarget {
        let easing = match self.transition.kind {
            Some(TransitionKind::Spring) => Easing::BackOut,
            _ => self.transition.easing(),
        };
        self.variants.hover.sample_from(
            &self.variants.initial,
            progress,
            self.transition.times.as_deref(),
            easing,
        )
    }
}

/// Look up the preset for a motion type
pub fn preset(motion: MotionType) -> MotionPreset {
    match motion {
        MotionType::Scale => MotionPreset::new(
            TargetState::default().with_scale(1.0),
            TargetState::default().with_scale(1.15),
            Transition::spring(400.0, 10.0),
        ),
        MotionType::Rotate => MotionPreset::new(
            TargetState::default().with_rotate(0.0),
            TargetState::default().with_rotate(15.0),
            Transition::tween(0.3, Easing::EaseInOut),
        ),
        MotionType::Translate => MotionPreset::new(
            TargetState::default().with_x(0.0).with_y(0.0),
            TargetState::default().with_x(0.0).with_y(-2.0),
            Transition::tween(0.3, Easing::EaseOut),
        ),
        MotionType::Shake => MotionPreset::new(
            TargetState::default().with_x(0.0),
            TargetState::default().with_x([0.0, -2.0, 2.0, -2.0, 2.0, 0.0]),
            Transition::tween(0.5, Easing::EaseInOut),
        ),
        MotionType::Pulse => MotionPreset::new(
            TargetState::default().with_scale(1.0).with_opacity(1.0),
            TargetState::default()
                .with_scale([1.0, 1.1, 1.0])
                .with_opacity([1.0, 0.8, 1.0]),
            Transition::tween(0.8, Easing::EaseInOut),
        ),
        MotionType::Bounce => MotionPreset::new(
            TargetState::default().with_y(0.0),
            TargetState::default().with_y([0.0, -4.0, 0.0, -2.0, 0.0]),
            Transition::tween(0.6, Easing::EaseOut),
        ),
        MotionType::Draw => MotionPreset::new(
            TargetState::default().with_path_length(1.0).with_opacity(1.0),
            TargetState::default().with_path_length(1.0).with_opacity(1.0),
            Transition::tween(0.8, Easing::EaseInOut),
        ),
        MotionType::Spin => MotionPreset::new(
            TargetState::default().with_rotate(0.0),
            TargetState::default().with_rotate(360.0),
            Transition::tween(1.0, Easing::Linear),
        ),
        MotionType::None => MotionPreset::new(
            TargetState::default(),
            TargetState::default(),
            Transition::instant(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_motion_has_a_preset() {
        for motion in MotionType::ALL {
            let first = preset(motion);
            assert_eq!(first, preset(motion), "{motion} preset is not stable");
        }
    }

    #[test]
    fn test_draw_preset_is_identity() {
        let draw = preset(MotionType::Draw);
        assert_eq!(draw.variants.initial, draw.variants.hover);
        assert_eq!(draw.sample(0.5), ResolvedTarget::default());
    }

    #[test]
    fn test_none_preset_does_not_move() {
        let none = preset(MotionType::None);
        assert!(none.variants.initial.is_empty());
        assert!(none.variants.hover.is_empty());
        assert_eq!(none.transition.duration, Some(0.0));
    }

    #[test]
    fn test_shake_returns_to_origin() {
        let shake = preset(MotionType::Shake);
        assert!((shake.sample(1.0).x - 0.0).abs() < 0.01);
        assert!(shake.sample(0.2).x.abs() > 1.0);
    }

    #[test]
    fn test_bounce_rises_then_lands() {
        let bounce = preset(MotionType::Bounce);
        assert!((bounce.sample(0.25).y - (-4.0)).abs() < 0.01);
        assert!((bounce.sample(1.0).y - 0.0).abs() < 0.01);
    }

    #[test]
    fn test_spin_completes_a_turn() {
        let spin = preset(MotionType::Spin);
        assert!((spin.sample(0.5).rotate - 180.0).abs() < 0.01);
        assert!((spin.sample(1.0).rotate - 360.0).abs() < 0.01);
    }

    #[test]
    fn test_scale_spring_overshoots() {
        let scale = preset(MotionType::Scale);
        let peak = (1..20)
            .map(|i| scale.sample(i as f32 / 20.0).scale)
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.15, "spring should overshoot, peak={peak}");
        assert!((scale.sample(1.0).scale - 1.15).abs() < 0.01);
    }
}
