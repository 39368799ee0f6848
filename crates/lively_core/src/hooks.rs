//! Icon animation hook
//!
//! [`use_icon_animation`] is called once per icon render. It reads the
//! context's animated flag and the reduced-motion preference, decides whether
//! the icon animates, and builds three directive bundles:
//!
//! - `animation_props` for the root `<svg>` (every motion except `draw`)
//! - `draw_wrapper_props` for the root `<svg>` when the motion is `draw`
//! - `path_animation_props` for each path/shape when the motion is `draw`
//!
//! The hook is total: every input combination produces a complete
//! [`IconAnimation`], and nothing is remembered between calls.

use crate::context_state::AnimationContext;
use lively_motion::{
    preset, AnimationProps, Easing, MotionPreset, MotionType, Repeat, TargetState, Transition,
    TriggerType, VariantLabel, Variants, Viewport,
};
use serde::Serialize;

/// Resolve whether an icon animates
///
/// An explicit override wins outright. Otherwise a disabled context wins,
/// then a reduced-motion preference; only then does the icon animate.
pub fn resolve_animated(
    animated: Option<bool>,
    context_animated: bool,
    reduced_motion: bool,
) -> bool {
    match animated {
        Some(explicit) => explicit,
        None if !context_animated => false,
        None => !reduced_motion,
    }
}

/// Per-call inputs of the hook, with the icon-level defaults
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IconAnimationArgs {
    /// Explicit override; `None` defers to the context and preference
    pub animated: Option<bool>,
    pub motion: MotionType,
    pub trigger: TriggerType,
}

impl IconAnimationArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn animated(mut self, animated: bool) -> Self {
        self.animated = Some(animated);
        self
    }

    pub fn motion(mut self, motion: MotionType) -> Self {
        self.motion = motion;
        self
    }

    pub fn trigger(mut self, trigger: TriggerType) -> Self {
        self.trigger = trigger;
        self
    }
}

/// Everything an icon needs to apply its animation
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IconAnimation {
    pub is_animated: bool,
    /// `None` when animated, otherwise a zero-duration transition
    pub transition: Option<Transition>,
    /// The preset's variants when animated
    pub preset_variants: Option<Variants>,
    /// The preset's transition, regardless of animated state
    pub preset_transition: Transition,
    /// Bundle for the root element
    pub animation_props: AnimationProps,
    /// Bundle for each path when the motion is `draw`, empty otherwise
    pub path_animation_props: AnimationProps,
    /// Bundle for the root element when the motion is `draw`, empty otherwise
    pub draw_wrapper_props: AnimationProps,
}

impl IconAnimation {
    /// Build the bundles for an already-resolved animated state
    pub fn resolve(is_animated: bool, motion: MotionType, trigger: TriggerType) -> Self {
        let preset = preset(motion);
        let draw = is_animated && motion.is_draw();

        Self {
            is_animated,
            transition: (!is_animated).then(Transition::instant),
            preset_variants: is_animated.then(|| preset.variants.clone()),
            preset_transition: preset.transition.clone(),
            animation_props: root_props(is_animated, &preset, trigger),
            path_animation_props: if draw {
                path_props(trigger)
            } else {
                AnimationProps::empty()
            },
            draw_wrapper_props: if draw {
                wrapper_props(trigger)
            } else {
                AnimationProps::empty()
            },
        }
    }

    /// Pass `variants` through when animated, drop them otherwise
    pub fn get_variants<T>(&self, variants: T) -> Option<T> {
        self.is_animated.then_some(variants)
    }
}

/// Run the hook against the process-wide context
pub fn use_icon_animation(
    animated: Option<bool>,
    motion: MotionType,
    trigger: TriggerType,
) -> IconAnimation {
    AnimationContext::current().use_icon_animation(animated, motion, trigger)
}

/// [`use_icon_animation`] taking an args bundle
pub fn use_icon_animation_with(args: IconAnimationArgs) -> IconAnimation {
    use_icon_animation(args.animated, args.motion, args.trigger)
}

impl AnimationContext {
    /// Run the hook against this context
    pub fn use_icon_animation(
        &self,
        animated: Option<bool>,
        motion: MotionType,
        trigger: TriggerType,
    ) -> IconAnimation {
        let context_animated = self.is_animated();
        let reduced_motion = self.prefers_reduced_motion();
        let is_animated = resolve_animated(animated, context_animated, reduced_motion);

        tracing::trace!(
            ?animated,
            context_animated,
            reduced_motion,
            is_animated,
            %motion,
            %trigger,
            "resolved icon animation"
        );

        IconAnimation::resolve(is_animated, motion, trigger)
    }
}

fn root_props(is_animated: bool, preset: &MotionPreset, trigger: TriggerType) -> AnimationProps {
    let base = AnimationProps::default()
        .initial(VariantLabel::Initial)
        .variants(preset.variants.clone());

    if !is_animated {
        return base;
    }

    match trigger {
        TriggerType::Hover => base
            .while_hover(VariantLabel::Hover)
            .transition(preset.transition.clone()),
        TriggerType::Loop => base
            .animate(VariantLabel::Hover)
            .transition(preset.transition.looped()),
        TriggerType::Mount => base
            .animate(VariantLabel::Hover)
            .transition(preset.transition.clone()),
        TriggerType::InView => base
            .while_in_view(VariantLabel::Hover)
            .viewport(Viewport::ONCE_HALF)
            .transition(preset.transition.clone()),
    }
}

fn stroke(path_length: f32, opacity: f32) -> TargetState {
    TargetState::default()
        .with_path_length(path_length)
        .with_opacity(opacity)
}

fn path_props(trigger: TriggerType) -> AnimationProps {
    match trigger {
        // Fully drawn, erased, drawn again while hovered
        TriggerType::Hover => AnimationProps::default()
            .variants(Variants::new(
                stroke(1.0, 1.0),
                TargetState::default()
                    .with_path_length([1.0, 0.0, 1.0])
                    .with_opacity(1.0),
            ))
            .initial(VariantLabel::Initial)
            .transition(Transition::tween(0.8, Easing::EaseInOut)),
        // Draw in, hold, erase, forever
        TriggerType::Loop => AnimationProps::default()
            .initial(stroke(0.0, 0.5))
            .animate(
                TargetState::default()
                    .with_path_length([0.0, 1.0, 1.0, 0.0])
                    .with_opacity([0.5, 1.0, 1.0, 0.5]),
            )
            .transition(
                Transition::tween(3.0, Easing::EaseInOut)
                    .with_repeat(Repeat::Infinite)
                    .with_times([0.0, 0.4, 0.6, 1.0]),
            ),
        TriggerType::Mount => AnimationProps::default()
            .initial(stroke(0.0, 0.3))
            .animate(stroke(1.0, 1.0))
            .transition(Transition::tween(1.5, Easing::EaseInOut)),
        // Activation arrives from the wrapper's whileInView
        TriggerType::InView => AnimationProps::default()
            .variants(Variants::new(stroke(0.0, 0.3), stroke(1.0, 1.0)))
            .initial(VariantLabel::Initial)
            .transition(Transition::tween(1.5, Easing::EaseInOut)),
    }
}

fn wrapper_props(trigger: TriggerType) -> AnimationProps {
    match trigger {
        TriggerType::Hover => AnimationProps::default()
            .initial(VariantLabel::Initial)
            .while_hover(VariantLabel::Hover),
        TriggerType::InView => AnimationProps::default()
            .initial(VariantLabel::Initial)
            .while_in_view(VariantLabel::Hover)
            .viewport(Viewport::ONCE_HALF),
        // Paths declare `animate` themselves
        TriggerType::Loop | TriggerType::Mount => AnimationProps::empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lively_motion::{AnimationTarget, KeyframeValue};

    #[test]
    fn test_override_wins_outright() {
        for context in [true, false] {
            for reduced in [true, false] {
                assert!(resolve_animated(Some(true), context, reduced));
                assert!(!resolve_animated(Some(false), context, reduced));
            }
        }
    }

    #[test]
    fn test_context_then_preference() {
        assert!(!resolve_animated(None, false, false));
        assert!(!resolve_animated(None, false, true));
        assert!(!resolve_animated(None, true, true));
        assert!(resolve_animated(None, true, false));
    }

    #[test]
    fn test_disabled_bundle_shows_idle_state() {
        let anim = IconAnimation::resolve(false, MotionType::Rotate, TriggerType::Loop);
        assert_eq!(anim.transition, Some(Transition::instant()));
        assert_eq!(anim.preset_variants, None);
        assert_eq!(anim.get_variants(preset(MotionType::Rotate).variants), None);
        assert_eq!(
            anim.animation_props,
            AnimationProps::default()
                .initial(VariantLabel::Initial)
                .variants(preset(MotionType::Rotate).variants)
        );
        assert_eq!(anim.preset_transition, preset(MotionType::Rotate).transition);
    }

    #[test]
    fn test_enabled_passes_variants_through() {
        let anim = IconAnimation::resolve(true, MotionType::Pulse, TriggerType::Hover);
        assert_eq!(anim.transition, None);
        assert_eq!(anim.preset_variants, Some(preset(MotionType::Pulse).variants));
        assert_eq!(anim.get_variants(7), Some(7));
    }

    #[test]
    fn test_loop_repeats_forever() {
        let anim = IconAnimation::resolve(true, MotionType::Spin, TriggerType::Loop);
        let transition = anim.animation_props.transition.unwrap();
        assert_eq!(transition.repeat, Some(Repeat::Infinite));
        assert_eq!(transition.repeat_type, Some(lively_motion::RepeatType::Loop));
        assert_eq!(transition.duration, Some(1.0));
        assert_eq!(
            anim.animation_props.animate,
            Some(AnimationTarget::Label(VariantLabel::Hover))
        );
    }

    #[test]
    fn test_mount_animates_once() {
        let anim = IconAnimation::resolve(true, MotionType::Scale, TriggerType::Mount);
        let props = anim.animation_props;
        assert_eq!(props.animate, Some(AnimationTarget::Label(VariantLabel::Hover)));
        assert_eq!(props.transition, Some(preset(MotionType::Scale).transition));
        assert_eq!(props.while_hover, None);
    }

    #[test]
    fn test_in_view_uses_half_viewport_once() {
        let anim = IconAnimation::resolve(true, MotionType::Bounce, TriggerType::InView);
        assert_eq!(anim.animation_props.viewport, Some(Viewport::ONCE_HALF));
        assert_eq!(
            anim.animation_props.while_in_view,
            Some(AnimationTarget::Label(VariantLabel::Hover))
        );
    }

    #[test]
    fn test_draw_hover_redraws_path() {
        let anim = IconAnimation::resolve(true, MotionType::Draw, TriggerType::Hover);
        let variants = anim.path_animation_props.variants.unwrap();
        assert_eq!(
            variants.hover.path_length,
            Some(KeyframeValue::from([1.0, 0.0, 1.0]))
        );
        assert_eq!(
            anim.draw_wrapper_props,
            AnimationProps::default()
                .initial(VariantLabel::Initial)
                .while_hover(VariantLabel::Hover)
        );
    }

    #[test]
    fn test_draw_loop_and_mount_need_no_wrapper() {
        for trigger in [TriggerType::Loop, TriggerType::Mount] {
            let anim = IconAnimation::resolve(true, MotionType::Draw, trigger);
            assert!(anim.draw_wrapper_props.is_empty(), "{trigger}");
            assert!(anim.path_animation_props.animate.is_some(), "{trigger}");
        }
    }

    #[test]
    fn test_draw_loop_timing() {
        let anim = IconAnimation::resolve(true, MotionType::Draw, TriggerType::Loop);
        let transition = anim.path_animation_props.transition.unwrap();
        assert_eq!(transition.duration, Some(3.0));
        assert_eq!(transition.repeat, Some(Repeat::Infinite));
        assert_eq!(transition.repeat_type, None);
        assert_eq!(transition.times.as_deref(), Some(&[0.0, 0.4, 0.6, 1.0][..]));
    }

    #[test]
    fn test_path_bundles_empty_unless_animated_draw() {
        for motion in MotionType::ALL {
            for trigger in TriggerType::ALL {
                for animated in [true, false] {
                    let anim = IconAnimation::resolve(animated, motion, trigger);
                    if !(animated && motion.is_draw()) {
                        assert!(anim.path_animation_props.is_empty());
                        assert!(anim.draw_wrapper_props.is_empty());
                    }
                }
            }
        }
    }
}
