use lively_core::{AnimationContext, StaticPreference};
use lively_icons::{icons, render_with, IconProps};
use lively_motion::{AnimationTarget, MotionType, TriggerType, VariantLabel, Viewport};

fn animated_context() -> AnimationContext {
    AnimationContext::new(true, StaticPreference(false))
}

fn parse(svg: &str) -> usvg::Tree {
    usvg::Tree::from_str(svg, &usvg::Options::default()).expect("rendered SVG should parse")
}

#[test]
fn test_non_draw_icon_animates_root_only() {
    let ctx = animated_context();
    let svg = render_with(&ctx, &icons::BELL, &IconProps::new());

    let motion = svg.motion.as_ref().expect("root carries animation props");
    assert_eq!(
        motion.while_hover,
        Some(AnimationTarget::Label(VariantLabel::Hover))
    );
    assert!(svg.children.iter().all(|child| child.motion.is_none()));
}

#[test]
fn test_draw_icon_splits_wrapper_and_paths() {
    let ctx = animated_context();
    let svg = render_with(
        &ctx,
        &icons::MAIL,
        &IconProps::new().trigger(TriggerType::InView),
    );

    let wrapper = svg.motion.as_ref().expect("wrapper propagates in-view");
    assert_eq!(
        wrapper.while_in_view,
        Some(AnimationTarget::Label(VariantLabel::Hover))
    );
    assert_eq!(
        wrapper.initial,
        Some(AnimationTarget::Label(VariantLabel::Initial))
    );
    assert_eq!(wrapper.viewport, Some(Viewport::ONCE_HALF));
    assert_eq!(wrapper.variants, None);

    let expected = AnimationContext::new(true, StaticPreference(false))
        .use_icon_animation(None, MotionType::Draw, TriggerType::InView)
        .path_animation_props;
    assert_eq!(svg.children.len(), 2);
    for child in &svg.children {
        let motion = child.motion.as_ref().expect("each shape draws itself");
        assert_eq!(motion, &expected);
    }
}

#[test]
fn test_draw_loop_has_no_wrapper_bundle() {
    let ctx = animated_context();
    let svg = render_with(
        &ctx,
        &icons::CHECK,
        &IconProps::new().trigger(TriggerType::Loop),
    );
    assert!(svg.motion.is_none());
    assert!(svg.children[0].motion.as_ref().unwrap().animate.is_some());
}

#[test]
fn test_disabled_draw_icon_is_static() {
    let ctx = AnimationContext::new(false, StaticPreference(false));
    let svg = render_with(&ctx, &icons::ACTIVITY, &IconProps::new());
    assert!(svg.motion.is_none());
    assert!(svg.children.iter().all(|child| child.motion.is_none()));
}

#[test]
fn test_motion_override_replaces_icon_default() {
    let ctx = animated_context();
    let svg = render_with(
        &ctx,
        &icons::CHECK,
        &IconProps::new().motion(MotionType::Spin),
    );
    let motion = svg.motion.as_ref().unwrap();
    assert_eq!(
        motion.variants,
        Some(lively_motion::preset(MotionType::Spin).variants)
    );
    assert!(svg.children[0].motion.is_none());
}

#[test]
fn test_accessibility_attributes() {
    let ctx = animated_context();

    let decorative = render_with(&ctx, &icons::STAR, &IconProps::new());
    assert_eq!(decorative.attribute("aria-hidden"), Some("true"));
    assert_eq!(decorative.attribute("role"), None);

    let labelled = render_with(&ctx, &icons::STAR, &IconProps::new().aria_label("Favorite"));
    assert_eq!(labelled.attribute("role"), Some("img"));
    assert_eq!(labelled.attribute("aria-label"), Some("Favorite"));
    assert_eq!(labelled.attribute("aria-hidden"), None);
}

#[test]
fn test_class_and_stroke_props() {
    let ctx = animated_context();
    let svg = render_with(
        &ctx,
        &icons::SEARCH,
        &IconProps::new().class_name(" text-red-500 ").stroke_width(1.5),
    );
    assert_eq!(
        svg.attribute("class"),
        Some("lively-icon lively-icon-search text-red-500")
    );
    assert_eq!(svg.attribute("stroke-width"), Some("1.5"));
}

#[test]
fn test_every_icon_renders_valid_svg() {
    let ctx = animated_context();
    for icon in icons::ALL {
        for trigger in TriggerType::ALL {
            let props = IconProps::new().size(32.0).trigger(trigger);
            let markup = render_with(&ctx, icon, &props).to_svg();
            let tree = parse(&markup);
            assert_eq!(tree.size().width(), 32.0, "{}", icon.name);
            assert!(markup.contains("data-motion"), "{} {}", icon.name, trigger);
        }
    }
}

#[test]
fn test_data_motion_round_trips_as_json() {
    let ctx = animated_context();
    let svg = render_with(&ctx, &icons::HEART, &IconProps::new().trigger(TriggerType::Loop));
    let markup = svg.to_svg();

    let start = markup.find("data-motion=\"").unwrap() + "data-motion=\"".len();
    let end = start + markup[start..].find('"').unwrap();
    let json = markup[start..end].replace("&quot;", "\"");
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["animate"], "hover");
    assert_eq!(value["transition"]["repeat"], "Infinity");
    assert_eq!(value["transition"]["repeatType"], "loop");
}
