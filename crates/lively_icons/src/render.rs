//! Rendering icons to SVG
//!
//! [`render`] builds an [`SvgElement`] tree with the animation bundles attached
//! as `motion`. [`SvgElement::to_svg`] writes markup, carrying each bundle as a
//! `data-motion` JSON attribute for the client-side animation runtime.

use crate::icons::IconDef;
use crate::props::IconProps;
use lively_core::{AnimationContext, IconAnimation};
use lively_motion::AnimationProps;
use serde::Serialize;
use std::fmt::Write;

/// One SVG element with its animation directives
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SvgElement {
    pub tag: &'static str,
    /// Attributes in document order
    pub attributes: Vec<(&'static str, String)>,
    /// Directives for this element, absent when there are none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motion: Option<AnimationProps>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SvgElement>,
}

impl SvgElement {
    /// Value of an attribute
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Write the element as SVG markup
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }

    fn write_to(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        if self.tag == "svg" {
            out.push_str(r#" xmlns="http://www.w3.org/2000/svg""#);
        }
        for (name, value) in &self.attributes {
            let _ = write!(out, r#" {}="{}""#, name, escape_attr(value));
        }
        if let Some(motion) = &self.motion {
            match serde_json::to_string(motion) {
                Ok(json) => {
                    let _ = write!(out, r#" data-motion="{}""#, escape_attr(&json));
                }
                Err(err) => {
                    tracing::warn!("Skipping unserializable motion on <{}>: {}", self.tag, err)
                }
            }
        }

        if self.children.is_empty() {
            out.push_str("/>");
            return;
        }

        out.push('>');
        for child in &self.children {
            child.write_to(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn non_empty(props: AnimationProps) -> Option<AnimationProps> {
    (!props.is_empty()).then_some(props)
}

/// Render an icon against the process-wide animation context
pub fn render(icon: &IconDef, props: &IconProps) -> SvgElement {
    render_with(AnimationContext::current(), icon, props)
}

/// Render an icon against an explicit animation context
pub fn render_with(ctx: &AnimationContext, icon: &IconDef, props: &IconProps) -> SvgElement {
    let args = props.animation_args(icon);
    let animation = ctx.use_icon_animation(args.animated, args.motion, args.trigger);
    build(icon, props, args.motion.is_draw(), animation)
}

fn build(icon: &IconDef, props: &IconProps, draw: bool, animation: IconAnimation) -> SvgElement {
    let IconAnimation {
        animation_props,
        path_animation_props,
        draw_wrapper_props,
        ..
    } = animation;

    let path_motion = if draw {
        non_empty(path_animation_props)
    } else {
        None
    };
    let children = icon
        .shapes
        .iter()
        .map(|shape| SvgElement {
            tag: shape.tag(),
            attributes: shape.attributes(),
            motion: path_motion.clone(),
            children: Vec::new(),
        })
        .collect();

    let size = props.size.to_string();
    let mut attributes = vec![
        ("width", size.clone()),
        ("height", size),
        ("viewBox", "0 0 24 24".to_string()),
        ("fill", "none".to_string()),
        ("stroke", "currentColor".to_string()),
        ("stroke-width", props.stroke_width.to_string()),
        ("stroke-linecap", "round".to_string()),
        ("stroke-linejoin", "round".to_string()),
    ];

    let mut class = format!("lively-icon lively-icon-{}", icon.name);
    if let Some(extra) = props.class_name.as_deref().filter(|c| !c.trim().is_empty()) {
        class.push(' ');
        class.push_str(extra.trim());
    }
    attributes.push(("class", class));

    match props.aria_label.as_deref() {
        Some(label) => {
            attributes.push(("role", "img".to_string()));
            attributes.push(("aria-label", label.to_string()));
        }
        None => attributes.push(("aria-hidden", "true".to_string())),
    }

    let root_motion = if draw {
        non_empty(draw_wrapper_props)
    } else {
        Some(animation_props)
    };

    SvgElement {
        tag: "svg",
        attributes,
        motion: root_motion,
        children,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_attr() {
        assert_eq!(
            escape_attr(r#"{"a":"<b>&"}"#),
            "{&quot;a&quot;:&quot;&lt;b&gt;&amp;&quot;}"
        );
    }

    #[test]
    fn test_self_closing_leaf() {
        let leaf = SvgElement {
            tag: "path",
            attributes: vec![("d", "M5 12h14".to_string())],
            motion: None,
            children: Vec::new(),
        };
        assert_eq!(leaf.to_svg(), r#"<path d="M5 12h14"/>"#);
    }
}
