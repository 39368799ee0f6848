//! SVG shape primitives

/// One drawable primitive of an icon
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Path {
        d: &'static str,
    },
    Circle {
        cx: f32,
        cy: f32,
        r: f32,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        rx: f32,
    },
    Polyline {
        points: &'static str,
    },
    Polygon {
        points: &'static str,
    },
}

impl Shape {
    /// SVG element name
    pub fn tag(&self) -> &'static str {
        match self {
            Shape::Path { .. } => "path",
            Shape::Circle { .. } => "circle",
            Shape::Line { .. } => "line",
            Shape::Rect { .. } => "rect",
            Shape::Polyline { .. } => "polyline",
            Shape::Polygon { .. } => "polygon",
        }
    }

    /// Geometry attributes in document order
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        match *self {
            Shape::Path { d } => vec![("d", d.to_string())],
            Shape::Circle { cx, cy, r } => vec![
                ("cx", cx.to_string()),
                ("cy", cy.to_string()),
                ("r", r.to_string()),
            ],
            Shape::Line { x1, y1, x2, y2 } => vec![
                ("x1", x1.to_string()),
                ("y1", y1.to_string()),
                ("x2", x2.to_string()),
                ("y2", y2.to_string()),
            ],
            Shape::Rect {
                x,
                y,
                width,
                height,
                rx,
            } => {
                let mut attrs = vec![
                    ("x", x.to_string()),
                    ("y", y.to_string()),
                    ("width", width.to_string()),
                    ("height", height.to_string()),
                ];
                if rx > 0.0 {
                    attrs.push(("rx", rx.to_string()));
                }
                attrs
            }
            Shape::Polyline { points } | Shape::Polygon { points } => {
                vec![("points", points.to_string())]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_omits_zero_radius() {
        let rect = Shape::Rect {
            x: 2.0,
            y: 4.0,
            width: 20.0,
            height: 16.0,
            rx: 0.0,
        };
        assert_eq!(rect.tag(), "rect");
        assert!(rect.attributes().iter().all(|(name, _)| *name != "rx"));
    }

    #[test]
    fn test_circle_attributes() {
        let circle = Shape::Circle {
            cx: 11.0,
            cy: 11.0,
            r: 8.0,
        };
        assert_eq!(
            circle.attributes(),
            vec![("cx", "11".into()), ("cy", "11".into()), ("r", "8".into())]
        );
    }
}
