//! Built-in icons
//!
//! Geometry follows Lucide's 24x24 grid. Each icon picks the motion that suits
//! it; callers can override it per render.

use crate::shape::Shape;
use lively_motion::MotionType;
use rustc_hash::FxHashMap;
use std::sync::OnceLock;

/// Static definition of an icon
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IconDef {
    /// Kebab-case name
    pub name: &'static str,
    /// Motion used when the caller does not choose one
    pub default_motion: MotionType,
    pub shapes: &'static [Shape],
}

const fn path(d: &'static str) -> Shape {
    Shape::Path { d }
}

/// activity
pub const ACTIVITY: IconDef = IconDef {
    name: "activity",
    default_motion: MotionType::Draw,
    shapes: &[Shape::Polyline {
        points: "22 12 18 12 15 21 9 3 6 12 2 12",
    }],
};

/// arrow right
pub const ARROW_RIGHT: IconDef = IconDef {
    name: "arrow-right",
    default_motion: MotionType::Translate,
    shapes: &[path("M5 12h14"), path("m12 5 7 7-7 7")],
};

/// bell
pub const BELL: IconDef = IconDef {
    name: "bell",
    default_motion: MotionType::Shake,
    shapes: &[
        path("M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9"),
        path("M10.3 21a1.94 1.94 0 0 0 3.4 0"),
    ],
};

/// check
pub const CHECK: IconDef = IconDef {
    name: "check",
    default_motion: MotionType::Draw,
    shapes: &[path("M20 6 9 17l-5-5")],
};

/// heart
pub const HEART: IconDef = IconDef {
    name: "heart",
    default_motion: MotionType::Pulse,
    shapes: &[path(
        "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z",
    )],
};

/// loader circle
pub const LOADER_CIRCLE: IconDef = IconDef {
    name: "loader-circle",
    default_motion: MotionType::Spin,
    shapes: &[path("M21 12a9 9 0 1 1-6.219-8.56")],
};

/// mail
pub const MAIL: IconDef = IconDef {
    name: "mail",
    default_motion: MotionType::Draw,
    shapes: &[
        Shape::Rect {
            x: 2.0,
            y: 4.0,
            width: 20.0,
            height: 16.0,
            rx: 2.0,
        },
        path("m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"),
    ],
};

/// refresh cw
pub const REFRESH_CW: IconDef = IconDef {
    name: "refresh-cw",
    default_motion: MotionType::Rotate,
    shapes: &[
        path("M3 12a9 9 0 0 1 9-9 9.75 9.75 0 0 1 6.74 2.74L21 8"),
        path("M21 3v5h-5"),
        path("M21 12a9 9 0 0 1-9 9 9.75 9.75 0 0 1-6.74-2.74L3 16"),
        path("M8 16H3v5"),
    ],
};

/// search
pub const SEARCH: IconDef = IconDef {
    name: "search",
    default_motion: MotionType::Scale,
    shapes: &[
        Shape::Circle {
            cx: 11.0,
            cy: 11.0,
            r: 8.0,
        },
        path("m21 21-4.3-4.3"),
    ],
};

/// star
pub const STAR: IconDef = IconDef {
    name: "star",
    default_motion: MotionType::Scale,
    shapes: &[Shape::Polygon {
        points: "12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2",
    }],
};

/// sun
pub const SUN: IconDef = IconDef {
    name: "sun",
    default_motion: MotionType::Spin,
    shapes: &[
        Shape::Circle {
            cx: 12.0,
            cy: 12.0,
            r: 4.0,
        },
        path("M12 2v2"),
        path("M12 20v2"),
        path("m4.93 4.93 1.41 1.41"),
        path("m17.66 17.66 1.41 1.41"),
        path("M2 12h2"),
        path("M20 12h2"),
        path("m6.34 17.66-1.41 1.41"),
        path("m19.07 4.93-1.41 1.41"),
    ],
};

/// x
pub const X: IconDef = IconDef {
    name: "x",
    default_motion: MotionType::Rotate,
    shapes: &[
        Shape::Line {
            x1: 18.0,
            y1: 6.0,
            x2: 6.0,
            y2: 18.0,
        },
        Shape::Line {
            x1: 6.0,
            y1: 6.0,
            x2: 18.0,
            y2: 18.0,
        },
    ],
};

/// zap
pub const ZAP: IconDef = IconDef {
    name: "zap",
    default_motion: MotionType::Bounce,
    shapes: &[Shape::Polygon {
        points: "13 2 3 14 12 14 11 22 21 10 12 10 13 2",
    }],
};

/// Every built-in icon, sorted by name
pub const ALL: &[IconDef] = &[
    ACTIVITY,
    ARROW_RIGHT,
    BELL,
    CHECK,
    HEART,
    LOADER_CIRCLE,
    MAIL,
    REFRESH_CW,
    SEARCH,
    STAR,
    SUN,
    X,
    ZAP,
];

/// Look up a built-in icon by name
pub fn find(name: &str) -> Option<&'static IconDef> {
    static INDEX: OnceLock<FxHashMap<&'static str, &'static IconDef>> = OnceLock::new();
    INDEX
        .get_or_init(|| ALL.iter().map(|icon| (icon.name, icon)).collect())
        .get(name)
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_sorted_and_unique() {
        let names: Vec<&str> = ALL.iter().map(|icon| icon.name).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_find() {
        assert_eq!(find("bell").map(|icon| icon.default_motion), Some(MotionType::Shake));
        assert!(find("does-not-exist").is_none());
    }

    #[test]
    fn test_every_icon_has_geometry() {
        for icon in ALL {
            assert!(!icon.shapes.is_empty(), "{} has no shapes", icon.name);
        }
    }
}
