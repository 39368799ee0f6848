//! Easing functions for animations

use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::ser::{SerializeTuple, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Easing curve, named after the animation runtime's built-in easings
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    CircIn,
    CircOut,
    BackOut,
    Anticipate,
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Runtime name of a named easing (`None` for cubic bezier)
    pub fn name(&self) -> Option<&'static str> {
        match self {
            Easing::Linear => Some("linear"),
            Easing::EaseIn => Some("easeIn"),
            Easing::EaseOut => Some("easeOut"),
            Easing::EaseInOut => Some("easeInOut"),
            Easing::CircIn => Some("circIn"),
            Easing::CircOut => Some("circOut"),
            Easing::BackOut => Some("backOut"),
            Easing::Anticipate => Some("anticipate"),
            Easing::CubicBezier(..) => None,
        }
    }

    /// Look up a named easing
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "linear" => Easing::Linear,
            "easeIn" => Easing::EaseIn,
            "easeOut" => Easing::EaseOut,
            "easeInOut" => Easing::EaseInOut,
            "circIn" => Easing::CircIn,
            "circOut" => Easing::CircOut,
            "backOut" => Easing::BackOut,
            "anticipate" => Easing::Anticipate,
            _ => return None,
        })
    }

    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => cubic_bezier_ease(t, 0.42, 0.0, 1.0, 1.0),
            Easing::EaseOut => cubic_bezier_ease(t, 0.0, 0.0, 0.58, 1.0),
            Easing::EaseInOut => cubic_bezier_ease(t, 0.42, 0.0, 0.58, 1.0),
            Easing::CircIn => 1.0 - (1.0 - t.clamp(0.0, 1.0).powi(2)).sqrt(),
            Easing::CircOut => (1.0 - (t.clamp(0.0, 1.0) - 1.0).powi(2)).sqrt(),
            Easing::BackOut => back_out(t),
            Easing::Anticipate => {
                let p = t * 2.0;
                if p < 1.0 {
                    0.5 * (1.0 - back_out(1.0 - p))
                } else {
                    0.5 * (2.0 - 2f32.powf(-10.0 * (p - 1.0)))
                }
            }
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier_ease(t, *x1, *y1, *x2, *y2),
        }
    }
}

fn back_out(t: f32) -> f32 {
    cubic_bezier_ease(t, 0.33, 1.53, 0.69, 0.99)
}

/// Cubic bezier easing, as browsers evaluate `cubic-bezier()`.
///
/// Uses Newton-Raphson with binary-search fallback for robustness.
/// Solves in f64 so sampled keyframes stay monotonic near the endpoints.
fn cubic_bezier_ease(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    // Endpoints are always exact
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let x = t as f64;
    let x1 = x1 as f64;
    let y1 = y1 as f64;
    let x2 = x2 as f64;
    let y2 = y2 as f64;

    let mut p = x;
    for _ in 0..8 {
        let err = bezier_sample(p, x1, x2) - x;
        if err.abs() < 1e-7 {
            return bezier_sample(p, y1, y2) as f32;
        }
        let slope = bezier_slope(p, x1, x2);
        if slope.abs() < 1e-7 {
            break; // slope too flat, switch to binary search
        }
        p -= err / slope;
    }

    // Binary search fallback (always converges)
    let mut lo = 0.0_f64;
    let mut hi = 1.0_f64;
    p = x;
    for _ in 0..20 {
        let val = bezier_sample(p, x1, x2);
        if (val - x).abs() < 1e-7 {
            break;
        }
        if val < x {
            lo = p;
        } else {
            hi = p;
        }
        p = (lo + hi) * 0.5;
    }

    bezier_sample(p, y1, y2) as f32
}

/// Evaluate cubic bezier at parameter t: B(t) = 3(1-t)²t·p1 + 3(1-t)t²·p2 + t³
#[inline]
fn bezier_sample(t: f64, p1: f64, p2: f64) -> f64 {
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;
    ((a * t + b) * t + c) * t
}

/// Derivative of cubic bezier: B'(t) = 3(1-t)²·p1 + 6(1-t)t·(p2-p1) + 3t²·(1-p2)
#[inline]
fn bezier_slope(t: f64, p1: f64, p2: f64) -> f64 {
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;
    (3.0 * a * t + 2.0 * b) * t + c
}

// Named easings travel as their runtime name, bezier curves as `[x1, y1, x2, y2]`.

impl Serialize for Easing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Easing::CubicBezier(x1, y1, x2, y2) => {
                let mut tuple = serializer.serialize_tuple(4)?;
                tuple.serialize_element(x1)?;
                tuple.serialize_element(y1)?;
                tuple.serialize_element(x2)?;
                tuple.serialize_element(y2)?;
                tuple.end()
            }
            named => serializer.serialize_str(named.name().unwrap_or("linear")),
        }
    }
}

impl<'de> Deserialize<'de> for Easing {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EasingVisitor;

        impl<'de> Visitor<'de> for EasingVisitor {
            type Value = Easing;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an easing name or a [x1, y1, x2, y2] cubic bezier")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Easing, E> {
                Easing::from_name(v).ok_or_else(|| E::custom(format!("unknown easing `{v}`")))
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Easing, A::Error> {
                let mut points = [0.0f32; 4];
                for (i, point) in points.iter_mut().enumerate() {
                    *point = seq
                        .next_element()?
                        .ok_or_else(|| de::Error::invalid_length(i, &self))?;
                }
                Ok(Easing::CubicBezier(points[0], points[1], points[2], points[3]))
            }
        }

        deserializer.deserialize_any(EasingVisitor)
    }
}
