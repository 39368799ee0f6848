//! Motion and trigger identifiers
//!
//! Both enums are closed, but parsing them is lenient: a name that is not
//! recognised resolves to the default (`scale` / `hover`) instead of failing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which visual motion an icon plays
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum MotionType {
    #[default]
    Scale,
    Rotate,
    Translate,
    Shake,
    Pulse,
    Bounce,
    /// Stroke drawing, animated on the individual paths
    Draw,
    Spin,
    None,
}

impl MotionType {
    pub const ALL: [MotionType; 9] = [
        MotionType::Scale,
        MotionType::Rotate,
        MotionType::Translate,
        MotionType::Shake,
        MotionType::Pulse,
        MotionType::Bounce,
        MotionType::Draw,
        MotionType::Spin,
        MotionType::None,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MotionType::Scale => "scale",
            MotionType::Rotate => "rotate",
            MotionType::Translate => "translate",
            MotionType::Shake => "shake",
            MotionType::Pulse => "pulse",
            MotionType::Bounce => "bounce",
            MotionType::Draw => "draw",
            MotionType::Spin => "spin",
            MotionType::None => "none",
        }
    }

    /// Parse a motion name, falling back to [`MotionType::Scale`]
    pub fn from_name(name: &str) -> Self {
        match normalize(name).as_str() {
            "scale" => MotionType::Scale,
            "rotate" => MotionType::Rotate,
            "translate" => MotionType::Translate,
            "shake" => MotionType::Shake,
            "pulse" => MotionType::Pulse,
            "bounce" => MotionType::Bounce,
            "draw" => MotionType::Draw,
            "spin" => MotionType::Spin,
            "none" => MotionType::None,
            other => {
                tracing::trace!(motion = other, "unknown motion type, using scale");
                MotionType::Scale
            }
        }
    }

    /// Whether the motion is drawn on the paths rather than the root element
    pub fn is_draw(&self) -> bool {
        matches!(self, MotionType::Draw)
    }
}

/// When an icon's animation activates
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum TriggerType {
    /// While the pointer is over the icon
    #[default]
    Hover,
    /// Continuously
    Loop,
    /// Once, on first render
    Mount,
    /// Once, when half of the icon has scrolled into view
    InView,
}

impl TriggerType {
    pub const ALL: [TriggerType; 4] = [
        TriggerType::Hover,
        TriggerType::Loop,
        TriggerType::Mount,
        TriggerType::InView,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TriggerType::Hover => "hover",
            TriggerType::Loop => "loop",
            TriggerType::Mount => "mount",
            TriggerType::InView => "inView",
        }
    }

    /// Parse a trigger name, falling back to [`TriggerType::Hover`]
    pub fn from_name(name: &str) -> Self {
        match normalize(name).as_str() {
            "hover" => TriggerType::Hover,
            "loop" => TriggerType::Loop,
            "mount" => TriggerType::Mount,
            "inview" => TriggerType::InView,
            other => {
                tracing::trace!(trigger = other, "unknown trigger type, using hover");
                TriggerType::Hover
            }
        }
    }
}

/// Lowercase and strip separators so `inView`, `in-view` and `in_view` agree
fn normalize(name: &str) -> String {
    name.trim()
        .chars()
        .filter(|c| *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

impl From<&str> for MotionType {
    fn from(name: &str) -> Self {
        MotionType::from_name(name)
    }
}

impl From<String> for MotionType {
    fn from(name: String) -> Self {
        MotionType::from_name(&name)
    }
}

impl From<MotionType> for &'static str {
    fn from(motion: MotionType) -> Self {
        motion.as_str()
    }
}

impl fmt::Display for MotionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for TriggerType {
    fn from(name: &str) -> Self {
        TriggerType::from_name(name)
    }
}

impl From<String> for TriggerType {
    fn from(name: String) -> Self {
        TriggerType::from_name(&name)
    }
}

impl From<TriggerType> for &'static str {
    fn from(trigger: TriggerType) -> Self {
        trigger.as_str()
    }
}

impl fmt::Display for TriggerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for motion in MotionType::ALL {
            assert_eq!(MotionType::from_name(motion.as_str()), motion);
        }
        for trigger in TriggerType::ALL {
            assert_eq!(TriggerType::from_name(trigger.as_str()), trigger);
        }
    }

    #[test]
    fn test_in_view_spellings() {
        for name in ["inView", "in-view", "in_view", "INVIEW", " inview "] {
            assert_eq!(TriggerType::from_name(name), TriggerType::InView, "{name}");
        }
    }

    #[test]
    fn test_unknown_names_fall_back() {
        assert_eq!(MotionType::from_name("wiggle"), MotionType::Scale);
        assert_eq!(MotionType::from_name(""), MotionType::Scale);
        assert_eq!(TriggerType::from_name("click"), TriggerType::Hover);
    }

    #[test]
    fn test_serde_is_lenient() {
        let trigger: TriggerType = serde_json::from_str("\"focus\"").unwrap();
        assert_eq!(trigger, TriggerType::Hover);

        let json = serde_json::to_string(&TriggerType::InView).unwrap();
        assert_eq!(json, "\"inView\"");
    }
}
