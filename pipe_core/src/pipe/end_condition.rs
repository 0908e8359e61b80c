//! End restraint conditions for Euler buckling.

use serde::{Deserialize, Serialize};

/// Restraint at the two ends of a strut.
///
/// Tags use the `<end>-<end>` form: `"fix-fix"`, `"pin-fix"`, `"pin-pin"`,
/// `"free-fix"`. Any other tag is read as [`EndCondition::PinPin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum EndCondition {
    /// Both ends fixed
    #[serde(rename = "fix-fix")]
    FixFix,
    /// One end pinned, the other fixed
    #[serde(rename = "pin-fix")]
    PinFix,
    /// Both ends pinned
    #[default]
    #[serde(rename = "pin-pin")]
    PinPin,
    /// Cantilever: one end free, the other fixed
    #[serde(rename = "free-fix")]
    FreeFix,
}

impl EndCondition {
    pub const ALL: [EndCondition; 4] = [
        EndCondition::FixFix,
        EndCondition::PinFix,
        EndCondition::PinPin,
        EndCondition::FreeFix,
    ];

    /// Parse a tag. Unrecognized tags fall back to pin-pin.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "fix-fix" => EndCondition::FixFix,
            "pin-fix" => EndCondition::PinFix,
            "pin-pin" => EndCondition::PinPin,
            "free-fix" => EndCondition::FreeFix,
            _ => EndCondition::PinPin,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            EndCondition::FixFix => "fix-fix",
            EndCondition::PinFix => "pin-fix",
            EndCondition::PinPin => "pin-pin",
            EndCondition::FreeFix => "free-fix",
        }
    }

    /// Multiplier on the pin-ended Euler load
    pub fn factor(&self) -> f64 {
        match self {
            EndCondition::FixFix => 4.0,
            EndCondition::PinFix => 2.045,
            EndCondition::PinPin => 1.0,
            EndCondition::FreeFix => 0.25,
        }
    }
}

impl From<&str> for EndCondition {
    fn from(tag: &str) -> Self {
        EndCondition::from_tag(tag)
    }
}

impl std::fmt::Display for EndCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factors() {
        assert_eq!(EndCondition::from_tag("fix-fix").factor(), 4.0);
        assert_eq!(EndCondition::from_tag("pin-fix").factor(), 2.045);
        assert_eq!(EndCondition::from_tag("pin-pin").factor(), 1.0);
        assert_eq!(EndCondition::from_tag("free-fix").factor(), 0.25);
    }

    #[test]
    fn test_unrecognized_tag_is_pin_pin() {
        assert_eq!(EndCondition::from_tag("fixed"), EndCondition::PinPin);
        assert_eq!(EndCondition::from_tag("FIX-FIX"), EndCondition::PinPin);
        assert_eq!(EndCondition::from_tag(""), EndCondition::PinPin);
        assert_eq!(EndCondition::default(), EndCondition::PinPin);
    }

    #[test]
    fn test_tag_roundtrip() {
        for condition in EndCondition::ALL {
            assert_eq!(EndCondition::from(condition.tag()), condition);
        }
    }

    #[test]
    fn test_serialization_uses_tags() {
        let json = serde_json::to_string(&EndCondition::FreeFix).unwrap();
        assert_eq!(json, "\"free-fix\"");
        let parsed: EndCondition = serde_json::from_str("\"pin-fix\"").unwrap();
        assert_eq!(parsed, EndCondition::PinFix);
    }
}
