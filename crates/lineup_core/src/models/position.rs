use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LineupError;

/// Volleyball playing position.
///
/// `None` marks a rostered player without an assigned position; such players
/// are listed on the bench but never auto-placed into a lineup slot.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Position {
    Setter,
    MiddleBlocker,
    WingSpiker,
    OutsideHitter,
    Libero,
    #[default]
    None,
}

impl Position {
    const ALL: [Position; 6] = [
        Position::Setter,
        Position::MiddleBlocker,
        Position::WingSpiker,
        Position::OutsideHitter,
        Position::Libero,
        Position::None,
    ];

    /// All positions in declaration order. `None` is only included on request.
    pub fn all(include_none: bool) -> Vec<Position> {
        Self::ALL.iter().copied().filter(|p| include_none || *p != Position::None).collect()
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Position::Setter => "Setter",
            Position::MiddleBlocker => "Middle Blocker",
            Position::WingSpiker => "Wing Spiker",
            Position::OutsideHitter => "Outside Hitter",
            Position::Libero => "Libero",
            Position::None => "None",
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            Position::Setter => "S",
            Position::MiddleBlocker => "MB",
            Position::WingSpiker => "WS",
            Position::OutsideHitter => "OH",
            Position::Libero => "L",
            Position::None => "-",
        }
    }

    /// Wire name, e.g. `MIDDLE_BLOCKER`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Setter => "SETTER",
            Position::MiddleBlocker => "MIDDLE_BLOCKER",
            Position::WingSpiker => "WING_SPIKER",
            Position::OutsideHitter => "OUTSIDE_HITTER",
            Position::Libero => "LIBERO",
            Position::None => "NONE",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Position {
    type Err = LineupError;

    /// Accepts the wire name in any case (`-` and spaces count as `_`) or the
    /// abbreviation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace(['-', ' '], "_");
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == normalized || p.abbreviation() == normalized)
            .ok_or_else(|| LineupError::UnknownPosition(s.to_string()))
    }
}

/// Student year of a rostered player.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "UPPERCASE")]
pub enum Year {
    First,
    Second,
    Third,
    NonStudent,
}

impl Year {
    pub fn display_name(&self) -> &'static str {
        match self {
            Year::First => "1st Year",
            Year::Second => "2nd Year",
            Year::Third => "3rd Year",
            Year::NonStudent => "Non-Student",
        }
    }

    /// School year as a number; non-students count as 0.
    pub fn numeric_value(&self) -> u8 {
        match self {
            Year::First => 1,
            Year::Second => 2,
            Year::Third => 3,
            Year::NonStudent => 0,
        }
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
