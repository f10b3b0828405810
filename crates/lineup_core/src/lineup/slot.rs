use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LineupError;
use crate::models::{Player, Position};

/// One of the seven fixed places in a starting lineup.
///
/// Declaration order is the canonical slot order used by every ordered view
/// (`setter` first, `libero` last).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub enum PositionSlot {
    Setter,
    MiddleBlocker1,
    MiddleBlocker2,
    WingSpiker1,
    WingSpiker2,
    OutsideHitter,
    Libero,
}

impl PositionSlot {
    pub const ALL: [PositionSlot; 7] = [
        PositionSlot::Setter,
        PositionSlot::MiddleBlocker1,
        PositionSlot::MiddleBlocker2,
        PositionSlot::WingSpiker1,
        PositionSlot::WingSpiker2,
        PositionSlot::OutsideHitter,
        PositionSlot::Libero,
    ];

    /// Position a player should play to fill this slot.
    pub fn position(&self) -> Position {
        match self {
            PositionSlot::Setter => Position::Setter,
            PositionSlot::MiddleBlocker1 | PositionSlot::MiddleBlocker2 => Position::MiddleBlocker,
            PositionSlot::WingSpiker1 | PositionSlot::WingSpiker2 => Position::WingSpiker,
            PositionSlot::OutsideHitter => Position::OutsideHitter,
            PositionSlot::Libero => Position::Libero,
        }
    }

    /// Index of this slot among the slots sharing its position.
    pub fn ordinal(&self) -> usize {
        match self {
            PositionSlot::MiddleBlocker2 | PositionSlot::WingSpiker2 => 1,
            _ => 0,
        }
    }

    /// Wire name, e.g. `middleBlocker1`.
    pub fn as_str(&self) -> &'static str {
        match self {
            PositionSlot::Setter => "setter",
            PositionSlot::MiddleBlocker1 => "middleBlocker1",
            PositionSlot::MiddleBlocker2 => "middleBlocker2",
            PositionSlot::WingSpiker1 => "wingSpiker1",
            PositionSlot::WingSpiker2 => "wingSpiker2",
            PositionSlot::OutsideHitter => "outsideHitter",
            PositionSlot::Libero => "libero",
        }
    }

    /// Human label, e.g. `Middle Blocker 2`.
    pub fn label(&self) -> String {
        let position = self.position();
        match self {
            PositionSlot::MiddleBlocker1
            | PositionSlot::MiddleBlocker2
            | PositionSlot::WingSpiker1
            | PositionSlot::WingSpiker2 => {
                format!("{} {}", position.display_name(), self.ordinal() + 1)
            }
            _ => position.display_name().to_string(),
        }
    }
}

impl fmt::Display for PositionSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PositionSlot {
    type Err = LineupError;

    /// Slot names are matched case-insensitively; `middle_blocker1` and
    /// `middle-blocker-1` are accepted alongside `middleBlocker1`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String =
            s.trim().chars().filter(|c| !matches!(c, '_' | '-' | ' ')).collect();
        Self::ALL
            .iter()
            .copied()
            .find(|slot| slot.as_str().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| LineupError::UnknownSlot(s.to_string()))
    }
}

/// Occupancy of a single lineup slot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Option<Player>", into = "Option<Player>")]
pub enum Slot {
    #[default]
    Empty,
    Occupied(Player),
}

impl Slot {
    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    pub fn is_occupied(&self) -> bool {
        !self.is_empty()
    }

    pub fn player(&self) -> Option<&Player> {
        match self {
            Slot::Occupied(player) => Some(player),
            Slot::Empty => None,
        }
    }
}

impl From<Option<Player>> for Slot {
    fn from(player: Option<Player>) -> Self {
        match player {
            Some(player) => Slot::Occupied(player),
            None => Slot::Empty,
        }
    }
}

impl From<Slot> for Option<Player> {
    fn from(slot: Slot) -> Self {
        match slot {
            Slot::Occupied(player) => Some(player),
            Slot::Empty => None,
        }
    }
}
