use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::position::{Position, Year};

/// Backend-assigned player identifier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct PlayerId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(PlayerId)
    }
}

/// Rostered player as delivered by the roster player source.
///
/// Read-only from the lineup's point of view. Identity is `id`; every other
/// field is a display snapshot and may be refreshed via
/// [`Formation::reconcile`](crate::lineup::Formation::reconcile).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    #[serde(default)]
    pub position: Position,
    pub jersey_number: u32,

    /// Height in cm
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<Year>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school_name: Option<String>,
}

impl Player {
    pub fn new(id: u64, name: impl Into<String>, position: Position, jersey_number: u32) -> Self {
        Self {
            id: PlayerId(id),
            name: name.into(),
            position,
            jersey_number,
            height: None,
            year: None,
            school_id: None,
            school_name: None,
        }
    }

    pub fn with_height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn with_year(mut self, year: Year) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_school(mut self, school_id: u64) -> Self {
        self.school_id = Some(school_id);
        self
    }

    /// `#10`
    pub fn jersey_label(&self) -> String {
        format!("#{}", self.jersey_number)
    }

    /// `175.5 cm`, or `-` when unknown
    pub fn height_label(&self) -> String {
        match self.height {
            Some(h) => format!("{} cm", h),
            None => "-".to_string(),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.jersey_label(), self.name, self.position.abbreviation())
    }
}
