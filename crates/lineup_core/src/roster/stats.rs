use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{Player, Position, Year};

/// Summary of a roster's player list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub total_players: usize,
    /// Mean over players with a known height; 0 when none are known.
    pub average_height: f32,
    /// Every position is present, including zero counts.
    pub position_distribution: BTreeMap<Position, usize>,
    /// Every year is present, including zero counts.
    pub year_distribution: BTreeMap<Year, usize>,
}

impl PlayerStats {
    pub fn from_players(players: &[Player]) -> Self {
        let mut position_distribution: BTreeMap<Position, usize> =
            Position::all(true).into_iter().map(|p| (p, 0)).collect();
        let mut year_distribution: BTreeMap<Year, usize> =
            [Year::First, Year::Second, Year::Third, Year::NonStudent]
                .into_iter()
                .map(|y| (y, 0))
                .collect();

        let mut height_sum = 0.0f32;
        let mut height_count = 0usize;

        for player in players {
            *position_distribution.entry(player.position).or_default() += 1;
            if let Some(year) = player.year {
                *year_distribution.entry(year).or_default() += 1;
            }
            if let Some(height) = player.height {
                height_sum += height;
                height_count += 1;
            }
        }

        let average_height =
            if height_count == 0 { 0.0 } else { height_sum / height_count as f32 };

        Self {
            total_players: players.len(),
            average_height,
            position_distribution,
            year_distribution,
        }
    }
}
