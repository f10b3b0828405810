use serde::{Deserialize, Serialize};

use crate::models::{Player, Position, Year};

/// Optional criteria for narrowing a player list. Unset fields match
/// everything; set fields are combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerFilters {
    pub position: Option<Position>,
    pub jersey_number: Option<u32>,
    pub year: Option<Year>,
    /// Strict lower bound in cm
    pub height_greater_than: Option<f32>,
    /// Strict upper bound in cm
    pub height_less_than: Option<f32>,
    pub school_id: Option<u64>,
}

impl PlayerFilters {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, player: &Player) -> bool {
        if self.position.is_some_and(|p| p != player.position) {
            return false;
        }
        if self.jersey_number.is_some_and(|n| n != player.jersey_number) {
            return false;
        }
        if self.year.is_some() && self.year != player.year {
            return false;
        }
        if self.school_id.is_some() && self.school_id != player.school_id {
            return false;
        }

        // Height bounds never match a player with unknown height.
        if let Some(min) = self.height_greater_than {
            if !player.height.is_some_and(|h| h > min) {
                return false;
            }
        }
        if let Some(max) = self.height_less_than {
            if !player.height.is_some_and(|h| h < max) {
                return false;
            }
        }

        true
    }

    pub fn apply<'a>(&self, players: &'a [Player]) -> Vec<&'a Player> {
        players.iter().filter(|p| self.matches(p)).collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Stable sort by jersey number.
pub fn sort_by_jersey<'a>(players: &[&'a Player], order: SortOrder) -> Vec<&'a Player> {
    let mut sorted = players.to_vec();
    match order {
        SortOrder::Asc => sorted.sort_by_key(|p| p.jersey_number),
        SortOrder::Desc => sorted.sort_by(|a, b| b.jersey_number.cmp(&a.jersey_number)),
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<Player> {
        vec![
            Player::new(1, "Hinata", Position::WingSpiker, 10)
                .with_height(164.2)
                .with_year(Year::First)
                .with_school(1),
            Player::new(2, "Kageyama", Position::Setter, 9)
                .with_height(180.6)
                .with_year(Year::First)
                .with_school(1),
            Player::new(3, "Oikawa", Position::Setter, 1)
                .with_height(184.3)
                .with_year(Year::Third)
                .with_school(2),
            Player::new(4, "Yachi", Position::None, 0),
        ]
    }

    #[test]
    fn test_empty_filters_match_everything() {
        let players = roster();
        let filters = PlayerFilters::default();
        assert!(filters.is_empty());
        assert_eq!(filters.apply(&players).len(), players.len());
    }

    #[test]
    fn test_combined_filters() {
        let players = roster();
        let filters = PlayerFilters {
            position: Some(Position::Setter),
            school_id: Some(1),
            ..Default::default()
        };

        let ids: Vec<u64> = filters.apply(&players).iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_height_bounds_are_strict_and_skip_unknown() {
        let players = roster();
        let filters = PlayerFilters {
            height_greater_than: Some(164.2),
            height_less_than: Some(184.3),
            ..Default::default()
        };

        let ids: Vec<u64> = filters.apply(&players).iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_filters_from_camel_case_json() {
        let filters: PlayerFilters =
            serde_json::from_str(r#"{"position":"SETTER","heightGreaterThan":182}"#).unwrap();
        let players = roster();
        let ids: Vec<u64> = filters.apply(&players).iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn test_sort_by_jersey() {
        let players = roster();
        let refs: Vec<&Player> = players.iter().collect();

        let asc: Vec<u32> =
            sort_by_jersey(&refs, SortOrder::Asc).iter().map(|p| p.jersey_number).collect();
        assert_eq!(asc, vec![0, 1, 9, 10]);

        let desc: Vec<u32> =
            sort_by_jersey(&refs, SortOrder::Desc).iter().map(|p| p.jersey_number).collect();
        assert_eq!(desc, vec![10, 9, 1, 0]);
    }
}
