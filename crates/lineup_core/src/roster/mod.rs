//! Read-only helpers over a roster's player list: grouping, filtering,
//! ordering and summary statistics.

pub mod filters;
pub mod stats;

pub use filters::{sort_by_jersey, PlayerFilters, SortOrder};
pub use stats::PlayerStats;

use std::collections::BTreeMap;

use crate::models::{Player, Position};

/// Buckets players by position. Within a bucket, input order is preserved;
/// buckets iterate in position declaration order.
pub fn group_by_position<'a>(
    players: impl IntoIterator<Item = &'a Player>,
) -> BTreeMap<Position, Vec<&'a Player>> {
    let mut groups: BTreeMap<Position, Vec<&'a Player>> = BTreeMap::new();
    for player in players {
        groups.entry(player.position).or_default().push(player);
    }
    groups
}
