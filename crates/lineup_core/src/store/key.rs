use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LineupError;

pub const DEFAULT_KEY_PREFIX: &str = "lineup_";

/// Roster identifier as assigned by the backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct RosterId(pub u64);

impl fmt::Display for RosterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RosterId {
    type Err = LineupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(RosterId).map_err(|_| LineupError::InvalidRosterId(s.to_string()))
    }
}

impl From<u64> for RosterId {
    fn from(id: u64) -> Self {
        RosterId(id)
    }
}

/// Storage key for one roster's formation, e.g. `lineup_7`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageKey(String);

impl StorageKey {
    pub fn for_roster(prefix: &str, roster_id: RosterId) -> Self {
        StorageKey(format!("{}{}", prefix, roster_id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Keys limited to `[A-Za-z0-9_.-]`, non-empty and not starting with `.`.
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && !key.starts_with('.')
        && key.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}
