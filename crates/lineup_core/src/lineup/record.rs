//! Persisted form of a formation.
//!
//! Current records are a versioned envelope:
//! `{"version": 2, "savedAt": <unix ms>, "formation": {"setter": <player|null>, ...}}`.
//! The browser client stored a bare version-1 value with the paired slots as
//! arrays (`middleBlockers: [a, b]`, `wingSpikers: [a, b]`); those records are
//! still readable and are migrated on load.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::OffsetDateTime;

use super::formation::Formation;
use super::slot::Slot;
use crate::models::Player;

pub const RECORD_VERSION: u32 = 2;

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unrecognized lineup record shape")]
    UnknownShape,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineupRecord {
    pub version: u32,
    /// Unix milliseconds
    pub saved_at: u64,
    pub formation: Formation,
}

impl LineupRecord {
    pub fn new(formation: Formation) -> Self {
        Self { version: RECORD_VERSION, saved_at: current_timestamp(), formation }
    }
}

/// Shape written by the browser client.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct LegacyFormation {
    setter: Option<Player>,
    middle_blockers: [Option<Player>; 2],
    wing_spikers: [Option<Player>; 2],
    outside_hitter: Option<Player>,
    libero: Option<Player>,
}

impl From<LegacyFormation> for Formation {
    fn from(legacy: LegacyFormation) -> Self {
        let [middle_blocker1, middle_blocker2] = legacy.middle_blockers;
        let [wing_spiker1, wing_spiker2] = legacy.wing_spikers;
        Formation {
            setter: Slot::from(legacy.setter),
            middle_blocker1: Slot::from(middle_blocker1),
            middle_blocker2: Slot::from(middle_blocker2),
            wing_spiker1: Slot::from(wing_spiker1),
            wing_spiker2: Slot::from(wing_spiker2),
            outside_hitter: Slot::from(legacy.outside_hitter),
            libero: Slot::from(legacy.libero),
        }
    }
}

pub fn encode(formation: &Formation, pretty: bool) -> Result<String, serde_json::Error> {
    let record = LineupRecord::new(formation.clone());
    if pretty {
        serde_json::to_string_pretty(&record)
    } else {
        serde_json::to_string(&record)
    }
}

/// Decodes a stored value, migrating legacy records.
pub fn decode(raw: &str) -> Result<Formation, RecordError> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    let object = value.as_object().ok_or(RecordError::UnknownShape)?;

    if !object.contains_key("version") {
        let legacy: LegacyFormation = serde_json::from_value(value)?;
        log::info!("Migrated lineup record from version 1 to {}", RECORD_VERSION);
        return Ok(legacy.into());
    }

    let record: LineupRecord = serde_json::from_value(value)?;
    if record.version > RECORD_VERSION {
        log::warn!(
            "Loading lineup record from future version {} (current: {})",
            record.version,
            RECORD_VERSION
        );
    }
    Ok(record.formation)
}

pub fn current_timestamp() -> u64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as u64
}
