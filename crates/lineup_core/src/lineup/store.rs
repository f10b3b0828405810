use super::auto_fill::auto_fill;
use super::formation::Formation;
use super::record;
use super::slot::PositionSlot;
use crate::config::LineupConfig;
use crate::error::{self, StoreError};
use crate::models::Player;
use crate::store::{KeyValueStore, RosterId, StorageKey, DEFAULT_KEY_PREFIX};

/// Keeps one formation per roster in a key-value store.
///
/// Reads never fail: a missing or unreadable record loads as the empty
/// formation. Every mutation returns the new formation first and then writes
/// it back; a failed write is logged and otherwise ignored, so the returned
/// value is always the caller's source of truth. Concurrent writers sharing a
/// backend follow last-write-wins.
#[derive(Debug)]
pub struct LineupStore<S: KeyValueStore> {
    storage: S,
    key_prefix: String,
    pretty_json: bool,
}

impl<S: KeyValueStore> LineupStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage, key_prefix: DEFAULT_KEY_PREFIX.to_string(), pretty_json: false }
    }

    /// Store using the prefix and formatting from `config`, after validating it.
    pub fn with_config(storage: S, config: &LineupConfig) -> error::Result<Self> {
        config.validate()?;
        Ok(Self { storage, key_prefix: config.key_prefix.clone(), pretty_json: config.pretty_json })
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn key_for(&self, roster_id: RosterId) -> StorageKey {
        StorageKey::for_roster(&self.key_prefix, roster_id)
    }

    /// Persisted formation for `roster_id`, or the empty formation.
    pub fn load(&self, roster_id: RosterId) -> Formation {
        let key = self.key_for(roster_id);
        let raw = match self.storage.get(key.as_str()) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                log::debug!("No lineup stored for roster {}", roster_id);
                return Formation::empty();
            }
            Err(e) => {
                log::warn!("Failed to read lineup for roster {}: {}", roster_id, e);
                return Formation::empty();
            }
        };

        match record::decode(&raw) {
            Ok(formation) => {
                log::debug!(
                    "Loaded lineup for roster {} ({}/7 filled)",
                    roster_id,
                    formation.filled_count()
                );
                formation
            }
            Err(e) => {
                log::warn!("Discarding malformed lineup for roster {}: {}", roster_id, e);
                Formation::empty()
            }
        }
    }

    /// Writes `formation` for `roster_id`. Failures are logged, not returned.
    pub fn save(&mut self, roster_id: RosterId, formation: &Formation) {
        if let Err(e) = self.try_save(roster_id, formation) {
            log::warn!("Failed to persist lineup for roster {}: {}", roster_id, e);
        }
    }

    /// Like [`save`](Self::save) but surfaces the storage error.
    pub fn try_save(&mut self, roster_id: RosterId, formation: &Formation) -> Result<(), StoreError> {
        let key = self.key_for(roster_id);
        let raw = record::encode(formation, self.pretty_json)?;
        self.storage.set(key.as_str(), &raw)
    }

    /// Pure: see [`auto_fill`](super::auto_fill::auto_fill). Nothing is persisted.
    pub fn auto_fill(&self, players: &[Player]) -> Formation {
        auto_fill(players)
    }

    /// Sets `slot` to `player`. A player already placed elsewhere keeps that
    /// slot too; clear it first to move them.
    pub fn assign(
        &mut self,
        roster_id: RosterId,
        formation: &Formation,
        player: Player,
        slot: PositionSlot,
    ) -> Formation {
        if let Some(existing) = formation.slot_of(player.id).filter(|s| *s != slot) {
            log::debug!("Player {} is also placed at {} on roster {}", player.id, existing, roster_id);
        }
        let updated = formation.with_player(slot, player);
        self.save(roster_id, &updated);
        updated
    }

    pub fn clear(&mut self, roster_id: RosterId, formation: &Formation, slot: PositionSlot) -> Formation {
        let updated = formation.without_player(slot);
        self.save(roster_id, &updated);
        updated
    }

    pub fn swap(
        &mut self,
        roster_id: RosterId,
        formation: &Formation,
        slot_a: PositionSlot,
        slot_b: PositionSlot,
    ) -> Formation {
        let updated = formation.swapped(slot_a, slot_b);
        self.save(roster_id, &updated);
        updated
    }

    /// Stores the empty formation for `roster_id`.
    pub fn reset(&mut self, roster_id: RosterId) -> Formation {
        let empty = Formation::empty();
        self.save(roster_id, &empty);
        log::info!("Reset lineup for roster {}", roster_id);
        empty
    }

    /// Auto-fills from `players` and stores the result.
    pub fn initialize(&mut self, roster_id: RosterId, players: &[Player]) -> Formation {
        let filled = auto_fill(players);
        self.save(roster_id, &filled);
        log::info!(
            "Initialized lineup for roster {} from {} players ({}/7 filled)",
            roster_id,
            players.len(),
            filled.filled_count()
        );
        filled
    }

    /// Deletes the stored entry; the next `load` sees the empty formation.
    pub fn forget(&mut self, roster_id: RosterId) {
        let key = self.key_for(roster_id);
        match self.storage.remove(key.as_str()) {
            Ok(()) => log::info!("Removed stored lineup for roster {}", roster_id),
            Err(e) => log::warn!("Failed to remove lineup for roster {}: {}", roster_id, e),
        }
    }

    pub fn is_complete(&self, formation: &Formation) -> bool {
        formation.is_complete()
    }

    pub fn players_in_formation<'f>(&self, formation: &'f Formation) -> Vec<&'f Player> {
        formation.players_in_formation()
    }

    pub fn available_players<'a>(&self, formation: &Formation, all: &'a [Player]) -> Vec<&'a Player> {
        formation.available_players(all)
    }
}
