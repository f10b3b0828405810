use std::collections::BTreeMap;

use super::formation::Formation;
use super::slot::PositionSlot;
use super::store::LineupStore;
use crate::error::{LineupError, Result};
use crate::models::{Player, PlayerId, Position};
use crate::roster::group_by_position;
use crate::store::{KeyValueStore, RosterId};

/// Lineup being edited for one roster.
///
/// Holds the roster's players and the current formation. The formation is
/// reconciled against the roster when the session opens, updated in memory on
/// every edit, and written back through the store right after.
pub struct Lineup<'s, S: KeyValueStore> {
    store: &'s mut LineupStore<S>,
    roster_id: RosterId,
    players: Vec<Player>,
    formation: Formation,
}

impl<'s, S: KeyValueStore> Lineup<'s, S> {
    pub fn open(store: &'s mut LineupStore<S>, roster_id: RosterId, players: Vec<Player>) -> Self {
        let formation = store.load(roster_id).reconcile(&players);
        Self { store, roster_id, players, formation }
    }

    pub fn roster_id(&self) -> RosterId {
        self.roster_id
    }

    pub fn formation(&self) -> &Formation {
        &self.formation
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    fn find_player(&self, player_id: PlayerId) -> Result<Player> {
        self.players.iter().find(|p| p.id == player_id).cloned().ok_or_else(|| {
            LineupError::PlayerNotOnRoster { roster_id: self.roster_id.to_string(), player_id }
        })
    }

    /// Places a rostered player in `slot`. Their previous slot, if any, is kept.
    pub fn add_player(&mut self, player_id: PlayerId, slot: PositionSlot) -> Result<&Formation> {
        let player = self.find_player(player_id)?;
        self.formation = self.store.assign(self.roster_id, &self.formation, player, slot);
        Ok(&self.formation)
    }

    /// Moves a rostered player to `slot`, clearing any slot they held before.
    pub fn move_player(&mut self, player_id: PlayerId, slot: PositionSlot) -> Result<&Formation> {
        let player = self.find_player(player_id)?;
        let mut current = self.formation.clone();
        for (held, occupant) in self.formation.iter() {
            if held != slot && occupant.player().is_some_and(|p| p.id == player_id) {
                current = current.without_player(held);
            }
        }
        self.formation = self.store.assign(self.roster_id, &current, player, slot);
        Ok(&self.formation)
    }

    pub fn remove_player(&mut self, slot: PositionSlot) -> &Formation {
        self.formation = self.store.clear(self.roster_id, &self.formation, slot);
        &self.formation
    }

    pub fn swap_players(&mut self, slot_a: PositionSlot, slot_b: PositionSlot) -> &Formation {
        self.formation = self.store.swap(self.roster_id, &self.formation, slot_a, slot_b);
        &self.formation
    }

    pub fn reset(&mut self) -> &Formation {
        self.formation = self.store.reset(self.roster_id);
        &self.formation
    }

    /// Replaces the lineup with an auto-filled one and stores it.
    pub fn initialize(&mut self) -> &Formation {
        self.formation = self.store.initialize(self.roster_id, &self.players);
        &self.formation
    }

    /// Auto-fill preview; neither the session nor storage changes.
    pub fn auto_fill_preview(&self) -> Formation {
        self.store.auto_fill(&self.players)
    }

    /// Empties the lineup and deletes its stored entry.
    pub fn clear(&mut self) {
        self.store.forget(self.roster_id);
        self.formation = Formation::empty();
    }

    pub fn is_complete(&self) -> bool {
        self.formation.is_complete()
    }

    pub fn players_in_lineup(&self) -> Vec<&Player> {
        self.formation.players_in_formation()
    }

    pub fn available_players(&self) -> Vec<&Player> {
        self.formation.available_players(&self.players)
    }

    /// Bench grouped by position.
    pub fn bench_by_position(&self) -> BTreeMap<Position, Vec<&Player>> {
        group_by_position(self.available_players())
    }
}
