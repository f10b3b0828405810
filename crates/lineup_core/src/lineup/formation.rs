use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use super::slot::{PositionSlot, Slot};
use crate::models::{Player, PlayerId};

/// Volleyball starting lineup: seven named slots, each empty or holding a
/// player.
///
/// Every transformation returns a new value; a `Formation` is never mutated
/// behind a shared reference.
///
/// # Exclusivity
/// A player id is expected to appear in at most one slot. `with_player` does
/// NOT clear the player's previous slot, so direct assignment can leave the
/// same player in two slots. Callers that want exclusivity look the player up
/// with [`Formation::slot_of`] and clear that slot first. `swapped` always
/// preserves exclusivity.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Formation {
    pub setter: Slot,
    pub middle_blocker1: Slot,
    pub middle_blocker2: Slot,
    pub wing_spiker1: Slot,
    pub wing_spiker2: Slot,
    pub outside_hitter: Slot,
    pub libero: Slot,
}

impl Formation {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: PositionSlot) -> &Slot {
        match slot {
            PositionSlot::Setter => &self.setter,
            PositionSlot::MiddleBlocker1 => &self.middle_blocker1,
            PositionSlot::MiddleBlocker2 => &self.middle_blocker2,
            PositionSlot::WingSpiker1 => &self.wing_spiker1,
            PositionSlot::WingSpiker2 => &self.wing_spiker2,
            PositionSlot::OutsideHitter => &self.outside_hitter,
            PositionSlot::Libero => &self.libero,
        }
    }

    fn get_mut(&mut self, slot: PositionSlot) -> &mut Slot {
        match slot {
            PositionSlot::Setter => &mut self.setter,
            PositionSlot::MiddleBlocker1 => &mut self.middle_blocker1,
            PositionSlot::MiddleBlocker2 => &mut self.middle_blocker2,
            PositionSlot::WingSpiker1 => &mut self.wing_spiker1,
            PositionSlot::WingSpiker2 => &mut self.wing_spiker2,
            PositionSlot::OutsideHitter => &mut self.outside_hitter,
            PositionSlot::Libero => &mut self.libero,
        }
    }

    /// Copy with `slot` set to `player`; other slots untouched.
    pub fn with_player(&self, slot: PositionSlot, player: Player) -> Self {
        let mut updated = self.clone();
        *updated.get_mut(slot) = Slot::Occupied(player);
        updated
    }

    /// Copy with `slot` emptied.
    pub fn without_player(&self, slot: PositionSlot) -> Self {
        let mut updated = self.clone();
        *updated.get_mut(slot) = Slot::Empty;
        updated
    }

    /// Copy with the occupants of `a` and `b` exchanged. Either may be empty.
    pub fn swapped(&self, a: PositionSlot, b: PositionSlot) -> Self {
        let mut updated = self.clone();
        if a != b {
            let occupant_a = std::mem::take(updated.get_mut(a));
            let occupant_b = std::mem::replace(updated.get_mut(b), occupant_a);
            *updated.get_mut(a) = occupant_b;
        }
        updated
    }

    /// Slots in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (PositionSlot, &Slot)> + '_ {
        PositionSlot::ALL.into_iter().map(move |slot| (slot, self.get(slot)))
    }

    pub fn is_complete(&self) -> bool {
        self.iter().all(|(_, slot)| slot.is_occupied())
    }

    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, slot)| slot.is_empty())
    }

    pub fn filled_count(&self) -> usize {
        self.iter().filter(|(_, slot)| slot.is_occupied()).count()
    }

    /// First slot (in canonical order) holding `player_id`.
    pub fn slot_of(&self, player_id: PlayerId) -> Option<PositionSlot> {
        self.iter()
            .find(|(_, slot)| slot.player().is_some_and(|p| p.id == player_id))
            .map(|(slot, _)| slot)
    }

    /// Occupants of the non-empty slots, in canonical slot order.
    pub fn players_in_formation(&self) -> Vec<&Player> {
        self.iter().filter_map(|(_, slot)| slot.player()).collect()
    }

    /// `all` minus the players in this formation, compared by id. Input order
    /// is preserved.
    pub fn available_players<'a>(&self, all: &'a [Player]) -> Vec<&'a Player> {
        let in_lineup: HashSet<PlayerId> =
            self.players_in_formation().iter().map(|p| p.id).collect();
        all.iter().filter(|p| !in_lineup.contains(&p.id)).collect()
    }

    /// Copy with every occupant replaced by the roster's current record for the
    /// same id. Occupants missing from `roster` are kept as they are.
    pub fn reconcile(&self, roster: &[Player]) -> Self {
        let by_id: HashMap<PlayerId, &Player> = roster.iter().map(|p| (p.id, p)).collect();
        let mut updated = self.clone();
        for slot in PositionSlot::ALL {
            if let Slot::Occupied(current) = updated.get_mut(slot) {
                if let Some(fresh) = by_id.get(&current.id) {
                    *current = (*fresh).clone();
                } else {
                    log::debug!("Player {} in {} is no longer on the roster", current.id, slot);
                }
            }
        }
        updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Position;
    use proptest::prelude::*;

    fn player(id: u64) -> Player {
        Player::new(id, format!("Player {}", id), Position::WingSpiker, id as u32)
    }

    fn full_formation() -> Formation {
        PositionSlot::ALL
            .iter()
            .enumerate()
            .fold(Formation::empty(), |f, (i, slot)| f.with_player(*slot, player(i as u64 + 1)))
    }

    #[test]
    fn test_empty_formation() {
        let formation = Formation::empty();
        assert!(formation.is_empty());
        assert!(!formation.is_complete());
        assert_eq!(formation.filled_count(), 0);
        assert!(formation.players_in_formation().is_empty());
    }

    #[test]
    fn test_complete_iff_all_slots_filled() {
        let full = full_formation();
        assert!(full.is_complete());

        for slot in PositionSlot::ALL {
            let missing_one = full.without_player(slot);
            assert!(!missing_one.is_complete(), "{} empty must not be complete", slot);
            assert_eq!(missing_one.filled_count(), 6);
        }
    }

    #[test]
    fn test_players_in_formation_follow_slot_order() {
        let formation = Formation::empty()
            .with_player(PositionSlot::Libero, player(7))
            .with_player(PositionSlot::Setter, player(1))
            .with_player(PositionSlot::WingSpiker1, player(4));

        let ids: Vec<u64> = formation.players_in_formation().iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![1, 4, 7]);
    }

    #[test]
    fn test_available_players_compares_by_id() {
        let roster: Vec<Player> = (1..=5).map(player).collect();
        // Stale snapshot of player 2 with a different name still counts as placed.
        let mut stale = player(2);
        stale.name = "Renamed".to_string();
        let formation = Formation::empty().with_player(PositionSlot::Setter, stale);

        let ids: Vec<u64> = formation.available_players(&roster).iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![1, 3, 4, 5]);
    }

    #[test]
    fn test_assign_does_not_clear_previous_slot() {
        let formation = Formation::empty()
            .with_player(PositionSlot::WingSpiker1, player(9))
            .with_player(PositionSlot::WingSpiker2, player(9));

        assert_eq!(formation.players_in_formation().len(), 2);
        assert_eq!(formation.slot_of(PlayerId(9)), Some(PositionSlot::WingSpiker1));
    }

    #[test]
    fn test_swap_with_empty_slot_moves_player() {
        let formation = Formation::empty().with_player(PositionSlot::Setter, player(1));
        let swapped = formation.swapped(PositionSlot::Setter, PositionSlot::Libero);

        assert!(swapped.get(PositionSlot::Setter).is_empty());
        assert_eq!(swapped.get(PositionSlot::Libero).player().map(|p| p.id), Some(PlayerId(1)));
        assert_eq!(swapped.players_in_formation().len(), 1);
    }

    #[test]
    fn test_swap_same_slot_is_noop() {
        let formation = full_formation();
        assert_eq!(formation.swapped(PositionSlot::Libero, PositionSlot::Libero), formation);
    }

    #[test]
    fn test_assign_then_clear_restores_original() {
        let formation = Formation::empty().with_player(PositionSlot::Setter, player(1));
        let assigned = formation.with_player(PositionSlot::Libero, player(8));
        assert_eq!(assigned.without_player(PositionSlot::Libero), formation);
    }

    #[test]
    fn test_reconcile_refreshes_snapshots() {
        let formation = Formation::empty()
            .with_player(PositionSlot::Setter, player(1))
            .with_player(PositionSlot::Libero, player(2));

        let mut renamed = player(1);
        renamed.name = "Kageyama Tobio".to_string();
        let roster = vec![renamed];

        let reconciled = formation.reconcile(&roster);
        assert_eq!(reconciled.setter.player().map(|p| p.name.as_str()), Some("Kageyama Tobio"));
        // Player 2 left the roster but keeps their slot.
        assert_eq!(reconciled.libero.player().map(|p| p.id), Some(PlayerId(2)));
    }

    #[test]
    fn test_formation_wire_shape() {
        let formation = Formation::empty().with_player(PositionSlot::MiddleBlocker2, player(3));
        let value = serde_json::to_value(&formation).unwrap();

        let keys: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        for slot in PositionSlot::ALL {
            assert!(keys.contains(&slot.as_str()), "missing key {}", slot);
        }
        assert!(value["setter"].is_null());
        assert_eq!(value["middleBlocker2"]["id"], 3);
    }

    fn slot_strategy() -> impl Strategy<Value = PositionSlot> {
        (0usize..7).prop_map(|i| PositionSlot::ALL[i])
    }

    fn formation_strategy() -> impl Strategy<Value = Formation> {
        proptest::collection::vec(proptest::option::of(1u64..50), 7).prop_map(|ids| {
            PositionSlot::ALL.iter().zip(ids).fold(Formation::empty(), |f, (slot, id)| match id {
                Some(id) => f.with_player(*slot, player(id)),
                None => f,
            })
        })
    }

    proptest! {
        #[test]
        fn prop_swap_is_involution(
            formation in formation_strategy(),
            a in slot_strategy(),
            b in slot_strategy()
        ) {
            prop_assert_eq!(formation.swapped(a, b).swapped(a, b), formation);
        }

        #[test]
        fn prop_swap_preserves_occupants(
            formation in formation_strategy(),
            a in slot_strategy(),
            b in slot_strategy()
        ) {
            let mut before: Vec<u64> =
                formation.players_in_formation().iter().map(|p| p.id.0).collect();
            let swapped = formation.swapped(a, b);
            let mut after: Vec<u64> =
                swapped.players_in_formation().iter().map(|p| p.id.0).collect();
            before.sort_unstable();
            after.sort_unstable();
            prop_assert_eq!(before, after);
        }

        #[test]
        fn prop_clear_before_assign_keeps_ids_unique(
            moves in proptest::collection::vec((1u64..10, slot_strategy()), 0..40)
        ) {
            let mut formation = Formation::empty();
            for (id, slot) in moves {
                if let Some(previous) = formation.slot_of(PlayerId(id)) {
                    formation = formation.without_player(previous);
                }
                formation = formation.with_player(slot, player(id));
            }

            let ids: Vec<PlayerId> = formation.players_in_formation().iter().map(|p| p.id).collect();
            let unique: HashSet<PlayerId> = ids.iter().copied().collect();
            prop_assert_eq!(ids.len(), unique.len());
        }
    }
}
