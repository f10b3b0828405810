use super::formation::Formation;
use super::slot::PositionSlot;
use crate::models::Player;
use crate::roster::group_by_position;

/// Builds a formation from a roster without touching storage.
///
/// Players are bucketed by position in input order; each slot takes the
/// bucket entry at its ordinal (`middleBlocker1` the first middle blocker,
/// `middleBlocker2` the second). Slots whose bucket runs short stay empty and
/// unpositioned players are never placed.
pub fn auto_fill(players: &[Player]) -> Formation {
    let by_position = group_by_position(players);

    PositionSlot::ALL.iter().fold(Formation::empty(), |formation, slot| {
        match by_position.get(&slot.position()).and_then(|bucket| bucket.get(slot.ordinal())) {
            Some(player) => formation.with_player(*slot, (*player).clone()),
            None => formation,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PlayerId, Position};
    use proptest::prelude::*;

    fn full_squad() -> Vec<Player> {
        vec![
            Player::new(1, "Kageyama", Position::Setter, 9),
            Player::new(2, "Tsukishima", Position::MiddleBlocker, 11),
            Player::new(3, "Hinata", Position::MiddleBlocker, 10),
            Player::new(4, "Tanaka", Position::WingSpiker, 5),
            Player::new(5, "Azumane", Position::WingSpiker, 3),
            Player::new(6, "Sawamura", Position::OutsideHitter, 1),
            Player::new(7, "Nishinoya", Position::Libero, 4),
        ]
    }

    fn slot_id(formation: &Formation, slot: PositionSlot) -> Option<PlayerId> {
        formation.get(slot).player().map(|p| p.id)
    }

    #[test]
    fn test_empty_roster_gives_empty_formation() {
        let formation = auto_fill(&[]);
        assert_eq!(formation, Formation::empty());
    }

    #[test]
    fn test_full_squad_fills_every_slot_by_position() {
        let formation = auto_fill(&full_squad());

        assert!(formation.is_complete());
        for (slot, occupant) in formation.iter() {
            let player = occupant.player().expect("slot should be filled");
            assert_eq!(player.position, slot.position(), "{} holds wrong position", slot);
        }
        assert_eq!(slot_id(&formation, PositionSlot::MiddleBlocker1), Some(PlayerId(2)));
        assert_eq!(slot_id(&formation, PositionSlot::MiddleBlocker2), Some(PlayerId(3)));
        assert_eq!(slot_id(&formation, PositionSlot::WingSpiker1), Some(PlayerId(4)));
        assert_eq!(slot_id(&formation, PositionSlot::WingSpiker2), Some(PlayerId(5)));
    }

    #[test]
    fn test_short_bucket_leaves_second_slot_empty() {
        let players = vec![
            Player::new(1, "Kuroo", Position::MiddleBlocker, 1),
            Player::new(2, "Kenma", Position::Setter, 5),
            Player::new(3, "Inuoka", Position::None, 7),
        ];

        let formation = auto_fill(&players);
        assert_eq!(slot_id(&formation, PositionSlot::MiddleBlocker1), Some(PlayerId(1)));
        assert!(formation.middle_blocker2.is_empty());
        assert!(formation.libero.is_empty());
        assert_eq!(formation.filled_count(), 2);
        assert!(formation.slot_of(PlayerId(3)).is_none());
    }

    #[test]
    fn test_extra_players_stay_available() {
        let mut players = full_squad();
        players.push(Player::new(8, "Sugawara", Position::Setter, 2));

        let formation = auto_fill(&players);
        let bench: Vec<u64> = formation.available_players(&players).iter().map(|p| p.id.0).collect();
        assert_eq!(bench, vec![8]);
    }

    fn roster_strategy() -> impl Strategy<Value = Vec<Player>> {
        proptest::collection::vec((0usize..6, 0u32..30), 0..20).prop_map(|entries| {
            entries
                .into_iter()
                .enumerate()
                .map(|(i, (pos, jersey))| {
                    Player::new(i as u64, format!("P{}", i), Position::all(true)[pos], jersey)
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_auto_fill_is_deterministic(players in roster_strategy()) {
            prop_assert_eq!(auto_fill(&players), auto_fill(&players));
        }

        #[test]
        fn prop_auto_fill_never_duplicates(players in roster_strategy()) {
            let formation = auto_fill(&players);
            let mut ids: Vec<u64> =
                formation.players_in_formation().iter().map(|p| p.id.0).collect();
            let before = ids.len();
            ids.dedup();
            ids.sort_unstable();
            ids.dedup();
            prop_assert_eq!(before, ids.len());
        }
    }
}
