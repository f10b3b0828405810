//! # lineup_core - Volleyball Lineup Formation Store
//!
//! Models a volleyball starting lineup (seven named slots) and keeps one per
//! roster in a durable key-value store.
//!
//! ## Features
//! - `Formation` value with assign / clear / swap / auto-fill transformations
//! - `LineupStore` persisting per roster id, fail-soft on missing or malformed data
//! - `Lineup` editing session bound to a roster's player list
//! - In-memory and directory-backed storage backends
//! - Roster helpers: grouping, filters, jersey ordering, statistics
//!
//! ```
//! use lineup_core::{LineupStore, MemoryStore, Player, Position, PositionSlot, RosterId};
//!
//! let mut store = LineupStore::new(MemoryStore::new());
//! let roster = RosterId(7);
//!
//! let formation = store.load(roster);
//! assert!(formation.is_empty());
//!
//! let setter = Player::new(1, "Kageyama Tobio", Position::Setter, 9);
//! store.assign(roster, &formation, setter, PositionSlot::Setter);
//! assert!(store.load(roster).setter.is_occupied());
//! ```

pub mod config;
pub mod error;
pub mod lineup;
pub mod models;
pub mod roster;
pub mod store;

pub use config::LineupConfig;
pub use error::{LineupError, Result, StoreError};
pub use lineup::{auto_fill, Formation, Lineup, LineupStore, PositionSlot, Slot};
pub use models::{Player, PlayerId, Position, Year};
pub use roster::{group_by_position, sort_by_jersey, PlayerFilters, PlayerStats, SortOrder};
pub use store::{FileStore, KeyValueStore, MemoryStore, RosterId, StorageKey};
