//! Lineup formation model and its per-roster store.

pub mod auto_fill;
pub mod formation;
pub mod record;
pub mod session;
pub mod slot;
pub mod store;

pub use auto_fill::auto_fill;
pub use formation::Formation;
pub use record::{LineupRecord, RecordError, RECORD_VERSION};
pub use session::Lineup;
pub use slot::{PositionSlot, Slot};
pub use store::LineupStore;
