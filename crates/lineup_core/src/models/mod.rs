pub mod player;
pub mod position;

pub use player::{Player, PlayerId};
pub use position::{Position, Year};
