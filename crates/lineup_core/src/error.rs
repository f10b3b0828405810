use thiserror::Error;

use crate::models::PlayerId;

#[derive(Error, Debug)]
pub enum LineupError {
    #[error("Unknown lineup slot: {0}")]
    UnknownSlot(String),

    #[error("Unknown player position: {0}")]
    UnknownPosition(String),

    #[error("Invalid roster id: {0}")]
    InvalidRosterId(String),

    #[error("Player {player_id} is not on roster {roster_id}")]
    PlayerNotOnRoster { roster_id: String, player_id: PlayerId },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid storage key: {key}")]
    InvalidKey { key: String },
}

impl StoreError {
    pub fn is_recoverable(&self) -> bool {
        match self {
            StoreError::Io(_) => true,
            StoreError::Serialization(_) => false,
            StoreError::InvalidKey { .. } => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, LineupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_recoverability() {
        let io = StoreError::Io(std::io::Error::new(std::io::ErrorKind::Other, "disk busy"));
        assert!(io.is_recoverable());

        let key = StoreError::InvalidKey { key: "../escape".to_string() };
        assert!(!key.is_recoverable());
    }

    #[test]
    fn test_not_on_roster_message() {
        let err = LineupError::PlayerNotOnRoster {
            roster_id: "7".to_string(),
            player_id: PlayerId(42),
        };
        assert_eq!(err.to_string(), "Player 42 is not on roster 7");
    }
}
