//! Error types for the game binary.

use thiserror::Error;

/// Game error type.
#[derive(Error, Debug)]
pub enum GameError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Map error: {0}")]
    Map(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Bot(#[from] delve_bot::BotError),
}

impl From<toml::de::Error> for GameError {
    fn from(e: toml::de::Error) -> Self {
        GameError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
