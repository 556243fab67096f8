//! Error types for itemserve

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("No item IDs left after {0}")]
    IdsExhausted(u64),

    #[error("Invalid item ID: {0}")]
    InvalidItemId(String),

    #[error("Invalid request body: {0}")]
    InvalidPayload(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
