//! Error type shared across the registry event pipeline.
//!
//! Every stage funnels into [`IndexerError`]: the SQLite layer and its
//! migrations, the Soroban RPC polling loop, event decoding, and the
//! environment-driven configuration. The REST handlers never propagate it —
//! they map failures straight to a 500 response body.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IndexerError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A missing or unparsable environment variable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An RPC payload that could not be interpreted as registry events.
    #[error("Event parse error: {0}")]
    EventParse(String),
}

pub type Result<T> = std::result::Result<T, IndexerError>;
