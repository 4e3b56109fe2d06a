//! Canonical event types emitted by the vehicle registry contract.
//!
//! These mirror the Soroban contract events defined in
//! `contracts/vehicle_registry/src/events.rs`. The registry publishes a
//! single event kind — `created` — when an asset is created; updates and
//! deletions are silent by design, so the indexer never sees them.

use serde::{Deserialize, Serialize};

/// All recognised event kinds from the vehicle registry contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A new asset was created (`created` topic).
    AssetCreated,
    /// An event from this contract that we don't recognise yet.
    Unknown,
}

impl EventKind {
    /// Parse the leading topic symbol string produced by Soroban into an [`EventKind`].
    pub fn from_topic(topic: &str) -> Self {
        match topic {
            "created" => Self::AssetCreated,
            _ => Self::Unknown,
        }
    }

    /// Return a short identifier string suitable for storage in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AssetCreated => "asset_created",
            Self::Unknown => "unknown",
        }
    }
}

/// A fully decoded registry event, ready to be stored in the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryEvent {
    pub event_type: String,
    pub asset_id: Option<String>,
    pub maker: Option<String>,
    pub model: Option<String>,
    pub year: Option<i64>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
}

/// An event record as stored in / read from the database.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EventRecord {
    pub id: i64,
    pub event_type: String,
    pub asset_id: Option<String>,
    pub maker: Option<String>,
    pub model: Option<String>,
    pub year: Option<i64>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
    pub created_at: i64,
}
