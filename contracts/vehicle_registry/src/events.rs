//! # Events
//!
//! The registry publishes exactly one event: a `created` notification when
//! an asset is created. Updates and deletions are deliberately silent — the
//! asymmetry is part of the contract surface, not an omission.

use soroban_sdk::{contracttype, symbol_short, Env, String};

/// Payload of the `created` event: the new asset's id plus the
/// maker/model/year description supplied at creation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetCreated {
    pub id: String,
    pub maker: String,
    pub model: String,
    pub year: u32,
}

/// Publish the `created` event for a freshly created asset.
///
/// Topics: `("created", id)`.
pub fn asset_created(env: &Env, id: &String, maker: String, model: String, year: u32) {
    env.events().publish(
        (symbol_short!("created"), id.clone()),
        AssetCreated {
            id: id.clone(),
            maker,
            model,
            year,
        },
    );
}
