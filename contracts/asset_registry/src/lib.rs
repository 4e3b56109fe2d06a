//! # Asset Registry Contract
//!
//! A minimal asset registry: one opaque string value per caller-supplied id,
//! with create/read/update/delete/exists/list entry points. The ledger is
//! the sole source of truth — the contract holds no state of its own between
//! invocations, and every guard is re-derived from storage inside the
//! invocation it protects.
//!
//! | Concern    | Entry Point(s)                                  |
//! |------------|-------------------------------------------------|
//! | Existence  | [`AssetRegistry::has_asset`]                    |
//! | Lifecycle  | `create_asset`, `read_asset`, `update_asset`, `delete_asset` |
//! | Listing    | [`AssetRegistry::list_assets`]                  |
//!
//! This is the open variant: no access control and no events. The gated
//! variant lives in the sibling `vehicle_registry` crate.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, Env, String, TryFromVal, Vec};

mod storage;
mod types;

#[cfg(test)]
mod test;

pub use types::{Asset, AssetEntry, AssetRecord};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyExists   = 1,
    NotFound        = 2,
    MalformedRecord = 3,
    InvalidId       = 4,
}

#[contract]
pub struct AssetRegistry;

#[contractimpl]
impl AssetRegistry {
    /// Return `true` iff an asset exists at `id`. Never fails.
    pub fn has_asset(env: Env, id: String) -> bool {
        storage::has_asset(&env, &id)
    }

    /// Create the asset at `id`.
    ///
    /// Fails with `AlreadyExists` when the id is taken, and with `InvalidId`
    /// when the id is empty or longer than 64 bytes.
    pub fn create_asset(env: Env, id: String, value: String) -> Result<(), Error> {
        validate_id(&id)?;
        if storage::has_asset(&env, &id) {
            return Err(Error::AlreadyExists);
        }
        storage::save_asset(&env, &id, &Asset { value });
        storage::index_insert(&env, &id);
        Ok(())
    }

    /// Read the asset at `id`.
    ///
    /// Fails with `NotFound` when absent, and with `MalformedRecord` when
    /// the stored value does not decode as an [`Asset`].
    pub fn read_asset(env: Env, id: String) -> Result<Asset, Error> {
        let raw = storage::load_asset_val(&env, &id).ok_or(Error::NotFound)?;
        Asset::try_from_val(&env, &raw).map_err(|_| Error::MalformedRecord)
    }

    /// Replace the asset at `id` with `{ value: new_value }`.
    ///
    /// A full overwrite, not a merge: nothing of the prior record survives.
    /// Fails with `NotFound` when absent.
    pub fn update_asset(env: Env, id: String, new_value: String) -> Result<(), Error> {
        if !storage::has_asset(&env, &id) {
            return Err(Error::NotFound);
        }
        storage::save_asset(&env, &id, &Asset { value: new_value });
        Ok(())
    }

    /// Delete the asset at `id`. Fails with `NotFound` when absent.
    pub fn delete_asset(env: Env, id: String) -> Result<(), Error> {
        if !storage::has_asset(&env, &id) {
            return Err(Error::NotFound);
        }
        storage::remove_asset(&env, &id);
        storage::index_remove(&env, &id);
        Ok(())
    }

    /// List every asset whose id falls in the `["000", "999")` key range,
    /// in key order.
    ///
    /// Each entry decodes to [`AssetRecord::Asset`]; an entry whose stored
    /// value is not a valid record is included as [`AssetRecord::Raw`]
    /// instead of failing the scan.
    pub fn list_assets(env: Env) -> Vec<AssetEntry> {
        let mut entries = Vec::new(&env);
        for id in storage::load_index(&env).iter() {
            if !storage::in_scan_range(&id) {
                continue;
            }
            let raw = match storage::load_asset_val(&env, &id) {
                Some(raw) => raw,
                None => continue,
            };
            let record = match Asset::try_from_val(&env, &raw) {
                Ok(asset) => AssetRecord::Asset(asset),
                Err(_) => match String::try_from_val(&env, &raw) {
                    Ok(s) => AssetRecord::Raw(s),
                    Err(_) => continue,
                },
            };
            entries.push_back(AssetEntry { key: id, record });
        }
        entries
    }
}

/// Reject empty and over-long ids before they reach the index.
fn validate_id(id: &String) -> Result<(), Error> {
    if id.is_empty() || id.len() > storage::MAX_ID_LEN {
        return Err(Error::InvalidId);
    }
    Ok(())
}
