//! # Vehicle Registry Contract
//!
//! The access-controlled variant of the asset registry: the same
//! create/read/update/delete/exists/list lifecycle as the open
//! `asset_registry` contract, with mutations gated by the caller's
//! registered organization and role.
//!
//! | Concern     | Entry Point(s)                                   |
//! |-------------|--------------------------------------------------|
//! | Bootstrap   | [`VehicleRegistry::init`]                        |
//! | Membership  | `register_member`, `remove_member`, `member_of`  |
//! | Lifecycle   | `create_asset`, `read_asset`, `update_asset`, `delete_asset` |
//! | Existence   | [`VehicleRegistry::has_asset`]                   |
//! | Listing     | [`VehicleRegistry::list_assets`]                 |
//!
//! ## Policy
//!
//! | Operation      | Allowed roles        |
//! |----------------|----------------------|
//! | `create_asset` | Manufacturer         |
//! | `update_asset` | Manufacturer, Dealer |
//! | `delete_asset` | Dealer               |
//!
//! A role only grants permission to members of the organization authorized
//! for it at `init` time. Reads and listing are unchecked.
//!
//! Authorization is fully delegated to [`access`], storage access to
//! `storage`. Existence guards run before policy gates, and every guard is
//! re-derived from storage within the invocation it protects — the contract
//! keeps no state of its own between invocations.

#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, Address, Env, String, Symbol, TryFromVal, Vec,
};

pub mod access;
mod events;
mod storage;
mod types;

#[cfg(test)]
mod test_access;
#[cfg(test)]
mod test_events;

pub use events::AssetCreated;
pub use types::{Asset, AssetEntry, AssetRecord, Member, Role};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyExists      = 1,
    NotFound           = 2,
    Forbidden          = 3,
    MalformedRecord    = 4,
    InvalidId          = 5,
    AlreadyInitialized = 6,
    NotInitialized     = 7,
}

#[contract]
pub struct VehicleRegistry;

#[contractimpl]
impl VehicleRegistry {
    // ─────────────────────────────────────────────────────────
    // Initialisation
    // ─────────────────────────────────────────────────────────

    /// Initialise the contract: set the membership admin and fix which
    /// organization is authorized for each role.
    ///
    /// Must be called exactly once after deployment; subsequent calls fail
    /// with `AlreadyInitialized`. `admin` must sign the transaction.
    pub fn init(
        env: Env,
        admin: Address,
        manufacturer_org: Symbol,
        dealer_org: Symbol,
    ) -> Result<(), Error> {
        admin.require_auth();
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        storage::save_config(&env, &admin, &manufacturer_org, &dealer_org);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Membership
    // ─────────────────────────────────────────────────────────

    /// Register (or replace) `member` with an organization id and role
    /// claim. Admin only.
    pub fn register_member(
        env: Env,
        caller: Address,
        member: Address,
        org: Symbol,
        role: Role,
    ) -> Result<(), Error> {
        caller.require_auth();
        access::require_admin(&env, &caller)?;
        storage::save_member(&env, &member, &Member { org, role });
        Ok(())
    }

    /// Remove `member`'s registration. Admin only.
    pub fn remove_member(env: Env, caller: Address, member: Address) -> Result<(), Error> {
        caller.require_auth();
        access::require_admin(&env, &caller)?;
        storage::remove_member(&env, &member);
        Ok(())
    }

    /// Return the registration of `member`, or `None`.
    pub fn member_of(env: Env, member: Address) -> Option<Member> {
        storage::member(&env, &member)
    }

    // ─────────────────────────────────────────────────────────
    // Asset lifecycle
    // ─────────────────────────────────────────────────────────

    /// Return `true` iff an asset exists at `id`. Never fails.
    pub fn has_asset(env: Env, id: String) -> bool {
        storage::has_asset(&env, &id)
    }

    /// Create the asset at `id`. Manufacturer only.
    ///
    /// `maker`, `model` and `year` describe the creation in the emitted
    /// `created` event; the persisted record carries only `value`.
    ///
    /// Fails with `AlreadyExists` when the id is taken (checked before the
    /// policy gate), `Forbidden` when the caller lacks the role, and
    /// `InvalidId` when the id is empty or longer than 64 bytes.
    pub fn create_asset(
        env: Env,
        caller: Address,
        id: String,
        value: String,
        maker: String,
        model: String,
        year: u32,
    ) -> Result<(), Error> {
        caller.require_auth();
        validate_id(&id)?;
        if storage::has_asset(&env, &id) {
            return Err(Error::AlreadyExists);
        }
        access::require_any_role(&env, &caller, &[Role::Manufacturer])?;

        storage::save_asset(&env, &id, &Asset { value });
        storage::index_insert(&env, &id);
        events::asset_created(&env, &id, maker, model, year);
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

    /// Replace the asset at `id` with `{ value: new_value }`. Manufacturer
    /// or Dealer.
    ///
    /// A full overwrite, not a merge. Fails with `NotFound` when absent and
    /// `Forbidden` when the caller lacks the role. No event is emitted.
    pub fn update_asset(
        env: Env,
        caller: Address,
        id: String,
        new_value: String,
    ) -> Result<(), Error> {
        caller.require_auth();
        if !storage::has_asset(&env, &id) {
            return Err(Error::NotFound);
        }
        access::require_any_role(&env, &caller, &[Role::Manufacturer, Role::Dealer])?;
        storage::save_asset(&env, &id, &Asset { value: new_value });
        Ok(())
    }

    /// Delete the asset at `id`. Dealer only.
    ///
    /// Fails with `NotFound` when absent and `Forbidden` when the caller
    /// lacks the role. No event is emitted.
    pub fn delete_asset(env: Env, caller: Address, id: String) -> Result<(), Error> {
        caller.require_auth();
        if !storage::has_asset(&env, &id) {
            return Err(Error::NotFound);
        }
        access::require_any_role(&env, &caller, &[Role::Dealer])?;
        storage::remove_asset(&env, &id);
        storage::index_remove(&env, &id);
        Ok(())
    }

    /// List every asset whose id falls in the `["000", "999")` key range,
    /// in key order. Unchecked.
    ///
    /// An entry whose stored value is not a valid record is included as
    /// [`AssetRecord::Raw`] instead of failing the scan.
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
