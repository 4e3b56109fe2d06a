//! # Types
//!
//! Data structures shared across the registry modules.
//!
//! The persisted asset record carries only `value`; the maker/model/year
//! arguments to `create_asset` describe the creation in the emitted event
//! and are never stored.

use soroban_sdk::{contracttype, String, Symbol};

/// An asset record as persisted in the ledger.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Asset {
    pub value: String,
}

/// The decoded form of one stored entry returned by `list_assets`.
///
/// An entry whose stored value is not a valid record degrades to
/// [`AssetRecord::Raw`] so one bad entry never fails the whole listing.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AssetRecord {
    Asset(Asset),
    Raw(String),
}

/// One `(key, record)` pair produced by `list_assets`, in key order.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetEntry {
    pub key: String,
    pub record: AssetRecord,
}

/// A role an organization member can be registered with.
///
/// Holding a role is only half of a permission: the member's organization
/// must also be the one authorized for that role (see [`crate::access`]).
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Role {
    Manufacturer,
    Dealer,
}

/// A registered member: the verified organization id and role claim of one
/// caller address. Written by the admin, read-only to everything else.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Member {
    pub org: Symbol,
    pub role: Role,
}
