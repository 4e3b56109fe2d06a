//! # Types
//!
//! Data structures shared by the registry entry points and tests.

use soroban_sdk::{contracttype, String};

/// An asset record as persisted in the ledger.
///
/// The record is deliberately a single-field mapping: the id lives in the
/// storage key, not in the record, and callers own the meaning of `value`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Asset {
    pub value: String,
}

/// The decoded form of one stored entry returned by `list_assets`.
///
/// Entries written by this contract decode as [`AssetRecord::Asset`]. An
/// entry whose stored value is not a valid record degrades to
/// [`AssetRecord::Raw`] carrying the stored string as-is, so one bad entry
/// never fails the whole listing.
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
