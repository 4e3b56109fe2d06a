//! # Storage
//!
//! Typed helpers over Soroban's two storage tiers.
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key       | Type      | Description                             |
//! |-----------|-----------|-----------------------------------------|
//! | `Admin`   | `Address` | Membership admin, set once by `init`    |
//! | `MakerOrg`| `Symbol`  | Organization authorized as Manufacturer |
//! | `DealerOrg`| `Symbol` | Organization authorized as Dealer       |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day
//! remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key            | Type          | Description                      |
//! |----------------|---------------|----------------------------------|
//! | `Member(addr)` | `Member`      | Org + role claim of one address  |
//! | `Asset(id)`    | `Asset`       | One asset record per id          |
//! | `AssetIndex`   | `Vec<String>` | All live ids, byte-lexicographic |
//!
//! Persistent TTL is bumped by **30 days** whenever an entry is touched with
//! less than 7 days remaining. The id index stands in for a key cursor,
//! which Soroban storage does not provide; ids are capped at [`MAX_ID_LEN`]
//! bytes so keys can be compared in a fixed buffer.

use soroban_sdk::{contracttype, Address, Env, String, Symbol, Val, Vec};

use crate::types::{Asset, Member, Role};

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Persistent storage: bump by 30 days when below 7 days remaining.
const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

/// Maximum accepted id length in bytes.
pub const MAX_ID_LEN: u32 = 64;

// ── Storage Keys ─────────────────────────────────────────────────────

/// All contract storage keys.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Membership admin (Instance).
    Admin,
    /// Organization authorized for the Manufacturer role (Instance).
    MakerOrg,
    /// Organization authorized for the Dealer role (Instance).
    DealerOrg,
    /// Registered member, keyed by address (Persistent).
    Member(Address),
    /// One asset record, keyed by its id (Persistent).
    Asset(String),
    /// Sorted list of all live asset ids (Persistent).
    AssetIndex,
}

// ── Instance Storage Helpers ─────────────────────────────────────────

/// Extend instance storage TTL if it falls below the threshold.
fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// Return `true` once `init` has run.
pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

/// Store the admin and the role/organization mapping. Called once by `init`.
pub fn save_config(env: &Env, admin: &Address, maker_org: &Symbol, dealer_org: &Symbol) {
    let instance = env.storage().instance();
    instance.set(&DataKey::Admin, admin);
    instance.set(&DataKey::MakerOrg, maker_org);
    instance.set(&DataKey::DealerOrg, dealer_org);
    bump_instance(env);
}

/// Retrieve the admin address, or `None` before `init`.
pub fn admin(env: &Env) -> Option<Address> {
    bump_instance(env);
    env.storage().instance().get(&DataKey::Admin)
}

/// The organization authorized for `role`, or `None` before `init`.
pub fn org_for_role(env: &Env, role: Role) -> Option<Symbol> {
    bump_instance(env);
    let key = match role {
        Role::Manufacturer => DataKey::MakerOrg,
        Role::Dealer => DataKey::DealerOrg,
    };
    env.storage().instance().get(&key)
}

// ── Members ──────────────────────────────────────────────────────────

/// Write (or replace) the membership record for `address`.
pub fn save_member(env: &Env, address: &Address, member: &Member) {
    let key = DataKey::Member(address.clone());
    env.storage().persistent().set(&key, member);
    bump_persistent(env, &key);
}

/// Load the membership record for `address`, or `None` if unregistered.
pub fn member(env: &Env, address: &Address) -> Option<Member> {
    let key = DataKey::Member(address.clone());
    let member: Option<Member> = env.storage().persistent().get(&key);
    if member.is_some() {
        bump_persistent(env, &key);
    }
    member
}

/// Remove the membership record for `address`.
pub fn remove_member(env: &Env, address: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::Member(address.clone()));
}

// ── Asset Records ────────────────────────────────────────────────────

/// Extend the TTL for a persistent storage key.
fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Return `true` iff the store holds an entry at `id`.
pub fn has_asset(env: &Env, id: &String) -> bool {
    env.storage().persistent().has(&DataKey::Asset(id.clone()))
}

/// Write (or overwrite) the record at `id`.
pub fn save_asset(env: &Env, id: &String, asset: &Asset) {
    let key = DataKey::Asset(id.clone());
    env.storage().persistent().set(&key, asset);
    bump_persistent(env, &key);
}

/// Read the raw stored value at `id`, without decoding it as a record.
pub fn load_asset_val(env: &Env, id: &String) -> Option<Val> {
    let key = DataKey::Asset(id.clone());
    let val: Option<Val> = env.storage().persistent().get(&key);
    if val.is_some() {
        bump_persistent(env, &key);
    }
    val
}

/// Remove the record at `id`.
pub fn remove_asset(env: &Env, id: &String) {
    env.storage()
        .persistent()
        .remove(&DataKey::Asset(id.clone()));
}

// ── Id Index ─────────────────────────────────────────────────────────

/// Load the sorted id index (empty when nothing has been created yet).
pub fn load_index(env: &Env) -> Vec<String> {
    env.storage()
        .persistent()
        .get(&DataKey::AssetIndex)
        .unwrap_or_else(|| Vec::new(env))
}

fn save_index(env: &Env, index: &Vec<String>) {
    env.storage().persistent().set(&DataKey::AssetIndex, index);
    bump_persistent(env, &DataKey::AssetIndex);
}

/// Insert `id` into the index, keeping byte-lexicographic order.
/// `id` must already be validated against [`MAX_ID_LEN`].
pub fn index_insert(env: &Env, id: &String) {
    let mut index = load_index(env);
    let (id_buf, id_len) = key_bytes(id);
    let mut pos = index.len();
    for i in 0..index.len() {
        let (buf, len) = key_bytes(&index.get_unchecked(i));
        if id_buf[..id_len] < buf[..len] {
            pos = i;
            break;
        }
    }
    index.insert(pos, id.clone());
    save_index(env, &index);
}

/// Remove `id` from the index, if present.
pub fn index_remove(env: &Env, id: &String) {
    let mut index = load_index(env);
    for i in 0..index.len() {
        if index.get_unchecked(i) == *id {
            index.remove(i);
            break;
        }
    }
    save_index(env, &index);
}

// ── Key comparison ───────────────────────────────────────────────────

/// Copy a (validated, <= [`MAX_ID_LEN`] bytes) id into a comparison buffer.
fn key_bytes(key: &String) -> ([u8; MAX_ID_LEN as usize], usize) {
    let len = key.len() as usize;
    let mut buf = [0u8; MAX_ID_LEN as usize];
    key.copy_into_slice(&mut buf[..len]);
    (buf, len)
}

/// Lower bound of the listing scan (inclusive).
const SCAN_START: &[u8] = b"000";
/// Upper bound of the listing scan (exclusive).
const SCAN_END: &[u8] = b"999";

/// Return `true` iff `key` falls inside the `["000", "999")` scan range.
pub fn in_scan_range(key: &String) -> bool {
    if key.len() > MAX_ID_LEN {
        return false;
    }
    let (buf, len) = key_bytes(key);
    let k = &buf[..len];
    SCAN_START <= k && k < SCAN_END
}
