//! # Access policy
//!
//! Maps a caller's registered organization and role claim to a permission
//! decision for one operation.
//!
//! A permission is a conjunction: the caller must hold one of the allowed
//! roles AND belong to the organization authorized for that role. Holding
//! the role claim alone is necessary but not sufficient — this is what
//! stops a member of one organization claiming a role reserved for the
//! other organization's members.
//!
//! The role → organization mapping is fixed at `init` and read from
//! instance storage; nothing here mutates state.

use soroban_sdk::{Address, Env};

use crate::storage;
use crate::types::Role;
use crate::Error;

/// Return `true` iff `caller` holds one of `allowed` roles for the
/// organization authorized for that role.
///
/// Unregistered callers always evaluate `false`. Fails with
/// `NotInitialized` when the role mapping has not been configured yet.
pub fn has_role(env: &Env, caller: &Address, allowed: &[Role]) -> Result<bool, Error> {
    let member = match storage::member(env, caller) {
        Some(member) => member,
        None => return Ok(false),
    };
    for role in allowed {
        let org = storage::org_for_role(env, *role).ok_or(Error::NotInitialized)?;
        if member.role == *role && member.org == org {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Fail with `Forbidden` unless [`has_role`] holds.
pub fn require_any_role(env: &Env, caller: &Address, allowed: &[Role]) -> Result<(), Error> {
    if has_role(env, caller, allowed)? {
        Ok(())
    } else {
        Err(Error::Forbidden)
    }
}

/// Fail with `Forbidden` unless `caller` is the membership admin, and with
/// `NotInitialized` before `init`.
pub fn require_admin(env: &Env, caller: &Address) -> Result<(), Error> {
    let admin = storage::admin(env).ok_or(Error::NotInitialized)?;
    if *caller == admin {
        Ok(())
    } else {
        Err(Error::Forbidden)
    }
}
