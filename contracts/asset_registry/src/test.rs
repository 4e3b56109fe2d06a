extern crate std;

use soroban_sdk::{Env, String};

use crate::storage::DataKey;
use crate::{Asset, AssetRecord, AssetRegistry, AssetRegistryClient, Error};

fn setup() -> (Env, AssetRegistryClient<'static>) {
    let env = Env::default();
    let contract_id = env.register(AssetRegistry, ());
    let client = AssetRegistryClient::new(&env, &contract_id);
    (env, client)
}

fn s(env: &Env, v: &str) -> String {
    String::from_str(env, v)
}

#[test]
fn asset_does_not_exist_until_created() {
    let (env, client) = setup();
    let id = s(&env, "001");

    assert!(!client.has_asset(&id));
    client.create_asset(&id, &s(&env, "laptop"));
    assert!(client.has_asset(&id));
}

#[test]
fn create_on_existing_id_fails_and_keeps_value() {
    let (env, client) = setup();
    let id = s(&env, "001");

    client.create_asset(&id, &s(&env, "first"));
    assert_eq!(
        client.try_create_asset(&id, &s(&env, "second")),
        Err(Ok(Error::AlreadyExists))
    );
    assert_eq!(client.read_asset(&id).value, s(&env, "first"));
}

#[test]
fn create_rejects_empty_and_overlong_ids() {
    let (env, client) = setup();

    assert_eq!(
        client.try_create_asset(&s(&env, ""), &s(&env, "v")),
        Err(Ok(Error::InvalidId))
    );

    let long = ["a"; 65].concat();
    assert_eq!(
        client.try_create_asset(&s(&env, &long), &s(&env, "v")),
        Err(Ok(Error::InvalidId))
    );
}

#[test]
fn read_missing_asset_fails() {
    let (env, client) = setup();
    assert_eq!(
        client.try_read_asset(&s(&env, "404")),
        Err(Ok(Error::NotFound))
    );
}

#[test]
fn update_missing_asset_fails_and_writes_nothing() {
    let (env, client) = setup();
    let id = s(&env, "001");

    assert_eq!(
        client.try_update_asset(&id, &s(&env, "v2")),
        Err(Ok(Error::NotFound))
    );
    assert!(!client.has_asset(&id));
}

#[test]
fn update_fully_replaces_the_record() {
    let (env, client) = setup();
    let id = s(&env, "001");

    client.create_asset(&id, &s(&env, "v1"));
    client.update_asset(&id, &s(&env, "v2"));
    assert_eq!(
        client.read_asset(&id),
        Asset {
            value: s(&env, "v2")
        }
    );
}

#[test]
fn delete_removes_the_record() {
    let (env, client) = setup();
    let id = s(&env, "001");

    assert_eq!(client.try_delete_asset(&id), Err(Ok(Error::NotFound)));

    client.create_asset(&id, &s(&env, "v"));
    client.delete_asset(&id);
    assert!(!client.has_asset(&id));
}

#[test]
fn read_fails_fast_on_malformed_record() {
    let (env, client) = setup();
    let id = s(&env, "001");
    client.create_asset(&id, &s(&env, "v"));

    // Clobber the stored record with a bare string, as a foreign writer
    // (or an old contract version) might have left behind.
    env.as_contract(&client.address, || {
        env.storage()
            .persistent()
            .set(&DataKey::Asset(id.clone()), &s(&env, "not a record"));
    });

    assert_eq!(client.try_read_asset(&id), Err(Ok(Error::MalformedRecord)));
}

#[test]
fn list_returns_entries_in_key_order() {
    let (env, client) = setup();

    // Created out of order on purpose.
    client.create_asset(&s(&env, "1002"), &s(&env, "y"));
    client.create_asset(&s(&env, "1001"), &s(&env, "x"));

    let entries = client.list_assets();
    assert_eq!(entries.len(), 2);

    let first = entries.get_unchecked(0);
    assert_eq!(first.key, s(&env, "1001"));
    assert_eq!(
        first.record,
        AssetRecord::Asset(Asset {
            value: s(&env, "x")
        })
    );

    let second = entries.get_unchecked(1);
    assert_eq!(second.key, s(&env, "1002"));
    assert_eq!(
        second.record,
        AssetRecord::Asset(Asset {
            value: s(&env, "y")
        })
    );
}

#[test]
fn list_excludes_ids_outside_the_scan_range() {
    let (env, client) = setup();

    client.create_asset(&s(&env, "100"), &s(&env, "in"));
    client.create_asset(&s(&env, "zzz"), &s(&env, "out"));

    let entries = client.list_assets();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries.get_unchecked(0).key, s(&env, "100"));
}

#[test]
fn list_degrades_malformed_entries_to_raw_strings() {
    let (env, client) = setup();
    let good = s(&env, "101");
    let bad = s(&env, "102");

    client.create_asset(&good, &s(&env, "x"));
    client.create_asset(&bad, &s(&env, "y"));

    env.as_contract(&client.address, || {
        env.storage()
            .persistent()
            .set(&DataKey::Asset(bad.clone()), &s(&env, "raw bytes"));
    });

    let entries = client.list_assets();
    assert_eq!(entries.len(), 2);
    assert_eq!(
        entries.get_unchecked(0).record,
        AssetRecord::Asset(Asset {
            value: s(&env, "x")
        })
    );
    assert_eq!(
        entries.get_unchecked(1).record,
        AssetRecord::Raw(s(&env, "raw bytes"))
    );
}

/// Full lifecycle walk: create, exists, update, read, delete, exists, read.
#[test]
fn lifecycle_scenario() {
    let (env, client) = setup();
    let id = s(&env, "002");

    client.create_asset(&id, &s(&env, "A"));
    assert!(client.has_asset(&id));

    client.update_asset(&id, &s(&env, "B"));
    assert_eq!(
        client.read_asset(&id),
        Asset {
            value: s(&env, "B")
        }
    );

    client.delete_asset(&id);
    assert!(!client.has_asset(&id));
    assert_eq!(client.try_read_asset(&id), Err(Ok(Error::NotFound)));
}
