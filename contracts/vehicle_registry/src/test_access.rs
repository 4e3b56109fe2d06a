extern crate std;

use soroban_sdk::{symbol_short, testutils::Address as _, Address, Env};

use crate::test::{create, dealer, manufacturer, s, setup};
use crate::{Error, Member, Role, VehicleRegistry, VehicleRegistryClient};

#[test]
fn init_can_only_run_once() {
    let (env, client, _admin) = setup();
    let other = Address::generate(&env);
    assert_eq!(
        client.try_init(&other, &symbol_short!("orgX"), &symbol_short!("orgY")),
        Err(Ok(Error::AlreadyInitialized))
    );
}

#[test]
fn membership_requires_init() {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(VehicleRegistry, ());
    let client = VehicleRegistryClient::new(&env, &contract_id);

    let caller = Address::generate(&env);
    let member = Address::generate(&env);
    assert_eq!(
        client.try_register_member(&caller, &member, &symbol_short!("org1"), &Role::Manufacturer),
        Err(Ok(Error::NotInitialized))
    );
}

#[test]
fn only_the_admin_manages_members() {
    let (env, client, admin) = setup();
    let outsider = Address::generate(&env);
    let member = Address::generate(&env);

    assert_eq!(
        client.try_register_member(
            &outsider,
            &member,
            &symbol_short!("org1"),
            &Role::Manufacturer
        ),
        Err(Ok(Error::Forbidden))
    );

    client.register_member(&admin, &member, &symbol_short!("org1"), &Role::Manufacturer);
    assert_eq!(
        client.member_of(&member),
        Some(Member {
            org: symbol_short!("org1"),
            role: Role::Manufacturer,
        })
    );

    assert_eq!(
        client.try_remove_member(&outsider, &member),
        Err(Ok(Error::Forbidden))
    );
    client.remove_member(&admin, &member);
    assert_eq!(client.member_of(&member), None);
}

#[test]
fn manufacturer_may_create_but_not_delete() {
    let (env, client, admin) = setup();
    let maker = manufacturer(&env, &client, &admin);
    let id = s(&env, "001");

    create(&client, &maker, &env, &id, "v");
    assert_eq!(
        client.try_delete_asset(&maker, &id),
        Err(Ok(Error::Forbidden))
    );
}

#[test]
fn dealer_may_delete_but_not_create() {
    let (env, client, admin) = setup();
    let maker = manufacturer(&env, &client, &admin);
    let deal = dealer(&env, &client, &admin);
    let id = s(&env, "001");

    assert_eq!(
        client.try_create_asset(
            &deal,
            &id,
            &s(&env, "v"),
            &s(&env, "Arium"),
            &s(&env, "Thunder"),
            &2021,
        ),
        Err(Ok(Error::Forbidden))
    );

    create(&client, &maker, &env, &id, "v");
    client.delete_asset(&deal, &id);
    assert!(!client.has_asset(&id));
}

#[test]
fn both_roles_may_update() {
    let (env, client, admin) = setup();
    let maker = manufacturer(&env, &client, &admin);
    let deal = dealer(&env, &client, &admin);
    let id = s(&env, "001");

    create(&client, &maker, &env, &id, "v1");
    client.update_asset(&maker, &id, &s(&env, "v2"));
    client.update_asset(&deal, &id, &s(&env, "v3"));
    assert_eq!(client.read_asset(&id).value, s(&env, "v3"));
}

#[test]
fn role_claim_from_the_wrong_organization_is_rejected() {
    let (env, client, admin) = setup();
    let maker = manufacturer(&env, &client, &admin);
    let id = s(&env, "001");
    create(&client, &maker, &env, &id, "v");

    // Registered with the Dealer role but under the manufacturer org:
    // the role claim alone does not grant the dealer's permissions.
    let impostor = Address::generate(&env);
    client.register_member(&admin, &impostor, &symbol_short!("org1"), &Role::Dealer);

    assert_eq!(
        client.try_delete_asset(&impostor, &id),
        Err(Ok(Error::Forbidden))
    );

    // Mirror case: Manufacturer role claimed under the dealer org.
    let impostor2 = Address::generate(&env);
    client.register_member(
        &admin,
        &impostor2,
        &symbol_short!("org2"),
        &Role::Manufacturer,
    );
    assert_eq!(
        client.try_create_asset(
            &impostor2,
            &s(&env, "002"),
            &s(&env, "v"),
            &s(&env, "Arium"),
            &s(&env, "Thunder"),
            &2021,
        ),
        Err(Ok(Error::Forbidden))
    );
}

#[test]
fn unregistered_callers_are_forbidden_on_every_mutation() {
    let (env, client, admin) = setup();
    let maker = manufacturer(&env, &client, &admin);
    let outsider = Address::generate(&env);
    let id = s(&env, "001");
    create(&client, &maker, &env, &id, "v");

    assert_eq!(
        client.try_create_asset(
            &outsider,
            &s(&env, "002"),
            &s(&env, "v"),
            &s(&env, "Arium"),
            &s(&env, "Thunder"),
            &2021,
        ),
        Err(Ok(Error::Forbidden))
    );
    assert_eq!(
        client.try_update_asset(&outsider, &id, &s(&env, "v2")),
        Err(Ok(Error::Forbidden))
    );
    assert_eq!(
        client.try_delete_asset(&outsider, &id),
        Err(Ok(Error::Forbidden))
    );

    // Reads and listing stay open.
    assert!(client.has_asset(&id));
    assert_eq!(client.read_asset(&id).value, s(&env, "v"));
    assert_eq!(client.list_assets().len(), 1);
}

#[test]
fn revoked_members_lose_their_permissions() {
    let (env, client, admin) = setup();
    let maker = manufacturer(&env, &client, &admin);

    create(&client, &maker, &env, &s(&env, "001"), "v");
    client.remove_member(&admin, &maker);

    assert_eq!(
        client.try_create_asset(
            &maker,
            &s(&env, "002"),
            &s(&env, "v"),
            &s(&env, "Arium"),
            &s(&env, "Thunder"),
            &2021,
        ),
        Err(Ok(Error::Forbidden))
    );
}
