extern crate std;

use soroban_sdk::{
    symbol_short, testutils::Events, vec, Env, IntoVal, String, TryIntoVal, Val, Vec,
};

use crate::events::AssetCreated;
use crate::test::{dealer, manufacturer, s, setup};

// `env.events().all()` holds the events of the most recent invocation only,
// so every assertion below is per-call.

fn created_topics(env: &Env, id: &String) -> Vec<Val> {
    vec![
        env,
        symbol_short!("created").into_val(env),
        id.into_val(env),
    ]
}

#[test]
fn create_publishes_the_created_event() {
    let (env, client, admin) = setup();
    let maker = manufacturer(&env, &client, &admin);
    let id = s(&env, "001");

    client.create_asset(
        &maker,
        &id,
        &s(&env, "sedan"),
        &s(&env, "Arium"),
        &s(&env, "Thunder"),
        &2021,
    );

    let all_events = env.events().all();
    assert_eq!(all_events.len(), 1);
    let event = all_events.last().expect("No events found");

    assert_eq!(event.0, client.address);
    assert_eq!(event.1, created_topics(&env, &id));

    let event_data: AssetCreated = event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        AssetCreated {
            id: id.clone(),
            maker: s(&env, "Arium"),
            model: s(&env, "Thunder"),
            year: 2021,
        }
    );
}

#[test]
fn update_and_delete_publish_nothing() {
    let (env, client, admin) = setup();
    let maker = manufacturer(&env, &client, &admin);
    let deal = dealer(&env, &client, &admin);
    let id = s(&env, "001");

    client.create_asset(
        &maker,
        &id,
        &s(&env, "A"),
        &s(&env, "Arium"),
        &s(&env, "Thunder"),
        &2021,
    );
    assert_eq!(env.events().all().len(), 1);

    client.update_asset(&maker, &id, &s(&env, "B"));
    assert!(env.events().all().is_empty());

    client.delete_asset(&deal, &id);
    assert!(env.events().all().is_empty());
}

#[test]
fn each_create_publishes_exactly_one_event() {
    let (env, client, admin) = setup();
    let maker = manufacturer(&env, &client, &admin);

    for raw in ["101", "102", "103"] {
        let id = s(&env, raw);
        client.create_asset(
            &maker,
            &id,
            &s(&env, "v"),
            &s(&env, "Arium"),
            &s(&env, "Thunder"),
            &2022,
        );

        let all_events = env.events().all();
        assert_eq!(all_events.len(), 1);
        let event = all_events.last().expect("No events found");
        assert_eq!(event.0, client.address);
        assert_eq!(event.1, created_topics(&env, &id));
    }
}
