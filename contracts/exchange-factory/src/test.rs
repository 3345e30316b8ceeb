use crate::contract::{ExchangeFactory, ExchangeFactoryClient};
use fundhub_interfaces::services;
use fundhub_interfaces::types::Fee;
use fundhub_std::{assert_auth, assert_auth_err, assert_last_emitted_event};
use service_locator::{ServiceLocator, ServiceLocatorClient};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, BytesN, Env, Symbol};

fn setup_env<'a>() -> (Env, Address, Address, ExchangeFactoryClient<'a>) {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let locator_id = env.register(ServiceLocator, (&owner,));
    let manager = Address::generate(&env);
    ServiceLocatorClient::new(&env, &locator_id)
        .register(&Symbol::new(&env, services::EXCHANGE_MANAGER), &manager);

    let contract_id = env.register(
        ExchangeFactory,
        (&owner, &locator_id, BytesN::from_array(&env, &[1; 32])),
    );
    let client = ExchangeFactoryClient::new(&env, &contract_id);

    (env, owner, manager, client)
}

fn fee() -> Fee {
    Fee {
        numerator: 2,
        denominator: 1,
    }
}

#[test]
fn constructor_stores_configuration() {
    let (env, owner, _, client) = setup_env();

    assert_eq!(client.owner(), owner);
    assert_eq!(
        client.exchange_wasm_hash(),
        BytesN::from_array(&env, &[1; 32])
    );
}

#[test]
fn update_exchange_wasm_hash_by_owner() {
    let (env, owner, _, client) = setup_env();
    let wasm_hash = BytesN::from_array(&env, &[2; 32]);

    assert_auth!(owner, client.try_update_exchange_wasm_hash(&wasm_hash));

    assert_last_emitted_event(
        &env,
        &client.address,
        (Symbol::new(&env, "wasm_hash_updated"),),
        wasm_hash.clone(),
    );
    assert_eq!(client.exchange_wasm_hash(), wasm_hash);
}

#[test]
fn update_exchange_wasm_hash_by_stranger_fails() {
    let (env, _, _, client) = setup_env();
    let stranger = Address::generate(&env);
    let wasm_hash = BytesN::from_array(&env, &[2; 32]);

    assert_auth_err!(stranger, client.try_update_exchange_wasm_hash(&wasm_hash));
    assert_eq!(
        client.exchange_wasm_hash(),
        BytesN::from_array(&env, &[1; 32])
    );
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #1)")]
fn create_exchange_by_stranger_fails() {
    let (env, _, _, client) = setup_env();

    client.create_exchange(
        &Address::generate(&env),
        &Symbol::new(&env, "AWSM"),
        &fee(),
        &None,
        &true,
    );
}

#[test]
fn create_exchange_requires_manager_auth() {
    let (env, _, manager, client) = setup_env();
    let stranger = Address::generate(&env);
    let symbol = Symbol::new(&env, "AWSM");
    let fee_manager: Option<Address> = None;

    assert_auth_err!(
        stranger,
        client.try_create_exchange(&manager, &symbol, &fee(), &fee_manager, &true)
    );
}
