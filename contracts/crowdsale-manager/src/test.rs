use crate::contract::{CrowdsaleManager, CrowdsaleManagerClient};
use fundhub_interfaces::services;
use fundhub_interfaces::testutils::TestAssetLedger;
use registry::{Registry, RegistryClient};
use service_locator::{ServiceLocator, ServiceLocatorClient};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env, Symbol};

fn setup_env<'a>() -> (Env, CrowdsaleManagerClient<'a>) {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let registry_id = env.register(Registry, (&admin,));
    let locator_id = env.register(ServiceLocator, (&admin,));
    let ledger_id = env.register(TestAssetLedger, ());
    ServiceLocatorClient::new(&env, &locator_id)
        .register(&Symbol::new(&env, services::ASSET_LEDGER), &ledger_id);

    let contract_id = env.register(CrowdsaleManager, (&registry_id, &locator_id));
    RegistryClient::new(&env, &registry_id)
        .grant_access(&Symbol::new(&env, "CrowdsaleManager"), &contract_id);

    let client = CrowdsaleManagerClient::new(&env, &contract_id);

    (env, client)
}

#[test]
fn constructor_stores_wiring() {
    let (env, client) = setup_env();

    assert_ne!(client.registry(), client.locator());
    assert!(client.campaigns().is_empty());
    assert_eq!(client.campaign_of(&Symbol::new(&env, "AWSM")), None);
}

#[test]
fn empty_manager_has_no_tokens_on_crowdsale() {
    let (env, client) = setup_env();

    assert!(client
        .get_tokens_on_crowdsale(&Address::generate(&env))
        .is_empty());
}
