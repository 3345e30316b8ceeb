#![allow(dead_code)]

use crowdsale::{Crowdsale, CrowdsaleClient};
use fundhub_interfaces::services;
use fundhub_interfaces::testutils::{
    TestAssetLedger, TestAssetLedgerClient, TestPriceTicker, TestPriceTickerClient,
};
use fundhub_interfaces::types::Strategy;
use fundhub_interfaces::AssetLedgerClient;
use service_locator::{ServiceLocator, ServiceLocatorClient};
use soroban_sdk::testutils::{Address as _, Ledger as _};
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{Address, Env, Symbol};

pub const START: u64 = 1_000;
pub const END: u64 = 2_000;

pub struct TestConfig<'a> {
    pub env: Env,
    pub owner: Address,
    pub manager: Address,
    pub fund: Address,
    pub asset: Symbol,
    pub ledger: AssetLedgerClient<'a>,
    pub ledger_admin: TestAssetLedgerClient<'a>,
    pub ticker: TestPriceTickerClient<'a>,
    pub native: TokenClient<'a>,
    pub native_admin: StellarAssetClient<'a>,
    pub campaign: CrowdsaleClient<'a>,
}

pub fn setup_env<'a>(strategy: Strategy) -> TestConfig<'a> {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let locator_id = env.register(ServiceLocator, (&admin,));
    let locator = ServiceLocatorClient::new(&env, &locator_id);

    let ledger_id = env.register(TestAssetLedger, ());
    let ticker_id = env.register(TestPriceTicker, ());
    let native_id = env.register_stellar_asset_contract_v2(admin).address();

    locator.register(&Symbol::new(&env, services::ASSET_LEDGER), &ledger_id);
    locator.register(&Symbol::new(&env, services::PRICE_TICKER), &ticker_id);
    locator.register(&Symbol::new(&env, services::NATIVE_TOKEN), &native_id);

    let ledger = AssetLedgerClient::new(&env, &ledger_id);
    let ledger_admin = TestAssetLedgerClient::new(&env, &ledger_id);
    let ticker = TestPriceTickerClient::new(&env, &ticker_id);

    let owner = Address::generate(&env);
    let asset = Symbol::new(&env, "AWSM");
    ledger_admin.register_asset(&asset, &owner, &Address::generate(&env));

    let manager = Address::generate(&env);
    let campaign_id = env.register(Crowdsale, (&manager, &locator_id, &asset, strategy));
    ledger.add_asset_part_owner(&owner, &asset, &campaign_id);

    ticker.set_rate(&Symbol::new(&env, "XLM"), &Symbol::new(&env, "USD"), &1, &1);

    TestConfig {
        owner,
        manager,
        fund: Address::generate(&env),
        asset,
        ledger,
        ledger_admin,
        ticker,
        native: TokenClient::new(&env, &native_id),
        native_admin: StellarAssetClient::new(&env, &native_id),
        campaign: CrowdsaleClient::new(&env, &campaign_id),
        env,
    }
}

/// Initializes the campaign with a USD goal between `low_limit` and `hard_cap`, opens native
/// sales and moves the clock inside the window.
pub fn start_campaign(config: &TestConfig, low_limit: i128, hard_cap: i128) {
    let env = &config.env;

    config.campaign.enable_native_sale(&config.owner, &config.fund);
    config.campaign.init(
        &config.owner,
        &Symbol::new(env, "USD"),
        &low_limit,
        &hard_cap,
        &1,
        &0,
        &START,
        &END,
    );

    env.ledger().set_timestamp(START);
}

pub fn funded_contributor(config: &TestConfig, amount: i128) -> Address {
    let contributor = Address::generate(&config.env);
    config.native_admin.mint(&contributor, &amount);
    contributor
}
