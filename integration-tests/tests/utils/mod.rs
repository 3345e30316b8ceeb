#![allow(dead_code)]

use crowdsale::{Crowdsale, CrowdsaleClient};
use crowdsale_manager::{CrowdsaleManager, CrowdsaleManagerClient};
use exchange::{Exchange, ExchangeClient};
use exchange_manager::{ExchangeManager, ExchangeManagerClient};
use fundhub_interfaces::services;
use fundhub_interfaces::testutils::{
    QueuedCrowdsaleFactory, QueuedCrowdsaleFactoryClient, QueuedExchangeFactory,
    QueuedExchangeFactoryClient, TestAssetLedger, TestAssetLedgerClient, TestPriceTicker,
    TestPriceTickerClient,
};
use fundhub_interfaces::types::{Fee, Strategy};
use fundhub_interfaces::AssetLedgerClient;
use registry::{Registry, RegistryClient};
use service_locator::{ServiceLocator, ServiceLocatorClient};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{Address, Env, Symbol};

/// Every fundhub contract deployed and wired through one registry and one service locator.
pub struct Fundhub<'a> {
    pub env: Env,
    pub admin: Address,
    pub registry: RegistryClient<'a>,
    pub locator: ServiceLocatorClient<'a>,
    pub ledger: AssetLedgerClient<'a>,
    pub ledger_admin: TestAssetLedgerClient<'a>,
    pub ticker: TestPriceTickerClient<'a>,
    pub native: TokenClient<'a>,
    pub native_admin: StellarAssetClient<'a>,
    pub crowdsale_factory: QueuedCrowdsaleFactoryClient<'a>,
    pub crowdsale_manager: CrowdsaleManagerClient<'a>,
    pub exchange_factory: QueuedExchangeFactoryClient<'a>,
    pub exchange_manager: ExchangeManagerClient<'a>,
}

impl Fundhub<'_> {
    pub fn symbol(&self, name: &str) -> Symbol {
        Symbol::new(&self.env, name)
    }

    pub fn factory_name(&self) -> Symbol {
        self.symbol(services::TIME_LIMITED_CROWDSALE_FACTORY)
    }

    /// Registers `asset` owned by `owner` on the ledger and returns its management extension.
    pub fn register_asset(&self, asset: &Symbol, owner: &Address) -> Address {
        let extension = Address::generate(&self.env);
        self.ledger_admin.register_asset(asset, owner, &extension);
        extension
    }

    /// Creates a campaign for `asset` through its management extension.
    pub fn create_campaign(
        &self,
        extension: &Address,
        owner: &Address,
        asset: &Symbol,
    ) -> CrowdsaleClient<'_> {
        let campaign_id = self.env.register(
            Crowdsale,
            (
                &self.crowdsale_manager.address,
                &self.locator.address,
                asset,
                Strategy::TimeLimited,
            ),
        );
        self.crowdsale_factory.push_campaign(&campaign_id);

        let created = self.crowdsale_manager.create_crowdsale_campaign(
            extension,
            owner,
            asset,
            &self.factory_name(),
        );
        assert_eq!(created, campaign_id);

        CrowdsaleClient::new(&self.env, &campaign_id)
    }

    pub fn create_exchange(&self, owner: &Address, symbol: &Symbol) -> ExchangeClient<'_> {
        let fee = Fee {
            numerator: 3,
            denominator: 1_000,
        };
        let exchange_id = self.env.register(
            Exchange,
            (
                &self.exchange_manager.address,
                symbol,
                fee,
                None::<Address>,
                true,
            ),
        );
        self.exchange_factory.push_exchange(&exchange_id);

        let created = self.exchange_manager.create_exchange(
            owner,
            symbol,
            &fee.numerator,
            &fee.denominator,
            &None,
            &true,
        );
        assert_eq!(created, exchange_id);

        ExchangeClient::new(&self.env, &exchange_id)
    }

    pub fn funded_account(&self, amount: i128) -> Address {
        let account = Address::generate(&self.env);
        self.native_admin.mint(&account, &amount);
        account
    }
}

pub fn setup_fundhub<'a>() -> Fundhub<'a> {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let registry_id = env.register(Registry, (&admin,));
    let locator_id = env.register(ServiceLocator, (&admin,));
    let registry = RegistryClient::new(&env, &registry_id);
    let locator = ServiceLocatorClient::new(&env, &locator_id);

    let ledger_id = env.register(TestAssetLedger, ());
    let ticker_id = env.register(TestPriceTicker, ());
    let native_id = env
        .register_stellar_asset_contract_v2(admin.clone())
        .address();

    let crowdsale_manager_id = env.register(CrowdsaleManager, (&registry_id, &locator_id));
    let crowdsale_factory_id = env.register(QueuedCrowdsaleFactory, ());
    let exchange_manager_id = env.register(ExchangeManager, (&registry_id, &locator_id));
    let exchange_factory_id = env.register(QueuedExchangeFactory, ());

    registry.grant_access(
        &Symbol::new(&env, "CrowdsaleManager"),
        &crowdsale_manager_id,
    );
    registry.grant_access(&Symbol::new(&env, "ExchangeManager"), &exchange_manager_id);

    for (name, address) in [
        (services::ASSET_LEDGER, &ledger_id),
        (services::PRICE_TICKER, &ticker_id),
        (services::NATIVE_TOKEN, &native_id),
        (services::CROWDSALE_MANAGER, &crowdsale_manager_id),
        (services::TIME_LIMITED_CROWDSALE_FACTORY, &crowdsale_factory_id),
        (services::EXCHANGE_MANAGER, &exchange_manager_id),
        (services::EXCHANGE_FACTORY, &exchange_factory_id),
    ] {
        locator.register(&Symbol::new(&env, name), address);
    }

    let ticker = TestPriceTickerClient::new(&env, &ticker_id);
    ticker.set_rate(&Symbol::new(&env, "XLM"), &Symbol::new(&env, "USD"), &1, &1);

    Fundhub {
        admin,
        registry,
        locator,
        ledger: AssetLedgerClient::new(&env, &ledger_id),
        ledger_admin: TestAssetLedgerClient::new(&env, &ledger_id),
        ticker,
        native: TokenClient::new(&env, &native_id),
        native_admin: StellarAssetClient::new(&env, &native_id),
        crowdsale_factory: QueuedCrowdsaleFactoryClient::new(&env, &crowdsale_factory_id),
        crowdsale_manager: CrowdsaleManagerClient::new(&env, &crowdsale_manager_id),
        exchange_factory: QueuedExchangeFactoryClient::new(&env, &exchange_factory_id),
        exchange_manager: ExchangeManagerClient::new(&env, &exchange_manager_id),
        env,
    }
}
