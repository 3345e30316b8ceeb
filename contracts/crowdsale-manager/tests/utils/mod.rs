#![allow(dead_code)]

use crowdsale::{Crowdsale, CrowdsaleClient};
use crowdsale_manager::{CrowdsaleManager, CrowdsaleManagerClient};
use fundhub_interfaces::services;
use fundhub_interfaces::testutils::{
    QueuedCrowdsaleFactory, QueuedCrowdsaleFactoryClient, TestAssetLedger, TestAssetLedgerClient,
};
use fundhub_interfaces::types::Strategy;
use fundhub_interfaces::AssetLedgerClient;
use registry::{Registry, RegistryClient};
use service_locator::{ServiceLocator, ServiceLocatorClient};
use soroban_sdk::testutils::{Address as _, Ledger as _};
use soroban_sdk::{Address, Env, Symbol};

pub struct TestConfig<'a> {
    pub env: Env,
    pub owner: Address,
    pub extension: Address,
    pub asset: Symbol,
    pub locator: ServiceLocatorClient<'a>,
    pub ledger: AssetLedgerClient<'a>,
    pub ledger_admin: TestAssetLedgerClient<'a>,
    pub factory: QueuedCrowdsaleFactoryClient<'a>,
    pub manager: CrowdsaleManagerClient<'a>,
}

impl TestConfig<'_> {
    pub fn factory_name(&self) -> Symbol {
        Symbol::new(&self.env, services::TIME_LIMITED_CROWDSALE_FACTORY)
    }

    /// Registers a new asset owned by `owner` and returns its management extension.
    pub fn register_asset(&self, asset: &Symbol, owner: &Address) -> Address {
        let extension = Address::generate(&self.env);
        self.ledger_admin.register_asset(asset, owner, &extension);
        extension
    }

    /// Registers a campaign for `asset` that the factory will hand out on its next creation.
    pub fn queue_campaign(&self, asset: &Symbol) -> CrowdsaleClient<'_> {
        let campaign_id = self.env.register(
            Crowdsale,
            (
                &self.manager.address,
                &self.locator.address,
                asset,
                Strategy::TimeLimited,
            ),
        );
        self.factory.push_campaign(&campaign_id);

        CrowdsaleClient::new(&self.env, &campaign_id)
    }

    pub fn create_campaign(&self) -> CrowdsaleClient<'_> {
        self.create_campaign_for(&self.extension, &self.owner, &self.asset)
    }

    pub fn create_campaign_for(
        &self,
        extension: &Address,
        owner: &Address,
        asset: &Symbol,
    ) -> CrowdsaleClient<'_> {
        let campaign = self.queue_campaign(asset);
        self.manager
            .create_crowdsale_campaign(extension, owner, asset, &self.factory_name());

        campaign
    }

    /// Initializes `campaign` with a window ending at `end` and moves the clock past it.
    pub fn finish_campaign(&self, campaign: &CrowdsaleClient, owner: &Address, end: u64) {
        campaign.init(
            owner,
            &Symbol::new(&self.env, "USD"),
            &0,
            &1_000,
            &1,
            &0,
            &0,
            &end,
        );
        self.env.ledger().set_timestamp(end + 1);
    }
}

pub fn setup_env<'a>() -> TestConfig<'a> {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let registry_id = env.register(Registry, (&admin,));
    let locator_id = env.register(ServiceLocator, (&admin,));
    let locator = ServiceLocatorClient::new(&env, &locator_id);

    let manager_id = env.register(CrowdsaleManager, (&registry_id, &locator_id));
    RegistryClient::new(&env, &registry_id)
        .grant_access(&Symbol::new(&env, "CrowdsaleManager"), &manager_id);

    let ledger_id = env.register(TestAssetLedger, ());
    let factory_id = env.register(QueuedCrowdsaleFactory, ());

    locator.register(&Symbol::new(&env, services::ASSET_LEDGER), &ledger_id);
    locator.register(&Symbol::new(&env, services::CROWDSALE_MANAGER), &manager_id);
    locator.register(
        &Symbol::new(&env, services::TIME_LIMITED_CROWDSALE_FACTORY),
        &factory_id,
    );

    let ledger_admin = TestAssetLedgerClient::new(&env, &ledger_id);
    let owner = Address::generate(&env);
    let extension = Address::generate(&env);
    let asset = Symbol::new(&env, "AWSM");
    ledger_admin.register_asset(&asset, &owner, &extension);

    TestConfig {
        owner,
        extension,
        asset,
        locator,
        ledger: AssetLedgerClient::new(&env, &ledger_id),
        ledger_admin,
        factory: QueuedCrowdsaleFactoryClient::new(&env, &factory_id),
        manager: CrowdsaleManagerClient::new(&env, &manager_id),
        env,
    }
}
