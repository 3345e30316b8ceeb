#![allow(dead_code)]

use exchange::{Exchange, ExchangeClient};
use exchange_manager::{ExchangeManager, ExchangeManagerClient};
use fundhub_interfaces::services;
use fundhub_interfaces::testutils::{QueuedExchangeFactory, QueuedExchangeFactoryClient};
use fundhub_interfaces::types::Fee;
use registry::{Registry, RegistryClient};
use service_locator::{ServiceLocator, ServiceLocatorClient};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env, Symbol};

pub const FEE_NUMERATOR: u32 = 3;
pub const FEE_DENOMINATOR: u32 = 1_000;

pub struct TestConfig<'a> {
    pub env: Env,
    pub owner: Address,
    pub symbol: Symbol,
    pub locator: ServiceLocatorClient<'a>,
    pub factory: QueuedExchangeFactoryClient<'a>,
    pub manager: ExchangeManagerClient<'a>,
}

impl TestConfig<'_> {
    /// Registers an exchange that the factory will hand out on its next creation.
    pub fn queue_exchange(&self, fee_manager: Option<Address>) -> ExchangeClient<'_> {
        let exchange_id = self.env.register(
            Exchange,
            (
                &self.manager.address,
                &self.symbol,
                Fee {
                    numerator: FEE_NUMERATOR,
                    denominator: FEE_DENOMINATOR,
                },
                fee_manager,
                true,
            ),
        );
        self.factory.push_exchange(&exchange_id);

        ExchangeClient::new(&self.env, &exchange_id)
    }

    pub fn create_exchange(&self, owner: &Address) -> ExchangeClient<'_> {
        let exchange = self.queue_exchange(None);
        self.manager.create_exchange(
            owner,
            &self.symbol,
            &FEE_NUMERATOR,
            &FEE_DENOMINATOR,
            &None,
            &true,
        );

        exchange
    }
}

pub fn setup_env<'a>() -> TestConfig<'a> {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let registry_id = env.register(Registry, (&admin,));
    let locator_id = env.register(ServiceLocator, (&admin,));
    let locator = ServiceLocatorClient::new(&env, &locator_id);

    let manager_id = env.register(ExchangeManager, (&registry_id, &locator_id));
    RegistryClient::new(&env, &registry_id)
        .grant_access(&Symbol::new(&env, "ExchangeManager"), &manager_id);

    let factory_id = env.register(QueuedExchangeFactory, ());
    locator.register(&Symbol::new(&env, services::EXCHANGE_MANAGER), &manager_id);
    locator.register(&Symbol::new(&env, services::EXCHANGE_FACTORY), &factory_id);

    TestConfig {
        owner: Address::generate(&env),
        symbol: Symbol::new(&env, "AWSM"),
        locator,
        factory: QueuedExchangeFactoryClient::new(&env, &factory_id),
        manager: ExchangeManagerClient::new(&env, &manager_id),
        env,
    }
}
