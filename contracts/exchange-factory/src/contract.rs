use crate::error::ContractError;
use crate::event;
use crate::storage_types::DataKey;
use fundhub_interfaces::types::Fee;
use fundhub_interfaces::{services, ExchangeFactoryInterface};
use fundhub_std::interfaces::{self, OwnableInterface};
use fundhub_std::ownable;
use fundhub_std::ttl::extend_instance_ttl;
use service_locator::ServiceLocatorClient;
use soroban_sdk::{assert_with_error, contract, contractimpl, Address, BytesN, Env, Symbol};

#[ownable]
#[contract]
pub struct ExchangeFactory;

#[contractimpl]
impl ExchangeFactory {
    pub fn __constructor(
        env: Env,
        owner: Address,
        locator: Address,
        exchange_wasm_hash: BytesN<32>,
    ) {
        interfaces::set_owner(&env, &owner);
        env.storage().instance().set(&DataKey::Locator, &locator);
        env.storage()
            .instance()
            .set(&DataKey::ExchangeWasmHash, &exchange_wasm_hash);
    }

    pub fn locator(env: &Env) -> Address {
        env.storage()
            .instance()
            .get(&DataKey::Locator)
            .expect("locator not found")
    }

    pub fn exchange_wasm_hash(env: &Env) -> BytesN<32> {
        env.storage()
            .instance()
            .get(&DataKey::ExchangeWasmHash)
            .expect("exchange wasm hash not found")
    }

    /// Future exchanges are deployed from `wasm_hash`.
    ///
    /// Only callable by the owner.
    pub fn update_exchange_wasm_hash(env: Env, wasm_hash: BytesN<32>) {
        Self::owner(&env).require_auth();

        env.storage()
            .instance()
            .set(&DataKey::ExchangeWasmHash, &wasm_hash);

        extend_instance_ttl(&env);

        event::wasm_hash_updated(&env, wasm_hash);
    }
}

impl ExchangeFactory {
    fn next_salt(env: &Env) -> BytesN<32> {
        let nonce: u64 = env.storage().instance().get(&DataKey::Nonce).unwrap_or(0);
        env.storage().instance().set(&DataKey::Nonce, &(nonce + 1));

        let mut salt = [0u8; 32];
        salt[24..].copy_from_slice(&nonce.to_be_bytes());
        BytesN::from_array(env, &salt)
    }
}

#[contractimpl]
impl ExchangeFactoryInterface for ExchangeFactory {
    fn create_exchange(
        env: Env,
        manager: Address,
        symbol: Symbol,
        fee: Fee,
        fee_manager: Option<Address>,
        active: bool,
    ) -> Address {
        manager.require_auth();

        let exchange_manager = ServiceLocatorClient::new(&env, &Self::locator(&env))
            .resolve(&Symbol::new(&env, services::EXCHANGE_MANAGER));
        assert_with_error!(
            &env,
            manager == exchange_manager,
            ContractError::Unauthorized
        );

        let exchange = env
            .deployer()
            .with_current_contract(Self::next_salt(&env))
            .deploy_v2(
                Self::exchange_wasm_hash(&env),
                (manager, symbol.clone(), fee, fee_manager, active),
            );

        extend_instance_ttl(&env);

        event::exchange_deployed(&env, exchange.clone(), symbol);

        exchange
    }
}
