use crate::error::ContractError;
use crate::event;
use crate::storage_types::DataKey;
use fundhub_interfaces::types::Strategy;
use fundhub_interfaces::{services, CrowdsaleFactoryInterface};
use fundhub_std::interfaces::{self, OwnableInterface};
use fundhub_std::ownable;
use fundhub_std::ttl::extend_instance_ttl;
use service_locator::ServiceLocatorClient;
use soroban_sdk::{assert_with_error, contract, contractimpl, Address, BytesN, Env, Symbol};

#[ownable]
#[contract]
pub struct CrowdsaleFactory;

#[contractimpl]
impl CrowdsaleFactory {
    pub fn __constructor(
        env: Env,
        owner: Address,
        locator: Address,
        crowdsale_wasm_hash: BytesN<32>,
        strategy: Strategy,
    ) {
        interfaces::set_owner(&env, &owner);
        env.storage().instance().set(&DataKey::Locator, &locator);
        env.storage()
            .instance()
            .set(&DataKey::CrowdsaleWasmHash, &crowdsale_wasm_hash);
        env.storage().instance().set(&DataKey::Strategy, &strategy);
    }

    pub fn locator(env: &Env) -> Address {
        env.storage()
            .instance()
            .get(&DataKey::Locator)
            .expect("locator not found")
    }

    /// Clock every campaign deployed by this factory runs on.
    pub fn strategy(env: &Env) -> Strategy {
        env.storage()
            .instance()
            .get(&DataKey::Strategy)
            .expect("strategy not found")
    }

    pub fn crowdsale_wasm_hash(env: &Env) -> BytesN<32> {
        env.storage()
            .instance()
            .get(&DataKey::CrowdsaleWasmHash)
            .expect("crowdsale wasm hash not found")
    }

    /// Deploys future campaigns from `wasm_hash`. Existing campaigns are unaffected.
    ///
    /// Only callable by the owner.
    pub fn update_crowdsale_wasm_hash(env: Env, wasm_hash: BytesN<32>) {
        Self::owner(&env).require_auth();

        env.storage()
            .instance()
            .set(&DataKey::CrowdsaleWasmHash, &wasm_hash);

        extend_instance_ttl(&env);

        event::wasm_hash_updated(&env, wasm_hash);
    }
}

impl CrowdsaleFactory {
    fn next_salt(env: &Env) -> BytesN<32> {
        let nonce: u64 = env.storage().instance().get(&DataKey::Nonce).unwrap_or(0);
        env.storage().instance().set(&DataKey::Nonce, &(nonce + 1));

        let mut salt = [0u8; 32];
        salt[24..].copy_from_slice(&nonce.to_be_bytes());
        BytesN::from_array(env, &salt)
    }
}

#[contractimpl]
impl CrowdsaleFactoryInterface for CrowdsaleFactory {
    fn create_crowdsale(env: Env, manager: Address, asset: Symbol) -> Address {
        manager.require_auth();

        let crowdsale_manager = ServiceLocatorClient::new(&env, &Self::locator(&env))
            .resolve(&Symbol::new(&env, services::CROWDSALE_MANAGER));
        assert_with_error!(
            &env,
            manager == crowdsale_manager,
            ContractError::Unauthorized
        );

        let campaign = env
            .deployer()
            .with_current_contract(Self::next_salt(&env))
            .deploy_v2(
                Self::crowdsale_wasm_hash(&env),
                (
                    manager,
                    Self::locator(&env),
                    asset.clone(),
                    Self::strategy(&env),
                ),
            );

        extend_instance_ttl(&env);

        event::crowdsale_deployed(&env, asset, campaign.clone());

        campaign
    }
}
