use crate::error::ContractError;
use crate::event;
use crate::interface::ServiceLocatorInterface;
use crate::storage_types::DataKey;
use fundhub_std::interfaces::{self, OwnableInterface};
use fundhub_std::ttl::extend_instance_ttl;
use fundhub_std::{ensure, ownable};
use soroban_sdk::{contract, contractimpl, Address, Env, Symbol};

#[ownable]
#[contract]
pub struct ServiceLocator;

#[contractimpl]
impl ServiceLocator {
    pub fn __constructor(env: Env, owner: Address) {
        interfaces::set_owner(&env, &owner);
    }
}

#[contractimpl]
impl ServiceLocatorInterface for ServiceLocator {
    fn register(env: Env, name: Symbol, address: Address) {
        Self::owner(&env).require_auth();

        env.storage()
            .instance()
            .set(&DataKey::Service(name.clone()), &address);

        extend_instance_ttl(&env);

        event::service_registered(&env, name, address);
    }

    fn unregister(env: Env, name: Symbol) -> Result<(), ContractError> {
        Self::owner(&env).require_auth();

        let key = DataKey::Service(name.clone());

        ensure!(
            env.storage().instance().has(&key),
            ContractError::ServiceNotRegistered
        );

        env.storage().instance().remove(&key);

        extend_instance_ttl(&env);

        event::service_unregistered(&env, name);
        Ok(())
    }

    fn resolve(env: Env, name: Symbol) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&DataKey::Service(name))
            .ok_or(ContractError::ServiceNotRegistered)
    }

    fn is_registered(env: Env, name: Symbol) -> bool {
        env.storage().instance().has(&DataKey::Service(name))
    }
}
