use crate::error::ContractError;
use crate::event;
use crate::interface::RegistryInterface;
use crate::storage_types::DataKey;
use fundhub_std::interfaces::{self, OwnableInterface};
use fundhub_std::ttl::{extend_instance_ttl, extend_persistent_ttl};
use fundhub_std::{ensure, ownable};
use soroban_sdk::{contract, contractimpl, Address, Bytes, Env, Symbol};

#[ownable]
#[contract]
pub struct Registry;

#[contractimpl]
impl Registry {
    pub fn __constructor(env: Env, owner: Address) {
        interfaces::set_owner(&env, &owner);
    }
}

impl Registry {
    fn ensure_access(env: &Env, caller: &Address, namespace: &Symbol) -> Result<(), ContractError> {
        caller.require_auth();

        ensure!(
            Self::has_access(env.clone(), namespace.clone(), caller.clone()),
            ContractError::Unauthorized
        );

        Ok(())
    }
}

#[contractimpl]
impl RegistryInterface for Registry {
    fn grant_access(env: Env, namespace: Symbol, grantee: Address) {
        Self::owner(&env).require_auth();

        let key = DataKey::Access(namespace.clone(), grantee.clone());
        if env.storage().persistent().has(&key) {
            return;
        }

        env.storage().persistent().set(&key, &());
        extend_persistent_ttl(&env, &key);
        extend_instance_ttl(&env);

        event::access_granted(&env, namespace, grantee);
    }

    fn has_access(env: Env, namespace: Symbol, grantee: Address) -> bool {
        let key = DataKey::Access(namespace, grantee);
        let granted = env.storage().persistent().has(&key);
        if granted {
            extend_persistent_ttl(&env, &key);
        }

        granted
    }

    fn get(env: Env, namespace: Symbol, key: Bytes) -> Option<Bytes> {
        let key = DataKey::Entry(namespace, key);
        let value = env.storage().persistent().get(&key);
        if value.is_some() {
            extend_persistent_ttl(&env, &key);
        }

        value
    }

    fn set(
        env: Env,
        caller: Address,
        namespace: Symbol,
        key: Bytes,
        value: Bytes,
    ) -> Result<(), ContractError> {
        Self::ensure_access(&env, &caller, &namespace)?;

        let key = DataKey::Entry(namespace, key);
        env.storage().persistent().set(&key, &value);
        extend_persistent_ttl(&env, &key);
        extend_instance_ttl(&env);

        Ok(())
    }

    fn remove(
        env: Env,
        caller: Address,
        namespace: Symbol,
        key: Bytes,
    ) -> Result<(), ContractError> {
        Self::ensure_access(&env, &caller, &namespace)?;

        env.storage()
            .persistent()
            .remove(&DataKey::Entry(namespace, key));
        extend_instance_ttl(&env);

        Ok(())
    }
}
