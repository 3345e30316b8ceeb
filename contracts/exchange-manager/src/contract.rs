use crate::error::ContractError;
use crate::event;
use crate::interface::ExchangeManagerInterface;
use crate::storage_types::{DataKey, RecordKey, NAMESPACE};
use exchange::{ExchangeClient, ExchangeIndexInterface};
use fundhub_interfaces::types::Fee;
use fundhub_interfaces::{services, ExchangeFactoryClient};
use fundhub_std::ensure;
use fundhub_std::ttl::extend_instance_ttl;
use registry::Namespace;
use service_locator::ServiceLocatorClient;
use soroban_sdk::{contract, contractimpl, vec, Address, Env, Symbol, Vec};

#[contract]
pub struct ExchangeManager;

#[contractimpl]
impl ExchangeManager {
    pub fn __constructor(env: Env, registry: Address, locator: Address) {
        env.storage().instance().set(&DataKey::Registry, &registry);
        env.storage().instance().set(&DataKey::Locator, &locator);
    }
}

impl ExchangeManager {
    fn records(env: &Env) -> Namespace<'_> {
        Namespace::new(env, &Self::registry(env), NAMESPACE)
    }

    fn owners_of(records: &Namespace, exchange: &Address) -> Option<Vec<Address>> {
        records.get(&RecordKey::Owners(exchange.clone()))
    }

    fn owned_by(env: &Env, records: &Namespace, owner: &Address) -> Vec<Address> {
        records
            .get(&RecordKey::OwnerExchanges(owner.clone()))
            .unwrap_or_else(|| Vec::new(env))
    }

    fn set_owned_by(records: &Namespace, owner: &Address, exchanges: &Vec<Address>) {
        let key = RecordKey::OwnerExchanges(owner.clone());
        if exchanges.is_empty() {
            records.remove(&key);
        } else {
            records.set(&key, exchanges);
        }
    }

    /// Returns the owner set of `exchange` once `caller` is confirmed to be part of it.
    fn ensure_owner(
        records: &Namespace,
        caller: &Address,
        exchange: &Address,
    ) -> Result<Vec<Address>, ContractError> {
        caller.require_auth();

        let owners =
            Self::owners_of(records, exchange).ok_or(ContractError::ExchangeNotFound)?;
        ensure!(owners.contains(caller), ContractError::Unauthorized);

        Ok(owners)
    }

    fn forget_exchange(env: &Env, records: &Namespace, exchange: &Address) {
        let Some(owners) = Self::owners_of(records, exchange) else {
            return;
        };

        for owner in owners.iter() {
            let mut owned = Self::owned_by(env, records, &owner);
            if let Some(index) = owned.first_index_of(exchange) {
                owned.remove(index);
            }
            Self::set_owned_by(records, &owner, &owned);
        }
        records.remove(&RecordKey::Owners(exchange.clone()));

        let mut exchanges = Self::exchanges(env.clone());
        if let Some(index) = exchanges.first_index_of(exchange) {
            exchanges.remove(index);
        }
        records.set(&RecordKey::Exchanges, &exchanges);

        extend_instance_ttl(env);

        event::exchange_removed(env, exchange.clone());
    }
}

#[contractimpl]
impl ExchangeManagerInterface for ExchangeManager {
    fn create_exchange(
        env: Env,
        caller: Address,
        symbol: Symbol,
        fee_numerator: u32,
        fee_denominator: u32,
        fee_manager: Option<Address>,
        active: bool,
    ) -> Result<Address, ContractError> {
        caller.require_auth();

        let fee = Fee {
            numerator: fee_numerator,
            denominator: fee_denominator,
        };
        ensure!(fee.is_valid(), ContractError::InvalidFee);

        let exchange = ExchangeFactoryClient::new(&env, &Self::exchange_factory(env.clone()))
            .create_exchange(
                &env.current_contract_address(),
                &symbol,
                &fee,
                &fee_manager,
                &active,
            );

        let records = Self::records(&env);

        let mut exchanges = Self::exchanges(env.clone());
        exchanges.push_back(exchange.clone());
        records.set(&RecordKey::Exchanges, &exchanges);
        records.set(
            &RecordKey::Owners(exchange.clone()),
            &vec![&env, caller.clone()],
        );

        let mut owned = Self::owned_by(&env, &records, &caller);
        owned.push_back(exchange.clone());
        Self::set_owned_by(&records, &caller, &owned);

        extend_instance_ttl(&env);

        event::exchange_created(&env, exchange.clone(), caller, symbol);

        Ok(exchange)
    }

    fn remove_exchange(
        env: Env,
        caller: Address,
        exchange: Address,
    ) -> Result<(), ContractError> {
        let records = Self::records(&env);
        Self::ensure_owner(&records, &caller, &exchange)?;

        ExchangeClient::new(&env, &exchange).shutdown();

        Self::forget_exchange(&env, &records, &exchange);

        Ok(())
    }

    fn add_exchange_owner(
        env: Env,
        caller: Address,
        exchange: Address,
        new_owner: Address,
    ) -> Result<(), ContractError> {
        let records = Self::records(&env);
        let mut owners = Self::ensure_owner(&records, &caller, &exchange)?;

        if owners.contains(&new_owner) {
            return Ok(());
        }

        owners.push_back(new_owner.clone());
        records.set(&RecordKey::Owners(exchange.clone()), &owners);

        let mut owned = Self::owned_by(&env, &records, &new_owner);
        owned.push_back(exchange.clone());
        Self::set_owned_by(&records, &new_owner, &owned);

        extend_instance_ttl(&env);

        event::exchange_owner_added(&env, exchange, new_owner);

        Ok(())
    }

    fn remove_exchange_owner(
        env: Env,
        caller: Address,
        exchange: Address,
        owner: Address,
    ) -> Result<(), ContractError> {
        let records = Self::records(&env);
        let mut owners = Self::ensure_owner(&records, &caller, &exchange)?;

        ensure!(owner != caller, ContractError::SelfRemovalForbidden);
        let index = owners
            .first_index_of(&owner)
            .ok_or(ContractError::NotAnOwner)?;

        owners.remove(index);
        records.set(&RecordKey::Owners(exchange.clone()), &owners);

        let mut owned = Self::owned_by(&env, &records, &owner);
        if let Some(index) = owned.first_index_of(&exchange) {
            owned.remove(index);
        }
        Self::set_owned_by(&records, &owner, &owned);

        extend_instance_ttl(&env);

        event::exchange_owner_removed(&env, exchange, owner);

        Ok(())
    }

    fn is_exchange_exists(env: Env, exchange: Address) -> bool {
        Self::records(&env).has(&RecordKey::Owners(exchange))
    }

    fn exchanges(env: Env) -> Vec<Address> {
        Self::records(&env)
            .get(&RecordKey::Exchanges)
            .unwrap_or_else(|| Vec::new(&env))
    }

    fn exchanges_for_owner(env: Env, owner: Address) -> Vec<Address> {
        Self::owned_by(&env, &Self::records(&env), &owner)
    }

    fn exchange_factory(env: Env) -> Address {
        ServiceLocatorClient::new(&env, &Self::locator(&env))
            .resolve(&Symbol::new(&env, services::EXCHANGE_FACTORY))
    }

    fn registry(env: &Env) -> Address {
        env.storage()
            .instance()
            .get(&DataKey::Registry)
            .expect("registry not found")
    }

    fn locator(env: &Env) -> Address {
        env.storage()
            .instance()
            .get(&DataKey::Locator)
            .expect("locator not found")
    }
}

#[contractimpl]
impl ExchangeIndexInterface for ExchangeManager {
    fn is_exchange_owner(env: Env, exchange: Address, account: Address) -> bool {
        Self::owners_of(&Self::records(&env), &exchange)
            .is_some_and(|owners| owners.contains(&account))
    }

    fn exchange_owners(env: Env, exchange: Address) -> Vec<Address> {
        Self::owners_of(&Self::records(&env), &exchange).unwrap_or_else(|| Vec::new(&env))
    }

    fn unregister_exchange(env: Env, exchange: Address) {
        exchange.require_auth();

        Self::forget_exchange(&env, &Self::records(&env), &exchange);
    }
}
