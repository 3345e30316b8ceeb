use crate::error::ContractError;
use crate::event;
use crate::index::ExchangeIndexClient;
use crate::interface::ExchangeInterface;
use crate::storage_types::DataKey;
use fundhub_interfaces::types::Fee;
use fundhub_std::ensure;
use fundhub_std::ttl::extend_instance_ttl;
use soroban_sdk::{assert_with_error, contract, contractimpl, vec, Address, Env, Symbol, Vec};

#[contract]
pub struct Exchange;

#[contractimpl]
impl Exchange {
    pub fn __constructor(
        env: Env,
        manager: Address,
        symbol: Symbol,
        fee: Fee,
        fee_manager: Option<Address>,
        active: bool,
    ) {
        assert_with_error!(&env, fee.is_valid(), ContractError::InvalidFee);

        env.storage().instance().set(&DataKey::Manager, &manager);
        env.storage()
            .instance()
            .set(&DataKey::Symbols, &vec![&env, symbol]);
        env.storage().instance().set(&DataKey::Fee, &fee);
        if let Some(fee_manager) = fee_manager {
            env.storage()
                .instance()
                .set(&DataKey::FeeManager, &fee_manager);
        }
        env.storage().instance().set(&DataKey::Active, &active);
    }
}

impl Exchange {
    fn index(env: &Env) -> ExchangeIndexClient<'_> {
        ExchangeIndexClient::new(env, &Self::manager(env))
    }

    fn is_owner(env: &Env, account: &Address) -> bool {
        Self::index(env).is_exchange_owner(&env.current_contract_address(), account)
    }

    fn ensure_owner(env: &Env, caller: &Address) -> Result<(), ContractError> {
        caller.require_auth();

        ensure!(Self::is_owner(env, caller), ContractError::Unauthorized);
        ensure!(!Self::is_killed(env), ContractError::ExchangeKilled);

        Ok(())
    }

    fn stop(env: &Env) {
        env.storage().instance().set(&DataKey::Killed, &true);
        env.storage().instance().set(&DataKey::Active, &false);

        extend_instance_ttl(env);
    }
}

#[contractimpl]
impl ExchangeInterface for Exchange {
    fn kill(env: Env, caller: Address) -> Result<(), ContractError> {
        Self::ensure_owner(&env, &caller)?;

        Self::stop(&env);

        Self::index(&env).unregister_exchange(&env.current_contract_address());

        Ok(())
    }

    fn shutdown(env: Env) -> Result<(), ContractError> {
        Self::manager(&env).require_auth();

        ensure!(!Self::is_killed(&env), ContractError::ExchangeKilled);

        Self::stop(&env);

        Ok(())
    }

    fn set_fee(env: Env, caller: Address, fee: Fee) -> Result<(), ContractError> {
        caller.require_auth();

        ensure!(
            Self::fee_manager(&env).as_ref() == Some(&caller) || Self::is_owner(&env, &caller),
            ContractError::Unauthorized
        );
        ensure!(!Self::is_killed(&env), ContractError::ExchangeKilled);
        ensure!(fee.is_valid(), ContractError::InvalidFee);

        env.storage().instance().set(&DataKey::Fee, &fee);

        extend_instance_ttl(&env);

        event::fee_updated(&env, env.current_contract_address(), fee);
        Ok(())
    }

    fn set_active(env: Env, caller: Address, active: bool) -> Result<(), ContractError> {
        Self::ensure_owner(&env, &caller)?;

        if Self::is_active(&env) == active {
            return Ok(());
        }

        env.storage().instance().set(&DataKey::Active, &active);

        extend_instance_ttl(&env);

        event::activity_changed(&env, env.current_contract_address(), active);
        Ok(())
    }

    fn add_symbol(env: Env, caller: Address, symbol: Symbol) -> Result<(), ContractError> {
        Self::ensure_owner(&env, &caller)?;

        let mut symbols = Self::symbols(&env);
        if symbols.contains(&symbol) {
            return Ok(());
        }

        symbols.push_back(symbol.clone());
        env.storage().instance().set(&DataKey::Symbols, &symbols);

        extend_instance_ttl(&env);

        event::symbol_added(&env, symbol);
        Ok(())
    }

    fn manager(env: &Env) -> Address {
        env.storage()
            .instance()
            .get(&DataKey::Manager)
            .expect("manager not found")
    }

    fn symbols(env: &Env) -> Vec<Symbol> {
        env.storage()
            .instance()
            .get(&DataKey::Symbols)
            .unwrap_or_else(|| Vec::new(env))
    }

    fn fee(env: &Env) -> Fee {
        env.storage()
            .instance()
            .get(&DataKey::Fee)
            .expect("fee not found")
    }

    fn fee_manager(env: &Env) -> Option<Address> {
        env.storage().instance().get(&DataKey::FeeManager)
    }

    fn is_active(env: &Env) -> bool {
        env.storage()
            .instance()
            .get(&DataKey::Active)
            .unwrap_or(false)
    }

    fn is_killed(env: &Env) -> bool {
        env.storage()
            .instance()
            .get(&DataKey::Killed)
            .unwrap_or(false)
    }

    fn owners(env: &Env) -> Vec<Address> {
        Self::index(env).exchange_owners(&env.current_contract_address())
    }

    fn calculate_fee(env: &Env, amount: i128) -> Result<i128, ContractError> {
        ensure!(amount >= 0, ContractError::InvalidAmount);

        Self::fee(env)
            .apply(amount)
            .ok_or(ContractError::InvalidAmount)
    }
}
