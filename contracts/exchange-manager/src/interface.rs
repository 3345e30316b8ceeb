use crate::error::ContractError;
use soroban_sdk::{contractclient, Address, Env, Symbol, Vec};

/// Owner-set queries and the exchange's self-unregistration live on
/// [`exchange::ExchangeIndexInterface`], which the manager implements as well.
#[contractclient(name = "ExchangeManagerClient")]
pub trait ExchangeManagerInterface {
    /// Deploys an exchange trading `symbol` through the registered exchange factory and makes
    /// `caller` its only owner.
    ///
    /// `fee_manager` may change the fee without being an owner.
    fn create_exchange(
        env: Env,
        caller: Address,
        symbol: Symbol,
        fee_numerator: u32,
        fee_denominator: u32,
        fee_manager: Option<Address>,
        active: bool,
    ) -> Result<Address, ContractError>;

    /// Shuts `exchange` down and drops it from the index.
    ///
    /// Only callable by an owner of the exchange.
    fn remove_exchange(env: Env, caller: Address, exchange: Address)
        -> Result<(), ContractError>;

    /// Adding an existing owner does nothing.
    ///
    /// Only callable by an owner of the exchange.
    fn add_exchange_owner(
        env: Env,
        caller: Address,
        exchange: Address,
        new_owner: Address,
    ) -> Result<(), ContractError>;

    /// Owners cannot remove themselves, so the owner set is never empty.
    ///
    /// Only callable by an owner of the exchange.
    fn remove_exchange_owner(
        env: Env,
        caller: Address,
        exchange: Address,
        owner: Address,
    ) -> Result<(), ContractError>;

    fn is_exchange_exists(env: Env, exchange: Address) -> bool;

    /// Live exchanges in creation order.
    fn exchanges(env: Env) -> Vec<Address>;

    fn exchanges_for_owner(env: Env, owner: Address) -> Vec<Address>;

    /// The exchange factory currently registered in the service locator.
    fn exchange_factory(env: Env) -> Address;

    fn registry(env: &Env) -> Address;

    fn locator(env: &Env) -> Address;
}
