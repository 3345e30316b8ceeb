use crate::error::ContractError;
use fundhub_interfaces::types::Fee;
use soroban_sdk::{contractclient, Address, Env, Symbol, Vec};

#[contractclient(name = "ExchangeClient")]
pub trait ExchangeInterface {
    /// Permanently stops the exchange and removes it from the manager's index.
    ///
    /// Only callable by an owner.
    fn kill(env: Env, caller: Address) -> Result<(), ContractError>;

    /// Permanently stops the exchange without notifying the manager.
    ///
    /// Only callable by the manager.
    fn shutdown(env: Env) -> Result<(), ContractError>;

    /// Only callable by an owner or the fee manager.
    fn set_fee(env: Env, caller: Address, fee: Fee) -> Result<(), ContractError>;

    /// Only callable by an owner.
    fn set_active(env: Env, caller: Address, active: bool) -> Result<(), ContractError>;

    /// Adds `symbol` to the traded symbols. Adding a listed symbol does nothing.
    ///
    /// Only callable by an owner.
    fn add_symbol(env: Env, caller: Address, symbol: Symbol) -> Result<(), ContractError>;

    fn manager(env: &Env) -> Address;

    fn symbols(env: &Env) -> Vec<Symbol>;

    fn fee(env: &Env) -> Fee;

    fn fee_manager(env: &Env) -> Option<Address>;

    fn is_active(env: &Env) -> bool;

    fn is_killed(env: &Env) -> bool;

    /// Current owner set, as recorded by the manager.
    fn owners(env: &Env) -> Vec<Address>;

    /// Fee charged on a trade of `amount`, rounded down.
    fn calculate_fee(env: &Env, amount: i128) -> Result<i128, ContractError>;
}
