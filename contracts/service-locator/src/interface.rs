use crate::error::ContractError;
use soroban_sdk::{contractclient, Address, Env, Symbol};

#[contractclient(name = "ServiceLocatorClient")]
pub trait ServiceLocatorInterface {
    /// Points `name` at `address`, replacing any previous registration.
    ///
    /// Only callable by the owner.
    fn register(env: Env, name: Symbol, address: Address);

    /// Only callable by the owner.
    fn unregister(env: Env, name: Symbol) -> Result<(), ContractError>;

    /// Returns the address registered under `name`.
    ///
    /// Dependents call this through the non-fallible client, so a missing service aborts their
    /// whole invocation.
    fn resolve(env: Env, name: Symbol) -> Result<Address, ContractError>;

    fn is_registered(env: Env, name: Symbol) -> bool;
}
