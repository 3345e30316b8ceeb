use soroban_sdk::{contractclient, Address, Env, Vec};

/// Part of the exchange manager an exchange relies on. The manager owns the owner set of every
/// exchange it created.
#[contractclient(name = "ExchangeIndexClient")]
pub trait ExchangeIndexInterface {
    fn is_exchange_owner(env: Env, exchange: Address, account: Address) -> bool;

    fn exchange_owners(env: Env, exchange: Address) -> Vec<Address>;

    /// Called by an exchange that killed itself. Requires the exchange's authorization.
    fn unregister_exchange(env: Env, exchange: Address);
}
