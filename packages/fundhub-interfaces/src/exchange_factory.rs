use crate::types::Fee;
use soroban_sdk::{contractclient, Address, Env, Symbol};

#[contractclient(name = "ExchangeFactoryClient")]
pub trait ExchangeFactoryInterface {
    /// Creates an exchange trading `symbol` and returns its address.
    ///
    /// Only callable by the exchange manager.
    fn create_exchange(
        env: Env,
        manager: Address,
        symbol: Symbol,
        fee: Fee,
        fee_manager: Option<Address>,
        active: bool,
    ) -> Address;
}
