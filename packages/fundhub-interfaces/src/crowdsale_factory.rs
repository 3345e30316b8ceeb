use soroban_sdk::{contractclient, Address, Env, Symbol};

/// A campaign strategy. Implementations create a new campaign bound to `asset` on behalf of
/// the crowdsale manager.
#[contractclient(name = "CrowdsaleFactoryClient")]
pub trait CrowdsaleFactoryInterface {
    /// Creates a campaign for `asset` and returns its address.
    ///
    /// Only callable by the crowdsale manager.
    fn create_crowdsale(env: Env, manager: Address, asset: Symbol) -> Address;
}
