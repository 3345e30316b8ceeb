use soroban_sdk::{contracttype, Address, Symbol};

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Manager,
    Locator,
    Asset,
    Strategy,
    Goal,
    Window,
    Fund,
    Initialized,
    Retired,
    Raised,
    SalesAgent(Symbol),
    Contribution(Address),
}
