use soroban_sdk::{contracttype, Address};

/// Registry namespace holding the exchange index.
pub const NAMESPACE: &str = "ExchangeManager";

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Registry,
    Locator,
}

#[contracttype]
#[derive(Clone, Debug)]
pub enum RecordKey {
    Exchanges,
    Owners(Address),
    OwnerExchanges(Address),
}
