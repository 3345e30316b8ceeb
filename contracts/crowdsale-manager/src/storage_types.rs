use soroban_sdk::{contracttype, Address, Symbol};

/// Registry namespace holding the campaign records.
pub const NAMESPACE: &str = "CrowdsaleManager";

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Registry,
    Locator,
}

/// Keys of the records kept in the registry.
#[contracttype]
#[derive(Clone, Debug)]
pub enum RecordKey {
    Campaigns,
    Campaign(Address),
    AssetCampaign(Symbol),
}
