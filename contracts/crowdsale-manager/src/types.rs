use soroban_sdk::{contracttype, Symbol};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignRecord {
    pub asset: Symbol,
    /// Service name of the factory that created the campaign.
    pub factory: Symbol,
}
