use crate::error::ContractError;
use crate::types::CampaignRecord;
use soroban_sdk::{contractclient, Address, Env, Symbol, Vec};

#[contractclient(name = "CrowdsaleManagerClient")]
pub trait CrowdsaleManagerInterface {
    /// Creates a campaign for `asset` with the factory registered under `factory_name`.
    ///
    /// Must be reached through the asset's management `extension`, with both the extension and an
    /// `owner` of the asset authorizing. An asset may only have one unfinished campaign at a
    /// time; a finished one is archived to make room for the new campaign, which also ends its
    /// part ownership of the asset. Archiving fails while contributors can still claim refunds.
    /// Finished campaigns of other assets are dropped from the live list along the way.
    fn create_crowdsale_campaign(
        env: Env,
        extension: Address,
        owner: Address,
        asset: Symbol,
        factory_name: Symbol,
    ) -> Result<Address, ContractError>;

    /// Removes a campaign that was never initialized.
    fn delete_crowdsale_campaign(
        env: Env,
        extension: Address,
        owner: Address,
        campaign: Address,
    ) -> Result<(), ContractError>;

    /// Drops finished campaigns from [`campaigns`](Self::campaigns) and returns how many were
    /// dropped. Anyone may call it.
    fn prune_campaigns(env: Env) -> u32;

    /// Returns the assets `owner` currently owns that have an unfinished campaign.
    ///
    /// Ownership is read from the asset ledger on every call.
    fn get_tokens_on_crowdsale(env: Env, owner: Address) -> Vec<Symbol>;

    fn campaign_of(env: Env, asset: Symbol) -> Option<Address>;

    fn campaign_record(env: Env, campaign: Address) -> Option<CampaignRecord>;

    /// Campaigns in creation order. Finished campaigns stay listed until pruned.
    fn campaigns(env: Env) -> Vec<Address>;

    fn registry(env: &Env) -> Address;

    fn locator(env: &Env) -> Address;
}
