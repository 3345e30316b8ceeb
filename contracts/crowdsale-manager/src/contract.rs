use crate::error::ContractError;
use crate::event;
use crate::interface::CrowdsaleManagerInterface;
use crate::storage_types::{DataKey, RecordKey, NAMESPACE};
use crate::types::CampaignRecord;
use crowdsale::CrowdsaleClient;
use fundhub_interfaces::{services, AssetLedgerClient, CrowdsaleFactoryClient};
use fundhub_std::ensure;
use fundhub_std::ttl::extend_instance_ttl;
use registry::Namespace;
use service_locator::ServiceLocatorClient;
use soroban_sdk::{contract, contractimpl, Address, Env, Symbol, Vec};

#[contract]
pub struct CrowdsaleManager;

#[contractimpl]
impl CrowdsaleManager {
    pub fn __constructor(env: Env, registry: Address, locator: Address) {
        env.storage().instance().set(&DataKey::Registry, &registry);
        env.storage().instance().set(&DataKey::Locator, &locator);
    }
}

impl CrowdsaleManager {
    fn records(env: &Env) -> Namespace<'_> {
        Namespace::new(env, &Self::registry(env), NAMESPACE)
    }

    fn resolve(env: &Env, name: &Symbol) -> Address {
        ServiceLocatorClient::new(env, &Self::locator(env)).resolve(name)
    }

    fn ledger(env: &Env) -> AssetLedgerClient<'_> {
        AssetLedgerClient::new(
            env,
            &Self::resolve(env, &Symbol::new(env, services::ASSET_LEDGER)),
        )
    }

    /// The call must come through the asset's management extension on behalf of a current owner.
    fn ensure_asset_owner(
        ledger: &AssetLedgerClient,
        extension: &Address,
        owner: &Address,
        asset: &Symbol,
    ) -> Result<(), ContractError> {
        ensure!(
            ledger.extension_of(asset).as_ref() == Some(extension),
            ContractError::Unauthorized
        );
        ensure!(
            ledger.is_asset_owner(asset, owner),
            ContractError::Unauthorized
        );

        Ok(())
    }

    /// Drops finished campaigns from the live list. Their records stay so the asset's
    /// campaign can still be archived later.
    fn sweep_finished(env: &Env, records: &Namespace) -> u32 {
        let campaigns = Self::campaigns(env.clone());
        let mut live = Vec::new(env);
        for campaign in campaigns.iter() {
            if !CrowdsaleClient::new(env, &campaign).is_finished() {
                live.push_back(campaign);
            }
        }

        let pruned = campaigns.len() - live.len();
        if pruned > 0 {
            records.set(&RecordKey::Campaigns, &live);
        }

        pruned
    }

    fn forget_campaign(env: &Env, records: &Namespace, campaign: &Address, asset: &Symbol) {
        let mut campaigns = Self::campaigns(env.clone());
        if let Some(index) = campaigns.first_index_of(campaign) {
            campaigns.remove(index);
        }
        records.set(&RecordKey::Campaigns, &campaigns);
        records.remove(&RecordKey::Campaign(campaign.clone()));

        let asset_key = RecordKey::AssetCampaign(asset.clone());
        if records.get::<_, Address>(&asset_key).as_ref() == Some(campaign) {
            records.remove(&asset_key);
        }
    }
}

#[contractimpl]
impl CrowdsaleManagerInterface for CrowdsaleManager {
    fn create_crowdsale_campaign(
        env: Env,
        extension: Address,
        owner: Address,
        asset: Symbol,
        factory_name: Symbol,
    ) -> Result<Address, ContractError> {
        extension.require_auth();
        owner.require_auth();

        let ledger = Self::ledger(&env);
        Self::ensure_asset_owner(&ledger, &extension, &owner, &asset)?;

        let records = Self::records(&env);
        if let Some(existing) = Self::campaign_of(env.clone(), asset.clone()) {
            let previous = CrowdsaleClient::new(&env, &existing);
            ensure!(previous.is_finished(), ContractError::CampaignAlreadyExists);
            // Refunds debit through the campaign's part ownership.
            ensure!(
                previous.is_goal_reached() || previous.raised() == 0,
                ContractError::RefundsPending
            );

            ledger.remove_asset_part_owner(&owner, &asset, &existing);
            Self::forget_campaign(&env, &records, &existing, &asset);
        }
        Self::sweep_finished(&env, &records);

        let factory = Self::resolve(&env, &factory_name);
        let campaign = CrowdsaleFactoryClient::new(&env, &factory)
            .create_crowdsale(&env.current_contract_address(), &asset);

        ledger.add_asset_part_owner(&owner, &asset, &campaign);

        let mut campaigns = Self::campaigns(env.clone());
        campaigns.push_back(campaign.clone());
        records.set(&RecordKey::Campaigns, &campaigns);
        records.set(
            &RecordKey::Campaign(campaign.clone()),
            &CampaignRecord {
                asset: asset.clone(),
                factory: factory_name,
            },
        );
        records.set(&RecordKey::AssetCampaign(asset.clone()), &campaign);

        extend_instance_ttl(&env);

        event::crowdsale_campaign_created(&env, asset, campaign.clone());

        Ok(campaign)
    }

    fn delete_crowdsale_campaign(
        env: Env,
        extension: Address,
        owner: Address,
        campaign: Address,
    ) -> Result<(), ContractError> {
        extension.require_auth();
        owner.require_auth();

        let record = Self::campaign_record(env.clone(), campaign.clone())
            .ok_or(ContractError::CampaignNotFound)?;

        let ledger = Self::ledger(&env);
        Self::ensure_asset_owner(&ledger, &extension, &owner, &record.asset)?;

        let crowdsale = CrowdsaleClient::new(&env, &campaign);
        ensure!(
            !crowdsale.is_initialized(),
            ContractError::CampaignInitialized
        );

        crowdsale.retire(&env.current_contract_address());
        ledger.remove_asset_part_owner(&owner, &record.asset, &campaign);

        Self::forget_campaign(&env, &Self::records(&env), &campaign, &record.asset);

        extend_instance_ttl(&env);

        event::crowdsale_campaign_removed(&env, record.asset, campaign);

        Ok(())
    }

    fn prune_campaigns(env: Env) -> u32 {
        let pruned = Self::sweep_finished(&env, &Self::records(&env));
        extend_instance_ttl(&env);

        pruned
    }

    fn get_tokens_on_crowdsale(env: Env, owner: Address) -> Vec<Symbol> {
        let ledger = Self::ledger(&env);
        let mut tokens = Vec::new(&env);

        for campaign in Self::campaigns(env.clone()).iter() {
            let Some(record) = Self::campaign_record(env.clone(), campaign.clone()) else {
                continue;
            };

            if tokens.contains(&record.asset)
                || CrowdsaleClient::new(&env, &campaign).is_finished()
            {
                continue;
            }

            if ledger.is_asset_owner(&record.asset, &owner) {
                tokens.push_back(record.asset);
            }
        }

        tokens
    }

    fn campaign_of(env: Env, asset: Symbol) -> Option<Address> {
        Self::records(&env).get(&RecordKey::AssetCampaign(asset))
    }

    fn campaign_record(env: Env, campaign: Address) -> Option<CampaignRecord> {
        Self::records(&env).get(&RecordKey::Campaign(campaign))
    }

    fn campaigns(env: Env) -> Vec<Address> {
        Self::records(&env)
            .get(&RecordKey::Campaigns)
            .unwrap_or_else(|| Vec::new(&env))
    }

    fn registry(env: &Env) -> Address {
        env.storage()
            .instance()
            .get(&DataKey::Registry)
            .expect("registry not found")
    }

    fn locator(env: &Env) -> Address {
        env.storage()
            .instance()
            .get(&DataKey::Locator)
            .expect("locator not found")
    }
}
