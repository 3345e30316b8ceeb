use crate::AssetLedgerInterface;
use soroban_sdk::{contract, contractimpl, contracttype, Address, Env, Symbol, Vec};

#[contracttype]
#[derive(Clone, Debug)]
enum DataKey {
    Asset(Symbol),
    Balance(Address, Symbol),
}

#[contracttype]
#[derive(Clone, Debug)]
struct AssetRecord {
    owners: Vec<Address>,
    extension: Address,
}

#[contract]
pub struct TestAssetLedger;

#[contractimpl]
impl TestAssetLedger {
    pub fn register_asset(env: Env, asset: Symbol, owner: Address, extension: Address) {
        let record = AssetRecord {
            owners: Vec::from_array(&env, [owner]),
            extension,
        };
        env.storage()
            .persistent()
            .set(&DataKey::Asset(asset), &record);
    }

    /// Hands the ownership held by `from` over to `to`. Part owners are unaffected.
    pub fn change_ownership(env: Env, asset: Symbol, from: Address, to: Address) {
        from.require_auth();

        let mut record = Self::record(&env, &asset);
        let index = record
            .owners
            .first_index_of(&from)
            .expect("not an asset owner");
        record.owners.set(index, to);

        env.storage()
            .persistent()
            .set(&DataKey::Asset(asset), &record);
    }
}

impl TestAssetLedger {
    fn record(env: &Env, asset: &Symbol) -> AssetRecord {
        env.storage()
            .persistent()
            .get(&DataKey::Asset(asset.clone()))
            .expect("asset not found")
    }

    fn authorize(env: &Env, operator: &Address, asset: &Symbol) -> AssetRecord {
        operator.require_auth();

        let record = Self::record(env, asset);
        assert!(record.owners.contains(operator), "not an asset owner");
        record
    }

    fn set_balance(env: &Env, account: Address, asset: Symbol, amount: i128) {
        env.storage()
            .persistent()
            .set(&DataKey::Balance(account, asset), &amount);
    }
}

#[contractimpl]
impl AssetLedgerInterface for TestAssetLedger {
    fn is_asset_owner(env: Env, asset: Symbol, account: Address) -> bool {
        env.storage()
            .persistent()
            .get::<_, AssetRecord>(&DataKey::Asset(asset))
            .is_some_and(|record| record.owners.contains(&account))
    }

    fn extension_of(env: Env, asset: Symbol) -> Option<Address> {
        env.storage()
            .persistent()
            .get::<_, AssetRecord>(&DataKey::Asset(asset))
            .map(|record| record.extension)
    }

    fn balance_of(env: Env, account: Address, asset: Symbol) -> i128 {
        env.storage()
            .persistent()
            .get(&DataKey::Balance(account, asset))
            .unwrap_or(0)
    }

    fn credit_balance(env: Env, operator: Address, account: Address, asset: Symbol, amount: i128) {
        Self::authorize(&env, &operator, &asset);
        assert!(amount >= 0, "negative amount");

        let balance = Self::balance_of(env.clone(), account.clone(), asset.clone());
        Self::set_balance(&env, account, asset, balance + amount);
    }

    fn debit_balance(env: Env, operator: Address, account: Address, asset: Symbol, amount: i128) {
        Self::authorize(&env, &operator, &asset);
        assert!(amount >= 0, "negative amount");

        let balance = Self::balance_of(env.clone(), account.clone(), asset.clone());
        assert!(balance >= amount, "insufficient balance");
        Self::set_balance(&env, account, asset, balance - amount);
    }

    fn add_asset_part_owner(env: Env, operator: Address, asset: Symbol, part_owner: Address) {
        let mut record = Self::authorize(&env, &operator, &asset);
        if !record.owners.contains(&part_owner) {
            record.owners.push_back(part_owner);
        }

        env.storage()
            .persistent()
            .set(&DataKey::Asset(asset), &record);
    }

    fn remove_asset_part_owner(env: Env, operator: Address, asset: Symbol, part_owner: Address) {
        let mut record = Self::authorize(&env, &operator, &asset);
        if let Some(index) = record.owners.first_index_of(&part_owner) {
            record.owners.remove(index);
        }

        env.storage()
            .persistent()
            .set(&DataKey::Asset(asset), &record);
    }
}
