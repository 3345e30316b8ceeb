use soroban_sdk::{contractclient, Address, Env, Symbol};

/// Ledger tracking asset ownership and balances per symbol.
///
/// Every mutator requires the auth of `operator`, who must currently own the asset.
#[contractclient(name = "AssetLedgerClient")]
pub trait AssetLedgerInterface {
    /// Returns true if `account` is an owner or part owner of `asset`.
    fn is_asset_owner(env: Env, asset: Symbol, account: Address) -> bool;

    /// Returns the management extension through which owners of `asset` reach platform services.
    fn extension_of(env: Env, asset: Symbol) -> Option<Address>;

    fn balance_of(env: Env, account: Address, asset: Symbol) -> i128;

    fn credit_balance(env: Env, operator: Address, account: Address, asset: Symbol, amount: i128);

    fn debit_balance(env: Env, operator: Address, account: Address, asset: Symbol, amount: i128);

    /// Gives `part_owner` the same ownership rights over `asset` as `operator`.
    fn add_asset_part_owner(env: Env, operator: Address, asset: Symbol, part_owner: Address);

    fn remove_asset_part_owner(env: Env, operator: Address, asset: Symbol, part_owner: Address);
}
