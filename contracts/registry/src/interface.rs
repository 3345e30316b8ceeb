use crate::error::ContractError;
use soroban_sdk::{contractclient, Address, Bytes, Env, Symbol};

/// Key/value store partitioned into namespaces, each with its own set of writers.
#[contractclient(name = "RegistryClient")]
pub trait RegistryInterface {
    /// Allows `grantee` to write any key of `namespace`.
    ///
    /// Only callable by the owner. Granting an existing grant is a no-op.
    fn grant_access(env: Env, namespace: Symbol, grantee: Address);

    fn has_access(env: Env, namespace: Symbol, grantee: Address) -> bool;

    fn get(env: Env, namespace: Symbol, key: Bytes) -> Option<Bytes>;

    /// Stores `value` under `key` in `namespace`.
    ///
    /// Fails with [`ContractError::Unauthorized`] unless `caller` holds a grant for `namespace`.
    fn set(
        env: Env,
        caller: Address,
        namespace: Symbol,
        key: Bytes,
        value: Bytes,
    ) -> Result<(), ContractError>;

    /// Removes `key` from `namespace`. Same rules as [`RegistryInterface::set`].
    fn remove(env: Env, caller: Address, namespace: Symbol, key: Bytes)
        -> Result<(), ContractError>;
}
