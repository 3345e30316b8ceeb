use crate::interfaces::storage;
use soroban_sdk::{contractclient, Address, Env, Symbol};

#[contractclient(name = "OwnableClient")]
pub trait OwnableInterface {
    /// Returns the address of the contract's owner.
    fn owner(env: &Env) -> Address;

    /// Transfers ownership of the contract to a new address.
    fn transfer_ownership(env: &Env, new_owner: Address);
}

/// Default implementation of the [OwnableInterface] trait.
pub fn owner(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&storage::OwnerDataKey::Interfaces_Owner)
        .expect("owner must be set during contract construction")
}

/// Default implementation of the [OwnableInterface] trait. Ensures the current owner is authorized and emits an event after the transfer.
pub fn transfer_ownership<T: OwnableInterface>(env: &Env, new_owner: Address) {
    let current_owner = T::owner(env);
    current_owner.require_auth();

    set_owner(env, &new_owner);

    env.events().publish(
        (
            Symbol::new(env, "ownership_transferred"),
            current_owner,
            new_owner,
        ),
        (),
    );
}

/// Lets contracts set the owner internally. This should never be part of a contract interface.
pub fn set_owner(env: &Env, owner: &Address) {
    env.storage()
        .instance()
        .set(&storage::OwnerDataKey::Interfaces_Owner, owner);
}
