mod ownable;
#[cfg(test)]
mod testdata;

pub use ownable::*;

/// Data keys for the shared interfaces. These keys break naming conventions on purpose.
/// If a contract defines a contract type that would collide with a key defined here,
/// the linter will complain about it.
mod storage {
    #![allow(non_camel_case_types)]

    use soroban_sdk::contracttype;

    #[contracttype]
    pub enum OwnerDataKey {
        Interfaces_Owner,
    }
}
