use soroban_sdk::{contracttype, Symbol};

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Service(Symbol),
}
