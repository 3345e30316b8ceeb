use soroban_sdk::{contracttype, Address, Bytes, Symbol};

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Entry(Symbol, Bytes),
    Access(Symbol, Address),
}
