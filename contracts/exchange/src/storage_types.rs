use soroban_sdk::contracttype;

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Manager,
    Symbols,
    Fee,
    FeeManager,
    Active,
    Killed,
}
