use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    Unauthorized = 1,
    ExchangeNotFound = 2,
    InvalidFee = 3,
    SelfRemovalForbidden = 4,
    NotAnOwner = 5,
}
