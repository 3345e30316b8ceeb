use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    Unauthorized = 1,
    CampaignAlreadyExists = 2,
    CampaignNotFound = 3,
    CampaignInitialized = 4,
    RefundsPending = 5,
}
