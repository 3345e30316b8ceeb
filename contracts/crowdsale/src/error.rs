use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    Unauthorized = 1,
    NotInitialized = 2,
    CampaignInitialized = 3,
    CampaignRetired = 4,
    FundNotSet = 5,
    NotRunning = 6,
    CampaignRunning = 7,
    GoalReached = 8,
    NothingToRefund = 9,
    InvalidAmount = 10,
    InvalidGoal = 11,
    InvalidWindow = 12,
    HardCapExceeded = 13,
    RateUnavailable = 14,
    UnknownSalesAgent = 15,
}
