use soroban_sdk::{contracttype, Symbol};

/// Funding target of a campaign, denominated in `currency`.
///
/// Every `value` unit raised buys `rate_numerator / 10^rate_denominator` asset units.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Goal {
    pub currency: Symbol,
    pub low_limit: i128,
    pub hard_cap: i128,
    pub rate_numerator: u64,
    pub rate_denominator: u64,
}

/// Inclusive bounds on the campaign's strategy clock.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Window {
    pub start: u64,
    pub end: u64,
}

/// Native value received from one contributor, kept for refunds.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Contribution {
    /// Native amount forwarded to the fund.
    pub amount: i128,
    /// `amount` expressed in the goal currency.
    pub value: i128,
    /// Asset units credited on the ledger.
    pub tokens: i128,
}
