use crate::error::ContractError;
use crate::types::{Goal, Window};
use fundhub_interfaces::types::Strategy;
use soroban_sdk::{contractclient, Address, Env, Symbol};

/// A fundraising campaign for one asset.
///
/// The campaign never stores its owner. Every privileged call asks the asset ledger whether the
/// caller currently owns the asset, so ownership transfers take effect immediately.
#[contractclient(name = "CrowdsaleClient")]
pub trait CrowdsaleInterface {
    /// Sets the goal and window of the campaign.
    ///
    /// Only callable by an owner of the asset. The first successful call wins: once initialized,
    /// further calls return `Ok` without touching any state.
    fn init(
        env: Env,
        caller: Address,
        currency: Symbol,
        low_limit: i128,
        hard_cap: i128,
        rate_numerator: u64,
        rate_denominator: u64,
        start: u64,
        end: u64,
    ) -> Result<(), ContractError>;

    /// Opens the campaign to native contributions, which are forwarded to `fund`.
    ///
    /// Only callable by an owner of the asset. Does nothing if a fund is already set.
    fn enable_native_sale(env: Env, caller: Address, fund: Address) -> Result<(), ContractError>;

    /// Authorizes `agent` to report sales paid in `currency`.
    ///
    /// Only callable by an owner of the asset.
    fn register_sales_agent(
        env: Env,
        caller: Address,
        agent: Address,
        currency: Symbol,
    ) -> Result<(), ContractError>;

    /// Contributes `amount` of the native currency and returns the asset units credited to
    /// `contributor`.
    fn contribute(env: Env, contributor: Address, amount: i128) -> Result<i128, ContractError>;

    /// Reports a sale of `amount` paid in `currency` to `buyer` and returns the asset units
    /// credited. Only callable by the sales agent registered for `currency`.
    fn sale(
        env: Env,
        agent: Address,
        buyer: Address,
        currency: Symbol,
        amount: i128,
    ) -> Result<i128, ContractError>;

    /// Returns the native contribution of `contributor` once the campaign ended below its low
    /// limit.
    fn refund(env: Env, contributor: Address) -> Result<i128, ContractError>;

    /// Marks a campaign that was never initialized as retired.
    ///
    /// Only callable by the crowdsale manager that created the campaign.
    fn retire(env: Env, manager: Address) -> Result<(), ContractError>;

    fn asset(env: &Env) -> Symbol;

    fn manager(env: &Env) -> Address;

    fn locator(env: &Env) -> Address;

    fn strategy(env: &Env) -> Strategy;

    fn goal(env: &Env) -> Option<Goal>;

    fn window(env: &Env) -> Option<Window>;

    fn fund(env: &Env) -> Option<Address>;

    fn is_initialized(env: &Env) -> bool;

    fn is_retired(env: &Env) -> bool;

    /// Returns true while contributions are accepted.
    fn is_running(env: &Env) -> bool;

    /// Returns true once the strategy clock is past the end of the window.
    fn is_finished(env: &Env) -> bool;

    fn is_goal_reached(env: &Env) -> bool;

    /// Total raised, in the goal currency.
    fn raised(env: &Env) -> i128;

    /// Native amount contributed by `contributor` and not yet refunded.
    fn contribution_of(env: &Env, contributor: Address) -> i128;

    fn sales_agent(env: &Env, currency: Symbol) -> Option<Address>;

    fn price_ticker(env: &Env) -> Address;
}
