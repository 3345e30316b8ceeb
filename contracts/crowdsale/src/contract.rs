use crate::error::ContractError;
use crate::event;
use crate::interface::CrowdsaleInterface;
use crate::storage_types::DataKey;
use crate::types::{Contribution, Goal, Window};
use fundhub_interfaces::types::{native_currency, Strategy};
use fundhub_interfaces::{services, AssetLedgerClient, PriceTickerClient};
use fundhub_std::ensure;
use fundhub_std::ttl::{extend_instance_ttl, extend_persistent_ttl};
use service_locator::ServiceLocatorClient;
use soroban_sdk::{contract, contractimpl, token, Address, Env, Symbol};

#[contract]
pub struct Crowdsale;

/// The rate denominator is a decimal exponent.
fn rate_scale(rate_denominator: u64) -> Option<i128> {
    10i128.checked_pow(u32::try_from(rate_denominator).ok()?)
}

#[contractimpl]
impl Crowdsale {
    pub fn __constructor(
        env: Env,
        manager: Address,
        locator: Address,
        asset: Symbol,
        strategy: Strategy,
    ) {
        env.storage().instance().set(&DataKey::Manager, &manager);
        env.storage().instance().set(&DataKey::Locator, &locator);
        env.storage().instance().set(&DataKey::Asset, &asset);
        env.storage().instance().set(&DataKey::Strategy, &strategy);
    }
}

impl Crowdsale {
    fn service(env: &Env, name: &str) -> Address {
        ServiceLocatorClient::new(env, &Self::locator(env)).resolve(&Symbol::new(env, name))
    }

    fn ledger(env: &Env) -> AssetLedgerClient<'_> {
        AssetLedgerClient::new(env, &Self::service(env, services::ASSET_LEDGER))
    }

    fn ensure_asset_owner(env: &Env, caller: &Address) -> Result<(), ContractError> {
        caller.require_auth();

        ensure!(
            Self::ledger(env).is_asset_owner(&Self::asset(env), caller),
            ContractError::Unauthorized
        );
        ensure!(!Self::is_retired(env), ContractError::CampaignRetired);

        Ok(())
    }

    fn initialized_goal(env: &Env) -> Result<Goal, ContractError> {
        Self::goal(env).ok_or(ContractError::NotInitialized)
    }

    fn initialized_window(env: &Env) -> Result<Window, ContractError> {
        Self::window(env).ok_or(ContractError::NotInitialized)
    }

    /// Converts `amount` paid in `currency` into its value in the goal currency and the asset
    /// units it buys.
    fn convert(env: &Env, currency: &Symbol, amount: i128) -> Result<(i128, i128), ContractError> {
        let goal = Self::initialized_goal(env)?;

        let value = if *currency == goal.currency {
            amount
        } else {
            let ticker = PriceTickerClient::new(env, &Self::price_ticker(env));
            ensure!(
                ticker.is_rate_available(currency, &goal.currency),
                ContractError::RateUnavailable
            );

            let (numerator, denominator) = ticker.get_rate(currency, &goal.currency);
            ensure!(
                numerator > 0 && denominator > 0,
                ContractError::RateUnavailable
            );

            amount
                .checked_mul(numerator)
                .ok_or(ContractError::InvalidAmount)?
                / denominator
        };

        let scale = rate_scale(goal.rate_denominator).ok_or(ContractError::InvalidAmount)?;
        let tokens = value
            .checked_mul(goal.rate_numerator as i128)
            .ok_or(ContractError::InvalidAmount)?
            / scale;

        ensure!(value > 0 && tokens > 0, ContractError::InvalidAmount);

        Ok((value, tokens))
    }

    /// Books `value` against the hard cap and credits `tokens` to `account` on the asset ledger.
    fn credit(env: &Env, account: &Address, value: i128, tokens: i128) -> Result<(), ContractError> {
        let goal = Self::initialized_goal(env)?;
        let raised = Self::raised(env)
            .checked_add(value)
            .ok_or(ContractError::InvalidAmount)?;

        ensure!(raised <= goal.hard_cap, ContractError::HardCapExceeded);

        Self::ledger(env).credit_balance(
            &env.current_contract_address(),
            account,
            &Self::asset(env),
            &tokens,
        );

        env.storage().instance().set(&DataKey::Raised, &raised);

        Ok(())
    }

    fn native_token(env: &Env) -> token::Client<'_> {
        token::Client::new(env, &Self::service(env, services::NATIVE_TOKEN))
    }
}

#[contractimpl]
impl CrowdsaleInterface for Crowdsale {
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
    ) -> Result<(), ContractError> {
        Self::ensure_asset_owner(&env, &caller)?;

        if Self::is_initialized(&env) {
            return Ok(());
        }

        ensure!(
            0 <= low_limit && low_limit <= hard_cap && hard_cap > 0,
            ContractError::InvalidGoal
        );
        ensure!(
            rate_numerator > 0 && rate_scale(rate_denominator).is_some(),
            ContractError::InvalidGoal
        );
        ensure!(start < end, ContractError::InvalidWindow);

        let goal = Goal {
            currency,
            low_limit,
            hard_cap,
            rate_numerator,
            rate_denominator,
        };
        let window = Window { start, end };

        env.storage().instance().set(&DataKey::Goal, &goal);
        env.storage().instance().set(&DataKey::Window, &window);
        env.storage().instance().set(&DataKey::Initialized, &true);

        extend_instance_ttl(&env);

        event::campaign_initialized(&env, Self::asset(&env), goal, window);
        Ok(())
    }

    fn enable_native_sale(env: Env, caller: Address, fund: Address) -> Result<(), ContractError> {
        Self::ensure_asset_owner(&env, &caller)?;

        if Self::fund(&env).is_some() {
            return Ok(());
        }

        let agent = env.current_contract_address();
        let currency = native_currency(&env);

        env.storage().instance().set(&DataKey::Fund, &fund);
        env.storage()
            .instance()
            .set(&DataKey::SalesAgent(currency.clone()), &agent);

        extend_instance_ttl(&env);

        event::sale_agent_registered(&env, agent, currency);
        Ok(())
    }

    fn register_sales_agent(
        env: Env,
        caller: Address,
        agent: Address,
        currency: Symbol,
    ) -> Result<(), ContractError> {
        Self::ensure_asset_owner(&env, &caller)?;

        env.storage()
            .instance()
            .set(&DataKey::SalesAgent(currency.clone()), &agent);

        extend_instance_ttl(&env);

        event::sale_agent_registered(&env, agent, currency);
        Ok(())
    }

    fn contribute(env: Env, contributor: Address, amount: i128) -> Result<i128, ContractError> {
        contributor.require_auth();

        let fund = Self::fund(&env).ok_or(ContractError::FundNotSet)?;

        ensure!(Self::is_running(&env), ContractError::NotRunning);
        ensure!(amount > 0, ContractError::InvalidAmount);

        let currency = native_currency(&env);
        let (value, tokens) = Self::convert(&env, &currency, amount)?;

        Self::credit(&env, &contributor, value, tokens)?;

        Self::native_token(&env).transfer(&contributor, &fund, &amount);

        let key = DataKey::Contribution(contributor.clone());
        let contribution = env
            .storage()
            .persistent()
            .get::<_, Contribution>(&key)
            .map_or(
                Contribution {
                    amount,
                    value,
                    tokens,
                },
                |previous| Contribution {
                    amount: previous.amount + amount,
                    value: previous.value + value,
                    tokens: previous.tokens + tokens,
                },
            );
        env.storage().persistent().set(&key, &contribution);
        extend_persistent_ttl(&env, &key);

        extend_instance_ttl(&env);

        event::contribution_received(&env, contributor, currency, amount, tokens);
        Ok(tokens)
    }

    fn sale(
        env: Env,
        agent: Address,
        buyer: Address,
        currency: Symbol,
        amount: i128,
    ) -> Result<i128, ContractError> {
        agent.require_auth();

        ensure!(
            Self::sales_agent(&env, currency.clone()) == Some(agent),
            ContractError::UnknownSalesAgent
        );
        ensure!(Self::is_running(&env), ContractError::NotRunning);
        ensure!(amount > 0, ContractError::InvalidAmount);

        let (value, tokens) = Self::convert(&env, &currency, amount)?;

        Self::credit(&env, &buyer, value, tokens)?;

        extend_instance_ttl(&env);

        event::contribution_received(&env, buyer, currency, amount, tokens);
        Ok(tokens)
    }

    fn refund(env: Env, contributor: Address) -> Result<i128, ContractError> {
        contributor.require_auth();

        let window = Self::initialized_window(&env)?;
        let now = Self::strategy(&env).now(&env);
        // Contributions are only accepted inside the window.
        ensure!(now >= window.start, ContractError::NothingToRefund);
        ensure!(now > window.end, ContractError::CampaignRunning);
        ensure!(!Self::is_goal_reached(&env), ContractError::GoalReached);

        let key = DataKey::Contribution(contributor.clone());
        let contribution: Contribution = env
            .storage()
            .persistent()
            .get(&key)
            .ok_or(ContractError::NothingToRefund)?;
        let fund = Self::fund(&env).ok_or(ContractError::FundNotSet)?;

        Self::ledger(&env).debit_balance(
            &env.current_contract_address(),
            &contributor,
            &Self::asset(&env),
            &contribution.tokens,
        );
        Self::native_token(&env).transfer(&fund, &contributor, &contribution.amount);

        env.storage().persistent().remove(&key);
        env.storage().instance().set(
            &DataKey::Raised,
            &(Self::raised(&env) - contribution.value),
        );

        extend_instance_ttl(&env);

        event::refunded(&env, contributor, contribution.amount, contribution.tokens);
        Ok(contribution.amount)
    }

    fn retire(env: Env, manager: Address) -> Result<(), ContractError> {
        manager.require_auth();

        ensure!(manager == Self::manager(&env), ContractError::Unauthorized);
        ensure!(
            !Self::is_initialized(&env),
            ContractError::CampaignInitialized
        );
        ensure!(!Self::is_retired(&env), ContractError::CampaignRetired);

        env.storage().instance().set(&DataKey::Retired, &true);

        extend_instance_ttl(&env);

        event::campaign_retired(&env, Self::asset(&env));
        Ok(())
    }

    fn asset(env: &Env) -> Symbol {
        env.storage()
            .instance()
            .get(&DataKey::Asset)
            .expect("asset not found")
    }

    fn manager(env: &Env) -> Address {
        env.storage()
            .instance()
            .get(&DataKey::Manager)
            .expect("manager not found")
    }

    fn locator(env: &Env) -> Address {
        env.storage()
            .instance()
            .get(&DataKey::Locator)
            .expect("locator not found")
    }

    fn strategy(env: &Env) -> Strategy {
        env.storage()
            .instance()
            .get(&DataKey::Strategy)
            .expect("strategy not found")
    }

    fn goal(env: &Env) -> Option<Goal> {
        env.storage().instance().get(&DataKey::Goal)
    }

    fn window(env: &Env) -> Option<Window> {
        env.storage().instance().get(&DataKey::Window)
    }

    fn fund(env: &Env) -> Option<Address> {
        env.storage().instance().get(&DataKey::Fund)
    }

    fn is_initialized(env: &Env) -> bool {
        env.storage()
            .instance()
            .get(&DataKey::Initialized)
            .unwrap_or(false)
    }

    fn is_retired(env: &Env) -> bool {
        env.storage()
            .instance()
            .get(&DataKey::Retired)
            .unwrap_or(false)
    }

    fn is_running(env: &Env) -> bool {
        let Ok(window) = Self::initialized_window(env) else {
            return false;
        };
        let now = Self::strategy(env).now(env);

        !Self::is_retired(env)
            && Self::fund(env).is_some()
            && window.start <= now
            && now <= window.end
    }

    fn is_finished(env: &Env) -> bool {
        Self::initialized_window(env).is_ok_and(|window| Self::strategy(env).now(env) > window.end)
    }

    fn is_goal_reached(env: &Env) -> bool {
        Self::goal(env).is_some_and(|goal| Self::raised(env) >= goal.low_limit)
    }

    fn raised(env: &Env) -> i128 {
        env.storage()
            .instance()
            .get(&DataKey::Raised)
            .unwrap_or(0)
    }

    fn contribution_of(env: &Env, contributor: Address) -> i128 {
        env.storage()
            .persistent()
            .get::<_, Contribution>(&DataKey::Contribution(contributor))
            .map_or(0, |contribution| contribution.amount)
    }

    fn sales_agent(env: &Env, currency: Symbol) -> Option<Address> {
        env.storage().instance().get(&DataKey::SalesAgent(currency))
    }

    fn price_ticker(env: &Env) -> Address {
        Self::service(env, services::PRICE_TICKER)
    }
}
