use crate::types::Fee;
use crate::{CrowdsaleFactoryInterface, ExchangeFactoryInterface};
use soroban_sdk::{contract, contractimpl, contracttype, Address, Env, Symbol, Vec};

#[contracttype]
#[derive(Clone, Debug)]
enum DataKey {
    Queue,
}

fn push(env: &Env, instance: Address) {
    let mut queue: Vec<Address> = env
        .storage()
        .instance()
        .get(&DataKey::Queue)
        .unwrap_or_else(|| Vec::new(env));
    queue.push_back(instance);
    env.storage().instance().set(&DataKey::Queue, &queue);
}

fn pop(env: &Env) -> Address {
    let mut queue: Vec<Address> = env
        .storage()
        .instance()
        .get(&DataKey::Queue)
        .unwrap_or_else(|| Vec::new(env));
    let instance = queue.pop_front().expect("no instance queued");
    env.storage().instance().set(&DataKey::Queue, &queue);
    instance
}

/// Hands out campaigns registered by the test, in the order they were pushed.
#[contract]
pub struct QueuedCrowdsaleFactory;

#[contractimpl]
impl QueuedCrowdsaleFactory {
    pub fn push_campaign(env: Env, campaign: Address) {
        push(&env, campaign);
    }
}

#[contractimpl]
impl CrowdsaleFactoryInterface for QueuedCrowdsaleFactory {
    fn create_crowdsale(env: Env, manager: Address, _asset: Symbol) -> Address {
        manager.require_auth();

        pop(&env)
    }
}

/// Hands out exchanges registered by the test, in the order they were pushed.
#[contract]
pub struct QueuedExchangeFactory;

#[contractimpl]
impl QueuedExchangeFactory {
    pub fn push_exchange(env: Env, exchange: Address) {
        push(&env, exchange);
    }
}

#[contractimpl]
impl ExchangeFactoryInterface for QueuedExchangeFactory {
    fn create_exchange(
        env: Env,
        manager: Address,
        _symbol: Symbol,
        _fee: Fee,
        _fee_manager: Option<Address>,
        _active: bool,
    ) -> Address {
        manager.require_auth();

        pop(&env)
    }
}
