use crate::types::{Goal, Window};
use soroban_sdk::{Address, Env, Symbol};

pub(crate) fn campaign_initialized(env: &Env, asset: Symbol, goal: Goal, window: Window) {
    let topics = (Symbol::new(env, "campaign_initialized"), asset);
    env.events().publish(topics, (goal, window));
}

pub(crate) fn sale_agent_registered(env: &Env, agent: Address, currency: Symbol) {
    let topics = (Symbol::new(env, "sale_agent_registered"), agent, currency);
    env.events().publish(topics, ());
}

pub(crate) fn contribution_received(
    env: &Env,
    contributor: Address,
    currency: Symbol,
    amount: i128,
    tokens: i128,
) {
    let topics = (Symbol::new(env, "contribution_received"), contributor);
    env.events().publish(topics, (currency, amount, tokens));
}

pub(crate) fn refunded(env: &Env, contributor: Address, amount: i128, tokens: i128) {
    let topics = (Symbol::new(env, "refunded"), contributor);
    env.events().publish(topics, (amount, tokens));
}

pub(crate) fn campaign_retired(env: &Env, asset: Symbol) {
    let topics = (Symbol::new(env, "campaign_retired"), asset);
    env.events().publish(topics, ());
}
