use soroban_sdk::{Address, Env, Symbol};

pub(crate) fn exchange_created(env: &Env, exchange: Address, owner: Address, symbol: Symbol) {
    let topics = (Symbol::new(env, "exchange_created"), exchange, owner);
    env.events().publish(topics, symbol);
}

pub(crate) fn exchange_removed(env: &Env, exchange: Address) {
    let topics = (Symbol::new(env, "exchange_removed"), exchange);
    env.events().publish(topics, ());
}

pub(crate) fn exchange_owner_added(env: &Env, exchange: Address, owner: Address) {
    let topics = (Symbol::new(env, "exchange_owner_added"), exchange, owner);
    env.events().publish(topics, ());
}

pub(crate) fn exchange_owner_removed(env: &Env, exchange: Address, owner: Address) {
    let topics = (Symbol::new(env, "exchange_owner_removed"), exchange, owner);
    env.events().publish(topics, ());
}
