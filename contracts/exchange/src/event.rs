use fundhub_interfaces::types::Fee;
use soroban_sdk::{Address, Env, Symbol};

pub(crate) fn fee_updated(env: &Env, exchange: Address, fee: Fee) {
    let topics = (Symbol::new(env, "fee_updated"), exchange);
    env.events().publish(topics, fee);
}

pub(crate) fn activity_changed(env: &Env, exchange: Address, active: bool) {
    let topics = (Symbol::new(env, "activity_changed"), exchange);
    env.events().publish(topics, active);
}

pub(crate) fn symbol_added(env: &Env, symbol: Symbol) {
    let topics = (Symbol::new(env, "symbol_added"), symbol);
    env.events().publish(topics, ());
}
