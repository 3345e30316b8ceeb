use soroban_sdk::{Address, Env, Symbol};

pub(crate) fn service_registered(env: &Env, name: Symbol, address: Address) {
    let topics = (Symbol::new(env, "service_registered"), name, address);
    env.events().publish(topics, ());
}

pub(crate) fn service_unregistered(env: &Env, name: Symbol) {
    let topics = (Symbol::new(env, "service_unregistered"), name);
    env.events().publish(topics, ());
}
