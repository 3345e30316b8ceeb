use soroban_sdk::{Address, Env, Symbol};

pub(crate) fn access_granted(env: &Env, namespace: Symbol, grantee: Address) {
    let topics = (Symbol::new(env, "access_granted"), namespace, grantee);
    env.events().publish(topics, ());
}
