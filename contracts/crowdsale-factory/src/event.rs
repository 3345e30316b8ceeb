use soroban_sdk::{Address, BytesN, Env, Symbol};

pub(crate) fn crowdsale_deployed(env: &Env, asset: Symbol, campaign: Address) {
    let topics = (Symbol::new(env, "crowdsale_deployed"), asset, campaign);
    env.events().publish(topics, ());
}

pub(crate) fn wasm_hash_updated(env: &Env, wasm_hash: BytesN<32>) {
    let topics = (Symbol::new(env, "wasm_hash_updated"),);
    env.events().publish(topics, wasm_hash);
}
