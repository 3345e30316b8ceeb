use soroban_sdk::{Address, BytesN, Env, Symbol};

pub(crate) fn exchange_deployed(env: &Env, exchange: Address, symbol: Symbol) {
    let topics = (Symbol::new(env, "exchange_deployed"), exchange);
    env.events().publish(topics, symbol);
}

pub(crate) fn wasm_hash_updated(env: &Env, wasm_hash: BytesN<32>) {
    let topics = (Symbol::new(env, "wasm_hash_updated"),);
    env.events().publish(topics, wasm_hash);
}
