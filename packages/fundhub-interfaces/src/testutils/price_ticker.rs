use crate::PriceTickerInterface;
use soroban_sdk::{contract, contractimpl, contracttype, Env, Symbol};

#[contracttype]
#[derive(Clone, Debug)]
enum DataKey {
    Rate(Symbol, Symbol),
}

#[contract]
pub struct TestPriceTicker;

#[contractimpl]
impl TestPriceTicker {
    pub fn set_rate(env: Env, base: Symbol, quote: Symbol, numerator: i128, denominator: i128) {
        env.storage()
            .persistent()
            .set(&DataKey::Rate(base, quote), &(numerator, denominator));
    }
}

#[contractimpl]
impl PriceTickerInterface for TestPriceTicker {
    fn is_rate_available(env: Env, base: Symbol, quote: Symbol) -> bool {
        env.storage().persistent().has(&DataKey::Rate(base, quote))
    }

    fn get_rate(env: Env, base: Symbol, quote: Symbol) -> (i128, i128) {
        env.storage()
            .persistent()
            .get(&DataKey::Rate(base, quote))
            .unwrap_or((0, 0))
    }
}
