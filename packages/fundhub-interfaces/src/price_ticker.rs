use soroban_sdk::{contractclient, Env, Symbol};

#[contractclient(name = "PriceTickerClient")]
pub trait PriceTickerInterface {
    /// Returns true if a rate between `base` and `quote` is currently known.
    fn is_rate_available(env: Env, base: Symbol, quote: Symbol) -> bool;

    /// Returns the price of one unit of `base` in `quote` as `(numerator, denominator)`.
    fn get_rate(env: Env, base: Symbol, quote: Symbol) -> (i128, i128);
}
