use soroban_sdk::{contracttype, Env, Symbol};

/// Currency of the value natively transferred on the network.
pub const NATIVE_CURRENCY: &str = "XLM";

pub fn native_currency(env: &Env) -> Symbol {
    Symbol::new(env, NATIVE_CURRENCY)
}

/// Clock a campaign window is measured against.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Strategy {
    /// Window bounds are ledger timestamps in seconds.
    TimeLimited,
    /// Window bounds are ledger sequence numbers.
    BlockLimited,
}

impl Strategy {
    pub fn now(&self, env: &Env) -> u64 {
        match self {
            Self::TimeLimited => env.ledger().timestamp(),
            Self::BlockLimited => env.ledger().sequence() as u64,
        }
    }
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Fee {
    pub numerator: u32,
    pub denominator: u32,
}

impl Fee {
    pub const fn is_valid(&self) -> bool {
        self.denominator > 0
    }

    /// Fee charged on `amount`, rounded down. `None` on overflow.
    pub fn apply(&self, amount: i128) -> Option<i128> {
        amount
            .checked_mul(self.numerator as i128)?
            .checked_div(self.denominator as i128)
    }
}
