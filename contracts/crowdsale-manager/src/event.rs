use soroban_sdk::{Address, Env, Symbol};

pub(crate) fn crowdsale_campaign_created(env: &Env, asset: Symbol, campaign: Address) {
    let topics = (Symbol::new(env, "crowdsale_campaign_created"), asset, campaign);
    env.events().publish(topics, ());
}

pub(crate) fn crowdsale_campaign_removed(env: &Env, asset: Symbol, campaign: Address) {
    let topics = (Symbol::new(env, "crowdsale_campaign_removed"), asset, campaign);
    env.events().publish(topics, ());
}
