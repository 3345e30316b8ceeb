//! Names under which collaborators are registered in the service locator.

pub const ASSET_LEDGER: &str = "AssetLedger";
pub const PRICE_TICKER: &str = "PriceTicker";
pub const NATIVE_TOKEN: &str = "NativeToken";
pub const CROWDSALE_MANAGER: &str = "CrowdsaleManager";
pub const TIME_LIMITED_CROWDSALE_FACTORY: &str = "TimeLimitedCrowdsaleFactory";
pub const BLOCK_LIMITED_CROWDSALE_FACTORY: &str = "BlockLimitedCrowdsaleFactory";
pub const EXCHANGE_MANAGER: &str = "ExchangeManager";
pub const EXCHANGE_FACTORY: &str = "ExchangeFactory";
