//! Native stand-ins for the collaborators Fundhub contracts consume.
//!
//! Factories in production deploy contracts from uploaded wasm; the queued factories here hand
//! out instances registered by the test instead, so whole flows can run without compiled wasm.

mod asset_ledger;
mod factories;
mod price_ticker;

pub use asset_ledger::{TestAssetLedger, TestAssetLedgerClient};
pub use factories::{
    QueuedCrowdsaleFactory, QueuedCrowdsaleFactoryClient, QueuedExchangeFactory,
    QueuedExchangeFactoryClient,
};
pub use price_ticker::{TestPriceTicker, TestPriceTickerClient};
