#![no_std]

#[cfg(any(test, feature = "testutils"))]
extern crate std;

pub mod asset_ledger;
pub mod crowdsale_factory;
pub mod exchange_factory;
pub mod price_ticker;
pub mod services;
pub mod types;

#[cfg(all(target_family = "wasm", feature = "testutils"))]
compile_error!("'testutils' feature is not supported on 'wasm' target");

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;

pub use asset_ledger::{AssetLedgerClient, AssetLedgerInterface};
pub use crowdsale_factory::{CrowdsaleFactoryClient, CrowdsaleFactoryInterface};
pub use exchange_factory::{ExchangeFactoryClient, ExchangeFactoryInterface};
pub use price_ticker::{PriceTickerClient, PriceTickerInterface};
