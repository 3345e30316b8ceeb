#![no_std]

#[cfg(test)]
extern crate std;

pub mod error;
mod index;
mod interface;

pub use index::{ExchangeIndexClient, ExchangeIndexInterface};


cfg_if::cfg_if! {
    if #[cfg(all(feature = "library", not(feature = "testutils")))] {
        pub use interface::{ExchangeClient, ExchangeInterface};
    } else {
        mod event;
        mod storage_types;

        pub mod contract;
        pub use contract::{Exchange, ExchangeClient};
    }
}
