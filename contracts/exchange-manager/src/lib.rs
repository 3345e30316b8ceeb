#![no_std]

#[cfg(test)]
extern crate std;

pub mod error;
mod interface;


cfg_if::cfg_if! {
    if #[cfg(all(feature = "library", not(feature = "testutils")))] {
        pub use interface::{ExchangeManagerClient, ExchangeManagerInterface};
    } else {
        mod event;
        mod storage_types;

        pub mod contract;
        pub use contract::{ExchangeManager, ExchangeManagerClient};
    }
}
