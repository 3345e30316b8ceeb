#![no_std]

#[cfg(test)]
extern crate std;

pub mod error;

#[cfg(test)]
mod test;

cfg_if::cfg_if! {
    if #[cfg(all(feature = "library", not(feature = "testutils")))] {
        pub use fundhub_interfaces::{ExchangeFactoryClient, ExchangeFactoryInterface};
    } else {
        mod event;
        mod storage_types;

        pub mod contract;
        pub use contract::{ExchangeFactory, ExchangeFactoryClient};
    }
}
