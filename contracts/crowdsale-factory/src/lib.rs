#![no_std]

#[cfg(test)]
extern crate std;

pub mod error;


cfg_if::cfg_if! {
    if #[cfg(all(feature = "library", not(feature = "testutils")))] {
        pub use fundhub_interfaces::{CrowdsaleFactoryClient, CrowdsaleFactoryInterface};
    } else {
        mod event;
        mod storage_types;

        pub mod contract;
        pub use contract::{CrowdsaleFactory, CrowdsaleFactoryClient};
    }
}
