#![no_std]

#[cfg(test)]
extern crate std;

pub mod error;
mod interface;
pub mod types;

#[cfg(test)]
mod test;

cfg_if::cfg_if! {
    if #[cfg(all(feature = "library", not(feature = "testutils")))] {
        pub use interface::{CrowdsaleManagerClient, CrowdsaleManagerInterface};
    } else {
        mod event;
        mod storage_types;

        pub mod contract;
        pub use contract::{CrowdsaleManager, CrowdsaleManagerClient};
    }
}
