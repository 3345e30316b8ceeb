#![no_std]

#[cfg(test)]
extern crate std;

pub mod error;
mod interface;
mod namespace;

pub use namespace::Namespace;


cfg_if::cfg_if! {
    if #[cfg(all(feature = "library", not(feature = "testutils")))] {
        pub use interface::{RegistryClient, RegistryInterface};
    } else {
        mod event;
        mod storage_types;

        pub mod contract;
        pub use contract::{Registry, RegistryClient};
    }
}
