//! End-to-end scenarios wiring every fundhub contract together live under `tests/`.

#![no_std]
