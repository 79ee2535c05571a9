//! Shared helpers for the vault's program-level tests.

#![allow(dead_code)]

pub mod instructions;

pub use instructions::*;
pub use setup::*;
