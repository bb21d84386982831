//! FundMe Common Library
//!
//! Shared types, constants, and utilities for the FundMe protocol contracts.
//!
//! The protocol is a minimal value-custody ledger: deposits in the native
//! settlement asset are admitted against a reference-currency minimum
//! (converted through an external price feed), tracked per funder, and swept
//! in full by the contract owner.
//!
//! ## Crates
//!
//! - `fundme-common` (this crate): foundation shared by all contracts
//! - `fundme-price-feed`: read adapter over the external price feed
//! - `fundme-ledger`: the funding ledger and custody contract
//!
//! This crate is `no_std` compatible when built without the default `std`
//! feature.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Re-export alloc collections for submodules based on feature
#[cfg(not(feature = "std"))]
pub use alloc::{collections::BTreeMap, vec::Vec};
#[cfg(feature = "std")]
pub use std::{collections::BTreeMap, vec::Vec};

pub mod constants;
pub mod errors;
pub mod events;
pub mod math;
pub mod types;
pub mod validation;

// Re-exports for convenience
pub use constants::*;
pub use errors::*;
pub use events::*;
pub use math::*;
pub use types::*;
