//! Ledger module containing the rent session and its operations

pub mod core;
pub mod occupancy;
pub mod payment;

pub use self::core::*;
