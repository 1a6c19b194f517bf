//! # Rental Core
//!
//! A rental property management library providing tenant occupancy
//! tracking, monthly rent payments, and payment status derivation.
//!
//! ## Features
//!
//! - **Occupancy tracking**: A fixed roster of houses, each holding at most one tenant
//! - **Payment status**: Paid/Unpaid/Overdue derivation with a configurable due day and a grace rule for new tenants
//! - **Payment recording**: Single and bulk recording with partial-failure reporting
//! - **Dashboard views**: Tenant search and status filtering over houses joined with payments
//! - **Reminder messages**: Rent reminder composition with formatted amounts and due dates
//! - **Storage abstraction**: Backend-agnostic design with trait-based storage
//!
//! ## Quick Start
//!
//! ```rust
//! use rental_core::{RentLedger, RentalConfig, NewTenant, PaymentInput};
//! use rental_core::utils::memory_store::MemoryStore;
//!
//! // The ledger works against any RentalStore implementation
//! // let mut ledger = RentLedger::new(MemoryStore::with_default_houses(), RentalConfig::default());
//! // ledger.load().await?;
//! ```

pub mod dashboard;
pub mod ledger;
pub mod status;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use dashboard::*;
pub use ledger::*;
pub use status::*;
pub use traits::*;
pub use types::*;

// Re-export the tracing bootstrap for convenience
pub use utils::init_tracing;
