//! Utility modules

pub mod format;
pub mod memory_store;
pub mod validation;

pub use memory_store::*;
pub use validation::*;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("rental_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}
