//! Usergen Core - Synthetic user generation against a registration endpoint
//!
//! This crate builds synthetic users, submits them one at a time to a
//! user-registration HTTP endpoint and tallies the outcome.
//!
//! # Modules
//!
//! - [`employee`] - 4-digit employee identifiers
//! - [`strategy`] - Random and timestamp-based identifier derivation
//! - [`user`] - Request payload and server response records
//! - [`config`] - Run configuration
//! - [`registry`] - The registration trait the loop talks to
//! - [`client`] - HTTP implementation of the registry
//! - [`generator`] - The sequential generation loop and its reporting
//! - [`verify`] - Post-run check against the server listing
//! - [`error`] - Error types
//!
//! # Example
//!
//! ```rust,no_run
//! use usergen_core::{ConsoleSink, Generator, HttpRegistry, IdGenerator, SeederConfig};
//!
//! # async fn run() -> usergen_core::Result<()> {
//! let config = SeederConfig::default();
//! let registry = HttpRegistry::from_config(&config)?;
//! let ids = IdGenerator::new(config.strategy, config.name_prefix.clone());
//!
//! let mut generator = Generator::new(registry, ids);
//! let summary = generator.run(config.count, &mut ConsoleSink).await;
//! assert!(summary.successes <= summary.total);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod employee;
pub mod error;
pub mod generator;
pub mod registry;
pub mod strategy;
pub mod user;
pub mod verify;

// Re-exports for convenience
pub use client::HttpRegistry;
pub use config::{SeederConfig, SeederConfigBuilder};
pub use employee::EmployeeId;
pub use error::{Result, SeedError};
pub use generator::{
    AttemptRecord, ConsoleSink, Generator, MemorySink, Outcome, ProgressSink, RunSummary,
};
pub use registry::UserRegistry;
pub use strategy::{IdGenerator, IdStrategy};
pub use user::{RegisteredUser, SyntheticUser};
pub use verify::{verify_created, VerifyReport};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build the identifier generator described by `config`
pub fn id_generator(config: &SeederConfig) -> IdGenerator {
    let ids = IdGenerator::new(config.strategy, config.name_prefix.clone())
        .with_avatar(config.custom_avatar.clone());
    match config.seed {
        Some(seed) => ids.with_seed(seed),
        None => ids,
    }
}
