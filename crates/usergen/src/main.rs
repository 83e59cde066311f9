//! Usergen - register synthetic test users
//!
//! Sends a batch of synthetic users, one at a time, to a user-registration
//! endpoint and prints one line per attempt plus a final tally:
//! - progress and summary on stdout
//! - diagnostics (tracing) on stderr
//!
//! Per-request failures never change the exit code; only an unusable
//! configuration does.

mod cli;

use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use usergen_core::{id_generator, verify_created, ConsoleSink, Generator, HttpRegistry};

use cli::Args;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = args.resolve()?;
    let registry = HttpRegistry::from_config(&config)?;

    info!(
        count = config.count,
        strategy = %config.strategy,
        timeout_ms = config.timeout_ms(),
        "Usergen {}", usergen_core::VERSION
    );

    let mut generator = Generator::new(registry, id_generator(&config));
    let summary = generator.run(config.count, &mut ConsoleSink).await;

    if args.verify {
        let report = verify_created(generator.registry(), &summary).await;
        println!("{}", report);
    }

    Ok(())
}
