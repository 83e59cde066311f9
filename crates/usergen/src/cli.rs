//! Command-line arguments
//!
//! Flags override values from an optional JSON config file, which in turn
//! overrides the built-in defaults.

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use usergen_core::{IdStrategy, SeederConfig, SeederConfigBuilder};

#[derive(Debug, Parser)]
#[command(name = "usergen")]
#[command(about = "Register synthetic test users against a user-registration endpoint")]
#[command(version)]
pub struct Args {
    /// Number of users to create (default: 100)
    #[arg(long, short = 'n')]
    pub count: Option<u64>,

    /// Registration endpoint
    #[arg(long, short = 'u')]
    pub url: Option<String>,

    /// Per-request timeout, e.g. "5s" or "500ms" (default: 5s)
    #[arg(long, value_parser = parse_duration)]
    pub timeout: Option<Duration>,

    /// Identifier strategy: random or timestamp (default: random)
    #[arg(long)]
    pub strategy: Option<IdStrategy>,

    /// Display-name prefix
    #[arg(long)]
    pub prefix: Option<String>,

    /// Avatar URL sent with every user
    #[arg(long)]
    pub avatar: Option<String>,

    /// RNG seed for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON config file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// List users after the run and report which were stored
    #[arg(long)]
    pub verify: bool,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

fn parse_duration(s: &str) -> Result<Duration, humantime::DurationError> {
    humantime::parse_duration(s)
}

impl Args {
    /// Merge flags over `base`
    pub fn apply(&self, base: SeederConfig) -> SeederConfig {
        let mut builder = SeederConfigBuilder::from_config(base);
        if let Some(count) = self.count {
            builder = builder.count(count);
        }
        if let Some(ref url) = self.url {
            builder = builder.base_url(url.clone());
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(strategy) = self.strategy {
            builder = builder.strategy(strategy);
        }
        if let Some(ref prefix) = self.prefix {
            builder = builder.name_prefix(prefix.clone());
        }
        if let Some(ref avatar) = self.avatar {
            builder = builder.custom_avatar(avatar.clone());
        }
        if let Some(seed) = self.seed {
            builder = builder.seed(seed);
        }
        builder.build()
    }

    /// Load the config file if one was given, then apply flags
    pub fn resolve(&self) -> usergen_core::Result<SeederConfig> {
        let base = match self.config {
            Some(ref path) => SeederConfig::from_json_file(path)?,
            None => SeederConfig::default(),
        };
        Ok(self.apply(base))
    }
}
