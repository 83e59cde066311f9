//! Identifier derivation
//!
//! Two strategies produce employee IDs:
//!
//! - [`IdStrategy::Random`] draws uniformly from `0..=9999`. Nothing prevents
//!   the same ID from being drawn twice in one run.
//! - [`IdStrategy::Timestamp`] offsets a millisecond timestamp captured once
//!   per generator by the attempt index, then wraps modulo 10000. IDs repeat
//!   every 10000 attempts. The display name also carries a random
//!   4-character suffix, which the server never sees as part of the ID.

use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::employee::{EmployeeId, EMPLOYEE_ID_SPACE};
use crate::error::SeedError;
use crate::user::SyntheticUser;

/// Timestamps are reduced to this many milliseconds before offsetting
pub const TIMESTAMP_MODULUS: u64 = 10_000_000;

/// Length of the random display-name suffix
pub const SUFFIX_LEN: usize = 4;

/// How employee IDs are derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// Uniform random draw per attempt
    #[default]
    Random,
    /// Timestamp base plus attempt index, with a random name suffix
    Timestamp,
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdStrategy::Random => write!(f, "random"),
            IdStrategy::Timestamp => write!(f, "timestamp"),
        }
    }
}

impl FromStr for IdStrategy {
    type Err = SeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "random" => Ok(IdStrategy::Random),
            "timestamp" => Ok(IdStrategy::Timestamp),
            other => Err(SeedError::InvalidConfig(format!(
                "unknown id strategy {other:?} (expected random or timestamp)"
            ))),
        }
    }
}

/// Employee ID for attempt `index` given a millisecond timestamp
pub fn timestamp_employee_id(base_ms: u64, index: u64) -> EmployeeId {
    let base = base_ms % TIMESTAMP_MODULUS;
    EmployeeId::from_number((base + index) % EMPLOYEE_ID_SPACE as u64)
}

/// Builds one [`SyntheticUser`] per attempt
#[derive(Debug)]
pub struct IdGenerator {
    strategy: IdStrategy,
    prefix: String,
    avatar: Option<String>,
    base_ms: u64,
    rng: StdRng,
}

impl IdGenerator {
    /// Create a generator seeded from OS entropy, timestamp base taken now
    pub fn new(strategy: IdStrategy, prefix: impl Into<String>) -> Self {
        Self {
            strategy,
            prefix: prefix.into(),
            avatar: None,
            base_ms: now_millis(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Use a fixed RNG seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Override the timestamp base
    pub fn with_base_millis(mut self, base_ms: u64) -> Self {
        self.base_ms = base_ms;
        self
    }

    /// Attach an avatar URL to every generated user
    pub fn with_avatar(mut self, avatar: Option<String>) -> Self {
        self.avatar = avatar;
        self
    }

    pub fn strategy(&self) -> IdStrategy {
        self.strategy
    }

    /// Derive the employee ID for the attempt at `index` (0-based)
    pub fn employee_id(&mut self, index: u64) -> EmployeeId {
        match self.strategy {
            IdStrategy::Random => {
                EmployeeId::from_number(self.rng.gen_range(0..EMPLOYEE_ID_SPACE) as u64)
            }
            IdStrategy::Timestamp => timestamp_employee_id(self.base_ms, index),
        }
    }

    /// Build the user for the attempt at `index` (0-based)
    pub fn user(&mut self, index: u64) -> SyntheticUser {
        let id = self.employee_id(index);
        let name = match self.strategy {
            IdStrategy::Random => format!("{}_{}", self.prefix, id),
            IdStrategy::Timestamp => {
                let suffix = self.suffix();
                format!("{}_{}_{}", self.prefix, id, suffix)
            }
        };

        let mut user = SyntheticUser::new(name, id);
        user.custom_avatar = self.avatar.clone();
        user
    }

    fn suffix(&mut self) -> String {
        (&mut self.rng)
            .sample_iter(&Alphanumeric)
            .take(SUFFIX_LEN)
            .map(char::from)
            .collect()
    }
}

fn now_millis() -> u64 {
    chrono::Utc::now().timestamp_millis().max(0) as u64
}
