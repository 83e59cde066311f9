//! Employee identifiers
//!
//! An [`EmployeeId`] is always exactly four ASCII digits, zero-padded.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SeedError};

/// Number of distinct employee IDs (`0000`..=`9999`)
pub const EMPLOYEE_ID_SPACE: u32 = 10_000;

/// A 4-digit, zero-padded employee identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EmployeeId(u16);

impl EmployeeId {
    /// Build an ID from any number, wrapping modulo 10000
    pub fn from_number(n: u64) -> Self {
        EmployeeId((n % EMPLOYEE_ID_SPACE as u64) as u16)
    }

    /// Numeric value in `0..10000`
    pub fn value(&self) -> u16 {
        self.0
    }

    /// Zero-padded string form
    pub fn as_string(&self) -> String {
        format!("{:04}", self.0)
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

impl FromStr for EmployeeId {
    type Err = SeedError;

    fn from_str(s: &str) -> Result<Self> {
        if s.len() != 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SeedError::InvalidEmployeeId(s.to_string()));
        }
        s.parse::<u16>()
            .map(EmployeeId)
            .map_err(|_| SeedError::InvalidEmployeeId(s.to_string()))
    }
}

impl Serialize for EmployeeId {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.as_string())
    }
}

impl<'de> Deserialize<'de> for EmployeeId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
