//! Post-run verification
//!
//! Lists users from the server and checks which of the run's created users
//! are present. Users are matched on name and employee ID, which is also how
//! the registration server deduplicates.

use std::collections::HashSet;
use std::fmt;
use tracing::{info, warn};

use crate::generator::RunSummary;
use crate::registry::UserRegistry;
use crate::user::SyntheticUser;

/// Coverage of a run's created users in the server listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyReport {
    /// The listing was fetched
    Listed {
        /// Distinct (name, employee ID) pairs created by the run
        expected: usize,
        /// How many of those the server lists
        found: usize,
        /// Total users the server lists
        server_total: usize,
        /// Created users missing from the listing
        missing: Vec<SyntheticUser>,
    },
    /// The listing request itself failed
    Unavailable { reason: String },
}

impl VerifyReport {
    pub fn is_complete(&self) -> bool {
        matches!(self, VerifyReport::Listed { missing, .. } if missing.is_empty())
    }
}

impl fmt::Display for VerifyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerifyReport::Listed {
                expected,
                found,
                server_total,
                ..
            } => write!(
                f,
                "Verified {}/{} created users on server ({} users listed).",
                found, expected, server_total
            ),
            VerifyReport::Unavailable { reason } => {
                write!(f, "Could not verify created users: {}", reason)
            }
        }
    }
}

/// Check the server listing against `summary`
pub async fn verify_created<R: UserRegistry + ?Sized>(
    registry: &R,
    summary: &RunSummary,
) -> VerifyReport {
    let listed = match registry.list().await {
        Ok(listed) => listed,
        Err(e) => {
            warn!(error = %e, "Failed to list users");
            return VerifyReport::Unavailable {
                reason: e.to_string(),
            };
        }
    };

    let mut seen = HashSet::new();
    let expected: Vec<&SyntheticUser> = summary
        .created
        .iter()
        .filter(|u| seen.insert((u.name.clone(), u.employee_id)))
        .collect();

    let missing: Vec<SyntheticUser> = expected
        .iter()
        .filter(|u| !listed.iter().any(|record| u.matches(record)))
        .map(|u| (**u).clone())
        .collect();

    let report = VerifyReport::Listed {
        expected: expected.len(),
        found: expected.len() - missing.len(),
        server_total: listed.len(),
        missing,
    };
    info!(report = %report, "Verification finished");
    report
}
