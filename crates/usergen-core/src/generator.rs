//! The user generator loop
//!
//! Runs a fixed number of sequential registration attempts. Every failure,
//! whether a rejected request or a transport error, is reported and
//! absorbed; the loop always runs to completion.

use std::fmt;
use tracing::{debug, info, warn};

use crate::employee::EmployeeId;
use crate::error::SeedError;
use crate::registry::UserRegistry;
use crate::strategy::IdGenerator;
use crate::user::{RegisteredUser, SyntheticUser};

/// Result of one registration attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// HTTP 200
    Created { record: Option<RegisteredUser> },
    /// Any other HTTP status
    Rejected { status: u16, body: String },
    /// No response: timeout, connection error, unreadable body
    Errored { message: String },
}

impl Outcome {
    fn from_result(result: crate::Result<Option<RegisteredUser>>) -> Self {
        match result {
            Ok(record) => Outcome::Created { record },
            Err(SeedError::RequestFailed { status, body }) => Outcome::Rejected { status, body },
            Err(e) => Outcome::Errored {
                message: e.to_string(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Created { .. })
    }
}

/// One attempt, as reported to a [`ProgressSink`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptRecord {
    /// 1-based running index
    pub index: u64,
    pub total: u64,
    pub user: SyntheticUser,
    pub outcome: Outcome,
}

impl fmt::Display for AttemptRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}/{}] ", self.index, self.total)?;
        match &self.outcome {
            Outcome::Created { .. } => write!(
                f,
                "Created user: {} (ID: {})",
                self.user.name, self.user.employee_id
            ),
            Outcome::Rejected { body, .. } => {
                write!(f, "Failed to create user {}: {}", self.user.name, body)
            }
            Outcome::Errored { message } => {
                write!(f, "Error creating user {}: {}", self.user.name, message)
            }
        }
    }
}

/// Totals for a finished run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total: u64,
    pub successes: u64,
    pub rejected: u64,
    pub errored: u64,
    /// Users that got a 200, in attempt order
    pub created: Vec<SyntheticUser>,
}

impl RunSummary {
    pub fn failures(&self) -> u64 {
        self.rejected + self.errored
    }

    /// Employee IDs of created users, duplicates included
    pub fn created_ids(&self) -> Vec<EmployeeId> {
        self.created.iter().map(|u| u.employee_id).collect()
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Finished. Successfully created {}/{} users.",
            self.successes, self.total
        )
    }
}

/// Receives progress lines from a run
pub trait ProgressSink: Send {
    fn started(&mut self, total: u64, endpoint: &str);
    fn attempt(&mut self, record: &AttemptRecord);
    fn finished(&mut self, summary: &RunSummary);
}

fn start_line(total: u64, endpoint: &str) -> String {
    format!("Starting generation of {} users to {}...", total, endpoint)
}

/// Prints progress to stdout
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ProgressSink for ConsoleSink {
    fn started(&mut self, total: u64, endpoint: &str) {
        println!("{}", start_line(total, endpoint));
    }

    fn attempt(&mut self, record: &AttemptRecord) {
        println!("{}", record);
    }

    fn finished(&mut self, summary: &RunSummary) {
        println!();
        println!("{}", summary);
    }
}

/// Collects progress lines in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    pub lines: Vec<String>,
    pub records: Vec<AttemptRecord>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressSink for MemorySink {
    fn started(&mut self, total: u64, endpoint: &str) {
        self.lines.push(start_line(total, endpoint));
    }

    fn attempt(&mut self, record: &AttemptRecord) {
        self.lines.push(record.to_string());
        self.records.push(record.clone());
    }

    fn finished(&mut self, summary: &RunSummary) {
        self.lines.push(summary.to_string());
    }
}

/// Drives registration attempts against a [`UserRegistry`]
pub struct Generator<R> {
    registry: R,
    ids: IdGenerator,
}

impl<R: UserRegistry> Generator<R> {
    pub fn new(registry: R, ids: IdGenerator) -> Self {
        Self { registry, ids }
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Perform exactly `count` sequential attempts
    pub async fn run(&mut self, count: u64, sink: &mut dyn ProgressSink) -> RunSummary {
        let endpoint = self.registry.endpoint().to_string();
        info!(
            count,
            endpoint = %endpoint,
            strategy = %self.ids.strategy(),
            "Starting user generation"
        );
        sink.started(count, &endpoint);

        let mut summary = RunSummary {
            total: count,
            ..Default::default()
        };

        for i in 0..count {
            let user = self.ids.user(i);
            debug!(index = i + 1, name = %user.name, employee_id = %user.employee_id, "Registering user");

            let outcome = Outcome::from_result(self.registry.register(&user).await);
            match &outcome {
                Outcome::Created { record } => {
                    summary.successes += 1;
                    if let Some(id) = record.as_ref().and_then(|r| r.id.as_deref()) {
                        debug!(server_id = id, "User registered");
                    }
                    summary.created.push(user.clone());
                }
                Outcome::Rejected { status, .. } => {
                    summary.rejected += 1;
                    warn!(index = i + 1, status, "Registration rejected");
                }
                Outcome::Errored { message } => {
                    summary.errored += 1;
                    warn!(index = i + 1, error = %message, "Registration request failed");
                }
            }

            sink.attempt(&AttemptRecord {
                index: i + 1,
                total: count,
                user,
                outcome,
            });
        }

        info!(
            successes = summary.successes,
            total = summary.total,
            failures = summary.failures(),
            "User generation finished"
        );
        sink.finished(&summary);
        summary
    }
}
