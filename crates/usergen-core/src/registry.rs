//! The registration seam
//!
//! [`UserRegistry`] is what the generator loop submits users to. The HTTP
//! implementation lives in [`crate::client`]; tests plug in simulated
//! backends.

use async_trait::async_trait;

use crate::error::Result;
use crate::user::{RegisteredUser, SyntheticUser};

/// Trait for anything that accepts user registrations
#[async_trait]
pub trait UserRegistry: Send + Sync {
    /// Submit one user
    ///
    /// `Ok` only for an HTTP 200. The record is `None` when the body could
    /// not be read as a user. Non-200 answers are
    /// [`SeedError::RequestFailed`](crate::SeedError::RequestFailed); requests
    /// that never got an answer are `Transport` or `Timeout`.
    async fn register(&self, user: &SyntheticUser) -> Result<Option<RegisteredUser>>;

    /// List every user the server knows about
    async fn list(&self) -> Result<Vec<RegisteredUser>>;

    /// Endpoint description (for logging)
    fn endpoint(&self) -> &str;
}
