//! In-process registries with fixed behaviour

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use usergen_core::{RegisteredUser, Result, SeedError, SyntheticUser, UserRegistry};

/// What a simulated registry answers
#[derive(Debug, Clone)]
pub enum Behaviour {
    /// Always 200 with the user echoed back
    Accept,
    /// Always a non-200 status with this body
    Reject { status: u16, body: String },
    /// Always a connection error
    Refuse,
    /// Cycle through the listed behaviours, one per call
    Cycle(Vec<Behaviour>),
}

pub struct SimulatedRegistry {
    behaviour: Behaviour,
    calls: AtomicU64,
    accepted: Mutex<Vec<SyntheticUser>>,
    /// Records returned by `list`; `None` makes `list` fail
    listing: Mutex<Option<Vec<RegisteredUser>>>,
}

impl SimulatedRegistry {
    pub fn new(behaviour: Behaviour) -> Self {
        Self {
            behaviour,
            calls: AtomicU64::new(0),
            accepted: Mutex::new(Vec::new()),
            listing: Mutex::new(None),
        }
    }

    pub fn accept() -> Self {
        Self::new(Behaviour::Accept)
    }

    pub fn reject(status: u16, body: &str) -> Self {
        Self::new(Behaviour::Reject {
            status,
            body: body.to_string(),
        })
    }

    pub fn refuse() -> Self {
        Self::new(Behaviour::Refuse)
    }

    /// Serve `records` from `list`
    pub fn with_listing(self, records: Vec<RegisteredUser>) -> Self {
        *self.listing.lock() = Some(records);
        self
    }

    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn accepted(&self) -> Vec<SyntheticUser> {
        self.accepted.lock().clone()
    }

    fn answer(&self, behaviour: &Behaviour, call: u64, user: &SyntheticUser) -> Result<Option<RegisteredUser>> {
        match behaviour {
            Behaviour::Accept => {
                self.accepted.lock().push(user.clone());
                Ok(Some(record_for(user)))
            }
            Behaviour::Reject { status, body } => Err(SeedError::request_failed(*status, body.clone())),
            Behaviour::Refuse => Err(SeedError::Transport(
                "error sending request: connection refused".to_string(),
            )),
            Behaviour::Cycle(steps) => {
                let step = &steps[(call as usize) % steps.len()];
                self.answer(step, call, user)
            }
        }
    }
}

#[async_trait]
impl UserRegistry for SimulatedRegistry {
    async fn register(&self, user: &SyntheticUser) -> Result<Option<RegisteredUser>> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer(&self.behaviour, call, user)
    }

    async fn list(&self) -> Result<Vec<RegisteredUser>> {
        self.listing
            .lock()
            .clone()
            .ok_or_else(|| SeedError::Transport("listing unavailable".to_string()))
    }

    fn endpoint(&self) -> &str {
        "simulated://registry"
    }
}

/// The record a server would return for `user`
pub fn record_for(user: &SyntheticUser) -> RegisteredUser {
    RegisteredUser {
        id: Some(format!("sim-{}", user.employee_id)),
        name: user.name.clone(),
        employee_id: user.employee_id.as_string(),
        avatar_url: None,
        registered_at: None,
    }
}
