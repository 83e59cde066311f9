//! MockServer - an in-process registration server for integration tests
//!
//! Mirrors the behaviour of the registration endpoint:
//! - POST /api/users rejects empty `name`/`employeeId` with 400
//! - an existing (name, employeeId) pair returns the stored record
//! - GET /api/users lists users, newest first
//!
//! Failure modes can be switched on to simulate broken backends.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use parking_lot::RwLock;
use serde::Deserialize;
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use usergen_core::RegisteredUser;

/// How the mock answers registrations
#[derive(Debug, Clone)]
pub enum Mode {
    /// Behave like the real server
    Normal,
    /// Answer every POST with this status and plain-text body
    Fail { status: u16, body: String },
    /// Sleep before answering normally
    Slow(Duration),
    /// Answer 200 with a body that is not a user record
    PlainOk,
}

pub struct MockState {
    mode: Mode,
    users: RwLock<Vec<RegisteredUser>>,
    received: RwLock<Vec<Value>>,
    posts: AtomicU64,
}

/// A running mock server bound to an ephemeral port
pub struct MockServer {
    pub addr: SocketAddr,
    pub state: Arc<MockState>,
}

impl MockServer {
    pub async fn spawn() -> Self {
        Self::spawn_with(Mode::Normal).await
    }

    pub async fn spawn_with(mode: Mode) -> Self {
        let state = Arc::new(MockState {
            mode,
            users: RwLock::new(Vec::new()),
            received: RwLock::new(Vec::new()),
            posts: AtomicU64::new(0),
        });

        let app = Router::new()
            .route("/api/users", get(list_users).post(create_user))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().expect("No local address");

        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self { addr, state }
    }

    /// Registration endpoint URL
    pub fn url(&self) -> String {
        format!("http://{}/api/users", self.addr)
    }

    /// Number of POST requests received
    pub fn posts(&self) -> u64 {
        self.state.posts.load(Ordering::SeqCst)
    }

    /// Raw JSON bodies received, in order
    pub fn received(&self) -> Vec<Value> {
        self.state.received.read().clone()
    }

    /// Users stored by the server
    pub fn users(&self) -> Vec<RegisteredUser> {
        self.state.users.read().clone()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateUser {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    employee_id: Option<String>,
    #[serde(default)]
    custom_avatar: Option<String>,
}

async fn list_users(State(state): State<Arc<MockState>>) -> Json<Vec<RegisteredUser>> {
    let mut users = state.users.read().clone();
    users.reverse();
    Json(users)
}

async fn create_user(State(state): State<Arc<MockState>>, Json(body): Json<Value>) -> Response {
    state.posts.fetch_add(1, Ordering::SeqCst);
    state.received.write().push(body.clone());

    match &state.mode {
        Mode::Fail { status, body } => {
            let status = StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            return (status, body.clone()).into_response();
        }
        Mode::Slow(delay) => tokio::time::sleep(*delay).await,
        Mode::PlainOk => return (StatusCode::OK, "ok").into_response(),
        Mode::Normal => {}
    }

    let request: CreateUser = match serde_json::from_value(body) {
        Ok(request) => request,
        Err(e) => return (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
    };

    let name = request.name.unwrap_or_default();
    let employee_id = request.employee_id.unwrap_or_default();
    if name.is_empty() || employee_id.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "姓名和工号必填" })),
        )
            .into_response();
    }

    let mut users = state.users.write();
    if let Some(existing) = users
        .iter()
        .find(|u| u.name == name && u.employee_id == employee_id)
    {
        return Json(existing.clone()).into_response();
    }

    let avatar_url = request.custom_avatar.unwrap_or_else(|| {
        format!("https://api.dicebear.com/7.x/initials/svg?seed={}", employee_id)
    });
    let user = RegisteredUser {
        id: Some(uuid::Uuid::new_v4().to_string()),
        name,
        employee_id,
        avatar_url: Some(avatar_url),
        registered_at: Some(chrono::Utc::now().to_rfc3339()),
    };
    users.push(user.clone());
    Json(user).into_response()
}

/// An address nothing listens on
pub fn refused_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let addr = listener.local_addr().expect("No local address");
    drop(listener);
    format!("http://{}/api/users", addr)
}
