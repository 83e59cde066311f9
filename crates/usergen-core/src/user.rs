//! User records exchanged with the registration endpoint

use serde::{Deserialize, Serialize};

use crate::employee::EmployeeId;

/// A generated user, serialized as the registration request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyntheticUser {
    /// Display name
    pub name: String,
    /// Identifier submitted to the server
    pub employee_id: EmployeeId,
    /// Avatar URL; the server generates one when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_avatar: Option<String>,
}

impl SyntheticUser {
    pub fn new(name: impl Into<String>, employee_id: EmployeeId) -> Self {
        Self {
            name: name.into(),
            employee_id,
            custom_avatar: None,
        }
    }

    pub fn with_avatar(mut self, url: impl Into<String>) -> Self {
        self.custom_avatar = Some(url.into());
        self
    }

    /// Whether a listed server record refers to this user
    pub fn matches(&self, record: &RegisteredUser) -> bool {
        record.name == self.name && record.employee_id == self.employee_id.as_string()
    }
}

/// A user record as returned by the server
///
/// Fields beyond `name` and `employeeId` are optional so that partial
/// bodies still parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredUser {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    /// Kept as a raw string: other clients may register non-numeric IDs
    pub employee_id: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub registered_at: Option<String>,
}
