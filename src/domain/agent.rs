//! Agent roster types
//!
//! Agents are owned by the user-management collaborator; the engine reads a
//! snapshot of the roster filtered to case-handling roles.

use serde::{Deserialize, Serialize};

/// Portal user role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortalRole {
    Client,
    Agent,
    Admin,
}

impl PortalRole {
    /// Whether this role may be assigned cases
    pub fn can_handle_cases(&self) -> bool {
        matches!(self, PortalRole::Agent | PortalRole::Admin)
    }
}

/// A case-handling agent, as reported by the user-management collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    /// Backend identifier (opaque string)
    pub id: String,
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Inactive agents are excluded from the roster at the I/O boundary
    pub active: bool,
    pub role: PortalRole,
}
