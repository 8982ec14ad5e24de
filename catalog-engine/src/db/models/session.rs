//! User Session Model
//!
//! The single local auth record. The login mechanism is a shared secret
//! compared in-process and deliberately not hardened.

use serde::{Deserialize, Serialize};

/// Session role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionRole {
    Admin,
    User,
}

impl SessionRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionRole::Admin => "admin",
            SessionRole::User => "user",
        }
    }
}

impl std::fmt::Display for SessionRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Stored session record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSession {
    pub email: String,
    pub role: SessionRole,
    /// Login instant, Unix millis
    pub timestamp: i64,
}

impl UserSession {
    pub fn is_admin(&self) -> bool {
        self.role == SessionRole::Admin
    }
}
