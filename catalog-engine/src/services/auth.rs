//! Auth Session Service
//!
//! 共享口令登录。口令在进程内明文比较，会话是存储里的一条普通记录，
//! 不做任何加固，这里只定义接口边界。

use chrono::Utc;

use crate::core::Config;
use crate::db::models::{SessionRole, UserSession};
use crate::db::repository::SessionRepository;
use crate::utils::AppResult;

/// Session login/logout over the stored session record
#[derive(Clone)]
pub struct AuthService {
    sessions: SessionRepository,
    access_key: String,
}

impl AuthService {
    pub fn new(sessions: SessionRepository, config: &Config) -> Self {
        Self {
            sessions,
            access_key: config.admin_access_key.clone(),
        }
    }

    /// Record a session. The admin role is granted when the password matches
    /// the configured access key; any other login is a plain user session.
    pub fn login(&self, email: &str, password: Option<&str>) -> AppResult<UserSession> {
        let role = if password == Some(self.access_key.as_str()) {
            SessionRole::Admin
        } else {
            SessionRole::User
        };

        let session = UserSession {
            email: email.to_string(),
            role,
            timestamp: Utc::now().timestamp_millis(),
        };
        self.sessions.set(&session)?;
        tracing::info!(email, role = %session.role, "session stored");
        Ok(session)
    }

    /// Drop the stored session.
    pub fn logout(&self) -> AppResult<()> {
        self.sessions.clear()?;
        Ok(())
    }

    /// The stored session, if any.
    pub fn session(&self) -> AppResult<Option<UserSession>> {
        Ok(self.sessions.get()?)
    }

    /// Whether an admin session is stored.
    pub fn is_authenticated(&self) -> bool {
        matches!(self.sessions.get(), Ok(Some(session)) if session.is_admin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::storage::CatalogStorage;

    fn auth() -> AuthService {
        let config = Config {
            work_dir: String::new(),
            storage_file: String::new(),
            storage_capacity_bytes: 5 * 1024 * 1024,
            docs_root: String::new(),
            media_root: String::new(),
            admin_access_key: "vkt2026".to_string(),
        };
        let storage = CatalogStorage::open_in_memory(config.storage_capacity_bytes).unwrap();
        AuthService::new(SessionRepository::new(storage), &config)
    }

    #[test]
    fn matching_key_grants_admin() {
        let auth = auth();
        let session = auth.login("ops@example.com", Some("vkt2026")).unwrap();
        assert_eq!(session.role, SessionRole::Admin);
        assert!(auth.is_authenticated());
    }

    #[test]
    fn wrong_key_is_a_user_session() {
        let auth = auth();
        auth.login("ops@example.com", Some("nope")).unwrap();
        assert!(!auth.is_authenticated());
    }

    #[test]
    fn logout_clears_the_record() {
        let auth = auth();
        auth.login("ops@example.com", Some("vkt2026")).unwrap();
        auth.logout().unwrap();
        assert!(auth.session().unwrap().is_none());
        assert!(!auth.is_authenticated());
    }
}
