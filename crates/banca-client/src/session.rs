//! # Session Boundary
//!
//! The auth/session collaborator as seen from this crate: a read-only
//! current-user value, a `logout()` side effect, and the error dispatch
//! policy for rejected requests. The authentication protocol itself
//! (tokens, refresh, storage) lives outside and is not reimplemented here.
//!
//! ## Dispatch Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Dispatch Policy                                │
//! │                                                                         │
//! │  ClientError::Connection ──► "could not connect" message                │
//! │  ClientError::Server 401 ──► logout() + navigate(/login)                │
//! │  ClientError::Server 403 ──► navigate(/)                                │
//! │  ClientError::Server *   ──► "Error {status}: {message}"                │
//! │  anything else           ──► the error's own message                    │
//! │                                                                         │
//! │  Every failure becomes a user-visible string; none escapes unhandled.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ClientError;

/// Login entry point, target of a 401 dispatch.
pub const LOGIN_PATH: &str = "/login";

/// Application root, target of a 403 dispatch.
pub const ROOT_PATH: &str = "/";

// =============================================================================
// Current User
// =============================================================================

/// Closed role enumeration used to branch admin vs. user views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "ROLE_ADMIN")]
    Admin,
    #[serde(rename = "ROLE_USER")]
    User,
}

impl Role {
    #[inline]
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

/// The authenticated user, as the session boundary exposes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

// =============================================================================
// Navigation
// =============================================================================

/// The routing collaborator. Its whole contract is "navigates to a path";
/// a UI shell plugs its router in, tests plug a recorder in.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

// =============================================================================
// Session
// =============================================================================

/// Session state plus the dispatch policy for rejected requests.
pub struct Session {
    user: Mutex<Option<CurrentUser>>,
    navigator: Box<dyn Navigator>,
}

impl Session {
    /// Starts with no authenticated user.
    pub fn new(navigator: Box<dyn Navigator>) -> Self {
        Session {
            user: Mutex::new(None),
            navigator,
        }
    }

    /// The current user, if authenticated.
    pub fn current_user(&self) -> Option<CurrentUser> {
        self.user.lock().expect("Session mutex poisoned").clone()
    }

    /// Records a login produced by the auth collaborator.
    pub fn set_user(&self, user: CurrentUser) {
        debug!(user = %user.email, "session established");
        *self.user.lock().expect("Session mutex poisoned") = Some(user);
    }

    /// Whether the current user may see admin views.
    pub fn is_admin(&self) -> bool {
        self.current_user().map(|u| u.role.is_admin()).unwrap_or(false)
    }

    /// Drops the session. Does not navigate; dispatch decides where to go.
    pub fn logout(&self) {
        debug!("session cleared");
        *self.user.lock().expect("Session mutex poisoned") = None;
    }

    /// Converts any remote failure into a user-visible message, applying
    /// the 401/403 side effects on the way.
    pub fn dispatch_error(&self, error: &ClientError) -> String {
        match error {
            ClientError::Connection(_) => {
                warn!(%error, "connection failure");
                "Could not connect to the server. Check your internet connection.".to_string()
            }
            ClientError::Server { status, .. } => {
                warn!(status, %error, "server rejected request");
                if error.is_unauthorized() {
                    self.logout();
                    self.navigator.navigate(LOGIN_PATH);
                } else if error.is_forbidden() {
                    self.navigator.navigate(ROOT_PATH);
                }
                error.to_string()
            }
            other => other.to_string(),
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("user", &self.current_user())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use std::sync::{Arc, Mutex};

    #[derive(Default, Clone)]
    struct RecordingNavigator {
        visited: Arc<Mutex<Vec<String>>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, path: &str) {
            self.visited.lock().unwrap().push(path.to_string());
        }
    }

    fn session_with_user() -> (Session, RecordingNavigator) {
        let navigator = RecordingNavigator::default();
        let session = Session::new(Box::new(navigator.clone()));
        session.set_user(CurrentUser {
            id: "u1".to_string(),
            name: "Maria".to_string(),
            email: "maria@example.com".to_string(),
            role: Role::User,
        });
        (session, navigator)
    }

    #[test]
    fn test_unauthorized_logs_out_and_redirects_to_login() {
        let (session, navigator) = session_with_user();

        let message =
            session.dispatch_error(&ClientError::server(StatusCode::UNAUTHORIZED, None));

        assert!(session.current_user().is_none());
        assert_eq!(navigator.visited.lock().unwrap().as_slice(), [LOGIN_PATH]);
        assert_eq!(message, "Error 401: Unauthorized");
    }

    #[test]
    fn test_forbidden_redirects_to_root_keeping_session() {
        let (session, navigator) = session_with_user();

        session.dispatch_error(&ClientError::server(StatusCode::FORBIDDEN, None));

        assert!(session.current_user().is_some());
        assert_eq!(navigator.visited.lock().unwrap().as_slice(), [ROOT_PATH]);
    }

    #[test]
    fn test_other_server_errors_surface_the_message() {
        let (session, navigator) = session_with_user();
        let envelope = serde_json::from_str(
            r#"{"message": "Stock insuficiente", "status": 409, "timestamp": "2025-03-01T10:15:00Z"}"#,
        )
        .unwrap();

        let message =
            session.dispatch_error(&ClientError::server(StatusCode::CONFLICT, Some(envelope)));

        assert_eq!(message, "Error 409: Stock insuficiente");
        assert!(navigator.visited.lock().unwrap().is_empty());
        assert!(session.current_user().is_some());
    }

    #[test]
    fn test_role_wire_tags_and_admin_branch() {
        let role: Role = serde_json::from_str("\"ROLE_ADMIN\"").unwrap();
        assert!(role.is_admin());

        let (session, _) = session_with_user();
        assert!(!session.is_admin());
    }
}
