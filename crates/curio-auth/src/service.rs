//! Mock authentication service.
//!
//! There is no backend and no credential check: login fabricates a user
//! for any email/password pair, matching the storefront's mock data
//! model. Only the current-user record is durable.

use crate::User;
use curio_store::{Session, CURRENT_USER_KEY};

/// A user profile supplied at signup.
#[derive(Debug, Clone)]
pub struct SignupProfile {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// Mock authentication over the session store.
pub struct AuthService {
    session: Session,
}

impl AuthService {
    /// Create a service over a session store.
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// The currently signed-in user, restored from the backing store.
    pub fn current_user(&self) -> Option<User> {
        self.session.restore_opt(CURRENT_USER_KEY)
    }

    /// Sign in. Any email/password pair is accepted.
    pub fn login(&self, email: impl Into<String>, _password: &str) -> User {
        let user = User::new(email, "Test", "User");
        self.session.persist(CURRENT_USER_KEY, &user);
        user
    }

    /// Register a new user and sign them in.
    pub fn signup(&self, profile: SignupProfile) -> User {
        let user = User::new(profile.email, profile.first_name, profile.last_name);
        self.session.persist(CURRENT_USER_KEY, &user);
        user
    }

    /// Sign out, dropping the persisted current user.
    pub fn logout(&self) {
        self.session.forget(CURRENT_USER_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_persists_current_user() {
        let auth = AuthService::new(Session::in_memory());
        assert!(auth.current_user().is_none());

        let user = auth.login("t@example.com", "hunter2");
        assert_eq!(auth.current_user(), Some(user));
    }

    #[test]
    fn test_signup_uses_profile() {
        let auth = AuthService::new(Session::in_memory());
        let user = auth.signup(SignupProfile {
            email: "ada@example.com".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
        });
        assert_eq!(user.display_name(), "Ada Lovelace");
        assert_eq!(auth.current_user().map(|u| u.email), Some("ada@example.com".to_string()));
    }

    #[test]
    fn test_logout_clears_current_user() {
        let auth = AuthService::new(Session::in_memory());
        auth.login("t@example.com", "pw");
        auth.logout();
        assert!(auth.current_user().is_none());
        // Logging out twice is harmless.
        auth.logout();
    }
}
