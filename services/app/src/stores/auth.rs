//! services/app/src/stores/auth.rs
//!
//! The session store. Login and registration are mock backend calls: a fixed
//! suspend stands in for the network round-trip, and the only credential the
//! backend accepts is the demo pair from `Config`. Registration always
//! succeeds; the mock performs no uniqueness or format validation.

use std::time::Duration;

use tracing::{info, warn};
use uuid::Uuid;
use wardrobe_core::domain::User;

use crate::config::Config;

const DEMO_PROFILE_PICTURE: &str =
    "https://images.pexels.com/photos/1036623/pexels-photo-1036623.jpeg";

pub struct AuthStore {
    user: Option<User>,
    authenticated: bool,
    loading: bool,
    error: Option<String>,
    demo_user_id: Uuid,
    demo_email: String,
    demo_password: String,
    demo_name: String,
    latency: Duration,
}

impl AuthStore {
    /// `demo_user_id` ties the session to the seeded wardrobe data, so the
    /// demo login owns the demo closet.
    pub fn new(demo_user_id: Uuid, config: &Config) -> Self {
        Self {
            user: None,
            authenticated: false,
            loading: false,
            error: None,
            demo_user_id,
            demo_email: config.demo_email.clone(),
            demo_password: config.demo_password.clone(),
            demo_name: config.demo_name.clone(),
            latency: config.simulated_latency,
        }
    }

    /// Validates against the single demo credential pair. On mismatch the
    /// session stays unauthenticated and a user-visible message is set.
    pub async fn login(&mut self, email: &str, password: &str) {
        self.loading = true;
        self.error = None;

        // Simulated network round-trip.
        tokio::time::sleep(self.latency).await;

        if email == self.demo_email && password == self.demo_password {
            info!(%email, "login accepted");
            self.user = Some(User {
                id: self.demo_user_id,
                name: self.demo_name.clone(),
                email: self.demo_email.clone(),
                profile_picture: Some(DEMO_PROFILE_PICTURE.to_string()),
            });
            self.authenticated = true;
        } else {
            warn!(%email, "login rejected");
            self.error = Some("Invalid email or password".to_string());
        }
        self.loading = false;
    }

    /// Unconditionally creates a session for a brand-new user.
    pub async fn register(&mut self, name: &str, email: &str, _password: &str) {
        self.loading = true;
        self.error = None;

        tokio::time::sleep(self.latency).await;

        let user = User {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            profile_picture: None,
        };
        info!(user_id = %user.id, %email, "registered new user");
        self.user = Some(user);
        self.authenticated = true;
        self.loading = false;
    }

    pub fn logout(&mut self) {
        info!("session cleared");
        self.user = None;
        self.authenticated = false;
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> AuthStore {
        AuthStore::new(Uuid::new_v4(), &Config::for_tests())
    }

    #[tokio::test]
    async fn demo_credentials_open_a_session() {
        let mut auth = store();
        auth.login("demo@example.com", "password").await;

        assert!(auth.is_authenticated());
        assert!(!auth.is_loading());
        assert!(auth.error().is_none());
        let user = auth.user().unwrap();
        assert_eq!(user.name, "Demo User");
        assert_eq!(user.email, "demo@example.com");
    }

    #[tokio::test]
    async fn wrong_credentials_set_an_error_and_no_session() {
        let mut auth = store();
        auth.login("demo@example.com", "hunter2").await;

        assert!(!auth.is_authenticated());
        assert!(auth.user().is_none());
        assert_eq!(auth.error(), Some("Invalid email or password"));

        auth.clear_error();
        assert!(auth.error().is_none());
    }

    #[tokio::test]
    async fn register_always_succeeds() {
        let mut auth = store();
        auth.register("Sam", "sam@example.com", "whatever").await;

        assert!(auth.is_authenticated());
        assert_eq!(auth.user().unwrap().email, "sam@example.com");

        auth.logout();
        assert!(!auth.is_authenticated());
        assert!(auth.user().is_none());
    }

    #[tokio::test]
    async fn failed_login_clears_previous_error_on_retry() {
        let mut auth = store();
        auth.login("a@b.c", "nope").await;
        assert!(auth.error().is_some());

        auth.login("demo@example.com", "password").await;
        assert!(auth.error().is_none());
        assert!(auth.is_authenticated());
    }
}
