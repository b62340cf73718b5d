use crate::core::config::DemoConfig;
use crate::models::user::{NewUser, User};
use crate::utils::sync::{read, write};
use std::sync::RwLock;

/// The demo identity the site acts as.
///
/// Passed explicitly to every workflow that needs a user instead of living
/// in a global, so tests and alternative deployments can hold their own.
pub struct SessionContext {
    profile: DemoConfig,
    user: RwLock<Option<User>>,
}

impl SessionContext {
    pub fn new(profile: DemoConfig) -> Self {
        Self {
            profile,
            user: RwLock::new(None),
        }
    }

    pub fn handle(&self) -> &str {
        &self.profile.handle
    }

    /// Creation request for the demo identity
    pub fn signup_request(&self) -> NewUser {
        NewUser {
            handle: self.profile.handle.clone(),
            name: self.profile.name.clone(),
            university: self.profile.university.clone(),
            bio: self.profile.bio.clone(),
        }
    }

    /// The resolved user, if bootstrap has succeeded
    pub fn user(&self) -> Option<User> {
        read(&self.user).clone()
    }

    pub fn is_resolved(&self) -> bool {
        read(&self.user).is_some()
    }

    pub fn adopt(&self, user: User) {
        *write(&self.user) = Some(user);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::id::RecordId;

    #[test]
    fn test_session_starts_unresolved() {
        let session = SessionContext::new(DemoConfig::default());

        assert!(!session.is_resolved());
        assert!(session.user().is_none());
        assert_eq!(session.handle(), "@rvu_guest");
    }

    #[test]
    fn test_signup_request_uses_profile() {
        let session = SessionContext::new(DemoConfig::default());

        assert_eq!(
            session.signup_request(),
            NewUser {
                handle: "@rvu_guest".to_string(),
                name: "RVU Guest".to_string(),
                university: "RVU".to_string(),
                bio: "chai enjoyer".to_string(),
            }
        );
    }

    #[test]
    fn test_adopt_resolves_session() {
        let session = SessionContext::new(DemoConfig::default());
        session.adopt(User {
            id: RecordId::from("u1"),
            handle: "@rvu_guest".to_string(),
            name: "RVU Guest".to_string(),
            university: "RVU".to_string(),
            bio: "chai enjoyer".to_string(),
        });

        assert!(session.is_resolved());
        assert_eq!(session.user().unwrap().id, RecordId::from("u1"));
    }
}
