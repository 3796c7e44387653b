//! Authentication capability.
//!
//! The storefront never checks credentials itself. An `Authenticator`
//! issues an `AuthSession`, and everything downstream only asks whether a
//! session is present.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::StorefrontError;

/// Opaque session token issued by an authenticator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionToken(String);

impl SessionToken {
    /// Generate a random URL-safe token from 24 bytes of entropy.
    pub fn generate() -> Self {
        use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
        use rand::Rng;

        let bytes: [u8; 24] = rand::thread_rng().gen();
        Self(URL_SAFE_NO_PAD.encode(bytes))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Profile shown in the account area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    /// Display label, e.g. "Enero 2024".
    pub member_since: String,
    /// Loyalty level label.
    pub level: String,
}

/// Login form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// A logged-in session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: SessionToken,
    pub user: UserProfile,
}

/// Issues sessions from credentials.
pub trait Authenticator {
    fn authenticate(&self, credentials: &Credentials) -> Result<AuthSession, StorefrontError>;
}

/// Demo authenticator: accepts any credentials and returns a fixed profile
/// under the email that was entered.
#[derive(Debug, Clone)]
pub struct MockAuthenticator {
    profile: UserProfile,
}

impl MockAuthenticator {
    pub fn new(profile: UserProfile) -> Self {
        Self { profile }
    }
}

impl Default for MockAuthenticator {
    fn default() -> Self {
        Self::new(UserProfile {
            name: "Juan Pérez Delgado".to_string(),
            email: "juan.perez@email.com".to_string(),
            member_since: "Enero 2024".to_string(),
            level: "Explorador KALLPA".to_string(),
        })
    }
}

impl Authenticator for MockAuthenticator {
    fn authenticate(&self, credentials: &Credentials) -> Result<AuthSession, StorefrontError> {
        Ok(AuthSession {
            token: SessionToken::generate(),
            user: UserProfile {
                email: credentials.email.clone(),
                ..self.profile.clone()
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_accepts_anything() {
        let auth = MockAuthenticator::default();
        let session = auth
            .authenticate(&Credentials::new("ana@example.com", ""))
            .unwrap();
        assert_eq!(session.user.email, "ana@example.com");
        assert_eq!(session.user.name, "Juan Pérez Delgado");
        assert_eq!(session.user.level, "Explorador KALLPA");
    }

    #[test]
    fn test_tokens_are_unique() {
        let auth = MockAuthenticator::default();
        let a = auth.authenticate(&Credentials::default()).unwrap();
        let b = auth.authenticate(&Credentials::default()).unwrap();
        assert_ne!(a.token, b.token);
    }

    #[test]
    fn test_token_is_opaque() {
        let token = SessionToken::generate();
        // 24 bytes encode to 32 unpadded base64 characters.
        assert_eq!(token.as_str().len(), 32);
        assert!(token
            .as_str()
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }
}
