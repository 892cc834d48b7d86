//! Authenticated user identity

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The identity of the signed-in reader
///
/// Created at login from a pre-validated identity supplied by the caller;
/// the store never verifies credentials.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Unique identifier for this session's user
    pub id: String,

    /// Email handle used to sign in
    pub email: String,

    /// Display name shown in the UI
    pub name: String,
}

impl User {
    /// Create a user with an explicit display name
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            email: email.into(),
            name: name.into(),
        }
    }

    /// Create a user whose display name is derived from the email local part
    pub fn from_email(email: impl Into<String>) -> Self {
        let email = email.into();
        let name = derive_display_name(&email);
        Self {
            id: Uuid::new_v4().to_string(),
            email,
            name,
        }
    }

    /// Override the generated id
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

/// Display name fallback: everything before the `@`, or the whole input
fn derive_display_name(email: &str) -> String {
    email
        .split('@')
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or(email)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_derived_from_email() {
        let user = User::from_email("machado@exemplo.com.br");
        assert_eq!(user.name, "machado");
        assert_eq!(user.email, "machado@exemplo.com.br");
        assert!(!user.id.is_empty());
    }

    #[test]
    fn test_degenerate_email_keeps_input() {
        let user = User::from_email("@exemplo.com");
        assert_eq!(user.name, "@exemplo.com");
    }

    #[test]
    fn test_explicit_name_wins() {
        let user = User::new("machado@exemplo.com.br", "Machado de Assis");
        assert_eq!(user.name, "Machado de Assis");
    }
}
