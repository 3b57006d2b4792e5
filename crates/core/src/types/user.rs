//! Authenticated user model.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{Email, UserId};

/// A storefront account, present only while a session is authenticated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Account email address.
    pub email: Email,
    /// Account creation timestamp (naive UTC).
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_backend_shape() {
        let json = r#"{
            "id": "12",
            "name": "Ada",
            "email": "ada@example.com",
            "created_at": "2024-01-15T09:00:00"
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, UserId::new("12"));
        assert_eq!(user.email.as_str(), "ada@example.com");
        assert!(user.created_at.is_some());
    }
}
