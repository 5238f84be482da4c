use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Student,
    Teacher,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Student => write!(f, "student"),
            UserRole::Teacher => write!(f, "teacher"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    pub user_id: String,
    pub email: String,
    pub full_name: String,
    pub role: UserRole,
    pub hashed_password: String,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn new(email: &str, full_name: &str, role: UserRole, hashed_password: &str) -> Self {
        User {
            user_id: uuid::Uuid::new_v4().to_string(),
            email: email.to_string(),
            full_name: full_name.to_string(),
            role,
            hashed_password: hashed_password.to_string(),
            is_active: true,
            created_at: Some(Utc::now()),
        }
    }
}

#[cfg(test)]
impl User {
    pub fn test_user(email: &str, role: UserRole) -> Self {
        User::new(email, "Test User", role, "$argon2id$fake$hash")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let user = User::new("jane@example.com", "Jane Doe", UserRole::Student, "hash");
        assert_eq!(user.email, "jane@example.com");
        assert_eq!(user.full_name, "Jane Doe");
        assert_eq!(user.role, UserRole::Student);
        assert!(user.is_active);
        assert!(user.created_at.is_some());
        assert!(!user.user_id.is_empty());
    }

    #[test]
    fn test_role_serialization_is_lowercase() {
        assert_eq!(
            serde_json::to_string(&UserRole::Teacher).unwrap(),
            "\"teacher\""
        );
        assert_eq!(
            serde_json::from_str::<UserRole>("\"student\"").unwrap(),
            UserRole::Student
        );
    }
}
