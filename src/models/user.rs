//! User profile models

use serde::{Deserialize, Serialize};

/// Response of `GET auth/profile/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub uuid: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub full_name: Option<String>,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
    pub last_active: Option<String>,
    pub current_streak: Option<u32>,
    pub max_streak: Option<u32>,
    pub is_premium: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionLevel {
    Free,
    Premium,
    Pro,
}

/// Body for `PATCH auth/profile/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileUpdateRequest {
    pub first_name: String,
    pub last_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_decodes_backend_shape() {
        let json = r#"{
            "uuid": "u-1",
            "email": "learner@example.com",
            "first_name": "Ada",
            "last_name": null,
            "full_name": "Ada",
            "is_active": true,
            "created_at": "2025-06-15T00:00:00Z",
            "updated_at": "2025-07-07T00:00:00Z",
            "last_active": null,
            "current_streak": 4,
            "max_streak": 11,
            "is_premium": false
        }"#;

        let user: User = serde_json::from_str(json).expect("Should decode");
        assert_eq!(user.email, "learner@example.com");
        assert_eq!(user.current_streak, Some(4));
        assert!(!user.is_premium);
    }

    #[test]
    fn test_subscription_level_uses_lowercase_wire_names() {
        assert_eq!(
            serde_json::to_string(&SubscriptionLevel::Premium).unwrap(),
            "\"premium\""
        );
        let level: SubscriptionLevel = serde_json::from_str("\"pro\"").unwrap();
        assert_eq!(level, SubscriptionLevel::Pro);
    }
}
