//! # User and authentication models
//!
//! | Type | Direction | Purpose |
//! |------|-----------|---------|
//! | [`Registration`] | out | Everything the registration screen collects, including an optional profile photo. |
//! | [`LoginResponse`] | in | Token plus (form surface only) the user's public profile. |
//! | [`RegisterResponse`] | in | Token plus the new user's id. |
//! | [`CurrentUser`] | in | The signed-in user, used as default attribution for new records. |
//! | [`UserSummary`] | in | Entry of the `/api/users` listing used for anonymous fallback. |

use serde::{Deserialize, Serialize};

use super::{opt_string_or_number, string_or_number, Attachment};

/// The signed-in user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrentUser {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub city: Option<String>,
}

impl CurrentUser {
    /// Name used when attributing SOS alerts and posts.
    pub fn display_name(&self) -> &str {
        if self.first_name.is_empty() {
            "Anonymous"
        } else {
            &self.first_name
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// A row of the user listing.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct UserSummary {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub first_name: Option<String>,
}

/// Login reply. The JSON surface only returns the token.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoginResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<CurrentUser>,
}

/// Registration reply.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RegisterResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Registration form contents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registration {
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub city: String,
    pub phone_number: String,
    pub gov_id_type: String,
    pub gov_id_number: String,
    pub password: String,
    pub photo: Option<Attachment>,
}

impl Registration {
    /// The user record implied by a successful registration.
    pub fn to_current_user(&self, id: String) -> CurrentUser {
        CurrentUser {
            id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            city: Some(self.city.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_ids_decode_as_strings() {
        let user: CurrentUser =
            serde_json::from_value(json!({"id": 7, "first_name": "Asha", "last_name": "Rao"}))
                .unwrap();
        assert_eq!(user.id, "7");

        let reply: RegisterResponse =
            serde_json::from_value(json!({"access_token": "t", "user_id": "u-1"})).unwrap();
        assert_eq!(reply.user_id.as_deref(), Some("u-1"));
    }

    #[test]
    fn test_display_name_falls_back() {
        let mut user = CurrentUser {
            id: "1".into(),
            first_name: String::new(),
            last_name: "Rao".into(),
            city: None,
        };
        assert_eq!(user.display_name(), "Anonymous");
        user.first_name = "Asha".into();
        assert_eq!(user.display_name(), "Asha");
        assert_eq!(user.full_name(), "Asha Rao");
    }
}
