use serde::{Deserialize, Serialize};

use super::{opt_string_or_number, Attachment};

/// A missing-person registry entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MissingPerson {
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub age: Option<String>,
    #[serde(default)]
    pub last_seen_location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub reporter_contact: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl MissingPerson {
    /// Case-insensitive substring match on the name. The empty needle matches everyone.
    pub fn name_matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}

/// Outgoing missing-person report.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMissingPerson {
    pub name: String,
    pub age: u32,
    pub last_seen_location: String,
    pub description: String,
    pub reporter_contact: String,
    pub user_id: String,
    pub photo: Option<Attachment>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_name_matches_ignores_case() {
        let person: MissingPerson =
            serde_json::from_value(json!({"name": "Meera Patel", "age": 34})).unwrap();
        assert_eq!(person.age.as_deref(), Some("34"));
        assert!(person.name_matches("meera"));
        assert!(person.name_matches("PATEL"));
        assert!(person.name_matches(""));
        assert!(!person.name_matches("rohan"));
    }
}
