use serde::{Deserialize, Serialize};

use super::opt_string_or_number;

/// A distress signal as stored by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SosAlert {
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub id: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub location_description: Option<String>,
    #[serde(default)]
    pub emergency_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Outgoing SOS alert.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewSosAlert {
    pub latitude: f64,
    pub longitude: f64,
    pub location_description: String,
    pub emergency_type: String,
    /// Only sent on the form surface; the JSON surface derives it from the token.
    #[serde(skip)]
    pub user_name: String,
    #[serde(skip)]
    pub user_id: String,
}

impl NewSosAlert {
    /// An urgent alert at the given coordinates, described by its position.
    pub fn urgent(latitude: f64, longitude: f64, user_name: String, user_id: String) -> Self {
        Self {
            latitude,
            longitude,
            location_description: format!("Emergency at Lat: {latitude:.4}, Lon: {longitude:.4}"),
            emergency_type: "urgent".to_string(),
            user_name,
            user_id,
        }
    }
}

/// "I am safe" notification.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SafeReport {
    pub latitude: f64,
    pub longitude: f64,
    pub message: String,
    #[serde(skip)]
    pub user_name: String,
    #[serde(skip)]
    pub user_id: String,
}

impl SafeReport {
    pub fn new(latitude: f64, longitude: f64, user_name: String, user_id: String) -> Self {
        Self {
            latitude,
            longitude,
            message: "User marked as safe".to_string(),
            user_name,
            user_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_urgent_description_uses_four_decimals() {
        let alert = NewSosAlert::urgent(19.07598, 72.87766, "Asha".into(), "u1".into());
        assert_eq!(alert.location_description, "Emergency at Lat: 19.0760, Lon: 72.8777");
        assert_eq!(alert.emergency_type, "urgent");
    }

    #[test]
    fn test_json_body_omits_form_only_fields() {
        let alert = NewSosAlert::urgent(1.0, 2.0, "Asha".into(), "u1".into());
        let body = serde_json::to_value(&alert).unwrap();
        assert!(body.get("user_id").is_none());
        assert!(body.get("user_name").is_none());
        assert_eq!(body["latitude"], json!(1.0));
    }
}
