use serde::{Deserialize, Serialize};

use super::{opt_string_or_number, Attachment, Incident};

/// `post_type` value marking an incident inside the community feed.
pub const INCIDENT_POST_TYPE: &str = "incident";

/// One entry of the community feed: a user post or an incident report.
///
/// The feed endpoint returns both kinds in a single list, discriminated by
/// `post_type`. Locally created posts carry a relative `time` ("Just now")
/// instead of a `created_at` timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FeedEntry {
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub id: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub post_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub incident_type: Option<String>,
}

impl FeedEntry {
    pub fn is_incident(&self) -> bool {
        self.post_type.as_deref() == Some(INCIDENT_POST_TYPE)
    }

    /// A post typed by the user in this session, not yet fetched from the server.
    pub fn local(category: String, message: String, user_name: String) -> Self {
        Self {
            category,
            message,
            location: Some("Near your location".to_string()),
            time: Some("Just now".to_string()),
            user_name: Some(user_name),
            post_type: Some("community".to_string()),
            ..Default::default()
        }
    }

    /// Present an incident report the way the combined feed does.
    pub fn from_incident(incident: &Incident) -> Self {
        Self {
            id: incident.id.as_ref().map(|id| format!("incident_{id}")),
            category: "Alert".to_string(),
            message: format!("🚨 {}: {}", incident.incident_type, incident.description),
            location: Some(incident.location.clone()),
            time: None,
            created_at: incident.created_at.clone(),
            user_name: Some("Emergency Report".to_string()),
            image_url: incident.photo_url.clone(),
            post_type: Some(INCIDENT_POST_TYPE.to_string()),
            status: Some(
                incident
                    .status
                    .clone()
                    .unwrap_or_else(|| "reported".to_string()),
            ),
            incident_type: Some(incident.incident_type.clone()),
        }
    }
}

/// Outgoing community post.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCommunityPost {
    pub category: String,
    pub message: String,
    pub location: String,
    pub user_name: String,
    pub user_id: String,
    pub image: Option<Attachment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_incident_builds_alert_entry() {
        let incident = Incident {
            id: Some("9".into()),
            incident_type: "Flood".into(),
            description: "Water rising near bridge".into(),
            location: "Ring Road".into(),
            user_id: None,
            status: None,
            photo_url: Some("https://img/1.jpg".into()),
            created_at: Some("2024-07-01T10:00:00Z".into()),
        };
        let entry = FeedEntry::from_incident(&incident);
        assert!(entry.is_incident());
        assert_eq!(entry.id.as_deref(), Some("incident_9"));
        assert_eq!(entry.category, "Alert");
        assert_eq!(entry.message, "🚨 Flood: Water rising near bridge");
        assert_eq!(entry.status.as_deref(), Some("reported"));
        assert_eq!(entry.user_name.as_deref(), Some("Emergency Report"));
        assert_eq!(entry.image_url.as_deref(), Some("https://img/1.jpg"));
    }

    #[test]
    fn test_local_post_is_not_incident() {
        let entry = FeedEntry::local("Food".into(), "Rice available".into(), "Asha".into());
        assert!(!entry.is_incident());
        assert_eq!(entry.time.as_deref(), Some("Just now"));
    }
}
