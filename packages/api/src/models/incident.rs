use serde::{Deserialize, Serialize};

use super::{opt_string_or_number, Attachment};

/// An incident report as stored by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Incident {
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub id: Option<String>,
    pub incident_type: String,
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Outgoing incident report with an optional photo.
#[derive(Debug, Clone, PartialEq)]
pub struct NewIncident {
    pub incident_type: String,
    pub description: String,
    pub location: String,
    pub user_id: String,
    pub image: Option<Attachment>,
}
