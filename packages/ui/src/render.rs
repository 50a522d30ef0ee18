//! Pure view-models for the list screens.
//!
//! Each function maps state to a description of what to draw; components turn
//! these into elements and Dioxus applies the diff. Nothing here touches the
//! DOM, so the mapping rules are tested directly.

use api::{FeedEntry, MissingPerson, SosAlert};
use chrono::{DateTime, Local, NaiveDateTime};

use crate::state::{FamilyMember, FamilyStatus, LocationStatus};

pub const EMPTY_FEED: &str = "No posts or alerts yet.";
pub const EMPTY_SOS: &str = "No nearby SOS calls.";
pub const EMPTY_REGISTRY: &str = "No reports found.";

/// Badge classes for a community post category.
pub fn category_badge_class(category: &str) -> &'static str {
    match category {
        "Food" => "bg-green-100 text-green-800",
        "Water" => "bg-blue-100 text-blue-800",
        "Medical" => "bg-red-100 text-red-800",
        "Rescue" => "bg-yellow-100 text-yellow-800",
        "Volunteer" => "bg-purple-100 text-purple-800",
        _ => "bg-gray-100 text-gray-800",
    }
}

/// Local date and time for a server timestamp.
///
/// Accepts RFC 3339 and the zone-less ISO form the backend emits. Anything
/// else is shown as received.
pub fn format_timestamp(raw: Option<&str>) -> String {
    let Some(raw) = raw.filter(|s| !s.is_empty()) else {
        return String::new();
    };
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return ts.with_timezone(&Local).format("%d/%m/%Y, %H:%M:%S").to_string();
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return ts.format("%d/%m/%Y, %H:%M:%S").to_string();
    }
    raw.to_string()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct IncidentCard {
    pub badge: String,
    pub time: String,
    pub message: String,
    pub location: String,
    pub status: String,
    pub image_url: Option<String>,
    pub reporter: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PostCard {
    pub category: String,
    pub badge_class: &'static str,
    pub time: String,
    pub message: String,
    pub location: String,
    pub image_url: Option<String>,
    pub author: String,
}

/// A feed entry as drawn: incidents and posts get different treatments.
#[derive(Clone, Debug, PartialEq)]
pub enum FeedCard {
    Incident(IncidentCard),
    Post(PostCard),
}

impl FeedCard {
    pub fn from_entry(entry: &FeedEntry) -> Self {
        let location = entry.location.clone().unwrap_or_default();
        let image_url = entry.image_url.clone().filter(|u| !u.is_empty());
        if entry.is_incident() {
            FeedCard::Incident(IncidentCard {
                badge: format!("⚠️ {}", entry.category),
                time: format_timestamp(entry.created_at.as_deref()),
                message: entry.message.clone(),
                location,
                status: format!(
                    "Status: {}",
                    capitalize(entry.status.as_deref().unwrap_or("reported"))
                ),
                image_url,
                reporter: entry.user_name.clone().unwrap_or_default(),
            })
        } else {
            FeedCard::Post(PostCard {
                category: entry.category.clone(),
                badge_class: category_badge_class(&entry.category),
                time: entry
                    .time
                    .clone()
                    .unwrap_or_else(|| format_timestamp(entry.created_at.as_deref())),
                message: entry.message.clone(),
                location,
                image_url,
                author: entry
                    .user_name
                    .clone()
                    .filter(|n| !n.is_empty())
                    .unwrap_or_else(|| "Anonymous".to_string()),
            })
        }
    }
}

pub fn feed_cards(entries: &[FeedEntry]) -> Vec<FeedCard> {
    entries.iter().map(FeedCard::from_entry).collect()
}

/// An SOS alert as listed under "Nearby SOS Calls".
#[derive(Clone, Debug, PartialEq)]
pub struct SosCall {
    pub id: Option<String>,
    pub name: String,
    pub location: String,
    pub time: String,
    pub emergency_type: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<&SosAlert> for SosCall {
    fn from(alert: &SosAlert) -> Self {
        Self {
            id: alert.id.clone(),
            name: alert
                .user_name
                .clone()
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| "Anonymous".to_string()),
            location: alert
                .location_description
                .clone()
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| format!("Lat: {}, Lon: {}", alert.latitude, alert.longitude)),
            time: format_timestamp(alert.created_at.as_deref()),
            emergency_type: alert
                .emergency_type
                .clone()
                .unwrap_or_else(|| "General".to_string()),
            latitude: alert.latitude,
            longitude: alert.longitude,
        }
    }
}

pub fn sos_calls(alerts: &[SosAlert]) -> Vec<SosCall> {
    alerts.iter().map(SosCall::from).collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct MissingCard {
    pub name: String,
    pub details: String,
    pub description: String,
    pub contact: String,
    pub photo_url: String,
}

impl MissingCard {
    pub fn new(person: &MissingPerson, placeholder: &str) -> Self {
        Self {
            name: person.name.clone(),
            details: format!(
                "Age: {}, Last Seen: {}",
                person.age.as_deref().unwrap_or("Unknown"),
                person.last_seen_location.as_deref().unwrap_or("Unknown")
            ),
            description: person.description.clone().unwrap_or_default(),
            contact: format!(
                "Contact: {}",
                person.reporter_contact.as_deref().unwrap_or_default()
            ),
            photo_url: person
                .photo_url
                .clone()
                .filter(|u| !u.is_empty())
                .unwrap_or_else(|| placeholder.to_string()),
        }
    }
}

pub fn missing_cards(persons: &[&MissingPerson], placeholder: &str) -> Vec<MissingCard> {
    persons
        .iter()
        .map(|p| MissingCard::new(p, placeholder))
        .collect()
}

pub fn family_badge_class(status: FamilyStatus) -> &'static str {
    match status {
        FamilyStatus::Safe => "bg-green-100 text-green-800",
        FamilyStatus::Unknown => "bg-gray-200 text-gray-800",
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FamilyRow {
    pub name: String,
    pub status: &'static str,
    pub badge_class: &'static str,
}

pub fn family_rows(members: &[FamilyMember]) -> Vec<FamilyRow> {
    members
        .iter()
        .map(|m| FamilyRow {
            name: m.name.clone(),
            status: m.status.label(),
            badge_class: family_badge_class(m.status),
        })
        .collect()
}

/// The two lines of the home page's location card.
#[derive(Clone, Debug, PartialEq)]
pub struct LocationPanel {
    pub location: String,
    pub risks: String,
}

impl From<LocationStatus> for LocationPanel {
    fn from(status: LocationStatus) -> Self {
        let (location, risks) = match status {
            LocationStatus::Pending => ("Fetching location...".to_string(), "Assessing...".to_string()),
            LocationStatus::Known(p) => (
                format!("Lat: {:.2}, Lon: {:.2}", p.latitude, p.longitude),
                "Floods, Severe Thunderstorms".to_string(),
            ),
            LocationStatus::Denied => (
                "Location access denied.".to_string(),
                "Cannot assess risks without location.".to_string(),
            ),
            LocationStatus::Unsupported => (
                "Geolocation is not supported by this browser.".to_string(),
                String::new(),
            ),
        };
        Self { location, risks }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Position;

    #[test]
    fn test_incident_and_post_render_differently() {
        let incident = FeedEntry {
            category: "Alert".into(),
            message: "🚨 Fire: Smoke near school".into(),
            location: Some("MG Road".into()),
            post_type: Some("incident".into()),
            status: Some("reported".into()),
            user_name: Some("Emergency Report".into()),
            created_at: Some("not a date".into()),
            ..Default::default()
        };
        let post = FeedEntry {
            category: "Food".into(),
            message: "Rice packets at the school".into(),
            location: Some("Ward 4".into()),
            time: Some("Just now".into()),
            ..Default::default()
        };

        let cards = feed_cards(&[incident, post]);
        let FeedCard::Incident(first) = &cards[0] else {
            panic!("expected incident card");
        };
        assert_eq!(first.badge, "⚠️ Alert");
        assert_eq!(first.status, "Status: Reported");
        assert_eq!(first.time, "not a date");

        let FeedCard::Post(second) = &cards[1] else {
            panic!("expected post card");
        };
        assert_eq!(second.author, "Anonymous");
        assert_eq!(second.badge_class, "bg-green-100 text-green-800");
        assert_eq!(second.time, "Just now");
    }

    #[test]
    fn test_category_badges() {
        assert_eq!(category_badge_class("Water"), "bg-blue-100 text-blue-800");
        assert_eq!(category_badge_class("Medical"), "bg-red-100 text-red-800");
        assert_eq!(category_badge_class("Rescue"), "bg-yellow-100 text-yellow-800");
        assert_eq!(category_badge_class("Volunteer"), "bg-purple-100 text-purple-800");
        assert_eq!(category_badge_class("Other"), "bg-gray-100 text-gray-800");
    }

    #[test]
    fn test_sos_call_defaults() {
        let alert = SosAlert {
            id: Some("1".into()),
            user_name: None,
            latitude: 19.5,
            longitude: 72.25,
            location_description: None,
            emergency_type: None,
            status: None,
            created_at: None,
        };
        let call = SosCall::from(&alert);
        assert_eq!(call.name, "Anonymous");
        assert_eq!(call.location, "Lat: 19.5, Lon: 72.25");
        assert_eq!(call.emergency_type, "General");
        assert_eq!(call.time, "");
    }

    #[test]
    fn test_naive_timestamp_is_formatted() {
        assert_eq!(
            format_timestamp(Some("2024-07-01T10:05:09.123456")),
            "01/07/2024, 10:05:09"
        );
        assert_eq!(format_timestamp(None), "");
    }

    #[test]
    fn test_missing_card_uses_placeholder() {
        let person = MissingPerson {
            id: None,
            name: "Meera".into(),
            age: Some("34".into()),
            last_seen_location: Some("Station".into()),
            description: Some("Blue saree".into()),
            reporter_contact: Some("98765".into()),
            photo_url: None,
            status: None,
        };
        let card = MissingCard::new(&person, "https://placeholder");
        assert_eq!(card.photo_url, "https://placeholder");
        assert_eq!(card.details, "Age: 34, Last Seen: Station");
        assert_eq!(card.contact, "Contact: 98765");
    }

    #[test]
    fn test_location_panel_texts() {
        let panel = LocationPanel::from(LocationStatus::Known(Position::new(12.3456, 56.7812)));
        assert_eq!(panel.location, "Lat: 12.35, Lon: 56.78");
        assert_eq!(panel.risks, "Floods, Severe Thunderstorms");

        let denied = LocationPanel::from(LocationStatus::Denied);
        assert_eq!(denied.location, "Location access denied.");
        assert_eq!(denied.risks, "Cannot assess risks without location.");
    }

    #[test]
    fn test_family_rows() {
        let rows = family_rows(&[FamilyMember::new("Priya", FamilyStatus::Unknown)]);
        assert_eq!(rows[0].status, "Unknown");
        assert_eq!(rows[0].badge_class, "bg-gray-200 text-gray-800");
    }
}
