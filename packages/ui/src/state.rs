//! Application state.
//!
//! One [`AppState`] value holds everything the views render: the signed-in
//! user, the fetched collections, the purely local family list, the selected
//! language and the [`ViewRouter`]. It is owned by the view layer (a Dioxus
//! signal) and changed only through its setters. Fetched collections are
//! replaced wholesale on every reload.

use std::cell::RefCell;

use api::{CurrentUser, FeedEntry, MissingPerson, SosAlert};

use crate::geo::{GeoError, Position};
use crate::i18n::Language;
use crate::router::ViewRouter;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FamilyStatus {
    Safe,
    Unknown,
}

impl FamilyStatus {
    pub fn label(self) -> &'static str {
        match self {
            FamilyStatus::Safe => "Safe",
            FamilyStatus::Unknown => "Unknown",
        }
    }
}

/// A family member tracked on this device only.
#[derive(Clone, Debug, PartialEq)]
pub struct FamilyMember {
    pub name: String,
    pub status: FamilyStatus,
}

impl FamilyMember {
    pub fn new(name: impl Into<String>, status: FamilyStatus) -> Self {
        Self {
            name: name.into(),
            status,
        }
    }
}

/// What the home page knows about the device position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum LocationStatus {
    #[default]
    Pending,
    Known(Position),
    Denied,
    Unsupported,
}

impl From<Result<Position, GeoError>> for LocationStatus {
    fn from(result: Result<Position, GeoError>) -> Self {
        match result {
            Ok(position) => LocationStatus::Known(position),
            Err(GeoError::Unsupported) => LocationStatus::Unsupported,
            Err(GeoError::Denied | GeoError::Unavailable) => LocationStatus::Denied,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    pub current_user: Option<CurrentUser>,
    pub community_posts: Vec<FeedEntry>,
    pub missing_persons: Vec<MissingPerson>,
    pub sos_calls: Vec<SosAlert>,
    pub family_members: Vec<FamilyMember>,
    pub language: Language,
    pub location: LocationStatus,
    pub missing_filter: String,
    pub router: ViewRouter,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_user: None,
            community_posts: seed_posts(),
            missing_persons: Vec::new(),
            sos_calls: Vec::new(),
            family_members: seed_family(),
            language: Language::default(),
            location: LocationStatus::default(),
            missing_filter: String::new(),
            router: ViewRouter::new(),
        }
    }
}

impl AppState {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }

    pub fn set_current_user(&mut self, user: Option<CurrentUser>) {
        self.current_user = user;
    }

    pub fn current_user_id(&self) -> Option<&str> {
        self.current_user
            .as_ref()
            .map(|u| u.id.as_str())
            .filter(|id| !id.is_empty())
    }

    pub fn current_first_name(&self) -> Option<&str> {
        self.current_user
            .as_ref()
            .map(|u| u.first_name.as_str())
            .filter(|name| !name.is_empty())
    }

    pub fn replace_posts(&mut self, posts: Vec<FeedEntry>) {
        self.community_posts = posts;
    }

    pub fn prepend_post(&mut self, post: FeedEntry) {
        self.community_posts.insert(0, post);
    }

    pub fn replace_missing(&mut self, persons: Vec<MissingPerson>) {
        self.missing_persons = persons;
    }

    pub fn replace_sos(&mut self, calls: Vec<SosAlert>) {
        self.sos_calls = calls;
    }

    /// Add a member at the top of the list, marked safe. Blank names are ignored.
    pub fn add_family_member(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        self.family_members
            .insert(0, FamilyMember::new(name, FamilyStatus::Safe));
        true
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn set_location(&mut self, location: LocationStatus) {
        self.location = location;
    }

    pub fn set_missing_filter(&mut self, filter: impl Into<String>) {
        self.missing_filter = filter.into();
    }

    /// Registry entries whose name contains the current filter, ignoring case.
    pub fn filtered_missing(&self) -> Vec<&MissingPerson> {
        self.missing_persons
            .iter()
            .filter(|p| p.name_matches(&self.missing_filter))
            .collect()
    }
}

fn seed_posts() -> Vec<FeedEntry> {
    vec![
        FeedEntry {
            category: "Water".to_string(),
            message: "Family of 4 needs drinking water near the old temple.".to_string(),
            location: Some("Old town".to_string()),
            time: Some("1h ago".to_string()),
            ..Default::default()
        },
        FeedEntry {
            category: "Volunteer".to_string(),
            message: "I have a truck and can help transport supplies or people.".to_string(),
            location: Some("Central Market".to_string()),
            time: Some("2h ago".to_string()),
            ..Default::default()
        },
    ]
}

fn seed_family() -> Vec<FamilyMember> {
    vec![
        FamilyMember::new("Rohan Sharma", FamilyStatus::Safe),
        FamilyMember::new("Priya Sharma", FamilyStatus::Unknown),
        FamilyMember::new("Amit Singh", FamilyStatus::Safe),
    ]
}

/// Shared access to the [`AppState`] from async workflows.
///
/// Implementations must not hold a borrow across an `.await`; every call is a
/// short, synchronous read or write.
pub trait StateCell {
    fn with<R>(&self, f: impl FnOnce(&AppState) -> R) -> R;
    fn update(&self, f: impl FnOnce(&mut AppState));
}

impl StateCell for RefCell<AppState> {
    fn with<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.borrow())
    }

    fn update(&self, f: impl FnOnce(&mut AppState)) {
        f(&mut self.borrow_mut());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(name: &str) -> MissingPerson {
        MissingPerson {
            id: None,
            name: name.to_string(),
            age: Some("30".into()),
            last_seen_location: None,
            description: None,
            reporter_contact: None,
            photo_url: None,
            status: None,
        }
    }

    #[test]
    fn test_seed_data() {
        let state = AppState::default();
        assert_eq!(state.community_posts.len(), 2);
        assert_eq!(state.community_posts[0].category, "Water");
        assert_eq!(state.community_posts[1].time.as_deref(), Some("2h ago"));
        let names: Vec<_> = state.family_members.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Rohan Sharma", "Priya Sharma", "Amit Singh"]);
        assert_eq!(state.family_members[1].status, FamilyStatus::Unknown);
        assert!(state.current_user.is_none());
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let mut state = AppState::default();
        state.replace_missing(vec![person("Meera Patel"), person("Rohan Das"), person("Sameer")]);

        state.set_missing_filter("MEER");
        let names: Vec<_> = state.filtered_missing().iter().map(|p| p.name.clone()).collect();
        assert_eq!(names, vec!["Meera Patel", "Sameer"]);

        state.set_missing_filter("");
        assert_eq!(state.filtered_missing().len(), 3);

        state.set_missing_filter("xyz");
        assert!(state.filtered_missing().is_empty());
    }

    #[test]
    fn test_reload_replaces_collections() {
        let mut state = AppState::default();
        state.replace_missing(vec![person("A"), person("B")]);
        state.replace_missing(vec![person("C")]);
        assert_eq!(state.missing_persons.len(), 1);

        state.replace_posts(Vec::new());
        assert!(state.community_posts.is_empty());
    }

    #[test]
    fn test_add_family_member() {
        let mut state = AppState::default();
        assert!(!state.add_family_member("   "));
        assert_eq!(state.family_members.len(), 3);

        assert!(state.add_family_member("  Kavya Iyer "));
        assert_eq!(state.family_members[0], FamilyMember::new("Kavya Iyer", FamilyStatus::Safe));
    }

    #[test]
    fn test_location_from_geo_result() {
        let known = LocationStatus::from(Ok(Position::new(1.0, 2.0)));
        assert_eq!(known, LocationStatus::Known(Position::new(1.0, 2.0)));
        assert_eq!(LocationStatus::from(Err(GeoError::Denied)), LocationStatus::Denied);
        assert_eq!(LocationStatus::from(Err(GeoError::Unavailable)), LocationStatus::Denied);
        assert_eq!(
            LocationStatus::from(Err(GeoError::Unsupported)),
            LocationStatus::Unsupported
        );
    }

    #[test]
    fn test_current_user_accessors() {
        let mut state = AppState::default();
        assert_eq!(state.current_user_id(), None);
        state.set_current_user(Some(CurrentUser {
            id: "u-9".into(),
            first_name: String::new(),
            last_name: "Rao".into(),
            city: None,
        }));
        assert_eq!(state.current_user_id(), Some("u-9"));
        assert_eq!(state.current_first_name(), None);
    }
}
