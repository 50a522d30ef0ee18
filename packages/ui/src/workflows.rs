//! Form workflows.
//!
//! Each workflow gathers its input, resolves who is acting, calls the
//! [`Backend`], updates [`AppState`](crate::AppState) and reports back through
//! a dialog. Failures are terminal for the action: nothing is retried.
//! Preconditions (location, acting user) are checked before any network call.
//!
//! Background loads (`load_*`, [`Workflows::locate`]) only log failures.

use api::{
    ApiError, Attachment, Backend, FeedEntry, HttpTransport, NewCommunityPost, NewIncident,
    NewMissingPerson, NewSosAlert, Registration, SafeReport,
};
use store::KeyValueStore;

use crate::dialog::{Dialog, DialogOutcome, Prompter};
use crate::geo::{GeoError, Geolocator, Position};
use crate::router::{MissingTab, Page};
use crate::state::{LocationStatus, StateCell};

/// How a workflow ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    /// The user dismissed the confirmation.
    Cancelled,
    /// A precondition failed before anything was sent.
    Blocked,
    /// The backend call failed.
    Failed,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct IncidentForm {
    pub incident_type: String,
    pub description: String,
    pub location: String,
    pub image: Option<Attachment>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MissingForm {
    pub name: String,
    /// Age as typed; checked before anything is sent.
    pub age: String,
    pub last_seen_location: String,
    pub description: String,
    pub reporter_contact: String,
    pub photo: Option<Attachment>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PostForm {
    pub category: String,
    pub message: String,
    pub image: Option<Attachment>,
}

/// Message shown for a failed call: the server's own words when it sent any.
fn failure_message(err: &ApiError, fallback: &str) -> String {
    match err {
        ApiError::Unauthorized { .. } | ApiError::Status { .. } => err.to_string(),
        ApiError::Transport(_) | ApiError::Decode(_) | ApiError::Encode(_) => fallback.to_string(),
    }
}

pub struct Workflows<'a, T, S, G, P, C> {
    pub backend: &'a Backend<T, S>,
    pub geo: &'a G,
    pub dialogs: &'a P,
    pub state: &'a C,
}

impl<'a, T, S, G, P, C> Workflows<'a, T, S, G, P, C>
where
    T: HttpTransport,
    S: KeyValueStore,
    G: Geolocator,
    P: Prompter,
    C: StateCell,
{
    async fn notice(&self, title: &str, text: impl Into<String>) {
        self.dialogs.show(Dialog::notice(title, text)).await;
    }

    /// The acting user's id: the session user, else the first known user.
    pub async fn resolve_acting_user(&self) -> Option<String> {
        if let Some(id) = self.state.with(|s| s.current_user_id().map(str::to_string)) {
            return Some(id);
        }
        match self.backend.list_users().await {
            Ok(users) => {
                let id = users.into_iter().next().map(|u| u.id);
                if let Some(id) = &id {
                    tracing::info!("No session user, acting as {id}");
                }
                id
            }
            Err(e) => {
                tracing::error!("Failed to get fallback user ID: {e}");
                None
            }
        }
    }

    pub async fn login(&self, gov_id_number: &str, password: &str) -> Outcome {
        match self.backend.login(gov_id_number, password).await {
            Ok(user) => {
                self.state.update(|s| {
                    s.set_current_user(user);
                    s.router.enter_app();
                });
                Outcome::Completed
            }
            Err(e) => {
                tracing::error!("Login error: {e}");
                self.notice(
                    "Login Failed",
                    failure_message(&e, "Login failed. Please try again."),
                )
                .await;
                Outcome::Failed
            }
        }
    }

    pub async fn register(&self, registration: &Registration) -> Outcome {
        match self.backend.register(registration).await {
            Ok(user) => {
                self.state.update(|s| {
                    s.set_current_user(Some(user));
                    s.router.enter_app();
                });
                Outcome::Completed
            }
            Err(e) => {
                tracing::error!("Registration error: {e}");
                self.notice(
                    "Registration Failed",
                    failure_message(&e, "Registration failed. Please try again."),
                )
                .await;
                Outcome::Failed
            }
        }
    }

    /// Tell the user why the position is unavailable. Returns the position otherwise.
    async fn require_position(&self, required_for: &str) -> Option<Position> {
        match self.geo.current_position().await {
            Ok(position) => Some(position),
            Err(GeoError::Unsupported) => {
                self.notice("Error", GeoError::Unsupported.to_string()).await;
                None
            }
            Err(GeoError::Denied | GeoError::Unavailable) => {
                self.notice(
                    "Location Required",
                    format!(
                        "Location access is required to {required_for}. Please enable location services."
                    ),
                )
                .await;
                None
            }
        }
    }

    pub async fn send_sos(&self) -> Outcome {
        let confirm = Dialog::confirm(
            "Confirm SOS",
            "This will send a distress signal to emergency services. Are you sure?",
            "SEND SOS",
        );
        if self.dialogs.show(confirm).await == DialogOutcome::Dismissed {
            return Outcome::Cancelled;
        }

        let Some(position) = self.require_position("send SOS alerts").await else {
            return Outcome::Blocked;
        };
        let Some(user_id) = self.resolve_acting_user().await else {
            self.notice(
                "Error",
                "Unable to send SOS alert. Please try logging in first.",
            )
            .await;
            return Outcome::Blocked;
        };
        let user_name = self.state.with(|s| {
            s.current_first_name()
                .unwrap_or("Anonymous User")
                .to_string()
        });

        let alert = NewSosAlert::urgent(position.latitude, position.longitude, user_name, user_id);
        match self.backend.send_sos(&alert).await {
            Ok(()) => {
                self.notice(
                    "SOS Sent",
                    "Your distress signal has been sent. Help is on the way.",
                )
                .await;
                self.load_sos_alerts().await;
                Outcome::Completed
            }
            Err(e) => {
                tracing::error!("Error sending SOS alert: {e}");
                self.notice("Error", "Failed to send SOS alert. Please try again.")
                    .await;
                Outcome::Failed
            }
        }
    }

    pub async fn mark_safe(&self) -> Outcome {
        let confirm = Dialog::confirm(
            "Mark as Safe",
            "This will notify authorities that you are safe.",
            "NOTIFY",
        );
        if self.dialogs.show(confirm).await == DialogOutcome::Dismissed {
            return Outcome::Cancelled;
        }

        let Some(position) = self.require_position("mark yourself safe").await else {
            return Outcome::Blocked;
        };
        let Some(user_id) = self.resolve_acting_user().await else {
            self.notice(
                "Error",
                "Unable to notify authorities. Please try logging in first.",
            )
            .await;
            return Outcome::Blocked;
        };
        let user_name = self.state.with(|s| {
            s.current_first_name()
                .unwrap_or("Anonymous User")
                .to_string()
        });

        let report = SafeReport::new(position.latitude, position.longitude, user_name, user_id);
        match self.backend.mark_safe(&report).await {
            Ok(()) => {
                self.notice("Notification Sent", "You have been marked as safe.")
                    .await;
                Outcome::Completed
            }
            Err(e) => {
                tracing::error!("Error marking safe: {e}");
                self.notice(
                    "Error",
                    failure_message(&e, "Failed to notify authorities. Please try again."),
                )
                .await;
                Outcome::Failed
            }
        }
    }

    pub async fn report_incident(&self, form: IncidentForm) -> Outcome {
        let Some(user_id) = self.resolve_acting_user().await else {
            self.notice(
                "Error",
                "Unable to submit incident report. Please try logging in first.",
            )
            .await;
            return Outcome::Blocked;
        };

        let incident = NewIncident {
            incident_type: form.incident_type,
            description: form.description,
            location: form.location,
            user_id,
            image: form.image,
        };
        match self.backend.report_incident(&incident).await {
            Ok(()) => {
                self.notice(
                    "Incident Reported",
                    "Your incident report has been submitted and will appear in the community feed.",
                )
                .await;
                self.state.update(|s| s.router.show_page(Page::Home));
                self.load_community_feed().await;
                Outcome::Completed
            }
            Err(e) => {
                tracing::error!("Failed to submit incident: {e}");
                self.notice(
                    "Error",
                    failure_message(&e, "Failed to submit incident report. Please try again."),
                )
                .await;
                Outcome::Failed
            }
        }
    }

    pub async fn report_missing(&self, form: MissingForm) -> Outcome {
        let Ok(age) = form.age.trim().parse::<u32>() else {
            tracing::warn!("Rejected missing report with age {:?}", form.age);
            self.notice("Invalid Age", "Please enter the age as a whole number of years.")
                .await;
            return Outcome::Blocked;
        };
        let user_id = self.state.with(|s| {
            s.current_user_id()
                .unwrap_or("anonymous")
                .to_string()
        });
        let person = NewMissingPerson {
            name: form.name,
            age,
            last_seen_location: form.last_seen_location,
            description: form.description,
            reporter_contact: form.reporter_contact,
            user_id,
            photo: form.photo,
        };
        match self.backend.report_missing(&person).await {
            Ok(()) => {
                self.notice(
                    "Report Submitted",
                    "Your missing person report has been added to the registry.",
                )
                .await;
                self.state
                    .update(|s| s.router.select_missing_tab(MissingTab::SearchRegistry));
                self.load_missing_persons().await;
                Outcome::Completed
            }
            Err(e) => {
                tracing::error!("Error submitting missing person report: {e}");
                self.notice(
                    "Error",
                    failure_message(&e, "Failed to submit report. Please try again."),
                )
                .await;
                Outcome::Failed
            }
        }
    }

    /// Show the post at the top of the feed right away, then submit it.
    /// A failed submission is reported but the local post stays.
    pub async fn create_post(&self, form: PostForm) -> Outcome {
        let user_name = self.state.with(|s| {
            s.current_first_name()
                .unwrap_or("Anonymous")
                .to_string()
        });
        self.state.update(|s| {
            s.prepend_post(FeedEntry::local(
                form.category.clone(),
                form.message.clone(),
                user_name.clone(),
            ))
        });

        let user_id = self
            .resolve_acting_user()
            .await
            .unwrap_or_else(|| "anonymous".to_string());
        let post = NewCommunityPost {
            category: form.category,
            message: form.message,
            location: "Near your location".to_string(),
            user_name,
            user_id,
            image: form.image,
        };
        match self.backend.create_post(&post).await {
            Ok(()) => Outcome::Completed,
            Err(e) => {
                tracing::error!("Error sharing community post: {e}");
                self.notice(
                    "Error",
                    failure_message(&e, "Failed to share post. Please try again."),
                )
                .await;
                Outcome::Failed
            }
        }
    }

    /// Local only. Returns to the missing page when a member was added.
    pub fn add_family_member(&self, name: &str) -> Outcome {
        let mut added = false;
        self.state.update(|s| {
            added = s.add_family_member(name);
            if added {
                s.router.show_page(Page::Missing);
            }
        });
        if added {
            Outcome::Completed
        } else {
            Outcome::Blocked
        }
    }

    /// Fill the location card on the home page.
    pub async fn locate(&self) {
        let status = LocationStatus::from(self.geo.current_position().await);
        self.state.update(|s| s.set_location(status));
    }

    pub async fn load_community_feed(&self) {
        match self.backend.community_feed().await {
            Ok(posts) => {
                tracing::info!("Community feed loaded: {} posts", posts.len());
                self.state.update(|s| s.replace_posts(posts));
            }
            Err(e) => tracing::error!("Error loading community feed: {e}"),
        }
    }

    pub async fn load_missing_persons(&self) {
        match self.backend.list_missing(None).await {
            Ok(persons) => self.state.update(|s| s.replace_missing(persons)),
            Err(e) => tracing::error!("Error loading missing persons: {e}"),
        }
    }

    /// Alerts near the last known position, or all alerts when it is unknown.
    pub async fn load_sos_alerts(&self) {
        let position = self.state.with(|s| match s.location {
            LocationStatus::Known(p) => Some(p),
            _ => None,
        });
        let result = match position {
            Some(p) => self.backend.nearby_sos(p.latitude, p.longitude).await,
            None => self.backend.list_sos().await,
        };
        match result {
            Ok(alerts) => self.state.update(|s| s.replace_sos(alerts)),
            Err(e) => tracing::error!("Error loading SOS alerts: {e}"),
        }
    }

    /// Everything the app shows on entry.
    pub async fn initialize(&self) {
        self.locate().await;
        self.load_missing_persons().await;
        self.load_sos_alerts().await;
        self.load_community_feed().await;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use api::{ApiSurface, CurrentUser, ScriptedTransport};
    use serde_json::json;
    use store::{AppConfig, MemoryStore};

    use super::*;
    use crate::dialog::ScriptedPrompter;
    use crate::geo::FixedGeolocator;
    use crate::router::Container;
    use crate::state::AppState;

    struct Harness {
        backend: Backend<ScriptedTransport, MemoryStore>,
        transport: ScriptedTransport,
        geo: FixedGeolocator,
        dialogs: ScriptedPrompter,
        state: RefCell<AppState>,
    }

    impl Harness {
        fn new(surface: ApiSurface) -> Self {
            let transport = ScriptedTransport::new();
            let config = AppConfig::default().with_api("", surface);
            Self {
                backend: Backend::from_config(transport.clone(), MemoryStore::new(), &config),
                transport,
                geo: FixedGeolocator(Ok(Position::new(19.076, 72.8777))),
                dialogs: ScriptedPrompter::new(),
                state: RefCell::new(AppState::default()),
            }
        }

        fn form() -> Self {
            Self::new(ApiSurface::Form)
        }

        fn with_geo(mut self, result: Result<Position, GeoError>) -> Self {
            self.geo = FixedGeolocator(result);
            self
        }

        fn signed_in(self) -> Self {
            self.state.borrow_mut().set_current_user(Some(CurrentUser {
                id: "u-1".into(),
                first_name: "Asha".into(),
                last_name: "Rao".into(),
                city: None,
            }));
            self
        }

        fn flows(&self) -> Workflows<'_, ScriptedTransport, MemoryStore, FixedGeolocator, ScriptedPrompter, RefCell<AppState>> {
            Workflows {
                backend: &self.backend,
                geo: &self.geo,
                dialogs: &self.dialogs,
                state: &self.state,
            }
        }
    }

    #[tokio::test]
    async fn test_login_enters_app() {
        let h = Harness::form();
        h.transport.push_json(
            200,
            json!({"access_token": "t", "user": {"id": 1, "first_name": "Asha", "last_name": "Rao"}}),
        );

        assert_eq!(h.flows().login("GOV123", "pw").await, Outcome::Completed);
        let state = h.state.borrow();
        assert_eq!(state.router.container(), Container::App);
        assert_eq!(state.current_user_id(), Some("1"));
        assert!(h.backend.is_logged_in());
        assert!(h.dialogs.shown().is_empty());
    }

    #[tokio::test]
    async fn test_bad_login_stays_on_auth_with_server_message() {
        let h = Harness::form();
        h.transport
            .push_json(401, json!({"detail": "Invalid government ID or password"}));

        assert_eq!(h.flows().login("GOV123", "wrong").await, Outcome::Failed);
        assert_eq!(h.state.borrow().router.container(), Container::Auth);
        let shown = h.dialogs.shown();
        assert_eq!(shown[0].title, "Login Failed");
        assert_eq!(shown[0].text, "Invalid government ID or password");
    }

    #[tokio::test]
    async fn test_login_network_failure_uses_generic_text() {
        let h = Harness::form();
        h.transport.push_failure("connection refused");

        h.flows().login("GOV123", "pw").await;
        assert_eq!(h.dialogs.shown()[0].text, "Login failed. Please try again.");
    }

    #[tokio::test]
    async fn test_json_login_enters_app_when_profile_lookup_fails() {
        let h = Harness::new(ApiSurface::Json);
        h.transport
            .push_json(200, json!({"access_token": "t", "token_type": "bearer"}));
        h.transport.push_failure("connection reset");

        assert_eq!(h.flows().login("GOV123", "pw").await, Outcome::Completed);
        let state = h.state.borrow();
        assert_eq!(state.router.container(), Container::App);
        assert_eq!(state.current_user_id(), None);
        assert!(h.backend.is_logged_in());
        assert!(h.dialogs.shown().is_empty());
    }

    #[tokio::test]
    async fn test_register_enters_app_with_submitted_names() {
        let h = Harness::form();
        h.transport
            .push_json(200, json!({"access_token": "t", "user_id": "u-5", "message": "ok"}));

        let registration = Registration {
            first_name: "Ravi".into(),
            last_name: "Kumar".into(),
            ..Default::default()
        };
        assert_eq!(h.flows().register(&registration).await, Outcome::Completed);
        let state = h.state.borrow();
        assert_eq!(state.router.container(), Container::App);
        assert_eq!(state.current_first_name(), Some("Ravi"));
    }

    #[tokio::test]
    async fn test_sos_with_location_denied_sends_nothing() {
        let h = Harness::form().signed_in().with_geo(Err(GeoError::Denied));

        assert_eq!(h.flows().send_sos().await, Outcome::Blocked);
        assert_eq!(h.dialogs.titles(), vec!["Confirm SOS", "Location Required"]);
        assert_eq!(h.transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_sos_cancelled_sends_nothing() {
        let h = Harness::form().signed_in();
        h.dialogs.answer(DialogOutcome::Dismissed);

        assert_eq!(h.flows().send_sos().await, Outcome::Cancelled);
        assert_eq!(h.transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_sos_sends_and_reloads_alerts() {
        let h = Harness::form().signed_in();
        h.transport
            .push_json(200, json!({"message": "SOS alert created successfully", "alert_id": 4}))
            .push_json(
                200,
                json!({"alerts": [{"id": 4, "user_name": "Asha", "latitude": 19.076, "longitude": 72.8777}]}),
            );

        assert_eq!(h.flows().send_sos().await, Outcome::Completed);
        assert_eq!(h.dialogs.titles(), vec!["Confirm SOS", "SOS Sent"]);

        let sent = &h.transport.requests()[0];
        assert_eq!(sent.url, "/api/sos");
        assert_eq!(sent.form_text("user_id"), Some("u-1"));
        assert_eq!(sent.form_text("user_name"), Some("Asha"));
        assert_eq!(
            sent.form_text("location_description"),
            Some("Emergency at Lat: 19.0760, Lon: 72.8777")
        );
        assert_eq!(h.state.borrow().sos_calls.len(), 1);
    }

    #[tokio::test]
    async fn test_sos_falls_back_to_first_user() {
        let h = Harness::form();
        h.transport
            .push_json(200, json!({"users": [{"id": "u-42", "first_name": "Dev"}], "count": 1}))
            .push_json(200, json!({"message": "ok"}))
            .push_json(200, json!({"alerts": []}));

        assert_eq!(h.flows().send_sos().await, Outcome::Completed);
        let sent = &h.transport.requests()[1];
        assert_eq!(sent.form_text("user_id"), Some("u-42"));
        assert_eq!(sent.form_text("user_name"), Some("Anonymous User"));
    }

    #[tokio::test]
    async fn test_sos_without_any_user_is_blocked() {
        let h = Harness::form();
        h.transport.push_json(200, json!({"users": [], "count": 0}));

        assert_eq!(h.flows().send_sos().await, Outcome::Blocked);
        assert_eq!(h.transport.urls(), vec!["/api/users"]);
        assert_eq!(
            h.dialogs.shown()[1].text,
            "Unable to send SOS alert. Please try logging in first."
        );
    }

    #[tokio::test]
    async fn test_sos_server_error() {
        let h = Harness::form().signed_in();
        h.transport.push_json(400, json!({"detail": "Already active"}));

        assert_eq!(h.flows().send_sos().await, Outcome::Failed);
        assert_eq!(
            h.dialogs.shown()[1].text,
            "Failed to send SOS alert. Please try again."
        );
    }

    #[tokio::test]
    async fn test_mark_safe_posts_position() {
        let h = Harness::new(ApiSurface::Json).signed_in();
        h.transport.push_json(200, json!({"message": "ok"}));

        assert_eq!(h.flows().mark_safe().await, Outcome::Completed);
        assert_eq!(h.dialogs.titles(), vec!["Mark as Safe", "Notification Sent"]);
        let sent = &h.transport.requests()[0];
        assert_eq!(sent.url, "/sos/safe");
        assert_eq!(sent.json_body().unwrap()["message"], json!("User marked as safe"));
    }

    #[tokio::test]
    async fn test_incident_report_returns_home_and_reloads_feed() {
        let h = Harness::form().signed_in();
        h.state.borrow_mut().router.show_page(Page::ReportIncident);
        h.transport
            .push_json(200, json!({"message": "Incident reported successfully"}))
            .push_json(200, json!({"posts": [], "count": 0}));

        let form = IncidentForm {
            incident_type: "Flood".into(),
            description: "Road under water".into(),
            location: "NH 48".into(),
            image: None,
        };
        assert_eq!(h.flows().report_incident(form).await, Outcome::Completed);

        let state = h.state.borrow();
        assert_eq!(state.router.page(), Page::Home);
        assert!(state.community_posts.is_empty());
        assert_eq!(h.transport.requests()[0].form_text("user_id"), Some("u-1"));
    }

    #[tokio::test]
    async fn test_incident_error_shows_detail() {
        let h = Harness::form().signed_in();
        h.transport
            .push_json(422, json!({"detail": [{"msg": "field required"}]}));

        let outcome = h.flows().report_incident(IncidentForm::default()).await;
        assert_eq!(outcome, Outcome::Failed);
        assert_eq!(h.dialogs.shown()[0].text, "field required");
    }

    #[tokio::test]
    async fn test_missing_report_switches_to_search_tab() {
        let h = Harness::form();
        h.state
            .borrow_mut()
            .router
            .select_missing_tab(MissingTab::ReportMissing);
        h.transport
            .push_json(200, json!({"message": "ok"}))
            .push_json(200, json!({"missing_persons": [{"name": "Meera"}], "count": 1}));

        let form = MissingForm {
            name: "Meera".into(),
            age: " 34 ".into(),
            ..Default::default()
        };
        assert_eq!(h.flows().report_missing(form).await, Outcome::Completed);
        assert_eq!(h.transport.requests()[0].form_text("age"), Some("34"));

        assert_eq!(h.transport.requests()[0].form_text("user_id"), Some("anonymous"));
        let state = h.state.borrow();
        assert_eq!(state.router.missing_tab(), MissingTab::SearchRegistry);
        assert_eq!(state.missing_persons.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_report_with_unreadable_age_is_blocked() {
        let h = Harness::form();
        h.state
            .borrow_mut()
            .router
            .select_missing_tab(MissingTab::ReportMissing);

        let form = MissingForm {
            name: "Meera".into(),
            age: "4294967296".into(),
            ..Default::default()
        };
        assert_eq!(h.flows().report_missing(form).await, Outcome::Blocked);

        assert_eq!(h.transport.request_count(), 0);
        assert_eq!(h.dialogs.titles(), vec!["Invalid Age"]);
        assert_eq!(
            h.state.borrow().router.missing_tab(),
            MissingTab::ReportMissing
        );
    }

    #[tokio::test]
    async fn test_post_stays_when_backend_fails() {
        let h = Harness::form().signed_in();
        h.transport.push_failure("offline");

        let form = PostForm {
            category: "Food".into(),
            message: "Rice at the school".into(),
            image: None,
        };
        assert_eq!(h.flows().create_post(form).await, Outcome::Failed);

        let state = h.state.borrow();
        assert_eq!(state.community_posts.len(), 3);
        assert_eq!(state.community_posts[0].message, "Rice at the school");
        assert_eq!(state.community_posts[0].user_name.as_deref(), Some("Asha"));
        assert_eq!(h.dialogs.titles(), vec!["Error"]);
    }

    #[tokio::test]
    async fn test_add_family_member_returns_to_missing() {
        let h = Harness::form();
        h.state.borrow_mut().router.show_page(Page::AddFamilyMember);

        assert_eq!(h.flows().add_family_member(" "), Outcome::Blocked);
        assert_eq!(h.state.borrow().router.page(), Page::AddFamilyMember);

        assert_eq!(h.flows().add_family_member("Kavya"), Outcome::Completed);
        let state = h.state.borrow();
        assert_eq!(state.router.page(), Page::Missing);
        assert_eq!(state.family_members[0].name, "Kavya");
        assert_eq!(h.transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_failed_loads_keep_state() {
        let h = Harness::form();
        h.transport.push_json(500, json!({}));

        h.flows().load_community_feed().await;
        assert_eq!(h.state.borrow().community_posts.len(), 2);
        assert!(h.dialogs.shown().is_empty());
    }

    #[tokio::test]
    async fn test_nearby_alerts_use_known_position() {
        let h = Harness::new(ApiSurface::Json);
        h.transport.push_json(200, json!([]));

        h.flows().locate().await;
        h.flows().load_sos_alerts().await;
        assert!(h.transport.urls()[0].starts_with("/sos/nearby?latitude=19.076"));
    }

    #[tokio::test]
    async fn test_unauthorized_during_workflow_clears_session() {
        let h = Harness::new(ApiSurface::Json).signed_in();
        h.backend.client().session().set_token("stale");
        h.transport.push_json(401, json!({"detail": "Token expired"}));

        let outcome = h.flows().report_missing(MissingForm::default()).await;
        assert_eq!(outcome, Outcome::Failed);
        assert!(!h.backend.is_logged_in());
        assert_eq!(h.transport.request_count(), 1);
        assert_eq!(h.dialogs.shown()[0].text, "Token expired");
    }
}
