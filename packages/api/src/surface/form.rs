//! Multipart `/api/...` endpoints.
//!
//! Every write is a multipart form carrying the acting user's id explicitly,
//! and every listing is wrapped in an envelope object (`{"alerts": [...]}`).

use serde::Deserialize;
use store::KeyValueStore;

use crate::client::{ApiClient, RequestOptions};
use crate::error::ApiError;
use crate::models::{
    FeedEntry, Incident, MissingPerson, NewCommunityPost, NewIncident, NewMissingPerson,
    NewSosAlert, SafeReport, SosAlert, UserSummary,
};
use crate::transport::{FormField, HttpTransport};

#[derive(Deserialize)]
struct Users {
    #[serde(default)]
    users: Vec<UserSummary>,
}

#[derive(Deserialize)]
struct Alerts {
    #[serde(default)]
    alerts: Vec<SosAlert>,
}

#[derive(Deserialize)]
struct Incidents {
    #[serde(default)]
    incidents: Vec<Incident>,
}

#[derive(Deserialize)]
struct MissingPersons {
    #[serde(default)]
    missing_persons: Vec<MissingPerson>,
}

#[derive(Deserialize)]
struct Posts {
    #[serde(default)]
    posts: Vec<FeedEntry>,
}

pub(crate) async fn list_users<T: HttpTransport, S: KeyValueStore>(
    client: &ApiClient<T, S>,
) -> Result<Vec<UserSummary>, ApiError> {
    let envelope: Users = client.request_as("/api/users", RequestOptions::get()).await?;
    Ok(envelope.users)
}

pub(crate) async fn send_sos<T: HttpTransport, S: KeyValueStore>(
    client: &ApiClient<T, S>,
    alert: &NewSosAlert,
) -> Result<(), ApiError> {
    let fields = vec![
        FormField::text("latitude", alert.latitude),
        FormField::text("longitude", alert.longitude),
        FormField::text("location_description", &alert.location_description),
        FormField::text("emergency_type", &alert.emergency_type),
        FormField::text("user_name", &alert.user_name),
        FormField::text("user_id", &alert.user_id),
    ];
    client
        .request("/api/sos", RequestOptions::post_form(fields))
        .await?;
    Ok(())
}

pub(crate) async fn list_sos<T: HttpTransport, S: KeyValueStore>(
    client: &ApiClient<T, S>,
) -> Result<Vec<SosAlert>, ApiError> {
    let envelope: Alerts = client.request_as("/api/sos", RequestOptions::get()).await?;
    Ok(envelope.alerts)
}

pub(crate) async fn mark_safe<T: HttpTransport, S: KeyValueStore>(
    client: &ApiClient<T, S>,
    report: &SafeReport,
) -> Result<(), ApiError> {
    let fields = vec![
        FormField::text("latitude", report.latitude),
        FormField::text("longitude", report.longitude),
        FormField::text("message", &report.message),
        FormField::text("user_name", &report.user_name),
        FormField::text("user_id", &report.user_id),
    ];
    client
        .request("/api/safe", RequestOptions::post_form(fields))
        .await?;
    Ok(())
}

pub(crate) async fn report_incident<T: HttpTransport, S: KeyValueStore>(
    client: &ApiClient<T, S>,
    incident: &NewIncident,
) -> Result<(), ApiError> {
    let mut fields = vec![
        FormField::text("incident_type", &incident.incident_type),
        FormField::text("description", &incident.description),
        FormField::text("location", &incident.location),
        FormField::text("user_id", &incident.user_id),
    ];
    if let Some(image) = &incident.image {
        fields.push(FormField::file("incident_image", image.clone()));
    }
    client
        .request("/api/incidents", RequestOptions::post_form(fields))
        .await?;
    Ok(())
}

pub(crate) async fn list_incidents<T: HttpTransport, S: KeyValueStore>(
    client: &ApiClient<T, S>,
) -> Result<Vec<Incident>, ApiError> {
    let envelope: Incidents = client
        .request_as("/api/incidents", RequestOptions::get())
        .await?;
    Ok(envelope.incidents)
}

pub(crate) async fn report_missing<T: HttpTransport, S: KeyValueStore>(
    client: &ApiClient<T, S>,
    person: &NewMissingPerson,
) -> Result<(), ApiError> {
    let mut fields = vec![
        FormField::text("name", &person.name),
        FormField::text("age", person.age),
        FormField::text("last_seen_location", &person.last_seen_location),
        FormField::text("description", &person.description),
        FormField::text("reporter_contact", &person.reporter_contact),
        FormField::text("user_id", &person.user_id),
    ];
    if let Some(photo) = &person.photo {
        fields.push(FormField::file("person_photo", photo.clone()));
    }
    client
        .request("/api/missing", RequestOptions::post_form(fields))
        .await?;
    Ok(())
}

pub(crate) async fn list_missing<T: HttpTransport, S: KeyValueStore>(
    client: &ApiClient<T, S>,
) -> Result<Vec<MissingPerson>, ApiError> {
    let envelope: MissingPersons = client
        .request_as("/api/missing", RequestOptions::get())
        .await?;
    Ok(envelope.missing_persons)
}

pub(crate) async fn create_post<T: HttpTransport, S: KeyValueStore>(
    client: &ApiClient<T, S>,
    post: &NewCommunityPost,
) -> Result<(), ApiError> {
    let mut fields = vec![
        FormField::text("category", &post.category),
        FormField::text("message", &post.message),
        FormField::text("location", &post.location),
        FormField::text("user_name", &post.user_name),
        FormField::text("user_id", &post.user_id),
    ];
    if let Some(image) = &post.image {
        fields.push(FormField::file("post_image", image.clone()));
    }
    client
        .request("/api/community", RequestOptions::post_form(fields))
        .await?;
    Ok(())
}

pub(crate) async fn list_posts<T: HttpTransport, S: KeyValueStore>(
    client: &ApiClient<T, S>,
) -> Result<Vec<FeedEntry>, ApiError> {
    let envelope: Posts = client
        .request_as("/api/community", RequestOptions::get())
        .await?;
    Ok(envelope.posts)
}

/// Combined posts + incidents, newest first, as assembled by the server.
///
/// The timestamp query parameter defeats intermediary caches.
pub(crate) async fn community_feed<T: HttpTransport, S: KeyValueStore>(
    client: &ApiClient<T, S>,
) -> Result<Vec<FeedEntry>, ApiError> {
    let endpoint = format!(
        "/api/community/feed?t={}",
        chrono::Utc::now().timestamp_millis()
    );
    let envelope: Posts = client.request_as(&endpoint, RequestOptions::get()).await?;
    Ok(envelope.posts)
}
