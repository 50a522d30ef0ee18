//! JSON endpoints authorised by the bearer token.
//!
//! The server derives the acting user from the token, so no user id travels
//! in the payloads. Listings are bare JSON arrays.

use std::cmp::Reverse;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::json;
use store::KeyValueStore;

use crate::client::{ApiClient, RequestOptions};
use crate::error::ApiError;
use crate::models::{
    FeedEntry, Incident, MissingPerson, NewCommunityPost, NewIncident, NewMissingPerson,
    NewSosAlert, SafeReport, SosAlert,
};
use crate::transport::HttpTransport;

pub(crate) async fn send_sos<T: HttpTransport, S: KeyValueStore>(
    client: &ApiClient<T, S>,
    alert: &NewSosAlert,
) -> Result<SosAlert, ApiError> {
    client
        .request_as("/sos/", RequestOptions::post_json(alert)?)
        .await
}

pub(crate) async fn list_sos<T: HttpTransport, S: KeyValueStore>(
    client: &ApiClient<T, S>,
) -> Result<Vec<SosAlert>, ApiError> {
    client.request_as("/sos/", RequestOptions::get()).await
}

pub(crate) async fn nearby_sos<T: HttpTransport, S: KeyValueStore>(
    client: &ApiClient<T, S>,
    latitude: f64,
    longitude: f64,
    radius_km: u32,
) -> Result<Vec<SosAlert>, ApiError> {
    let endpoint =
        format!("/sos/nearby?latitude={latitude}&longitude={longitude}&radius_km={radius_km}");
    client.request_as(&endpoint, RequestOptions::get()).await
}

pub(crate) async fn mark_safe<T: HttpTransport, S: KeyValueStore>(
    client: &ApiClient<T, S>,
    report: &SafeReport,
) -> Result<(), ApiError> {
    client
        .request("/sos/safe", RequestOptions::post_json(report)?)
        .await?;
    Ok(())
}

pub(crate) async fn report_incident<T: HttpTransport, S: KeyValueStore>(
    client: &ApiClient<T, S>,
    incident: &NewIncident,
) -> Result<Incident, ApiError> {
    let body = json!({
        "incident_type": incident.incident_type,
        "description": incident.description,
        "location": incident.location,
        "photo_url": null,
    });
    client
        .request_as("/incidents/", RequestOptions::post_json(&body)?)
        .await
}

pub(crate) async fn list_incidents<T: HttpTransport, S: KeyValueStore>(
    client: &ApiClient<T, S>,
) -> Result<Vec<Incident>, ApiError> {
    client.request_as("/incidents/", RequestOptions::get()).await
}

pub(crate) async fn report_missing<T: HttpTransport, S: KeyValueStore>(
    client: &ApiClient<T, S>,
    person: &NewMissingPerson,
) -> Result<MissingPerson, ApiError> {
    let body = json!({
        "name": person.name,
        "age": person.age,
        "last_seen_location": person.last_seen_location,
        "description": person.description,
        "reporter_contact": person.reporter_contact,
        "photo_url": null,
    });
    client
        .request_as("/missing/", RequestOptions::post_json(&body)?)
        .await
}

pub(crate) async fn list_missing<T: HttpTransport, S: KeyValueStore>(
    client: &ApiClient<T, S>,
    search: Option<&str>,
) -> Result<Vec<MissingPerson>, ApiError> {
    let endpoint = match search.filter(|s| !s.is_empty()) {
        Some(search) => format!("/missing/?search={}", urlencoding::encode(search)),
        None => "/missing/".to_string(),
    };
    client.request_as(&endpoint, RequestOptions::get()).await
}

pub(crate) async fn create_post<T: HttpTransport, S: KeyValueStore>(
    client: &ApiClient<T, S>,
    post: &NewCommunityPost,
) -> Result<FeedEntry, ApiError> {
    let body = json!({
        "category": post.category,
        "message": post.message,
        "location": post.location,
    });
    client
        .request_as("/community/", RequestOptions::post_json(&body)?)
        .await
}

pub(crate) async fn list_posts<T: HttpTransport, S: KeyValueStore>(
    client: &ApiClient<T, S>,
    category: Option<&str>,
) -> Result<Vec<FeedEntry>, ApiError> {
    let endpoint = match category.filter(|c| !c.is_empty()) {
        Some(category) => format!("/community/?category={}", urlencoding::encode(category)),
        None => "/community/".to_string(),
    };
    client.request_as(&endpoint, RequestOptions::get()).await
}

/// Posts and incidents merged client-side into one feed, newest first.
pub(crate) async fn community_feed<T: HttpTransport, S: KeyValueStore>(
    client: &ApiClient<T, S>,
) -> Result<Vec<FeedEntry>, ApiError> {
    let mut feed = list_posts(client, None).await?;
    for post in &mut feed {
        post.post_type.get_or_insert_with(|| "community".to_string());
    }
    let incidents = list_incidents(client).await?;
    feed.extend(incidents.iter().map(FeedEntry::from_incident));
    feed.sort_by_cached_key(|entry| Reverse(posted_at(entry.created_at.as_deref())));
    Ok(feed)
}

/// Instant of a feed timestamp. Zone-less values are taken as UTC.
/// Missing or unreadable timestamps give `None`, which sorts last.
fn posted_at(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = raw?;
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|ts| ts.and_utc())
}
