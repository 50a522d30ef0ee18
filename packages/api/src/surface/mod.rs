//! # Backend facade over the two API surfaces
//!
//! The backend exposes two endpoint families that overlap in purpose but not
//! in shape: multipart forms under `/api/...`, and JSON endpoints such as
//! `/auth/login` and `/sos/`. [`Backend`] offers one set of operations and
//! routes each call to the surface chosen by [`ApiSurface`].
//!
//! | Operation | Form surface | JSON surface |
//! |-----------|--------------|--------------|
//! | [`login`](Backend::login) | `POST /api/auth/login` (user in reply) | `POST /auth/login` then `GET /auth/me` |
//! | [`register`](Backend::register) | `POST /api/auth/register` | `POST /auth/register` then `GET /auth/me` |
//! | [`list_users`](Backend::list_users) | `GET /api/users` | none (identity comes from the token) |
//! | [`send_sos`](Backend::send_sos) | `POST /api/sos` | `POST /sos/` |
//! | [`list_sos`](Backend::list_sos) | `GET /api/sos` | `GET /sos/` |
//! | [`nearby_sos`](Backend::nearby_sos) | `GET /api/sos` | `GET /sos/nearby` |
//! | [`mark_safe`](Backend::mark_safe) | `POST /api/safe` | `POST /sos/safe` |
//! | [`report_incident`](Backend::report_incident) | `POST /api/incidents` | `POST /incidents/` |
//! | [`list_incidents`](Backend::list_incidents) | `GET /api/incidents` | `GET /incidents/` |
//! | [`report_missing`](Backend::report_missing) | `POST /api/missing` | `POST /missing/` |
//! | [`list_missing`](Backend::list_missing) | `GET /api/missing` | `GET /missing/?search=` |
//! | [`create_post`](Backend::create_post) | `POST /api/community` | `POST /community/` |
//! | [`list_posts`](Backend::list_posts) | `GET /api/community` | `GET /community/?category=` |
//! | [`community_feed`](Backend::community_feed) | `GET /api/community/feed` | posts + incidents merged locally |

mod form;
mod json;

use store::{AppConfig, KeyValueStore};

pub use store::ApiSurface;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{
    CurrentUser, FeedEntry, Incident, MissingPerson, NewCommunityPost, NewIncident,
    NewMissingPerson, NewSosAlert, Registration, SafeReport, SosAlert, UserSummary,
};
use crate::transport::HttpTransport;

#[derive(Clone, Debug)]
pub struct Backend<T, S> {
    client: ApiClient<T, S>,
    surface: ApiSurface,
    nearby_radius_km: u32,
}

impl<T: HttpTransport, S: KeyValueStore> Backend<T, S> {
    pub fn new(client: ApiClient<T, S>, surface: ApiSurface) -> Self {
        Self {
            client,
            surface,
            nearby_radius_km: 10,
        }
    }

    /// Build a backend from the application config.
    pub fn from_config(transport: T, store: S, config: &AppConfig) -> Self {
        let client = ApiClient::new(transport, store, config.api.base_url.clone());
        Self::new(client, config.api.surface).with_nearby_radius(config.ui.nearby_radius_km)
    }

    pub fn with_nearby_radius(mut self, radius_km: u32) -> Self {
        self.nearby_radius_km = radius_km;
        self
    }

    pub fn client(&self) -> &ApiClient<T, S> {
        &self.client
    }

    pub fn surface(&self) -> ApiSurface {
        self.surface
    }

    pub fn is_logged_in(&self) -> bool {
        self.client.is_logged_in()
    }

    pub fn logout(&self) {
        self.client.logout();
    }

    /// Authenticate and return the signed-in user when the surface reveals it.
    pub async fn login(
        &self,
        gov_id_number: &str,
        password: &str,
    ) -> Result<Option<CurrentUser>, ApiError> {
        match self.surface {
            ApiSurface::Form => Ok(self.client.login_form(gov_id_number, password).await?.user),
            ApiSurface::Json => {
                self.client.login(gov_id_number, password).await?;
                match self.client.get_current_user().await {
                    Ok(user) => Ok(Some(user)),
                    // The token is valid, so the login stands without a profile
                    Err(e) => {
                        tracing::warn!("Signed in but /auth/me failed: {e}");
                        Ok(None)
                    }
                }
            }
        }
    }

    /// Create an account and return the new user.
    pub async fn register(&self, registration: &Registration) -> Result<CurrentUser, ApiError> {
        match self.surface {
            ApiSurface::Form => {
                let response = self.client.register_form(registration).await?;
                let id = response.user_id.ok_or_else(|| {
                    ApiError::Decode("registration reply is missing user_id".to_string())
                })?;
                Ok(registration.to_current_user(id))
            }
            ApiSurface::Json => {
                let response = self.client.register(registration).await?;
                match self.client.get_current_user().await {
                    Ok(user) => Ok(user),
                    Err(e) => match response.user_id {
                        Some(id) => {
                            tracing::warn!("Registered but /auth/me failed: {e}");
                            Ok(registration.to_current_user(id))
                        }
                        None => {
                            tracing::warn!("Registered but /auth/me failed, dropping session: {e}");
                            self.client.logout();
                            Err(e)
                        }
                    },
                }
            }
        }
    }

    /// The signed-in user according to the server, when the surface can say.
    pub async fn current_user(&self) -> Result<Option<CurrentUser>, ApiError> {
        match self.surface {
            ApiSurface::Form => Ok(None),
            ApiSurface::Json => self.client.get_current_user().await.map(Some),
        }
    }

    /// Known users. Only the form surface lists them.
    pub async fn list_users(&self) -> Result<Vec<UserSummary>, ApiError> {
        match self.surface {
            ApiSurface::Form => form::list_users(&self.client).await,
            ApiSurface::Json => {
                tracing::debug!("JSON surface has no user listing");
                Ok(Vec::new())
            }
        }
    }

    pub async fn send_sos(&self, alert: &NewSosAlert) -> Result<(), ApiError> {
        match self.surface {
            ApiSurface::Form => form::send_sos(&self.client, alert).await,
            ApiSurface::Json => json::send_sos(&self.client, alert).await.map(|_| ()),
        }
    }

    pub async fn list_sos(&self) -> Result<Vec<SosAlert>, ApiError> {
        match self.surface {
            ApiSurface::Form => form::list_sos(&self.client).await,
            ApiSurface::Json => json::list_sos(&self.client).await,
        }
    }

    /// Alerts within the configured radius. The form surface cannot filter
    /// and returns every alert.
    pub async fn nearby_sos(&self, latitude: f64, longitude: f64) -> Result<Vec<SosAlert>, ApiError> {
        match self.surface {
            ApiSurface::Form => form::list_sos(&self.client).await,
            ApiSurface::Json => {
                json::nearby_sos(&self.client, latitude, longitude, self.nearby_radius_km).await
            }
        }
    }

    pub async fn mark_safe(&self, report: &SafeReport) -> Result<(), ApiError> {
        match self.surface {
            ApiSurface::Form => form::mark_safe(&self.client, report).await,
            ApiSurface::Json => json::mark_safe(&self.client, report).await,
        }
    }

    pub async fn report_incident(&self, incident: &NewIncident) -> Result<(), ApiError> {
        match self.surface {
            ApiSurface::Form => form::report_incident(&self.client, incident).await,
            ApiSurface::Json => json::report_incident(&self.client, incident)
                .await
                .map(|_| ()),
        }
    }

    pub async fn list_incidents(&self) -> Result<Vec<Incident>, ApiError> {
        match self.surface {
            ApiSurface::Form => form::list_incidents(&self.client).await,
            ApiSurface::Json => json::list_incidents(&self.client).await,
        }
    }

    pub async fn report_missing(&self, person: &NewMissingPerson) -> Result<(), ApiError> {
        match self.surface {
            ApiSurface::Form => form::report_missing(&self.client, person).await,
            ApiSurface::Json => json::report_missing(&self.client, person)
                .await
                .map(|_| ()),
        }
    }

    /// Registry entries. Only the JSON surface filters server-side; callers
    /// filter locally either way.
    pub async fn list_missing(&self, search: Option<&str>) -> Result<Vec<MissingPerson>, ApiError> {
        match self.surface {
            ApiSurface::Form => form::list_missing(&self.client).await,
            ApiSurface::Json => json::list_missing(&self.client, search).await,
        }
    }

    pub async fn create_post(&self, post: &NewCommunityPost) -> Result<(), ApiError> {
        match self.surface {
            ApiSurface::Form => form::create_post(&self.client, post).await,
            ApiSurface::Json => json::create_post(&self.client, post).await.map(|_| ()),
        }
    }

    pub async fn list_posts(&self, category: Option<&str>) -> Result<Vec<FeedEntry>, ApiError> {
        match self.surface {
            ApiSurface::Form => form::list_posts(&self.client).await,
            ApiSurface::Json => json::list_posts(&self.client, category).await,
        }
    }

    pub async fn community_feed(&self) -> Result<Vec<FeedEntry>, ApiError> {
        match self.surface {
            ApiSurface::Form => form::community_feed(&self.client).await,
            ApiSurface::Json => json::community_feed(&self.client).await,
        }
    }
}
