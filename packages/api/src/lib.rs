//! # API crate — typed client for the DigiRaksha backend
//!
//! Every screen of the web client reaches the backend through this crate. It
//! owns the wire models, the bearer-token session and the two endpoint
//! families the server exposes.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`transport`] | `HttpTransport` seam with a `reqwest` implementation and a scripted test double |
//! | [`client`] | `ApiClient::request`: URL resolution, auth header, status and 401 handling |
//! | [`session`] | Bearer token persisted in a `store::KeyValueStore` |
//! | `auth` | Login, registration, `GET /auth/me`, logout |
//! | [`surface`] | `Backend` facade that routes each operation to the form or JSON endpoints |
//! | [`models`] | SOS alerts, incidents, missing persons, feed entries, users |
//! | [`error`] | `ApiError` taxonomy |
//!
//! ## Typical use
//!
//! ```ignore
//! let backend = Backend::from_config(ReqwestTransport::new(), platform_store(), &config);
//! let user = backend.login("ABCD1234", "secret").await?;
//! let feed = backend.community_feed().await?;
//! ```

mod auth;
pub mod client;
pub mod error;
pub mod models;
pub mod session;
pub mod surface;
pub mod transport;

pub use client::{ApiClient, RequestOptions};
pub use error::ApiError;
pub use models::{
    Attachment, CurrentUser, FeedEntry, Incident, MissingPerson, NewCommunityPost, NewIncident,
    NewMissingPerson, NewSosAlert, Registration, SafeReport, SosAlert, UserSummary,
};
pub use session::Session;
pub use surface::{ApiSurface, Backend};
pub use transport::{HttpTransport, ReqwestTransport, ScriptedTransport, TransportError};
