//! This crate contains all shared UI for the DigiRaksha client.
//!
//! | Module        | Role                                                        |
//! |---------------|-------------------------------------------------------------|
//! | `state`       | [`AppState`], the single owner of session and feed data     |
//! | `router`      | auth/app containers, pages and sub-tabs                     |
//! | `workflows`   | user actions: SOS, reports, posts, feed loading             |
//! | `dialog`      | modal confirmations and notices behind the [`Prompter`] seam |
//! | `geo`         | one-shot position lookup behind the [`Geolocator`] seam     |
//! | `i18n`        | translation bundles and [`Language`]                        |
//! | `render`      | pure view-models for cards, rows and the location panel     |
//! | `views`       | Dioxus components                                           |

pub mod attachment;
pub mod dialog;
pub mod geo;
pub mod i18n;
pub mod render;
pub mod router;
pub mod state;
pub mod views;
pub mod workflows;

mod navbar;
pub use navbar::Navbar;

mod provider;
pub use provider::{
    use_app, use_app_state, use_language, AppBackend, AppContext, AppProvider, AppWorkflows,
};

pub use dialog::{Dialog, DialogHost, DialogOutcome, Prompter};
pub use geo::{BrowserGeolocator, FixedGeolocator, GeoError, Geolocator, Position};
pub use i18n::Language;
pub use router::{Container, Page, ViewRouter};
pub use state::{AppState, StateCell};
pub use views::AppShell;
pub use workflows::{Outcome, Workflows};

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}
