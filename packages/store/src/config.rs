//! # Application configuration — `digiraksha.toml`
//!
//! Defines the TOML configuration the web client is built with. The file is
//! embedded at compile time by the `web` crate and parsed once at startup.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = ""        # prefix for every endpoint path (empty = same origin)
//! surface = "form"     # "form" (multipart /api/...) or "json"
//!
//! [ui]
//! default_language = "en"
//! nearby_radius_km = 10
//! placeholder_image = "https://placehold.co/80x80/EFEFEF/333333?text=Person"
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`AppConfig`] | Top-level config with TOML (de)serialisation and the canonical filename. |
//! | [`ApiConfig`] | Where the backend lives and which of its two surfaces to talk to. |
//! | [`UiConfig`] | Startup language, nearby-SOS radius and the image placeholder. |
//!
//! All structs derive `Default` so that a missing or empty config file is
//! equivalent to the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `digiraksha.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Which of the backend's endpoint families the client speaks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiSurface {
    /// Multipart form endpoints under `/api/...`.
    #[default]
    Form,
    /// JSON endpoints (`/auth/login`, `/sos/`, ...) authorised by bearer token.
    Json,
}

/// Backend location.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Prefix prepended to every endpoint path. Empty means same origin.
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub surface: ApiSurface,
}

/// Presentation settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Language code selected on startup.
    #[serde(default = "default_language")]
    pub default_language: String,
    /// Search radius for nearby SOS calls.
    #[serde(default = "default_nearby_radius")]
    pub nearby_radius_km: u32,
    /// Shown in place of a missing or broken photo.
    #[serde(default = "default_placeholder_image")]
    pub placeholder_image: String,
}

fn default_language() -> String {
    "en".to_string()
}

fn default_nearby_radius() -> u32 {
    10
}

fn default_placeholder_image() -> String {
    "https://placehold.co/80x80/EFEFEF/333333?text=Person".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            nearby_radius_km: default_nearby_radius(),
            placeholder_image: default_placeholder_image(),
        }
    }
}

impl AppConfig {
    /// Builder method to point the client at a backend.
    pub fn with_api(mut self, base_url: impl Into<String>, surface: ApiSurface) -> Self {
        self.api = ApiConfig {
            base_url: base_url.into(),
            surface,
        };
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "digiraksha.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Parse from TOML, falling back to defaults when the text is malformed.
    pub fn from_toml_or_default(s: &str) -> Self {
        match Self::from_toml(s) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Invalid {}: {e}; using defaults", Self::filename());
                Self::default()
            }
        }
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api.surface, ApiSurface::Form);
        assert_eq!(config.api.base_url, "");
        assert_eq!(config.ui.default_language, "en");
        assert_eq!(config.ui.nearby_radius_km, 10);
    }

    #[test]
    fn test_partial_sections() {
        let config = AppConfig::from_toml(
            r#"
            [api]
            base_url = "http://localhost:8000/api"
            surface = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.surface, ApiSurface::Json);
        assert_eq!(config.api.base_url, "http://localhost:8000/api");
        assert_eq!(config.ui, UiConfig::default());
    }

    #[test]
    fn test_unknown_surface_is_an_error() {
        assert!(AppConfig::from_toml("[api]\nsurface = \"grpc\"").is_err());
    }

    #[test]
    fn test_malformed_falls_back_to_default() {
        let config = AppConfig::from_toml_or_default("[api\nbase_url = ");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = AppConfig::default().with_api("https://relief.example", ApiSurface::Json);
        let text = config.to_toml().unwrap();
        assert_eq!(AppConfig::from_toml(&text).unwrap(), config);
    }
}
