//! Wire models exchanged with the backend.
//!
//! Records coming back from the server are decoded leniently: identifiers may
//! arrive as strings or numbers, and any field the UI can live without is an
//! `Option`. Outgoing payloads (`New*`) are plain structs; each surface decides
//! whether they travel as JSON or multipart form fields.

mod community;
mod incident;
mod missing;
mod sos;
mod user;

pub use community::{FeedEntry, NewCommunityPost, INCIDENT_POST_TYPE};
pub use incident::{Incident, NewIncident};
pub use missing::{MissingPerson, NewMissingPerson};
pub use sos::{NewSosAlert, SafeReport, SosAlert};
pub use user::{CurrentUser, LoginResponse, RegisterResponse, Registration, UserSummary};

use serde::{Deserialize, Deserializer};

/// A file picked by the user, ready to upload as a multipart part.
#[derive(Clone, Debug, PartialEq)]
pub struct Attachment {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl Attachment {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: None,
            bytes,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Int(i64),
    Float(f64),
}

impl From<StringOrNumber> for String {
    fn from(value: StringOrNumber) -> Self {
        match value {
            StringOrNumber::String(s) => s,
            StringOrNumber::Int(n) => n.to_string(),
            StringOrNumber::Float(n) => n.to_string(),
        }
    }
}

/// Accept `"42"` or `42` for an identifier-like field.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    StringOrNumber::deserialize(deserializer).map(String::from)
}

/// Optional variant of [`string_or_number`]; `null` and absent both map to `None`.
pub(crate) fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<StringOrNumber>::deserialize(deserializer).map(|v| v.map(String::from))
}
