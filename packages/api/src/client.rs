//! # Generic API client
//!
//! [`ApiClient::request`] is the single choke point for talking to the
//! backend. For every call it:
//!
//! 1. resolves the endpoint against the configured base URL,
//! 2. attaches `Authorization: Bearer <token>` when a token is stored, and
//!    `Content-Type: application/json` unless the body is multipart,
//! 3. sends through the [`HttpTransport`],
//! 4. normalises the outcome into `Ok(serde_json::Value)` or an [`ApiError`].
//!
//! ## Status handling
//!
//! | Outcome | Result |
//! |---------|--------|
//! | transport failure | [`ApiError::Transport`] |
//! | 2xx with JSON body | `Ok(value)` |
//! | 2xx with non-JSON body | [`ApiError::Decode`] |
//! | 401 | token cleared, then [`ApiError::Unauthorized`] (no retry) |
//! | other status | [`ApiError::Status`] with the server's `detail` or `HTTP error! status: N` |

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use store::KeyValueStore;

use crate::error::ApiError;
use crate::session::Session;
use crate::transport::{ApiRequest, FormField, HttpTransport, Method, RequestBody};

/// HTTP method plus body for one call.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestOptions {
    pub method: Method,
    pub body: RequestBody,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self {
            method: Method::Get,
            body: RequestBody::Empty,
        }
    }

    pub fn post_json(payload: &impl Serialize) -> Result<Self, ApiError> {
        let value = serde_json::to_value(payload).map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(Self {
            method: Method::Post,
            body: RequestBody::Json(value),
        })
    }

    pub fn post_form(fields: Vec<FormField>) -> Self {
        Self {
            method: Method::Post,
            body: RequestBody::Form(fields),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ApiClient<T, S> {
    transport: T,
    session: Session<S>,
    base_url: String,
}

impl<T: HttpTransport, S: KeyValueStore> ApiClient<T, S> {
    pub fn new(transport: T, store: S, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            session: Session::new(store),
            base_url: base_url.into(),
        }
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    /// Absolute URL for an endpoint path.
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), endpoint)
    }

    /// Send a request and decode the JSON reply.
    pub async fn request(&self, endpoint: &str, options: RequestOptions) -> Result<Value, ApiError> {
        let mut headers = Vec::new();
        if let Some(auth) = self.session.authorization() {
            headers.push(auth);
        }
        if !matches!(options.body, RequestBody::Form(_)) {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }

        let request = ApiRequest {
            method: options.method,
            url: self.url(endpoint),
            headers,
            body: options.body,
        };

        let response = self.transport.send(request).await.map_err(|e| {
            tracing::error!("API request to {endpoint} failed: {e}");
            ApiError::Transport(e.to_string())
        })?;

        if response.status == 401 {
            tracing::warn!("{endpoint} answered 401, clearing session");
            self.session.clear();
            return Err(ApiError::Unauthorized {
                detail: error_detail(&response.body),
            });
        }

        if !response.is_success() {
            let message = error_detail(&response.body)
                .unwrap_or_else(|| format!("HTTP error! status: {}", response.status));
            tracing::error!("{endpoint} answered {}: {message}", response.status);
            return Err(ApiError::Status {
                status: response.status,
                message,
            });
        }

        serde_json::from_slice(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// [`request`](Self::request) decoded into a concrete type.
    pub async fn request_as<R: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<R, ApiError> {
        let value = self.request(endpoint, options).await?;
        serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Pull a human-readable message out of a `{"detail": ...}` error payload.
///
/// `detail` is either a string or a list of validation errors carrying `msg`.
fn error_detail(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    match value.get("detail")? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::ScriptedTransport;
    use serde_json::json;
    use store::{MemoryStore, TOKEN_KEY};

    fn client() -> (ApiClient<ScriptedTransport, MemoryStore>, ScriptedTransport, MemoryStore) {
        let transport = ScriptedTransport::new();
        let store = MemoryStore::new();
        let client = ApiClient::new(transport.clone(), store.clone(), "http://localhost:8000/api/");
        (client, transport, store)
    }

    #[tokio::test]
    async fn test_success_decodes_json() {
        let (client, transport, _) = client();
        transport.push_json(200, json!({"alerts": [], "count": 0}));

        let value = client.request("/sos/", RequestOptions::get()).await.unwrap();
        assert_eq!(value["count"], json!(0));
        assert_eq!(transport.urls(), vec!["http://localhost:8000/api/sos/"]);
    }

    #[tokio::test]
    async fn test_headers_attached() {
        let (client, transport, store) = client();
        transport.push_json(200, json!({}));
        transport.push_json(200, json!({}));

        client.request("/auth/me", RequestOptions::get()).await.unwrap();
        store.set(TOKEN_KEY, "abc");
        client.request("/auth/me", RequestOptions::get()).await.unwrap();

        let requests = transport.requests();
        assert!(requests[0].header("authorization").is_none());
        assert_eq!(requests[0].header("content-type"), Some("application/json"));
        assert_eq!(requests[1].header("Authorization"), Some("Bearer abc"));
    }

    #[tokio::test]
    async fn test_form_body_has_no_json_content_type() {
        let (client, transport, _) = client();
        transport.push_json(200, json!({"message": "ok"}));

        let options = RequestOptions::post_form(vec![FormField::text("name", "Ravi")]);
        client.request("/missing", options).await.unwrap();

        let request = &transport.requests()[0];
        assert!(request.header("content-type").is_none());
        assert_eq!(request.form_text("name"), Some("Ravi"));
    }

    #[tokio::test]
    async fn test_unauthorized_clears_token_without_retry() {
        let (client, transport, store) = client();
        store.set(TOKEN_KEY, "expired");
        transport.push_json(401, json!({"detail": "Could not validate credentials"}));

        let err = client.request("/sos/", RequestOptions::get()).await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Unauthorized {
                detail: Some("Could not validate credentials".into())
            }
        );
        assert!(store.get(TOKEN_KEY).is_none());
        assert!(!client.session().is_logged_in());
        assert_eq!(transport.request_count(), 1);
    }

    #[tokio::test]
    async fn test_status_error_uses_detail() {
        let (client, transport, _) = client();
        transport.push_json(400, json!({"detail": "User with this government ID already exists"}));

        let err = client
            .request("/auth/register", RequestOptions::get())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "User with this government ID already exists");
        assert_eq!(err.status(), Some(400));
    }

    #[tokio::test]
    async fn test_status_error_joins_validation_messages() {
        let (client, transport, _) = client();
        transport.push_json(
            422,
            json!({"detail": [{"loc": ["body", "age"], "msg": "field required"},
                              {"loc": ["body", "name"], "msg": "field required"}]}),
        );

        let err = client.request("/missing", RequestOptions::get()).await.unwrap_err();
        assert_eq!(err.to_string(), "field required; field required");
    }

    #[tokio::test]
    async fn test_status_error_without_payload_is_generic() {
        let (client, transport, store) = client();
        store.set(TOKEN_KEY, "keep");
        transport.push_raw(500, "<html>Internal Server Error</html>");

        let err = client.request("/sos/", RequestOptions::get()).await.unwrap_err();
        assert_eq!(err.to_string(), "HTTP error! status: 500");
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("keep"));
    }

    #[tokio::test]
    async fn test_transport_failure() {
        let (client, transport, _) = client();
        transport.push_failure("connection refused");

        let err = client.request("/sos/", RequestOptions::get()).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }

    #[tokio::test]
    async fn test_undecodable_success_body() {
        let (client, transport, _) = client();
        transport.push_raw(200, "not json");

        let err = client.request("/sos/", RequestOptions::get()).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_request_as_rejects_wrong_shape() {
        let (client, transport, _) = client();
        transport.push_json(200, json!({"unexpected": true}));

        let err = client
            .request_as::<Vec<String>>("/sos/", RequestOptions::get())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
