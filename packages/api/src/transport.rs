//! # HTTP transport seam
//!
//! [`ApiClient`](crate::ApiClient) never talks to the network directly. It
//! builds an [`ApiRequest`] and hands it to an [`HttpTransport`], getting back
//! the raw status and body. Status interpretation, header injection and JSON
//! decoding all happen in the client, so they behave the same against every
//! transport.
//!
//! | Transport | Used by |
//! |-----------|---------|
//! | [`ReqwestTransport`] | The app. `reqwest` maps onto `fetch` in the browser. |
//! | [`ScriptedTransport`] | Tests. Replays queued responses and records every request. |

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use thiserror::Error;

use crate::models::Attachment;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A single multipart field.
#[derive(Clone, Debug, PartialEq)]
pub enum FormField {
    Text { name: String, value: String },
    File { name: String, attachment: Attachment },
}

impl FormField {
    pub fn text(name: &str, value: impl ToString) -> Self {
        FormField::Text {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    pub fn file(name: &str, attachment: Attachment) -> Self {
        FormField::File {
            name: name.to_string(),
            attachment,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            FormField::Text { name, .. } | FormField::File { name, .. } => name,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Form(Vec<FormField>),
}

/// A fully resolved request: absolute URL, final headers, encoded body.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl ApiRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Text value of a multipart field, if this is a form request.
    pub fn form_text(&self, name: &str) -> Option<&str> {
        let RequestBody::Form(fields) = &self.body else {
            return None;
        };
        fields.iter().find_map(|field| match field {
            FormField::Text { name: n, value } if n == name => Some(value.as_str()),
            _ => None,
        })
    }

    /// Whether a multipart file part with this name is present.
    pub fn has_form_file(&self, name: &str) -> bool {
        matches!(&self.body, RequestBody::Form(fields)
            if fields.iter().any(|f| matches!(f, FormField::File { name: n, .. } if n == name)))
    }

    pub fn json_body(&self) -> Option<&serde_json::Value> {
        match &self.body {
            RequestBody::Json(value) => Some(value),
            _ => None,
        }
    }
}

/// Status and undecoded body of a completed exchange.
#[derive(Clone, Debug, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn json(status: u16, value: &serde_json::Value) -> Self {
        Self::new(status, value.to_string())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request did not complete.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Async request executor.
pub trait HttpTransport {
    fn send(
        &self,
        request: ApiRequest,
    ) -> impl std::future::Future<Output = Result<RawResponse, TransportError>>;
}

/// `reqwest`-backed transport.
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Form(fields) => builder.multipart(multipart_form(fields)?),
        };

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        Ok(RawResponse::new(status, body.to_vec()))
    }
}

fn multipart_form(fields: Vec<FormField>) -> Result<reqwest::multipart::Form, TransportError> {
    use reqwest::multipart::{Form, Part};

    let mut form = Form::new();
    for field in fields {
        form = match field {
            FormField::Text { name, value } => form.text(name, value),
            FormField::File { name, attachment } => {
                let mut part = Part::bytes(attachment.bytes).file_name(attachment.file_name);
                if let Some(content_type) = attachment.content_type {
                    part = part
                        .mime_str(&content_type)
                        .map_err(|e| TransportError(e.to_string()))?;
                }
                form.part(name, part)
            }
        };
    }
    Ok(form)
}

/// Test transport that answers from a queue of canned responses.
///
/// Clones share the queue and the request log. When the queue runs dry the
/// request fails as a transport error, which makes an unexpected extra call
/// show up in assertions.
#[derive(Clone, Debug, Default)]
pub struct ScriptedTransport {
    responses: Arc<Mutex<VecDeque<Result<RawResponse, TransportError>>>>,
    requests: Arc<Mutex<Vec<ApiRequest>>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a JSON response.
    pub fn push_json(&self, status: u16, value: serde_json::Value) -> &Self {
        self.push(Ok(RawResponse::json(status, &value)))
    }

    /// Queue a response with an arbitrary body.
    pub fn push_raw(&self, status: u16, body: &str) -> &Self {
        self.push(Ok(RawResponse::new(status, body)))
    }

    /// Queue a transport failure.
    pub fn push_failure(&self, message: &str) -> &Self {
        self.push(Err(TransportError(message.to_string())))
    }

    fn push(&self, response: Result<RawResponse, TransportError>) -> &Self {
        if let Ok(mut queue) = self.responses.lock() {
            queue.push_back(response);
        }
        self
    }

    /// Every request sent so far, oldest first.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or_default()
    }

    /// URLs of every request sent so far.
    pub fn urls(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.url).collect()
    }
}

impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
        let url = request.url.clone();
        if let Ok(mut log) = self.requests.lock() {
            log.push(request);
        }
        self.responses
            .lock()
            .ok()
            .and_then(|mut queue| queue.pop_front())
            .unwrap_or_else(|| Err(TransportError(format!("no scripted response for {url}"))))
    }
}
