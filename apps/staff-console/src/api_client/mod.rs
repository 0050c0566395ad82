//! API client: the single point of entry for every call to the staff REST API.
//!
//! All endpoint wrappers in `endpoints` go through [`ApiClient::request`]; no
//! other module builds HTTP requests. The wire itself sits behind the
//! [`Transport`] trait so tests can swap in a recording mock.
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::session::SessionStore;

pub mod endpoints;
pub mod legacy;
#[cfg(test)]
pub mod mock;
pub mod transport;

pub use transport::ReqwestTransport;

/// Message used when a failed response carries no usable `message` field.
pub const FALLBACK_ERROR_MESSAGE: &str = "Request failed";

// ────────────────────────────────────────────────────────────────────────────
// Request descriptor
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
        }
    }
}

/// Whether the caller's bearer token must be attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Auth {
    #[default]
    Anonymous,
    Required,
}

/// One API call: relative path, method, optional JSON body, auth requirement.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RequestDescriptor {
    pub path: String,
    pub method: Method,
    pub body: Option<Value>,
    pub auth: Auth,
}

impl RequestDescriptor {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            path: path.into(),
            method: Method::Post,
            body: Some(body),
            auth: Auth::Anonymous,
        }
    }

    pub fn put(path: impl Into<String>, body: Value) -> Self {
        Self {
            path: path.into(),
            method: Method::Put,
            body: Some(body),
            auth: Auth::Anonymous,
        }
    }

    pub fn authenticated(mut self) -> Self {
        self.auth = Auth::Required;
        self
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Transport seam
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Bytes,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The connection itself failed; no HTTP status was received.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Errors
// ────────────────────────────────────────────────────────────────────────────

/// Every failed call collapses into one of these, each carrying a message fit
/// to show the user next to the action that triggered it.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Transport(String),

    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("Unexpected response from server: {0}")]
    Decode(String),

    #[error("Could not encode request body: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn message(&self) -> &str {
        match self {
            ApiError::Transport(msg) | ApiError::Decode(msg) | ApiError::Encode(msg) => msg,
            ApiError::Rejected { message, .. } => message,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<TransportError> for ApiError {
    fn from(e: TransportError) -> Self {
        ApiError::Transport(e.0)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Client
// ────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Arc<dyn Transport>,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        transport: Arc<dyn Transport>,
        session: SessionStore,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Sends `descriptor` and decodes a successful body as `T`.
    ///
    /// The body is always parsed as JSON; an unparsable body reads as `{}`.
    /// A non-2xx status fails with the body's `message` field, or
    /// [`FALLBACK_ERROR_MESSAGE`] when there is none.
    pub async fn request<T: DeserializeOwned>(
        &self,
        descriptor: RequestDescriptor,
    ) -> Result<T, ApiError> {
        let method = descriptor.method;
        let path = descriptor.path.clone();

        let request = self.build_request(descriptor)?;
        let response = self.dispatch(request).await?;
        let json = parse_body(&response.body);

        if !response.is_success() {
            let err = rejection(response.status, &json);
            warn!(
                "{} {} failed with status {}: {}",
                method.as_str(),
                path,
                response.status,
                err.message()
            );
            return Err(err);
        }

        serde_json::from_value(json).map_err(|e| {
            warn!("{} {} returned an unexpected shape: {e}", method.as_str(), path);
            ApiError::Decode(e.to_string())
        })
    }

    /// GETs an absolute URL and returns the raw body, for binary downloads.
    /// Failures are normalized exactly like [`ApiClient::request`].
    pub async fn fetch_bytes(&self, url: &str) -> Result<Bytes, ApiError> {
        let request = HttpRequest {
            method: Method::Get,
            url: url.to_string(),
            headers: Vec::new(),
            body: None,
        };

        let response = self.dispatch(request).await?;
        if !response.is_success() {
            let err = rejection(response.status, &parse_body(&response.body));
            warn!("Download failed with status {}: {}", response.status, err.message());
            return Err(err);
        }
        Ok(response.body)
    }

    fn build_request(&self, descriptor: RequestDescriptor) -> Result<HttpRequest, ApiError> {
        let mut headers = Vec::new();

        if descriptor.auth == Auth::Required {
            match self.session.token() {
                Some(token) => {
                    headers.push(("Authorization".to_string(), format!("Bearer {token}")))
                }
                None => debug!("No session token for authenticated call to {}", descriptor.path),
            }
        }

        let body = match descriptor.body {
            Some(value) => {
                headers.push(("Content-Type".to_string(), "application/json".to_string()));
                Some(serde_json::to_vec(&value).map_err(|e| ApiError::Encode(e.to_string()))?)
            }
            None => None,
        };

        Ok(HttpRequest {
            method: descriptor.method,
            url: format!("{}{}", self.base_url, descriptor.path),
            headers,
            body,
        })
    }

    async fn dispatch(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!("{} {}", request.method.as_str(), redact_query(&request.url));
        self.transport.send(request).await.map_err(|e| {
            warn!("Transport failure: {e}");
            ApiError::from(e)
        })
    }
}

fn parse_body(body: &[u8]) -> Value {
    serde_json::from_slice(body).unwrap_or_else(|_| Value::Object(serde_json::Map::new()))
}

fn rejection(status: u16, json: &Value) -> ApiError {
    let message = json
        .get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .unwrap_or(FALLBACK_ERROR_MESSAGE)
        .to_string();
    ApiError::Rejected { status, message }
}

/// Serializes a typed payload into the JSON body of a [`RequestDescriptor`].
pub fn to_body<T: Serialize>(payload: &T) -> Result<Value, ApiError> {
    serde_json::to_value(payload).map_err(|e| ApiError::Encode(e.to_string()))
}

/// Drops the query string so credentials passed as parameters never reach the logs.
fn redact_query(url: &str) -> &str {
    url.split_once('?').map(|(base, _)| base).unwrap_or(url)
}

#[cfg(test)]
mod tests {
    use super::mock::MockTransport;
    use super::*;
    use crate::models::{AuthUser, Session};
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct IdOnly {
        id: i64,
    }

    fn client(transport: Arc<MockTransport>, session: SessionStore) -> ApiClient {
        ApiClient::new("http://localhost:5000/api", transport, session)
    }

    fn signed_in(token: &str) -> SessionStore {
        let store = SessionStore::in_memory();
        store
            .save(&Session {
                token: token.to_string(),
                user: AuthUser {
                    id: 1,
                    email: "a@b.test".to_string(),
                    full_name: "A B".to_string(),
                },
            })
            .unwrap();
        store
    }

    #[tokio::test]
    async fn test_success_returns_parsed_body() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(200, json!({"id": 1}));
        let api = client(transport.clone(), SessionStore::in_memory());

        let result: IdOnly = api.request(RequestDescriptor::get("/thing")).await.unwrap();
        assert_eq!(result, IdOnly { id: 1 });
    }

    #[tokio::test]
    async fn test_error_uses_message_field() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(401, json!({"message": "invalid token"}));
        let api = client(transport, SessionStore::in_memory());

        let err = api
            .request::<Value>(RequestDescriptor::get("/staff/me").authenticated())
            .await
            .unwrap_err();
        assert_eq!(err.message(), "invalid token");
        assert_eq!(err.status(), Some(401));
    }

    #[tokio::test]
    async fn test_error_with_unparsable_body_uses_fallback() {
        let transport = Arc::new(MockTransport::new());
        transport.push_raw(500, "<html>Internal Server Error</html>");
        let api = client(transport, SessionStore::in_memory());

        let err = api
            .request::<Value>(RequestDescriptor::get("/staff/vacancies"))
            .await
            .unwrap_err();
        assert_eq!(err.message(), "Request failed");
    }

    #[tokio::test]
    async fn test_error_with_empty_message_uses_fallback() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(400, json!({"message": ""}));
        let api = client(transport, SessionStore::in_memory());

        let err = api
            .request::<Value>(RequestDescriptor::get("/x"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Request failed");
    }

    #[tokio::test]
    async fn test_success_with_unparsable_body_reads_as_empty_object() {
        let transport = Arc::new(MockTransport::new());
        transport.push_raw(200, "");
        let api = client(transport, SessionStore::in_memory());

        let value: Value = api.request(RequestDescriptor::get("/x")).await.unwrap();
        assert_eq!(value, json!({}));
    }

    #[tokio::test]
    async fn test_success_with_wrong_shape_is_decode_error() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(200, json!({"name": "no id"}));
        let api = client(transport, SessionStore::in_memory());

        let err = api
            .request::<IdOnly>(RequestDescriptor::get("/x"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_transport_failure_surfaces_as_api_error() {
        let transport = Arc::new(MockTransport::new());
        transport.push_transport_error("connection refused");
        let api = client(transport, SessionStore::in_memory());

        let err = api
            .request::<Value>(RequestDescriptor::get("/x"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
        assert_eq!(err.message(), "connection refused");
    }

    #[tokio::test]
    async fn test_url_is_base_plus_path() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(200, json!([]));
        let api = client(transport.clone(), SessionStore::in_memory());

        let _: Value = api
            .request(RequestDescriptor::get("/staff/applications"))
            .await
            .unwrap();
        assert_eq!(
            transport.last_request().url,
            "http://localhost:5000/api/staff/applications"
        );
    }

    #[tokio::test]
    async fn test_bearer_attached_only_when_required() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(200, json!({}));
        transport.push_json(200, json!({}));
        let api = client(transport.clone(), signed_in("tok-9"));

        let _: Value = api
            .request(RequestDescriptor::get("/staff/me").authenticated())
            .await
            .unwrap();
        assert_eq!(
            transport.last_request().header("authorization"),
            Some("Bearer tok-9")
        );

        let _: Value = api.request(RequestDescriptor::get("/public")).await.unwrap();
        assert_eq!(transport.last_request().header("authorization"), None);
    }

    #[tokio::test]
    async fn test_required_auth_without_session_sends_no_header() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(401, json!({"message": "Unauthorized"}));
        let api = client(transport.clone(), SessionStore::in_memory());

        let err = api
            .request::<Value>(RequestDescriptor::get("/staff/me").authenticated())
            .await
            .unwrap_err();
        assert_eq!(err.message(), "Unauthorized");
        assert_eq!(transport.last_request().header("authorization"), None);
    }

    #[tokio::test]
    async fn test_body_is_json_with_content_type() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(200, json!({"id": 5}));
        let api = client(transport.clone(), SessionStore::in_memory());

        let _: IdOnly = api
            .request(RequestDescriptor::put("/staff/vacancies/5", json!({"job_title": "X"})))
            .await
            .unwrap();

        let sent = transport.last_request();
        assert_eq!(sent.method, Method::Put);
        assert_eq!(sent.header("content-type"), Some("application/json"));
        let body: Value = serde_json::from_slice(sent.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({"job_title": "X"}));
    }

    #[tokio::test]
    async fn test_get_without_body_has_no_content_type() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(200, json!({}));
        let api = client(transport.clone(), SessionStore::in_memory());

        let _: Value = api.request(RequestDescriptor::get("/x")).await.unwrap();
        let sent = transport.last_request();
        assert_eq!(sent.header("content-type"), None);
        assert!(sent.body.is_none());
    }

    #[tokio::test]
    async fn test_fetch_bytes_returns_raw_body_and_normalizes_errors() {
        let transport = Arc::new(MockTransport::new());
        transport.push_raw(200, "%PDF-1.7");
        transport.push_json(403, json!({"message": "Forbidden"}));
        let api = client(transport.clone(), SessionStore::in_memory());

        let bytes = api.fetch_bytes("http://h/report.pdf?token=t").await.unwrap();
        assert_eq!(&bytes[..], b"%PDF-1.7");

        let err = api.fetch_bytes("http://h/report.pdf?token=t").await.unwrap_err();
        assert_eq!(err.message(), "Forbidden");
    }

    #[test]
    fn test_redact_query_drops_parameters() {
        assert_eq!(redact_query("http://h/a.pdf?token=secret"), "http://h/a.pdf");
        assert_eq!(redact_query("http://h/a"), "http://h/a");
    }
}
