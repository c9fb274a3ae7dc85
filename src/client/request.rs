//! Authenticated request wrapper
//!
//! Every portal call goes through [`AuthenticatedClient`]. It checks for a
//! session token before touching the network, attaches the bearer header,
//! and classifies the response into a [`RequestOutcome`]. It never retries
//! and never mutates the credential store.

use std::sync::Arc;

use log::{debug, warn};
use reqwest::Method;
use serde_json::Value;

use super::transport::{HttpRequest, HttpResponse, Transport};
use crate::error::{ApiError, StorageError};
use crate::session::{AuthHeader, Session};

/// Message used when the server rejects a request without saying why
pub const GENERIC_REJECTION: &str = "The server rejected the request.";

/// Application-level failure reported by the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub status: u16,
    pub message: String,
}

impl Rejection {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// The server refused the credential itself
    pub fn is_auth_failure(&self) -> bool {
        matches!(self.status, 401 | 403)
    }
}

/// Classified result of one call
#[derive(Debug, Clone, PartialEq)]
pub enum RequestOutcome {
    /// Top-level JSON document, not unwrapped
    Ok(Value),
    ServerRejected(Rejection),
    NetworkFailure(String),
    /// No token was stored; no call was made
    Unauthenticated,
}

impl RequestOutcome {
    /// Map the outcome onto the API error taxonomy
    pub fn into_result(self) -> Result<Value, ApiError> {
        match self {
            RequestOutcome::Ok(payload) => Ok(payload),
            RequestOutcome::ServerRejected(Rejection { status, message }) => {
                Err(ApiError::Rejected { status, message })
            }
            RequestOutcome::NetworkFailure(cause) => Err(ApiError::Network(cause)),
            RequestOutcome::Unauthenticated => Err(ApiError::Unauthenticated),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            RequestOutcome::Ok(_) => "ok",
            RequestOutcome::ServerRejected(_) => "rejected",
            RequestOutcome::NetworkFailure(_) => "network failure",
            RequestOutcome::Unauthenticated => "unauthenticated",
        }
    }
}

/// Classify a raw response
pub(crate) fn classify(response: HttpResponse) -> RequestOutcome {
    let status = response.status;
    let http_fallback = || format!("Request failed with HTTP status {}", status);

    if response.body.trim().is_empty() {
        return if response.is_success() {
            RequestOutcome::Ok(Value::Null)
        } else {
            RequestOutcome::ServerRejected(Rejection::new(status, http_fallback()))
        };
    }

    let payload: Value = match serde_json::from_str(&response.body) {
        Ok(payload) => payload,
        Err(e) if response.is_success() => {
            return RequestOutcome::ServerRejected(Rejection::new(
                status,
                format!("Invalid JSON in server response: {}", e),
            ));
        }
        Err(_) => return RequestOutcome::ServerRejected(Rejection::new(status, http_fallback())),
    };

    if !response.is_success() {
        let message = server_message(&payload).unwrap_or_else(http_fallback);
        return RequestOutcome::ServerRejected(Rejection::new(status, message));
    }

    if payload.get("success") == Some(&Value::Bool(false)) {
        let message = server_message(&payload).unwrap_or_else(|| GENERIC_REJECTION.to_string());
        return RequestOutcome::ServerRejected(Rejection::new(status, message));
    }

    RequestOutcome::Ok(payload)
}

fn server_message(payload: &Value) -> Option<String> {
    payload
        .get("message")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

/// Issues portal calls with the session's bearer token attached
#[derive(Clone)]
pub struct AuthenticatedClient {
    transport: Arc<dyn Transport>,
    session: Session,
    base_url: String,
}

impl AuthenticatedClient {
    pub fn new(transport: Arc<dyn Transport>, session: Session, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            transport,
            session,
            base_url,
        }
    }

    /// Resolve a path against the base URL; absolute URLs pass through
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Authenticated call.
    ///
    /// Returns [`RequestOutcome::Unauthenticated`] without any network
    /// traffic when no usable token is stored. Only a failing credential
    /// store produces an `Err`.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<RequestOutcome, StorageError> {
        let Some(header) = self.session.auth_header()? else {
            debug!("No session token; not sending {} {}", method, path);
            return Ok(RequestOutcome::Unauthenticated);
        };

        Ok(self.dispatch(method, path, body, Some(&header)).await)
    }

    /// Call an endpoint that does not take a token (login, password reset, schedules)
    pub async fn request_public(&self, method: Method, path: &str, body: Option<&Value>) -> RequestOutcome {
        self.dispatch(method, path, body, None).await
    }

    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        auth: Option<&AuthHeader>,
    ) -> RequestOutcome {
        let url = self.url(path);

        let mut headers = vec![("Accept".to_string(), "application/json".to_string())];
        if let Some(auth) = auth {
            let (name, value) = auth.pair();
            headers.push((name.to_string(), value.to_string()));
        }

        let body = match body {
            Some(value) => match serde_json::to_vec(value) {
                Ok(bytes) => {
                    headers.push(("Content-Type".to_string(), "application/json".to_string()));
                    Some(bytes)
                }
                Err(e) => {
                    return RequestOutcome::NetworkFailure(format!(
                        "Failed to encode request body: {}",
                        e
                    ));
                }
            },
            None => None,
        };

        debug!("{} {}", method, url);
        let request = HttpRequest {
            method: method.clone(),
            url: url.clone(),
            headers,
            body,
        };

        let outcome = match self.transport.send(request).await {
            Ok(response) => classify(response),
            Err(e) => {
                warn!("{} {} failed: {}", method, url, e);
                RequestOutcome::NetworkFailure(e.to_string())
            }
        };

        debug!("{} {} -> {}", method, url, outcome.kind());
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::MockTransport;
    use crate::session::{CredentialStore, MemoryCredentialStore, Token};
    use serde_json::json;

    const BASE: &str = "https://portal.test";

    fn client_with(store: Arc<MemoryCredentialStore>, transport: Arc<MockTransport>) -> AuthenticatedClient {
        AuthenticatedClient::new(transport, Session::new(store), BASE)
    }

    #[tokio::test]
    async fn test_no_token_returns_unauthenticated_without_network() {
        let store = Arc::new(MemoryCredentialStore::new());
        let transport = Arc::new(MockTransport::new());
        let client = client_with(store, transport.clone());

        let outcome = client.request(Method::GET, "/tareas", None).await.unwrap();

        assert_eq!(outcome, RequestOutcome::Unauthenticated);
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_empty_token_returns_unauthenticated_without_network() {
        let store = Arc::new(MemoryCredentialStore::with_token(""));
        let transport = Arc::new(MockTransport::new());
        let client = client_with(store, transport.clone());

        let outcome = client
            .request(Method::POST, "/crear_solicitud", Some(&json!({"tipo": "beca"})))
            .await
            .unwrap();

        assert_eq!(outcome, RequestOutcome::Unauthenticated);
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_success_false_is_server_rejected() {
        let store = Arc::new(MemoryCredentialStore::with_token("abc123"));
        let transport = Arc::new(MockTransport::new().with_json(200, json!({"success": false, "message": "bad"})));
        let client = client_with(store, transport);

        let outcome = client.request(Method::GET, "/noticias", None).await.unwrap();

        assert_eq!(outcome, RequestOutcome::ServerRejected(Rejection::new(200, "bad")));
    }

    #[tokio::test]
    async fn test_success_false_without_message_uses_fallback() {
        let store = Arc::new(MemoryCredentialStore::with_token("abc123"));
        let transport = Arc::new(MockTransport::new().with_json(200, json!({"success": false})));
        let client = client_with(store, transport);

        let outcome = client.request(Method::GET, "/noticias", None).await.unwrap();

        match outcome {
            RequestOutcome::ServerRejected(rejection) => assert_eq!(rejection.message, GENERIC_REJECTION),
            other => panic!("Expected ServerRejected, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_network_failure_leaves_store_untouched() {
        let store = Arc::new(MemoryCredentialStore::with_token("abc123"));
        let transport = Arc::new(MockTransport::new().with_failure("connection reset by peer"));
        let client = client_with(store.clone(), transport.clone());

        let outcome = client.request(Method::GET, "/deudas", None).await.unwrap();

        assert_eq!(
            outcome,
            RequestOutcome::NetworkFailure("connection reset by peer".to_string())
        );
        assert_eq!(transport.call_count(), 1);
        assert_eq!(store.load().unwrap(), Some(Token::new("abc123")));
    }

    #[tokio::test]
    async fn test_profile_round_trip_keeps_token() {
        let store = Arc::new(MemoryCredentialStore::new());
        store.save(&Token::new("abc123")).unwrap();
        let body = json!({"success": true, "data": {"username": "x"}});
        let transport = Arc::new(MockTransport::new().with_json(200, body.clone()));
        let client = client_with(store.clone(), transport.clone());

        let outcome = client.request(Method::GET, "/profile", None).await.unwrap();

        assert_eq!(outcome, RequestOutcome::Ok(body));
        let data: Value = crate::client::Shape::Enveloped
            .decode(outcome.into_result().unwrap())
            .unwrap();
        assert_eq!(data, json!({"username": "x"}));
        assert_eq!(store.load().unwrap(), Some(Token::new("abc123")));

        let sent = transport.captured_requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].url, "https://portal.test/profile");
        assert_eq!(sent[0].header("Authorization"), Some("Bearer abc123"));
        assert_eq!(sent[0].header("Content-Type"), None);
    }

    #[tokio::test]
    async fn test_json_body_sets_content_type() {
        let store = Arc::new(MemoryCredentialStore::with_token("abc123"));
        let transport = Arc::new(MockTransport::new().with_json(200, json!({"success": true})));
        let client = client_with(store, transport.clone());

        client
            .request(Method::POST, "/preseleccionar_materia", Some(&json!("MAT-101")))
            .await
            .unwrap();

        let sent = transport.captured_requests();
        assert_eq!(sent[0].method, Method::POST);
        assert_eq!(sent[0].header("content-type"), Some("application/json"));
        assert_eq!(sent[0].body.as_deref(), Some(br#""MAT-101""#.as_slice()));
    }

    #[tokio::test]
    async fn test_public_request_sends_no_authorization() {
        let store = Arc::new(MemoryCredentialStore::with_token("abc123"));
        let transport = Arc::new(MockTransport::new().with_json(200, json!([])));
        let client = client_with(store, transport.clone());

        let outcome = client.request_public(Method::GET, "/horarios", None).await;

        assert_eq!(outcome, RequestOutcome::Ok(json!([])));
        assert_eq!(transport.captured_requests()[0].header("Authorization"), None);
    }

    #[tokio::test]
    async fn test_bare_array_passes_through() {
        let store = Arc::new(MemoryCredentialStore::with_token("abc123"));
        let payload = json!([{"id": 1, "titulo": "Tarea"}]);
        let transport = Arc::new(MockTransport::new().with_json(200, payload.clone()));
        let client = client_with(store, transport);

        let outcome = client.request(Method::GET, "/tareas", None).await.unwrap();

        assert_eq!(outcome, RequestOutcome::Ok(payload));
    }

    #[test]
    fn test_classify_http_error_with_message() {
        let outcome = classify(HttpResponse::new(401, r#"{"message":"Token expirado"}"#));
        let RequestOutcome::ServerRejected(rejection) = outcome else {
            panic!("Expected ServerRejected");
        };
        assert_eq!(rejection.status, 401);
        assert_eq!(rejection.message, "Token expirado");
        assert!(rejection.is_auth_failure());
    }

    #[test]
    fn test_classify_http_error_without_json() {
        let outcome = classify(HttpResponse::new(502, "<html>Bad Gateway</html>"));
        assert_eq!(
            outcome,
            RequestOutcome::ServerRejected(Rejection::new(502, "Request failed with HTTP status 502"))
        );
    }

    #[test]
    fn test_classify_empty_success_body_is_null() {
        assert_eq!(classify(HttpResponse::new(204, "")), RequestOutcome::Ok(Value::Null));
    }

    #[test]
    fn test_classify_invalid_json_success_body() {
        let outcome = classify(HttpResponse::new(200, "not json"));
        let RequestOutcome::ServerRejected(rejection) = outcome else {
            panic!("Expected ServerRejected");
        };
        assert!(rejection.message.starts_with("Invalid JSON"));
        assert!(!rejection.is_auth_failure());
    }

    #[test]
    fn test_into_result_mapping() {
        assert!(matches!(
            RequestOutcome::Unauthenticated.into_result(),
            Err(ApiError::Unauthenticated)
        ));
        assert!(matches!(
            RequestOutcome::NetworkFailure("dns".into()).into_result(),
            Err(ApiError::Network(_))
        ));
        assert!(matches!(
            RequestOutcome::ServerRejected(Rejection::new(200, "bad")).into_result(),
            Err(ApiError::Rejected { status: 200, .. })
        ));
        assert_eq!(
            RequestOutcome::Ok(json!({"a": 1})).into_result().unwrap(),
            json!({"a": 1})
        );
    }

    #[test]
    fn test_url_resolution() {
        let client = AuthenticatedClient::new(
            Arc::new(MockTransport::new()),
            Session::new(Arc::new(MemoryCredentialStore::new())),
            "https://portal.test/",
        );

        assert_eq!(client.url("/tareas"), "https://portal.test/tareas");
        assert_eq!(client.url("tareas"), "https://portal.test/tareas");
        assert_eq!(client.url("http://other.test/x"), "http://other.test/x");
    }
}
