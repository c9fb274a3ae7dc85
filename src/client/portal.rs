//! UASD portal API client
//!
//! Typed endpoint methods on top of [`AuthenticatedClient`]. Each method
//! names its path and response [`Shape`]; outcome classification and the
//! bearer header are handled by the wrapper.

use async_trait::async_trait;
use log::debug;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::de::IgnoredAny;
use serde_json::{Value, json};

use super::envelope::Shape;
use super::models::{
    Debt, Event, LoginData, LoginRequest, NewRequest, NewsItem, PasswordResetRequest, Schedule,
    StudentRequest, Subject, Task, UserInfo, Video,
};
use super::request::{AuthenticatedClient, RequestOutcome};
use crate::error::Result;
use crate::session::{RedirectPolicy, Token};

/// Default portal API base URL
pub const API_BASE_URL: &str = "https://uasdapi.ia3x.com";

/// Portal operations, one per screen action
#[async_trait]
pub trait PortalApi: Send + Sync {
    /// Exchange credentials for a bearer token
    async fn login(&self, username: &str, password: &str) -> Result<Token>;

    /// Ask the portal to email a password reset link; returns the server's message
    async fn reset_password(&self, username: &str, email: &str) -> Result<Option<String>>;

    async fn user_info(&self) -> Result<UserInfo>;

    async fn news(&self) -> Result<Vec<NewsItem>>;

    async fn tasks(&self) -> Result<Vec<Task>>;

    async fn available_subjects(&self) -> Result<Vec<Subject>>;

    async fn preselected_subjects(&self) -> Result<Vec<Subject>>;

    async fn preselect_subject(&self, code: &str) -> Result<Option<String>>;

    async fn cancel_preselection(&self, code: &str) -> Result<Option<String>>;

    async fn my_requests(&self) -> Result<Vec<StudentRequest>>;

    async fn create_request(&self, request: &NewRequest) -> Result<Option<String>>;

    async fn cancel_request(&self, id: i64) -> Result<Option<String>>;

    /// Class schedules; this endpoint does not take a token
    async fn schedules(&self) -> Result<Vec<Schedule>>;

    async fn debts(&self) -> Result<Vec<Debt>>;

    async fn events(&self) -> Result<Vec<Event>>;

    async fn videos(&self) -> Result<Vec<Video>>;
}

/// Portal client over HTTP
#[derive(Clone)]
pub struct PortalClient {
    http: AuthenticatedClient,
    redirect: Option<RedirectPolicy>,
}

impl PortalClient {
    pub fn new(http: AuthenticatedClient) -> Self {
        Self {
            http,
            redirect: None,
        }
    }

    /// End the session through `policy` whenever a token-protected call
    /// comes back unauthenticated
    pub fn with_redirect(mut self, policy: RedirectPolicy) -> Self {
        self.redirect = Some(policy);
        self
    }

    /// Token-protected call, handing auth failures to the redirect policy
    async fn protected(&self, method: Method, path: &str, body: Option<&Value>) -> Result<Value> {
        let outcome = self.http.request(method, path, body).await?;
        self.redirect_if_needed(&outcome);
        Ok(outcome.into_result()?)
    }

    fn redirect_if_needed(&self, outcome: &RequestOutcome) {
        let Some(ref policy) = self.redirect else {
            return;
        };
        if RedirectPolicy::should_redirect(outcome) {
            // Report the request failure, not the cleanup one.
            if let Err(e) = policy.handle_unauthenticated() {
                debug!("Session cleanup failed: {}", e);
            }
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, shape: Shape) -> Result<T> {
        let payload = self.protected(Method::GET, path, None).await?;
        Ok(shape.decode(payload)?)
    }

    /// POST to an enveloped action endpoint; returns the server's message
    async fn post_action(&self, path: &str, body: &Value) -> Result<Option<String>> {
        let payload = self.protected(Method::POST, path, Some(body)).await?;
        Ok(acknowledge(payload)?)
    }
}

/// Check an action envelope for `success: true` and pull out its message
fn acknowledge(payload: Value) -> std::result::Result<Option<String>, crate::error::ApiError> {
    let message = payload
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string);
    Shape::Enveloped.decode::<IgnoredAny>(payload)?;
    Ok(message)
}

#[async_trait]
impl PortalApi for PortalClient {
    async fn login(&self, username: &str, password: &str) -> Result<Token> {
        let body = serde_json::to_value(LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        })?;

        let payload = self
            .http
            .request_public(Method::POST, "/login", Some(&body))
            .await
            .into_result()?;

        let data: LoginData = Shape::Enveloped.decode(payload)?;
        Ok(Token::new(data.auth_token))
    }

    async fn reset_password(&self, username: &str, email: &str) -> Result<Option<String>> {
        let body = serde_json::to_value(PasswordResetRequest {
            usuario: username.to_string(),
            email: email.to_string(),
        })?;

        let payload = self
            .http
            .request_public(Method::POST, "/reset_password", Some(&body))
            .await
            .into_result()?;

        Ok(acknowledge(payload)?)
    }

    async fn user_info(&self) -> Result<UserInfo> {
        self.get("/info_usuario", Shape::Enveloped).await
    }

    async fn news(&self) -> Result<Vec<NewsItem>> {
        self.get("/noticias", Shape::Enveloped).await
    }

    async fn tasks(&self) -> Result<Vec<Task>> {
        self.get("/tareas", Shape::Bare).await
    }

    async fn available_subjects(&self) -> Result<Vec<Subject>> {
        let subjects: Option<Vec<Subject>> = self.get("/materias_disponibles", Shape::Bare).await?;
        Ok(subjects.unwrap_or_default())
    }

    async fn preselected_subjects(&self) -> Result<Vec<Subject>> {
        let subjects: Option<Vec<Subject>> = self.get("/ver_preseleccion", Shape::Enveloped).await?;
        Ok(subjects.unwrap_or_default())
    }

    async fn preselect_subject(&self, code: &str) -> Result<Option<String>> {
        self.post_action("/preseleccionar_materia", &json!(code)).await
    }

    async fn cancel_preselection(&self, code: &str) -> Result<Option<String>> {
        self.post_action("/cancelar_preseleccion_materia", &json!(code))
            .await
    }

    async fn my_requests(&self) -> Result<Vec<StudentRequest>> {
        self.get("/mis_solicitudes", Shape::Enveloped).await
    }

    async fn create_request(&self, request: &NewRequest) -> Result<Option<String>> {
        let body = serde_json::to_value(request)?;
        self.post_action("/crear_solicitud", &body).await
    }

    async fn cancel_request(&self, id: i64) -> Result<Option<String>> {
        self.post_action("/cancelar_solicitud", &json!(id)).await
    }

    async fn schedules(&self) -> Result<Vec<Schedule>> {
        let payload = self
            .http
            .request_public(Method::GET, "/horarios", None)
            .await
            .into_result()?;
        Ok(Shape::Bare.decode(payload)?)
    }

    async fn debts(&self) -> Result<Vec<Debt>> {
        self.get("/deudas", Shape::Bare).await
    }

    async fn events(&self) -> Result<Vec<Event>> {
        self.get("/eventos", Shape::Bare).await
    }

    async fn videos(&self) -> Result<Vec<Video>> {
        self.get("/videos", Shape::Bare).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::MockTransport;
    use crate::error::{ApiError, Error};
    use crate::session::{CredentialStore, MemoryCredentialStore, Navigator, Session};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn portal(token: Option<&str>, transport: Arc<MockTransport>) -> PortalClient {
        let store = match token {
            Some(t) => MemoryCredentialStore::with_token(t),
            None => MemoryCredentialStore::new(),
        };
        let session = Session::new(Arc::new(store));
        PortalClient::new(AuthenticatedClient::new(transport, session, "https://portal.test"))
    }

    #[tokio::test]
    async fn test_login_returns_token_without_sending_authorization() {
        let transport = Arc::new(MockTransport::new().with_json(
            200,
            json!({"success": true, "data": {"authToken": "tok-1"}}),
        ));
        let client = portal(Some("stale"), transport.clone());

        let token = client.login("20201234", "secreto").await.unwrap();

        assert_eq!(token, Token::new("tok-1"));
        let sent = transport.captured_requests();
        assert_eq!(sent[0].url, "https://portal.test/login");
        assert_eq!(sent[0].header("Authorization"), None);
        let body: Value = serde_json::from_slice(sent[0].body.as_ref().unwrap()).unwrap();
        assert_eq!(body, json!({"username": "20201234", "password": "secreto"}));
    }

    #[tokio::test]
    async fn test_login_rejected_with_server_message() {
        let transport = Arc::new(MockTransport::new().with_json(
            200,
            json!({"success": false, "message": "Usuario o contraseña incorrectos"}),
        ));
        let client = portal(None, transport);

        let err = client.login("u", "p").await.unwrap_err();

        match err {
            Error::Api(ApiError::Rejected { message, .. }) => {
                assert_eq!(message, "Usuario o contraseña incorrectos")
            }
            other => panic!("Expected rejection, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_login_without_token_in_data_is_invalid() {
        let transport = Arc::new(MockTransport::new().with_json(200, json!({"success": true})));
        let client = portal(None, transport);

        let err = client.login("u", "p").await.unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn test_tasks_without_token_makes_no_call() {
        let transport = Arc::new(MockTransport::new());
        let client = portal(None, transport.clone());

        let err = client.tasks().await.unwrap_err();

        assert!(matches!(err, Error::Api(ApiError::Unauthenticated)));
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_news_unwraps_envelope() {
        let transport = Arc::new(MockTransport::new().with_json(
            200,
            json!({"success": true, "data": [
                {"id": 1, "title": "Inscripciones abiertas", "img": "https://img", "date": "2024-09-01"}
            ]}),
        ));
        let client = portal(Some("abc123"), transport);

        let news = client.news().await.unwrap();

        assert_eq!(news.len(), 1);
        assert_eq!(news[0].title, "Inscripciones abiertas");
    }

    #[tokio::test]
    async fn test_preselection_null_data_is_empty() {
        let transport = Arc::new(MockTransport::new().with_json(200, json!({"success": true, "data": null})));
        let client = portal(Some("abc123"), transport);

        assert!(client.preselected_subjects().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_preselect_sends_code_as_json_string() {
        let transport = Arc::new(MockTransport::new().with_json(
            200,
            json!({"success": true, "message": "Materia preseleccionada"}),
        ));
        let client = portal(Some("abc123"), transport.clone());

        let message = client.preselect_subject("INF-101").await.unwrap();

        assert_eq!(message.as_deref(), Some("Materia preseleccionada"));
        let sent = transport.captured_requests();
        assert_eq!(sent[0].url, "https://portal.test/preseleccionar_materia");
        assert_eq!(sent[0].body.as_deref(), Some(br#""INF-101""#.as_slice()));
    }

    #[tokio::test]
    async fn test_cancel_request_sends_id_as_json_number() {
        let transport = Arc::new(MockTransport::new().with_json(200, json!({"success": true})));
        let client = portal(Some("abc123"), transport.clone());

        client.cancel_request(17).await.unwrap();

        assert_eq!(transport.captured_requests()[0].body.as_deref(), Some(b"17".as_slice()));
    }

    #[tokio::test]
    async fn test_action_without_success_flag_is_invalid() {
        let transport = Arc::new(MockTransport::new().with_json(200, json!({"ok": 1})));
        let client = portal(Some("abc123"), transport);

        let err = client
            .create_request(&NewRequest {
                tipo: "beca".to_string(),
                descripcion: "x".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn test_schedules_are_public() {
        let transport = Arc::new(MockTransport::new().with_json(
            200,
            json!([{"id": 1, "materia": "Física I", "hora": "8:00", "aula": "FC-201"}]),
        ));
        let client = portal(None, transport.clone());

        let schedules = client.schedules().await.unwrap();

        assert_eq!(schedules.len(), 1);
        assert_eq!(transport.call_count(), 1);
    }

    #[tokio::test]
    async fn test_token_rejection_surfaces_status() {
        let transport = Arc::new(MockTransport::new().with_json(401, json!({"message": "Token inválido"})));
        let client = portal(Some("expired"), transport);

        let err = client.debts().await.unwrap_err();

        match err {
            Error::Api(api) => assert!(api.is_auth_failure()),
            other => panic!("Expected API error, got {:?}", other),
        }
    }

    #[derive(Default)]
    struct CountingNavigator {
        calls: AtomicUsize,
    }

    impl Navigator for CountingNavigator {
        fn to_login(&self) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn redirecting_portal(
        store: Arc<MemoryCredentialStore>,
        transport: Arc<MockTransport>,
        navigator: Arc<CountingNavigator>,
    ) -> PortalClient {
        let http = AuthenticatedClient::new(transport, Session::new(store.clone()), "https://portal.test");
        PortalClient::new(http).with_redirect(RedirectPolicy::new(store, navigator))
    }

    #[tokio::test]
    async fn test_expired_token_clears_store_and_redirects_once() {
        let store = Arc::new(MemoryCredentialStore::with_token("expired"));
        let navigator = Arc::new(CountingNavigator::default());
        let transport = Arc::new(MockTransport::new().with_json(401, json!({"message": "Token expirado"})));
        let client = redirecting_portal(store.clone(), transport, navigator.clone());

        let err = client.tasks().await.unwrap_err();

        assert!(matches!(err, Error::Api(ApiError::Rejected { status: 401, .. })));
        assert_eq!(store.load().unwrap(), None);
        assert_eq!(navigator.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_missing_token_redirects_without_network() {
        let store = Arc::new(MemoryCredentialStore::new());
        let navigator = Arc::new(CountingNavigator::default());
        let transport = Arc::new(MockTransport::new());
        let client = redirecting_portal(store, transport.clone(), navigator.clone());

        let err = client.debts().await.unwrap_err();

        assert!(matches!(err, Error::Api(ApiError::Unauthenticated)));
        assert_eq!(transport.call_count(), 0);
        assert_eq!(navigator.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_business_rejection_keeps_session() {
        let store = Arc::new(MemoryCredentialStore::with_token("abc123"));
        let navigator = Arc::new(CountingNavigator::default());
        let transport = Arc::new(MockTransport::new().with_json(
            200,
            json!({"success": false, "message": "La materia no tiene cupo"}),
        ));
        let client = redirecting_portal(store.clone(), transport, navigator.clone());

        let err = client.preselect_subject("INF-101").await.unwrap_err();

        assert_eq!(err.to_string(), "La materia no tiene cupo");
        assert_eq!(store.load().unwrap(), Some(Token::new("abc123")));
        assert_eq!(navigator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_failed_login_does_not_redirect() {
        let store = Arc::new(MemoryCredentialStore::new());
        let navigator = Arc::new(CountingNavigator::default());
        let transport = Arc::new(MockTransport::new().with_json(401, json!({"message": "Credenciales inválidas"})));
        let client = redirecting_portal(store, transport, navigator.clone());

        assert!(client.login("u", "p").await.is_err());
        assert_eq!(navigator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_requests_do_not_touch_store() {
        let store = Arc::new(MemoryCredentialStore::with_token("abc123"));
        let transport = Arc::new(MockTransport::new().with_json(401, json!({"message": "expired"})));
        let client = PortalClient::new(AuthenticatedClient::new(
            transport,
            Session::new(store.clone()),
            "https://portal.test",
        ));

        let _ = client.videos().await;

        assert_eq!(store.load().unwrap(), Some(Token::new("abc123")));
    }
}
