//! Session and login service

use std::sync::Arc;

use integration_hub_provider::{CommandRequest, CommandSink, FALLBACK_FAILURE_MESSAGE, RemoteError};
use serde_json::Value;
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::traits::TokenStore;

/// Shown when the auth endpoint rejects a login without saying why.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "invalid username or password";

/// `success: false` payloads and auth statuses; other failures stay remote errors.
fn is_rejection(status: Option<u16>) -> bool {
    status.is_none_or(|code| (200..300).contains(&code) || code == 401 || code == 403)
}

/// The current user's session.
///
/// Wraps the persisted token with an in-memory copy so the view can ask
/// `is_authenticated` without touching storage.
pub struct Session {
    store: Arc<dyn TokenStore>,
    token: RwLock<Option<String>>,
}

impl Session {
    #[must_use]
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self {
            store,
            token: RwLock::new(None),
        }
    }

    /// Read the persisted token once at startup. Returns whether one exists.
    pub async fn init(&self) -> CoreResult<bool> {
        let token = self.store.load().await?;
        let present = token.is_some();
        *self.token.write().await = token;
        log::debug!("Session initialised (authenticated: {present})");
        Ok(present)
    }

    pub async fn is_authenticated(&self) -> bool {
        self.token.read().await.is_some()
    }

    pub async fn token(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    /// Persist and adopt a new token.
    pub async fn set_token(&self, token: &str) -> CoreResult<()> {
        self.store.save(token).await?;
        *self.token.write().await = Some(token.to_string());
        Ok(())
    }

    /// Forget the token, in memory and in storage.
    pub async fn logout(&self) -> CoreResult<()> {
        *self.token.write().await = None;
        self.store.clear().await?;
        log::info!("Logged out");
        Ok(())
    }
}

/// Login against the auth endpoint.
pub struct AuthService {
    sink: Arc<dyn CommandSink>,
    session: Arc<Session>,
}

impl AuthService {
    #[must_use]
    pub fn new(sink: Arc<dyn CommandSink>, session: Arc<Session>) -> Self {
        Self { sink, session }
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    /// Exchange credentials for a token and store it in the session.
    pub async fn login(&self, username: &str, password: &str) -> CoreResult<()> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(CoreError::ValidationError(
                "username and password are required".to_string(),
            ));
        }

        let request = CommandRequest::action("login")
            .param("username", username)
            .param("password", password);

        let body = match self.sink.post(request).await {
            Ok(body) => body,
            Err(RemoteError::RemoteFailure {
                status, message, ..
            }) if is_rejection(status) => {
                log::warn!("Login rejected for {username}: {message}");
                let message = if message == FALLBACK_FAILURE_MESSAGE {
                    INVALID_CREDENTIALS_MESSAGE.to_string()
                } else {
                    message
                };
                return Err(CoreError::InvalidCredentials(message));
            }
            Err(e) => return Err(e.into()),
        };

        let token = body
            .get("token")
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                CoreError::Remote(RemoteError::MalformedResponse {
                    source: self.sink.name().to_string(),
                    detail: "login response has no token".to_string(),
                })
            })?;

        self.session.set_token(token).await?;
        log::info!("Logged in as {username}");
        Ok(())
    }

    pub async fn logout(&self) -> CoreResult<()> {
        self.session.logout().await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_utils::{MockCommandSink, SentCommand, remote_failure};
    use crate::traits::InMemoryTokenStore;
    use serde_json::json;

    fn service(store: InMemoryTokenStore) -> (AuthService, Arc<MockCommandSink>) {
        let sink = MockCommandSink::new();
        let session = Arc::new(Session::new(Arc::new(store)));
        (AuthService::new(sink.clone(), session), sink)
    }

    fn rejected(message: &str) -> RemoteError {
        RemoteError::RemoteFailure {
            source: "auth".into(),
            status: Some(200),
            message: message.into(),
        }
    }

    #[tokio::test]
    async fn init_reads_persisted_token() {
        let store = InMemoryTokenStore::with_token("abc");
        let session = Session::new(Arc::new(store));
        assert!(!session.is_authenticated().await);
        assert!(session.init().await.unwrap());
        assert_eq!(session.token().await.as_deref(), Some("abc"));
    }

    #[tokio::test]
    async fn login_stores_token() {
        let store = InMemoryTokenStore::new();
        let (svc, sink) = service(store.clone());
        sink.push_reply(Ok(json!({"success": true, "token": "t-1"})))
            .await;

        svc.login("admin", "secret").await.unwrap();

        assert_eq!(store.load().await.unwrap().as_deref(), Some("t-1"));
        assert!(svc.session().is_authenticated().await);
        assert_eq!(
            sink.sent().await,
            vec![SentCommand::Post(json!({
                "action": "login",
                "username": "admin",
                "password": "secret"
            }))]
        );
    }

    #[tokio::test]
    async fn rejected_login_uses_remote_message() {
        let (svc, sink) = service(InMemoryTokenStore::new());
        sink.push_reply(Err(rejected("account locked"))).await;

        let err = svc.login("admin", "x").await.unwrap_err();
        assert!(matches!(err, CoreError::InvalidCredentials(ref m) if m == "account locked"));
        assert!(!svc.session().is_authenticated().await);
    }

    #[tokio::test]
    async fn rejected_login_without_message_uses_default() {
        let (svc, sink) = service(InMemoryTokenStore::new());
        sink.push_reply(Err(rejected(FALLBACK_FAILURE_MESSAGE))).await;

        let err = svc.login("admin", "x").await.unwrap_err();
        assert_eq!(err.user_message(), INVALID_CREDENTIALS_MESSAGE);
    }

    #[tokio::test]
    async fn server_errors_are_not_credential_errors() {
        let (svc, sink) = service(InMemoryTokenStore::new());
        sink.push_reply(Err(RemoteError::NetworkError {
            source: "auth".into(),
            detail: "connection refused".into(),
        }))
        .await;

        let err = svc.login("admin", "x").await.unwrap_err();
        assert!(matches!(err, CoreError::Remote(RemoteError::NetworkError { .. })));
        assert!(!err.is_expected());
    }

    #[tokio::test]
    async fn missing_token_is_malformed() {
        let (svc, sink) = service(InMemoryTokenStore::new());
        sink.push_reply(Ok(json!({"success": true}))).await;

        let err = svc.login("admin", "x").await.unwrap_err();
        assert!(matches!(
            err,
            CoreError::Remote(RemoteError::MalformedResponse { .. })
        ));
    }

    #[tokio::test]
    async fn blank_credentials_are_rejected_locally() {
        let (svc, sink) = service(InMemoryTokenStore::new());
        assert!(matches!(
            svc.login(" ", "x").await,
            Err(CoreError::ValidationError(_))
        ));
        assert!(sink.sent().await.is_empty());
    }

    #[tokio::test]
    async fn logout_clears_store() {
        let store = InMemoryTokenStore::with_token("abc");
        let (svc, _) = service(store.clone());
        svc.session().init().await.unwrap();

        svc.logout().await.unwrap();
        assert!(!svc.session().is_authenticated().await);
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn server_failure_message_is_kept() {
        let (svc, sink) = service(InMemoryTokenStore::new());
        sink.push_reply(Err(remote_failure("maintenance"))).await;
        let err = svc.login("admin", "x").await.unwrap_err();
        assert!(matches!(err, CoreError::Remote(_)));
        assert_eq!(err.user_message(), "maintenance");
    }
}
