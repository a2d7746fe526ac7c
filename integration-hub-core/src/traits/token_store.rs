//! Session token storage abstract Trait

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::CoreResult;

/// Key the auth token is stored under.
pub const AUTH_TOKEN_KEY: &str = "webhook_auth_token";

/// Token Store Trait
///
/// Persists the single opaque session token. Platform layers provide a
/// file-backed or keychain-backed implementation; `InMemoryTokenStore` is the
/// default.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Read the stored token, if any
    async fn load(&self) -> CoreResult<Option<String>>;

    /// Replace the stored token
    async fn save(&self, token: &str) -> CoreResult<()>;

    /// Remove the stored token
    async fn clear(&self) -> CoreResult<()>;
}

/// In-memory token store
#[derive(Clone, Default)]
pub struct InMemoryTokenStore {
    token: Arc<RwLock<Option<String>>>,
}

impl InMemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a token
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Arc::new(RwLock::new(Some(token.into()))),
        }
    }
}

#[async_trait]
impl TokenStore for InMemoryTokenStore {
    async fn load(&self) -> CoreResult<Option<String>> {
        Ok(self.token.read().await.clone())
    }

    async fn save(&self, token: &str) -> CoreResult<()> {
        *self.token.write().await = Some(token.to_string());
        Ok(())
    }

    async fn clear(&self) -> CoreResult<()> {
        *self.token.write().await = None;
        Ok(())
    }
}
