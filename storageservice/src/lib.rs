// Credential storage for BookLearn
//
// This crate provides the credential providers the API gateway reads the
// bearer token from, with pluggable backends.

use std::sync::{Arc, RwLock};

// Re-export local storage backend
#[cfg(target_arch = "wasm32")]
pub mod local;
#[cfg(target_arch = "wasm32")]
pub use local::LocalStorageCredentials;

/// Key the browser session stores the bearer token under
pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// Source of the current credential token
///
/// Read on every request; implementations must not assume the gateway
/// caches the value. `None` means the request goes out unauthenticated.
pub trait CredentialProvider {
    fn token(&self) -> Option<String>;
}

impl<P: CredentialProvider + ?Sized> CredentialProvider for &P {
    fn token(&self) -> Option<String> {
        (**self).token()
    }
}

impl<P: CredentialProvider + ?Sized> CredentialProvider for Arc<P> {
    fn token(&self) -> Option<String> {
        (**self).token()
    }
}

impl<P: CredentialProvider + ?Sized> CredentialProvider for Box<P> {
    fn token(&self) -> Option<String> {
        (**self).token()
    }
}

/// An empty token is the same as no token
pub(crate) fn non_empty(token: Option<String>) -> Option<String> {
    token.filter(|t| !t.is_empty())
}

/// Fixed token, set once at construction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticToken(Option<String>);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Some(token.into()))
    }

    /// Provider for unauthenticated requests
    pub fn anonymous() -> Self {
        Self(None)
    }
}

impl CredentialProvider for StaticToken {
    fn token(&self) -> Option<String> {
        non_empty(self.0.clone())
    }
}

/// Token shared with the host application, which may replace it between calls
#[derive(Debug, Clone, Default)]
pub struct SharedToken {
    inner: Arc<RwLock<Option<String>>>,
}

impl SharedToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, token: impl Into<String>) {
        let mut slot = self.inner.write().unwrap_or_else(|e| e.into_inner());
        *slot = Some(token.into());
        tracing::debug!("credential token replaced");
    }

    pub fn clear(&self) {
        let mut slot = self.inner.write().unwrap_or_else(|e| e.into_inner());
        *slot = None;
        tracing::debug!("credential token cleared");
    }
}

impl CredentialProvider for SharedToken {
    fn token(&self) -> Option<String> {
        let slot = self.inner.read().unwrap_or_else(|e| e.into_inner());
        non_empty(slot.clone())
    }
}
