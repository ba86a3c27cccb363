// LocalStorage backend implementation

use super::{non_empty, CredentialProvider, AUTH_TOKEN_KEY};
use gloo_storage::{LocalStorage, Storage};

/// Reads the bearer token from browser LocalStorage
///
/// The value is read raw (it is written by the login flow as a plain string,
/// not JSON) and this type never writes the key.
#[derive(Debug, Clone)]
pub struct LocalStorageCredentials {
    key: String,
}

impl LocalStorageCredentials {
    pub fn new() -> Self {
        Self::with_key(AUTH_TOKEN_KEY)
    }

    pub fn with_key(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Default for LocalStorageCredentials {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialProvider for LocalStorageCredentials {
    fn token(&self) -> Option<String> {
        match LocalStorage::raw().get_item(&self.key) {
            Ok(token) => non_empty(token),
            Err(err) => {
                tracing::warn!("LocalStorage read failed for {}: {:?}", self.key, err);
                None
            }
        }
    }
}
