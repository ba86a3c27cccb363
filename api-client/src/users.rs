// User profile endpoints

use crate::errors::ApiError;
use crate::http_client::Gateway;
use booklearn_core::{Acknowledgement, PasswordChange, ProfileUpdate, UserProfile};
use booklearn_storageservice::CredentialProvider;
use reqwest::Method;

/// Calls under `/users`
pub struct UsersApi<'a, P> {
    gateway: &'a Gateway<P>,
}

impl<'a, P: CredentialProvider> UsersApi<'a, P> {
    pub(crate) fn new(gateway: &'a Gateway<P>) -> Self {
        Self { gateway }
    }

    /// GET /users/profile
    pub async fn get_profile(&self) -> Result<UserProfile, ApiError> {
        self.gateway.request(Method::GET, "/users/profile").await
    }

    /// PUT /users/profile
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile, ApiError> {
        self.gateway
            .request_json(Method::PUT, "/users/profile", update)
            .await
    }

    /// PUT /users/change-password
    pub async fn change_password(&self, change: &PasswordChange) -> Result<Acknowledgement, ApiError> {
        self.gateway
            .request_json(Method::PUT, "/users/change-password", change)
            .await
    }
}
