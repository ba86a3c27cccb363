// History endpoint

use crate::errors::ApiError;
use crate::http_client::Gateway;
use booklearn_core::HistoryEntry;
use booklearn_storageservice::CredentialProvider;
use reqwest::Method;

/// Calls under `/history`
pub struct HistoryApi<'a, P> {
    gateway: &'a Gateway<P>,
}

impl<'a, P: CredentialProvider> HistoryApi<'a, P> {
    pub(crate) fn new(gateway: &'a Gateway<P>) -> Self {
        Self { gateway }
    }

    /// GET /history
    pub async fn list(&self) -> Result<Vec<HistoryEntry>, ApiError> {
        self.gateway.request(Method::GET, "/history").await
    }
}
