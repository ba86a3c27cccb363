// Learning prompt endpoints

use crate::errors::ApiError;
use crate::http_client::Gateway;
use booklearn_core::{Acknowledgement, NewPrompt, Prompt, PromptId, PromptUpdate};
use booklearn_storageservice::CredentialProvider;
use reqwest::Method;

/// Path of a single prompt, with the id validated and percent-encoded
fn prompt_path(id: &PromptId) -> Result<String, ApiError> {
    id.validate()?;
    Ok(format!("/prompts/{}", urlencoding::encode(&id.to_string())))
}

/// Calls under `/prompts`
pub struct PromptsApi<'a, P> {
    gateway: &'a Gateway<P>,
}

impl<'a, P: CredentialProvider> PromptsApi<'a, P> {
    pub(crate) fn new(gateway: &'a Gateway<P>) -> Self {
        Self { gateway }
    }

    /// GET /prompts
    pub async fn list(&self) -> Result<Vec<Prompt>, ApiError> {
        self.gateway.request(Method::GET, "/prompts").await
    }

    /// POST /prompts
    pub async fn create(&self, prompt: &NewPrompt) -> Result<Prompt, ApiError> {
        self.gateway
            .request_json(Method::POST, "/prompts", prompt)
            .await
    }

    /// PUT /prompts/{id}
    pub async fn update(&self, id: impl Into<PromptId>, update: &PromptUpdate) -> Result<Prompt, ApiError> {
        let path = prompt_path(&id.into())?;
        self.gateway.request_json(Method::PUT, &path, update).await
    }

    /// DELETE /prompts/{id}
    pub async fn delete(&self, id: impl Into<PromptId>) -> Result<Acknowledgement, ApiError> {
        let path = prompt_path(&id.into())?;
        self.gateway.request(Method::DELETE, &path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_path() {
        assert_eq!(prompt_path(&PromptId::from("42")).unwrap(), "/prompts/42");
    }

    #[test]
    fn test_prompt_path_numeric_id() {
        assert_eq!(prompt_path(&PromptId::from(42u64)).unwrap(), "/prompts/42");
    }

    #[test]
    fn test_prompt_path_encodes_spaces() {
        assert_eq!(prompt_path(&PromptId::from("a b")).unwrap(), "/prompts/a%20b");
    }

    #[test]
    fn test_prompt_path_rejects_traversal() {
        assert!(matches!(
            prompt_path(&PromptId::from("../users")),
            Err(ApiError::InvalidInput(_))
        ));
        assert!(matches!(prompt_path(&PromptId::from("")), Err(ApiError::InvalidInput(_))));
        assert!(matches!(prompt_path(&PromptId::from("..")), Err(ApiError::InvalidInput(_))));
        assert!(matches!(prompt_path(&PromptId::from(".")), Err(ApiError::InvalidInput(_))));
    }
}
