// HTTP gateway for the BookLearn API

use crate::config::GatewayConfig;
use crate::errors::{ApiError, DEFAULT_ERROR_MESSAGE};
use crate::history::HistoryApi;
use crate::pdf_books::PdfBooksApi;
use crate::prompts::PromptsApi;
use crate::users::UsersApi;
use booklearn_core::ErrorBody;
use booklearn_storageservice::CredentialProvider;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::multipart::Form;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Build the headers sent with every request
///
/// `Authorization` is `Bearer <token>` when a token is present and an empty
/// value otherwise.
pub fn build_headers(token: Option<&str>) -> Result<HeaderMap, ApiError> {
    let authorization = match token {
        Some(token) => HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
            ApiError::InvalidInput("credential token is not a valid header value".to_string())
        })?,
        None => HeaderValue::from_static(""),
    };

    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(AUTHORIZATION, authorization);
    Ok(headers)
}

/// Turn a response into the expected payload or an [`ApiError`]
///
/// Non-success statuses become `HttpStatus` with the body's `message` when
/// there is one, [`DEFAULT_ERROR_MESSAGE`] otherwise.
pub async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();

    if !status.is_success() {
        let body = response.bytes().await.unwrap_or_default();
        let message = serde_json::from_slice::<ErrorBody>(&body)
            .ok()
            .and_then(ErrorBody::into_message)
            .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string());

        tracing::warn!("Request failed with {}: {}", status, message);
        return Err(ApiError::HttpStatus {
            status: status.as_u16(),
            message,
        });
    }

    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!("Response body did not match the expected schema: {}", e);
        ApiError::Decode(e)
    })
}

/// Single entry point for every backend call
///
/// Holds no mutable state: the token is read from the credential provider on
/// every request.
#[derive(Debug, Clone)]
pub struct Gateway<P> {
    client: reqwest::Client,
    config: GatewayConfig,
    credentials: P,
}

impl<P: CredentialProvider> Gateway<P> {
    pub fn new(config: GatewayConfig, credentials: P) -> Self {
        Self::with_client(reqwest::Client::new(), config, credentials)
    }

    /// Use a pre-configured transport (proxy settings, default headers, ...)
    pub fn with_client(client: reqwest::Client, config: GatewayConfig, credentials: P) -> Self {
        Self {
            client,
            config,
            credentials,
        }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    pub fn credentials(&self) -> &P {
        &self.credentials
    }

    pub fn users(&self) -> UsersApi<'_, P> {
        UsersApi::new(self)
    }

    pub fn pdf_books(&self) -> PdfBooksApi<'_, P> {
        PdfBooksApi::new(self)
    }

    pub fn prompts(&self) -> PromptsApi<'_, P> {
        PromptsApi::new(self)
    }

    pub fn history(&self) -> HistoryApi<'_, P> {
        HistoryApi::new(self)
    }

    /// Issue a request without a body
    pub async fn request<T: DeserializeOwned>(&self, method: Method, path: &str) -> Result<T, ApiError> {
        let (headers, token_attached) = self.headers()?;
        let builder = self
            .client
            .request(method.clone(), self.config.api_url(path))
            .headers(headers);

        self.execute(builder, &method, path, token_attached).await
    }

    /// Issue a request with a JSON body
    pub async fn request_json<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let (headers, token_attached) = self.headers()?;
        let builder = self
            .client
            .request(method.clone(), self.config.api_url(path))
            .headers(headers)
            .json(body);

        self.execute(builder, &method, path, token_attached).await
    }

    /// Issue a POST with a multipart body
    ///
    /// The content type is left to the transport so it carries the boundary.
    pub async fn request_multipart<T: DeserializeOwned>(&self, path: &str, form: Form) -> Result<T, ApiError> {
        let (mut headers, token_attached) = self.headers()?;
        headers.remove(CONTENT_TYPE);

        let builder = self
            .client
            .post(self.config.api_url(path))
            .headers(headers)
            .multipart(form);

        self.execute(builder, &Method::POST, path, token_attached).await
    }

    /// Headers for one request; the token is read once, here
    fn headers(&self) -> Result<(HeaderMap, bool), ApiError> {
        let token = self.credentials.token();
        Ok((build_headers(token.as_deref())?, token.is_some()))
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        method: &Method,
        path: &str,
        token_attached: bool,
    ) -> Result<T, ApiError> {
        tracing::debug!(token = token_attached, "{} {}{}", method, crate::config::API_PREFIX, path);

        let response = builder.send().await.map_err(|e| {
            tracing::error!("{} {} could not be sent: {}", method, path, e);
            ApiError::Transport(e)
        })?;

        handle_response(response).await
    }
}
