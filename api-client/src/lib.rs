// API client library for BookLearn
//
// This crate provides the request gateway the frontend uses to talk to the
// BookLearn backend: auth headers, JSON/multipart bodies and a uniform
// error type for every endpoint.

pub mod config;
pub mod errors;
pub mod history;
pub mod http_client;
pub mod pdf_books;
pub mod prompts;
pub mod users;

// Re-export commonly used items
pub use config::{GatewayConfig, API_PREFIX, DEFAULT_BASE_URL};
pub use errors::{ApiError, DEFAULT_ERROR_MESSAGE};
pub use http_client::{build_headers, handle_response, Gateway};

pub use booklearn_core as models;
pub use booklearn_storageservice::{CredentialProvider, SharedToken, StaticToken};
#[cfg(target_arch = "wasm32")]
pub use booklearn_storageservice::LocalStorageCredentials;
