// PDF book endpoints

use crate::errors::ApiError;
use crate::http_client::Gateway;
use booklearn_core::{Acknowledgement, PdfBook, PdfBookId, UploadFile};
use booklearn_storageservice::CredentialProvider;
use reqwest::multipart::{Form, Part};
use reqwest::Method;

/// Value of the `prompt_id` form field; zero counts as "no prompt"
pub fn prompt_id_field(prompt_id: Option<u64>) -> Option<String> {
    prompt_id.filter(|id| *id != 0).map(|id| id.to_string())
}

/// Multipart body of POST /pdf-books
pub fn upload_form(file: UploadFile, book_reference: &str, prompt_id: Option<u64>) -> Result<Form, ApiError> {
    let mut part = Part::bytes(file.bytes).file_name(file.file_name);
    if let Some(mime_type) = file.mime_type {
        part = part
            .mime_str(&mime_type)
            .map_err(|_| ApiError::InvalidInput(format!("invalid MIME type: {}", mime_type)))?;
    }

    let mut form = Form::new()
        .part("file", part)
        .text("book_reference", book_reference.to_string());

    if let Some(prompt_id) = prompt_id_field(prompt_id) {
        form = form.text("prompt_id", prompt_id);
    }

    Ok(form)
}

/// Calls under `/pdf-books`
pub struct PdfBooksApi<'a, P> {
    gateway: &'a Gateway<P>,
}

impl<'a, P: CredentialProvider> PdfBooksApi<'a, P> {
    pub(crate) fn new(gateway: &'a Gateway<P>) -> Self {
        Self { gateway }
    }

    /// POST /pdf-books
    ///
    /// # Arguments
    /// * `file` - PDF file contents
    /// * `book_reference` - Reference the backend files the book under
    /// * `prompt_id` - Learning prompt to attach; omitted when `None` or `0`
    pub async fn upload(
        &self,
        file: UploadFile,
        book_reference: &str,
        prompt_id: Option<u64>,
    ) -> Result<PdfBook, ApiError> {
        let form = upload_form(file, book_reference, prompt_id)?;
        self.gateway.request_multipart("/pdf-books", form).await
    }

    /// DELETE /pdf-books/{id}
    pub async fn delete(&self, id: PdfBookId) -> Result<Acknowledgement, ApiError> {
        self.gateway
            .request(Method::DELETE, &format!("/pdf-books/{}", id))
            .await
    }
}
