// Core data models for BookLearn

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// PDF book identifier (numeric, assigned by the backend)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PdfBookId(pub u64);

impl std::fmt::Display for PdfBookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier owned by the backend (prompts, users, linked prompts)
///
/// Kept in the JSON type it arrived in, so a decoded body serializes back
/// unchanged; `Display` renders the form used in request paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceId {
    Number(serde_json::Number),
    Text(String),
}

/// Learning prompt identifier
pub type PromptId = ResourceId;

impl From<&str> for ResourceId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ResourceId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<u64> for ResourceId {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}

impl std::fmt::Display for ResourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{}", number),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// Optional field owned by the backend: `None` when absent, `Some(None)` when `null`
pub type Nullable<T> = Option<Option<T>>;

fn nullable<'de, D, T>(deserializer: D) -> Result<Nullable<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn flatten_ref(field: &Nullable<String>) -> Option<&str> {
    field.as_ref().and_then(|value| value.as_deref())
}

// ==================== Users ====================

/// Response: GET /users/profile, PUT /users/profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub id: Nullable<ResourceId>,

    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub name: Nullable<String>,

    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub email: Nullable<String>,

    /// Fields owned by the backend that this client does not interpret
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserProfile {
    pub fn id(&self) -> Option<&ResourceId> {
        self.id.as_ref().and_then(Option::as_ref)
    }

    pub fn name(&self) -> Option<&str> {
        flatten_ref(&self.name)
    }

    pub fn email(&self) -> Option<&str> {
        flatten_ref(&self.email)
    }
}

/// Request: PUT /users/profile
///
/// The backend accepts an arbitrary object; only the fields that are set
/// are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProfileUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set any other profile field the backend understands
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

/// Request: PUT /users/change-password
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
}

impl PasswordChange {
    pub fn new(current_password: impl Into<String>, new_password: impl Into<String>) -> Self {
        Self {
            current_password: current_password.into(),
            new_password: new_password.into(),
        }
    }
}

// ==================== PDF books ====================

/// Response: POST /pdf-books
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PdfBook {
    pub id: PdfBookId,

    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub book_reference: Nullable<String>,

    /// Linked prompt, echoed as a string or a number depending on the backend
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub prompt_id: Nullable<ResourceId>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PdfBook {
    pub fn book_reference(&self) -> Option<&str> {
        flatten_ref(&self.book_reference)
    }

    pub fn prompt_id(&self) -> Option<&ResourceId> {
        self.prompt_id.as_ref().and_then(Option::as_ref)
    }
}

/// File attached to a PDF book upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    /// File name sent in the multipart part
    pub file_name: String,

    /// MIME type of the part; left to the transport when `None`
    pub mime_type: Option<String>,

    /// Raw file contents
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub const PDF_MIME_TYPE: &'static str = "application/pdf";

    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: None,
            bytes,
        }
    }

    /// Create a file part typed as `application/pdf`
    pub fn pdf(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self::new(file_name, bytes).with_mime_type(Self::PDF_MIME_TYPE)
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }
}

// ==================== Prompts ====================

/// Response: GET /prompts (as a list), POST /prompts, PUT /prompts/{id}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prompt {
    pub id: PromptId,

    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub name: Nullable<String>,

    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub prompt: Nullable<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Prompt {
    pub fn name(&self) -> Option<&str> {
        flatten_ref(&self.name)
    }

    pub fn prompt(&self) -> Option<&str> {
        flatten_ref(&self.prompt)
    }
}

/// Request: POST /prompts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPrompt {
    pub name: String,
    pub prompt: String,
}

impl NewPrompt {
    pub fn new(name: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prompt: prompt.into(),
        }
    }
}

/// Request: PUT /prompts/{id}
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptUpdate {
    pub prompt: String,
}

impl PromptUpdate {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

// ==================== History ====================

/// One entry of GET /history
///
/// The shape is owned by the backend, so every field is kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl HistoryEntry {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

// ==================== Shared ====================

/// Response of delete and change-password endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Acknowledgement {
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub message: Nullable<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Acknowledgement {
    pub fn message(&self) -> Option<&str> {
        flatten_ref(&self.message)
    }
}

/// API Error Response
///
/// Only `message` is read; a missing or non-string value counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, deserialize_with = "lenient_message")]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Message suitable for display, `None` when missing or empty
    pub fn into_message(self) -> Option<String> {
        self.message.filter(|m| !m.is_empty())
    }
}

fn lenient_message<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(message) => Some(message),
        _ => None,
    })
}
