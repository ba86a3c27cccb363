// Validation for values interpolated into request paths

use crate::models::PromptId;

/// Validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("identifier is empty")]
    EmptyIdentifier,

    #[error("identifier {0:?} contains {1:?}, which is not allowed in a path segment")]
    IllegalCharacter(String, char),

    #[error("identifier {0:?} is a dot segment and would resolve to another route")]
    DotSegment(String),
}

/// Characters that would change the meaning of the request URL
const RESERVED_CHARS: [char; 3] = ['/', '?', '#'];

/// Validate a single path segment
///
/// # Rules
/// - Segment must not be empty or whitespace only
/// - Segment must not contain `/`, `?` or `#`
/// - Segment must not be `.` or `..`
pub fn validate_path_segment(segment: &str) -> Result<(), ValidationError> {
    if segment.trim().is_empty() {
        return Err(ValidationError::EmptyIdentifier);
    }

    if let Some(c) = segment.chars().find(|c| RESERVED_CHARS.contains(c)) {
        return Err(ValidationError::IllegalCharacter(segment.to_string(), c));
    }

    if segment == "." || segment == ".." {
        return Err(ValidationError::DotSegment(segment.to_string()));
    }

    Ok(())
}

impl PromptId {
    /// Validate the identifier before it is used in `/prompts/{id}`
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_path_segment(&self.to_string())
    }
}
