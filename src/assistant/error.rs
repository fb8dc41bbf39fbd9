//! Assistant error types

use thiserror::Error;

/// Errors returned by the conversation engine and symptom checker
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssistantError {
    /// Message text was empty or only whitespace
    #[error("Message is empty")]
    EmptyMessage,

    /// A reply is still pending; input is disabled until it lands
    #[error("Assistant is still replying")]
    Busy,

    /// Symptom name was empty or only whitespace
    #[error("Symptom is empty")]
    EmptySymptom,

    /// No symptom with this id
    #[error("Symptom not found: {0}")]
    SymptomNotFound(String),
}

/// Result type alias for assistant operations
pub type AssistantResult<T> = Result<T, AssistantError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(AssistantError::Busy.to_string(), "Assistant is still replying");
        assert_eq!(
            AssistantError::SymptomNotFound("abc".to_string()).to_string(),
            "Symptom not found: abc"
        );
    }
}
