//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid prompt: {0}")]
    InvalidPrompt(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_prompt_display() {
        let error = DomainError::InvalidPrompt("prompt must not be empty".to_string());
        assert_eq!(error.to_string(), "Invalid prompt: prompt must not be empty");
    }
}
