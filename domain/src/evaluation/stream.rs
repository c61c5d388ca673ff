//! Streaming events for a single generation.
//!
//! [`StreamEvent`] bridges the transport-level stream (SSE chunks from the
//! gateway) to the application layer, where the invoker timestamps the first
//! non-empty chunk to measure time to first token.

use serde::{Deserialize, Serialize};

/// Token usage as reported by the provider
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
    pub total_tokens: u64,
}

impl TokenUsage {
    /// Returns `true` if the provider reported a usable total
    pub fn has_total(&self) -> bool {
        self.total_tokens > 0
    }
}

/// An event in a streaming generation.
#[derive(Debug, Clone, PartialEq)]
pub enum StreamEvent {
    /// A text chunk from the model.
    Delta(String),
    /// Provider-reported usage (usually arrives just before completion).
    Usage(TokenUsage),
    /// The stream finished normally.
    Completed,
    /// The stream failed part way through.
    Error(String),
}

impl StreamEvent {
    /// Returns the text content if this is a Delta event.
    pub fn text(&self) -> Option<&str> {
        match self {
            StreamEvent::Delta(s) => Some(s),
            _ => None,
        }
    }

    /// Returns true if this event signals the end of the stream.
    pub fn is_terminal(&self) -> bool {
        matches!(self, StreamEvent::Completed | StreamEvent::Error(_))
    }
}

/// Estimate the token count of a chunk as `ceil(chars / 4)`.
pub fn estimate_tokens(chunk: &str) -> u64 {
    (chunk.chars().count() as u64).div_ceil(4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_text_returns_content() {
        let event = StreamEvent::Delta("hello".to_string());
        assert_eq!(event.text(), Some("hello"));
        assert!(!event.is_terminal());
    }

    #[test]
    fn usage_and_completion() {
        let usage = StreamEvent::Usage(TokenUsage::default());
        assert_eq!(usage.text(), None);
        assert!(!usage.is_terminal());
        assert!(StreamEvent::Completed.is_terminal());
        assert!(StreamEvent::Error("boom".to_string()).is_terminal());
    }

    #[test]
    fn estimate_rounds_up() {
        assert_eq!(estimate_tokens(""), 0);
        assert_eq!(estimate_tokens("a"), 1);
        assert_eq!(estimate_tokens("abcd"), 1);
        assert_eq!(estimate_tokens("abcde"), 2);
        // Counts characters, not bytes
        assert_eq!(estimate_tokens("日本語テ"), 1);
    }

    #[test]
    fn usage_total_detection() {
        assert!(!TokenUsage::default().has_total());
        let usage = TokenUsage {
            prompt_tokens: 10,
            completion_tokens: 32,
            total_tokens: 42,
        };
        assert!(usage.has_total());
    }
}
