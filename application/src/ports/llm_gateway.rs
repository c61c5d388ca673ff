//! LLM Gateway port
//!
//! Defines the interface for communicating with the inference gateway.

use arena_domain::{StreamEvent, TokenUsage};
use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::mpsc;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GatewayError {
    #[error("Gateway not configured: no API key")]
    NotConfigured,

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Stream error: {0}")]
    Stream(String),

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("Timeout")]
    Timeout,
}

/// A single generation request routed by backend identifier
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// `provider/model` identifier understood by the gateway
    pub backend_id: String,
    pub prompt: String,
    pub system_prompt: Option<String>,
    pub max_output_tokens: u32,
    pub temperature: Option<f32>,
}

impl GenerationRequest {
    pub fn new(backend_id: impl Into<String>, prompt: impl Into<String>, max_output_tokens: u32) -> Self {
        Self {
            backend_id: backend_id.into(),
            prompt: prompt.into(),
            system_prompt: None,
            max_output_tokens,
            temperature: None,
        }
    }

    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(system_prompt.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// A non-streaming completion
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub text: String,
    pub usage: Option<TokenUsage>,
}

/// Handle for receiving streaming events from a generation.
///
/// Wraps an `mpsc::Receiver<StreamEvent>`; the producer side is owned by the
/// gateway adapter.
pub struct StreamHandle {
    pub receiver: mpsc::Receiver<StreamEvent>,
}

impl StreamHandle {
    pub fn new(receiver: mpsc::Receiver<StreamEvent>) -> Self {
        Self { receiver }
    }

    /// Receive the next event, or `None` once the producer is gone
    pub async fn next_event(&mut self) -> Option<StreamEvent> {
        self.receiver.recv().await
    }

    /// Build a handle that replays a fixed list of events.
    ///
    /// Useful for gateways that do not stream natively, and for tests.
    pub fn from_events(events: Vec<StreamEvent>) -> Self {
        let (tx, rx) = mpsc::channel(events.len().max(1));
        for event in events {
            // Capacity covers every event, so try_send cannot fill up
            let _ = tx.try_send(event);
        }
        Self::new(rx)
    }
}

/// Gateway for LLM communication
///
/// This port defines how the application layer talks to the inference
/// backend. Implementations (adapters) live in the infrastructure layer and
/// are injected into the use cases.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Start a streaming generation
    async fn stream(&self, request: &GenerationRequest) -> Result<StreamHandle, GatewayError>;

    /// Run a single non-streaming generation
    async fn complete(&self, request: &GenerationRequest) -> Result<Completion, GatewayError>;

    /// Whether the gateway has credentials; an unconfigured gateway fails
    /// every call and routes the pipeline down the fallback path
    fn is_configured(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_from_events_replays_in_order() {
        let mut handle = StreamHandle::from_events(vec![
            StreamEvent::Delta("a".to_string()),
            StreamEvent::Delta("b".to_string()),
            StreamEvent::Completed,
        ]);
        assert_eq!(handle.next_event().await, Some(StreamEvent::Delta("a".to_string())));
        assert_eq!(handle.next_event().await, Some(StreamEvent::Delta("b".to_string())));
        assert_eq!(handle.next_event().await, Some(StreamEvent::Completed));
        assert_eq!(handle.next_event().await, None);
    }

    #[test]
    fn test_request_builder() {
        let request = GenerationRequest::new("openai/gpt-4o", "hi", 500)
            .with_system_prompt("be terse")
            .with_temperature(0.7);
        assert_eq!(request.backend_id, "openai/gpt-4o");
        assert_eq!(request.system_prompt.as_deref(), Some("be terse"));
        assert_eq!(request.temperature, Some(0.7));
    }

    #[test]
    fn test_error_display() {
        let error = GatewayError::Http {
            status: 401,
            body: "unauthorized".to_string(),
        };
        assert_eq!(error.to_string(), "HTTP 401: unauthorized");
    }
}
