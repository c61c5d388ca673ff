//! Gateway used when no API key is available

use arena_application::ports::llm_gateway::{
    Completion, GatewayError, GenerationRequest, LlmGateway, StreamHandle,
};
use async_trait::async_trait;

/// Fails every call with [`GatewayError::NotConfigured`], which routes the
/// whole pipeline through fallback data.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredGateway;

#[async_trait]
impl LlmGateway for UnconfiguredGateway {
    async fn stream(&self, _request: &GenerationRequest) -> Result<StreamHandle, GatewayError> {
        Err(GatewayError::NotConfigured)
    }

    async fn complete(&self, _request: &GenerationRequest) -> Result<Completion, GatewayError> {
        Err(GatewayError::NotConfigured)
    }

    fn is_configured(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_every_call_fails() {
        let gateway = UnconfiguredGateway;
        let request = GenerationRequest::new("openai/gpt-4o", "hi", 10);
        assert!(matches!(gateway.stream(&request).await, Err(GatewayError::NotConfigured)));
        assert_eq!(gateway.complete(&request).await, Err(GatewayError::NotConfigured));
        assert!(!gateway.is_configured());
    }
}
