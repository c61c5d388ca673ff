//! Inference gateway adapters
//!
//! - [`OpenAiCompatGateway`]: streaming and non-streaming calls over HTTP
//! - [`UnconfiguredGateway`]: stand-in when no API key is available

pub mod openai_compat;
pub mod sse;
pub mod unconfigured;

pub use openai_compat::OpenAiCompatGateway;
pub use unconfigured::UnconfiguredGateway;

use arena_application::ports::llm_gateway::LlmGateway;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

/// Resolved connection settings for the gateway
#[derive(Debug, Clone, PartialEq)]
pub struct GatewaySettings {
    pub base_url: String,
    /// `None` when neither the environment nor the config file has a key
    pub api_key: Option<String>,
    pub connect_timeout: Duration,
}

/// Build the gateway for the given settings.
///
/// A missing key is not an error: the returned gateway fails every call
/// and the pipeline serves fallback data.
pub fn build_gateway(settings: &GatewaySettings) -> Arc<dyn LlmGateway> {
    let Some(api_key) = settings.api_key.as_deref() else {
        warn!("No gateway API key configured, all results will use fallback data");
        return Arc::new(UnconfiguredGateway);
    };

    match OpenAiCompatGateway::new(&settings.base_url, api_key, settings.connect_timeout) {
        Ok(gateway) => Arc::new(gateway),
        Err(e) => {
            warn!(error = %e, "Failed to build gateway client, all results will use fallback data");
            Arc::new(UnconfiguredGateway)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(api_key: Option<&str>) -> GatewaySettings {
        GatewaySettings {
            base_url: "https://gateway.test/v1".to_string(),
            api_key: api_key.map(str::to_string),
            connect_timeout: Duration::from_secs(1),
        }
    }

    #[test]
    fn test_missing_key_builds_unconfigured_gateway() {
        assert!(!build_gateway(&settings(None)).is_configured());
    }

    #[test]
    fn test_key_builds_http_gateway() {
        assert!(build_gateway(&settings(Some("secret"))).is_configured());
    }
}
