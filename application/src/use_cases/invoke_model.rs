//! Model Invoker
//!
//! Streams one generation from the gateway while measuring time to first
//! token, total generation time, and token count. Any failure degrades to a
//! synthesized response exactly once, immediately, with no retry.

use crate::config::GenerationOptions;
use crate::ports::llm_gateway::{GatewayError, GenerationRequest, LlmGateway};
use arena_domain::evaluation::fallback;
use arena_domain::{
    Generation, GenerationMetrics, ModelDescriptor, ModelRegistry, StreamEvent, TokenUsage,
    estimate_tokens,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Calls one model and never fails
pub struct ModelInvoker {
    gateway: Arc<dyn LlmGateway>,
    timeout: Duration,
}

impl ModelInvoker {
    pub fn new(gateway: Arc<dyn LlmGateway>, timeout: Duration) -> Self {
        Self { gateway, timeout }
    }

    /// Resolve `model_id` through the registry and invoke it
    pub async fn invoke(&self, model_id: &str, prompt: &str, options: &GenerationOptions) -> Generation {
        let model = ModelRegistry::resolve(model_id);
        if !model.is_known() {
            debug!(model = %model_id, "Model not in registry, routing id to gateway as-is");
        }
        self.invoke_descriptor(&model, prompt, options).await
    }

    /// Invoke an already resolved model
    pub async fn invoke_descriptor(
        &self,
        model: &ModelDescriptor,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Generation {
        let outcome = tokio::time::timeout(self.timeout, self.stream_generation(model, prompt, options))
            .await
            .unwrap_or(Err(GatewayError::Timeout));

        match outcome {
            Ok(generation) => generation,
            Err(e) => {
                warn!(
                    model = %model.id,
                    backend = %model.backend_id,
                    error = %e,
                    "Generation failed, falling back to mock response"
                );
                fallback::mock_generation(model, prompt, &mut rand::thread_rng())
            }
        }
    }

    async fn stream_generation(
        &self,
        model: &ModelDescriptor,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<Generation, GatewayError> {
        let request = GenerationRequest::new(&model.backend_id, prompt, options.max_output_tokens)
            .with_temperature(options.temperature);

        let started = Instant::now();
        let mut handle = self.gateway.stream(&request).await?;

        let mut text = String::new();
        let mut first_token: Option<Duration> = None;
        let mut estimated_tokens = 0u64;
        let mut usage: Option<TokenUsage> = None;

        while let Some(event) = handle.next_event().await {
            match event {
                StreamEvent::Delta(chunk) => {
                    if chunk.is_empty() {
                        continue;
                    }
                    if first_token.is_none() {
                        let ttft = started.elapsed();
                        debug!(model = %model.display_name, ttft_ms = ttft.as_millis() as u64, "First token arrived");
                        first_token = Some(ttft);
                    }
                    estimated_tokens += estimate_tokens(&chunk);
                    text.push_str(&chunk);
                }
                StreamEvent::Usage(reported) => usage = Some(reported),
                StreamEvent::Completed => break,
                StreamEvent::Error(e) => return Err(GatewayError::Stream(e)),
            }
        }

        let total = started.elapsed();
        let ttft = first_token.unwrap_or(total);
        let token_count = usage
            .filter(TokenUsage::has_total)
            .map(|u| u.total_tokens)
            .unwrap_or(estimated_tokens);

        debug!(
            model = %model.display_name,
            total_ms = total.as_millis() as u64,
            tokens = token_count,
            "Generation complete"
        );

        Ok(Generation::live(
            text,
            GenerationMetrics::new(ttft.as_millis() as u64, total.as_millis() as u64, token_count),
        ))
    }
}
