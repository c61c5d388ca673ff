//! OpenAI-compatible gateway client
//!
//! Talks to any endpoint that speaks `POST {base_url}/chat/completions`
//! with bearer authentication. Model routing happens on the gateway side
//! via the `provider/model` identifier in the request body.

use super::sse::{parse_usage, pump_events};
use arena_application::ports::llm_gateway::{
    Completion, GatewayError, GenerationRequest, LlmGateway, StreamHandle,
};
use async_trait::async_trait;
use serde_json::{Value, json};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Buffered events between the SSE reader task and the invoker
const STREAM_BUFFER: usize = 64;

/// LLM Gateway implementation for OpenAI-compatible HTTP endpoints
pub struct OpenAiCompatGateway {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenAiCompatGateway {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        connect_timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| GatewayError::Connection(e.to_string()))?;

        let base_url = base_url.into();
        info!(base_url = %base_url, "OpenAI-compatible gateway initialized");

        Ok(Self {
            client,
            base_url,
            api_key: api_key.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    async fn post(&self, body: &Value) -> Result<reqwest::Response, GatewayError> {
        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| GatewayError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Http {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

/// Build the chat completions request body
pub fn request_body(request: &GenerationRequest, stream: bool) -> Value {
    let mut messages = Vec::new();
    if let Some(system) = &request.system_prompt {
        messages.push(json!({"role": "system", "content": system}));
    }
    messages.push(json!({"role": "user", "content": request.prompt}));

    let mut body = json!({
        "model": request.backend_id,
        "messages": messages,
        "max_tokens": request.max_output_tokens,
    });
    if let Some(temperature) = request.temperature {
        body["temperature"] = json!(temperature);
    }
    if stream {
        body["stream"] = json!(true);
        body["stream_options"] = json!({"include_usage": true});
    }
    body
}

/// Extract the assistant text from a non-streaming completion
pub fn parse_completion(value: &Value) -> Result<Completion, GatewayError> {
    let text = value["choices"][0]["message"]["content"]
        .as_str()
        .ok_or_else(|| GatewayError::Decode("completion has no message content".to_string()))?;

    Ok(Completion {
        text: text.to_string(),
        usage: parse_usage(&value["usage"]),
    })
}

#[async_trait]
impl LlmGateway for OpenAiCompatGateway {
    async fn stream(&self, request: &GenerationRequest) -> Result<StreamHandle, GatewayError> {
        debug!(model = %request.backend_id, "Opening completion stream");
        let response = self.post(&request_body(request, true)).await?;

        let (tx, rx) = mpsc::channel(STREAM_BUFFER);
        tokio::spawn(pump_events(response.bytes_stream(), tx));

        Ok(StreamHandle::new(rx))
    }

    async fn complete(&self, request: &GenerationRequest) -> Result<Completion, GatewayError> {
        debug!(model = %request.backend_id, "Requesting completion");
        let response = self.post(&request_body(request, false)).await?;
        let value: Value = response
            .json()
            .await
            .map_err(|e| GatewayError::Decode(e.to_string()))?;
        parse_completion(&value)
    }
}
