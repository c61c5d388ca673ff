//! Server-sent event decoding for OpenAI-compatible streams.
//!
//! Each `data:` payload is one `chat.completion.chunk` JSON object; the
//! literal `[DONE]` ends the stream. The last chunk carries `usage` when the
//! request set `stream_options.include_usage`.

use arena_application::ports::llm_gateway::GatewayError;
use arena_domain::{StreamEvent, TokenUsage};
use eventsource_stream::Eventsource;
use futures::{Stream, StreamExt};
use serde_json::Value;
use std::fmt::Display;
use std::pin::pin;
use tokio::sync::mpsc;
use tracing::{debug, trace};

/// Payload that terminates an SSE completion stream
pub const DONE_SENTINEL: &str = "[DONE]";

/// Decode one `data:` payload into zero or more stream events
pub fn decode_chunk(data: &str) -> Result<Vec<StreamEvent>, GatewayError> {
    let value: Value =
        serde_json::from_str(data).map_err(|e| GatewayError::Decode(format!("{e}: {data}")))?;

    if let Some(error) = value.get("error").filter(|e| !e.is_null()) {
        let message = error["message"]
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| error.to_string());
        return Err(GatewayError::Stream(message));
    }

    let mut events = Vec::new();
    if let Some(content) = value["choices"][0]["delta"]["content"].as_str()
        && !content.is_empty()
    {
        events.push(StreamEvent::Delta(content.to_string()));
    }
    if let Some(usage) = parse_usage(&value["usage"]) {
        events.push(StreamEvent::Usage(usage));
    }
    Ok(events)
}

/// Read `usage` from a completion or chunk object
pub fn parse_usage(usage: &Value) -> Option<TokenUsage> {
    if !usage.is_object() {
        return None;
    }
    Some(TokenUsage {
        prompt_tokens: usage["prompt_tokens"].as_u64().unwrap_or(0),
        completion_tokens: usage["completion_tokens"].as_u64().unwrap_or(0),
        total_tokens: usage["total_tokens"].as_u64().unwrap_or(0),
    })
}

/// Drive an SSE byte stream to completion, forwarding decoded events.
///
/// Always ends with exactly one terminal event ([`StreamEvent::Completed`]
/// or [`StreamEvent::Error`]) unless the receiver hung up first. A stream
/// that closes without `[DONE]` counts as completed.
///
/// Returns as soon as the receiver is dropped, even while the upstream is
/// silent, so the connection is released when the caller times out.
pub async fn pump_events<S, B, E>(bytes: S, tx: mpsc::Sender<StreamEvent>)
where
    S: Stream<Item = Result<B, E>>,
    B: AsRef<[u8]>,
    E: Display,
{
    let mut events = pin!(bytes.eventsource());

    loop {
        let next = tokio::select! {
            _ = tx.closed() => {
                debug!("Stream receiver dropped, closing upstream");
                return;
            }
            next = events.next() => next,
        };
        let Some(event) = next else {
            break;
        };

        let decoded = match event {
            Ok(event) if event.data.trim() == DONE_SENTINEL => {
                let _ = tx.send(StreamEvent::Completed).await;
                return;
            }
            Ok(event) => {
                trace!(data = %event.data, "SSE chunk");
                decode_chunk(&event.data).unwrap_or_else(|e| vec![StreamEvent::Error(e.to_string())])
            }
            Err(e) => vec![StreamEvent::Error(format!("SSE parse error: {e}"))],
        };

        for event in decoded {
            let terminal = event.is_terminal();
            if tx.send(event).await.is_err() || terminal {
                return;
            }
        }
    }

    let _ = tx.send(StreamEvent::Completed).await;
}
