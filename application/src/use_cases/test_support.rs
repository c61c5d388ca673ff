//! Scripted gateway shared by the use case tests

use crate::ports::llm_gateway::{
    Completion, GatewayError, GenerationRequest, LlmGateway, StreamHandle,
};
use arena_domain::StreamEvent;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;
use tokio::sync::mpsc;

enum StreamScript {
    Events(Vec<StreamEvent>),
    Fail(GatewayError),
    Hang,
}

enum JudgeScript {
    Reply(String),
    Fail(GatewayError),
    Hang,
}

/// Gateway whose answers are scripted per backend id.
///
/// Backends without a stream script fail with `NotConfigured`, as does the
/// judge when no reply is scripted.
pub(crate) struct ScriptedGateway {
    streams: HashMap<String, StreamScript>,
    stream_delays: HashMap<String, Duration>,
    judge: Option<JudgeScript>,
    /// Judge replies chosen by a needle found in the judge prompt
    judge_overrides: Vec<(String, String)>,
    stream_requests: Mutex<Vec<GenerationRequest>>,
    completion_requests: Mutex<Vec<GenerationRequest>>,
    /// Keeps hung streams open
    parked: Mutex<Vec<mpsc::Sender<StreamEvent>>>,
}

impl ScriptedGateway {
    pub(crate) fn new() -> Self {
        Self {
            streams: HashMap::new(),
            stream_delays: HashMap::new(),
            judge: None,
            judge_overrides: Vec::new(),
            stream_requests: Mutex::new(Vec::new()),
            completion_requests: Mutex::new(Vec::new()),
            parked: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn with_stream(mut self, backend_id: &str, events: Vec<StreamEvent>) -> Self {
        self.streams
            .insert(backend_id.to_string(), StreamScript::Events(events));
        self
    }

    /// Stream that replays `text` as a single delta
    pub(crate) fn with_text(self, backend_id: &str, text: &str) -> Self {
        self.with_stream(
            backend_id,
            vec![StreamEvent::Delta(text.to_string()), StreamEvent::Completed],
        )
    }

    pub(crate) fn with_stream_error(mut self, backend_id: &str, error: GatewayError) -> Self {
        self.streams
            .insert(backend_id.to_string(), StreamScript::Fail(error));
        self
    }

    pub(crate) fn with_hanging_stream(mut self, backend_id: &str) -> Self {
        self.streams.insert(backend_id.to_string(), StreamScript::Hang);
        self
    }

    pub(crate) fn with_stream_delay(mut self, backend_id: &str, delay: Duration) -> Self {
        self.stream_delays.insert(backend_id.to_string(), delay);
        self
    }

    pub(crate) fn with_judge_reply(mut self, reply: &str) -> Self {
        self.judge = Some(JudgeScript::Reply(reply.to_string()));
        self
    }

    pub(crate) fn with_judge_reply_for(mut self, needle: &str, reply: &str) -> Self {
        self.judge_overrides
            .push((needle.to_string(), reply.to_string()));
        self
    }

    pub(crate) fn with_judge_error(mut self, error: GatewayError) -> Self {
        self.judge = Some(JudgeScript::Fail(error));
        self
    }

    pub(crate) fn with_hanging_judge(mut self) -> Self {
        self.judge = Some(JudgeScript::Hang);
        self
    }

    pub(crate) fn stream_requests(&self) -> Vec<GenerationRequest> {
        self.stream_requests.lock().unwrap().clone()
    }

    pub(crate) fn completion_requests(&self) -> Vec<GenerationRequest> {
        self.completion_requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmGateway for ScriptedGateway {
    async fn stream(&self, request: &GenerationRequest) -> Result<StreamHandle, GatewayError> {
        self.stream_requests.lock().unwrap().push(request.clone());

        if let Some(delay) = self.stream_delays.get(&request.backend_id) {
            tokio::time::sleep(*delay).await;
        }

        match self.streams.get(&request.backend_id) {
            Some(StreamScript::Events(events)) => Ok(StreamHandle::from_events(events.clone())),
            Some(StreamScript::Fail(error)) => Err(error.clone()),
            Some(StreamScript::Hang) => {
                let (tx, rx) = mpsc::channel(1);
                self.parked.lock().unwrap().push(tx);
                Ok(StreamHandle::new(rx))
            }
            None => Err(GatewayError::NotConfigured),
        }
    }

    async fn complete(&self, request: &GenerationRequest) -> Result<Completion, GatewayError> {
        self.completion_requests.lock().unwrap().push(request.clone());

        if let Some((_, reply)) = self
            .judge_overrides
            .iter()
            .find(|(needle, _)| request.prompt.contains(needle.as_str()))
        {
            return Ok(Completion {
                text: reply.clone(),
                usage: None,
            });
        }

        match &self.judge {
            Some(JudgeScript::Reply(text)) => Ok(Completion {
                text: text.clone(),
                usage: None,
            }),
            Some(JudgeScript::Fail(error)) => Err(error.clone()),
            Some(JudgeScript::Hang) => {
                std::future::pending::<()>().await;
                Err(GatewayError::Timeout)
            }
            None => Err(GatewayError::NotConfigured),
        }
    }
}
