//! Evaluation parameters: use case behavior control.
//!
//! [`EvaluationParams`] groups the static parameters that control the
//! evaluation pipeline: generation options, the judge backend, per-call
//! timeouts, and request defaults. These are application-layer concerns,
//! not domain policy.

use arena_domain::{DEFAULT_RUBRIC_ID, ModelRegistry};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Options passed to every model generation call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub max_output_tokens: u32,
    pub temperature: f32,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            max_output_tokens: 500,
            temperature: 0.7,
        }
    }
}

/// Judge backend and limits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JudgeParams {
    /// Gateway identifier of the judge model
    pub backend_id: String,
    pub max_output_tokens: u32,
    /// Timeout for a single judge call
    pub timeout: Duration,
}

impl Default for JudgeParams {
    fn default() -> Self {
        Self {
            backend_id: "anthropic/claude-3-5-haiku".to_string(),
            max_output_tokens: 400,
            timeout: Duration::from_secs(30),
        }
    }
}

/// Evaluation pipeline parameters.
///
/// | Field | Used by |
/// |-------|---------|
/// | `generation`, `generation_timeout` | Model Invoker |
/// | `judge` | Judge |
/// | `default_models`, `default_rubric` | Orchestrator |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationParams {
    pub generation: GenerationOptions,
    /// Timeout for a single streaming generation, first byte to last
    pub generation_timeout: Duration,
    pub judge: JudgeParams,
    /// Models evaluated when the request names none
    pub default_models: Vec<String>,
    /// Rubric used when the request names none (or an unknown one)
    pub default_rubric: String,
}

impl Default for EvaluationParams {
    fn default() -> Self {
        Self {
            generation: GenerationOptions::default(),
            generation_timeout: Duration::from_secs(60),
            judge: JudgeParams::default(),
            default_models: ModelRegistry::default_model_ids(),
            default_rubric: DEFAULT_RUBRIC_ID.to_string(),
        }
    }
}

impl JudgeParams {
    pub fn with_backend_id(mut self, backend_id: impl Into<String>) -> Self {
        self.backend_id = backend_id.into();
        self
    }

    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl EvaluationParams {
    // ==================== Builder Methods ====================

    pub fn with_generation(mut self, generation: GenerationOptions) -> Self {
        self.generation = generation;
        self
    }

    pub fn with_generation_timeout(mut self, timeout: Duration) -> Self {
        self.generation_timeout = timeout;
        self
    }

    pub fn with_judge(mut self, judge: JudgeParams) -> Self {
        self.judge = judge;
        self
    }

    pub fn with_default_models(mut self, models: Vec<String>) -> Self {
        self.default_models = models;
        self
    }

    pub fn with_default_rubric(mut self, rubric: impl Into<String>) -> Self {
        self.default_rubric = rubric.into();
        self
    }
}
