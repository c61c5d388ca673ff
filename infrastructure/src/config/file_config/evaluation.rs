//! Evaluation configuration from TOML (`[evaluation]` section)

use arena_application::config::GenerationOptions;
use arena_domain::{DEFAULT_RUBRIC_ID, ModelRegistry};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw evaluation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEvaluationConfig {
    /// Models evaluated when a request names none
    pub default_models: Vec<String>,
    /// Rubric used when a request names none
    pub default_rubric: String,
    pub max_output_tokens: u32,
    pub temperature: f32,
    /// Per-model generation timeout in seconds
    pub generation_timeout_secs: u64,
}

impl Default for FileEvaluationConfig {
    fn default() -> Self {
        let generation = GenerationOptions::default();
        Self {
            default_models: ModelRegistry::default_model_ids(),
            default_rubric: DEFAULT_RUBRIC_ID.to_string(),
            max_output_tokens: generation.max_output_tokens,
            temperature: generation.temperature,
            generation_timeout_secs: 60,
        }
    }
}

impl FileEvaluationConfig {
    pub fn generation_options(&self) -> GenerationOptions {
        GenerationOptions {
            max_output_tokens: self.max_output_tokens,
            temperature: self.temperature,
        }
    }

    pub fn generation_timeout(&self) -> Duration {
        Duration::from_secs(self.generation_timeout_secs)
    }
}
