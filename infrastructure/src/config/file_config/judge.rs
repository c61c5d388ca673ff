//! Judge configuration from TOML (`[judge]` section)

use arena_application::config::JudgeParams;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileJudgeConfig {
    /// Gateway identifier of the judge model
    pub model: String,
    pub max_output_tokens: u32,
    pub timeout_secs: u64,
}

impl Default for FileJudgeConfig {
    fn default() -> Self {
        let params = JudgeParams::default();
        Self {
            model: params.backend_id,
            max_output_tokens: params.max_output_tokens,
            timeout_secs: params.timeout.as_secs(),
        }
    }
}

impl FileJudgeConfig {
    pub fn to_params(&self) -> JudgeParams {
        JudgeParams {
            backend_id: self.model.clone(),
            max_output_tokens: self.max_output_tokens,
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}
