//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into application-layer
//! parameters at startup.

mod evaluation;
mod gateway;
mod judge;
mod server;

pub use evaluation::FileEvaluationConfig;
pub use gateway::{DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL, FileGatewayConfig};
pub use judge::FileJudgeConfig;
pub use server::{DEFAULT_BIND, FileServerConfig};

use arena_application::config::EvaluationParams;
use arena_domain::RubricRegistry;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// A detected issue in the loaded configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigIssue {
    pub severity: Severity,
    /// Dotted path of the offending key, e.g. `evaluation.temperature`
    pub field: String,
    pub message: String,
}

impl ConfigIssue {
    fn warning(field: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            field: field.to_string(),
            message: message.into(),
        }
    }

    fn error(field: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// HTTP server settings
    pub server: FileServerConfig,
    /// Inference gateway connection
    pub gateway: FileGatewayConfig,
    /// Generation defaults
    pub evaluation: FileEvaluationConfig,
    /// Judge model settings
    pub judge: FileJudgeConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Nothing here stops the pipeline from running: an unknown rubric
    /// resolves to the built-in default and a zero timeout simply sends
    /// every call down the fallback path.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.server.bind.parse::<std::net::SocketAddr>().is_err() {
            issues.push(ConfigIssue::error(
                "server.bind",
                format!("'{}' is not a valid socket address", self.server.bind),
            ));
        }

        if !self.gateway.base_url.starts_with("http://")
            && !self.gateway.base_url.starts_with("https://")
        {
            issues.push(ConfigIssue::error(
                "gateway.base_url",
                format!("'{}' must be an http(s) URL", self.gateway.base_url),
            ));
        }
        if self.gateway.connect_timeout_secs == 0 {
            issues.push(ConfigIssue::warning(
                "gateway.connect_timeout_secs",
                "zero timeout, every gateway call will fail",
            ));
        }

        if RubricRegistry::find(&self.evaluation.default_rubric).is_none() {
            issues.push(ConfigIssue::warning(
                "evaluation.default_rubric",
                format!(
                    "unknown rubric '{}', falling back to '{}'",
                    self.evaluation.default_rubric,
                    RubricRegistry::resolve(None).id
                ),
            ));
        }
        if self
            .evaluation
            .default_models
            .iter()
            .all(|id| id.trim().is_empty())
        {
            issues.push(ConfigIssue::warning(
                "evaluation.default_models",
                "no default models, requests without 'models' return no results",
            ));
        }
        if !(0.0..=2.0).contains(&self.evaluation.temperature) {
            issues.push(ConfigIssue::warning(
                "evaluation.temperature",
                format!("{} is outside 0.0-2.0", self.evaluation.temperature),
            ));
        }
        if self.evaluation.generation_timeout_secs == 0 {
            issues.push(ConfigIssue::warning(
                "evaluation.generation_timeout_secs",
                "zero timeout, every generation will use fallback data",
            ));
        }

        if self.judge.model.trim().is_empty() {
            issues.push(ConfigIssue::warning(
                "judge.model",
                "empty judge model, every score will use fallback data",
            ));
        }
        if self.judge.timeout_secs == 0 {
            issues.push(ConfigIssue::warning(
                "judge.timeout_secs",
                "zero timeout, every score will use fallback data",
            ));
        }

        issues
    }

    /// Convert to pipeline parameters
    pub fn to_evaluation_params(&self) -> EvaluationParams {
        EvaluationParams::default()
            .with_generation(self.evaluation.generation_options())
            .with_generation_timeout(self.evaluation.generation_timeout())
            .with_judge(self.judge.to_params())
            .with_default_models(self.evaluation.default_models.clone())
            .with_default_rubric(self.evaluation.default_rubric.clone())
    }

    /// Copy safe to print: any inline API key is masked
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        if config.gateway.api_key.is_some() {
            config.gateway.api_key = Some("********".to_string());
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[server]
bind = "0.0.0.0:8080"

[gateway]
base_url = "http://localhost:4000/v1"
api_key_env = "LOCAL_KEY"
connect_timeout_secs = 3

[evaluation]
default_models = ["gpt-4o-mini", "gemini-2.5-flash"]
default_rubric = "summarization"
max_output_tokens = 256
temperature = 0.2
generation_timeout_secs = 20

[judge]
model = "openai/gpt-4o-mini"
max_output_tokens = 300
timeout_secs = 15
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.bind, "0.0.0.0:8080");
        assert_eq!(config.gateway.base_url, "http://localhost:4000/v1");
        assert_eq!(config.gateway.api_key_env, "LOCAL_KEY");
        assert_eq!(config.evaluation.default_models.len(), 2);
        assert_eq!(config.judge.model, "openai/gpt-4o-mini");
        assert!(config.validate().is_empty());

        let params = config.to_evaluation_params();
        assert_eq!(params.generation.max_output_tokens, 256);
        assert_eq!(params.generation.temperature, 0.2);
        assert_eq!(params.generation_timeout, Duration::from_secs(20));
        assert_eq!(params.judge.backend_id, "openai/gpt-4o-mini");
        assert_eq!(params.judge.timeout, Duration::from_secs(15));
        assert_eq!(params.default_rubric, "summarization");
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[judge]
model = "openai/gpt-4o"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.judge.model, "openai/gpt-4o");
        // Defaults should apply
        assert_eq!(config.judge.max_output_tokens, 400);
        assert_eq!(config.server.bind, DEFAULT_BIND);
        assert_eq!(config.gateway.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.evaluation.default_rubric, "code-generation");
    }

    #[test]
    fn test_default_config_matches_application_defaults() {
        let config = FileConfig::default();
        assert_eq!(config.to_evaluation_params(), EvaluationParams::default());
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_reports_each_problem() {
        let mut config = FileConfig::default();
        config.evaluation.default_rubric = "poetry".to_string();
        config.evaluation.default_models = vec![" ".to_string()];
        config.evaluation.temperature = 3.5;
        config.evaluation.generation_timeout_secs = 0;
        config.judge.timeout_secs = 0;

        let issues = config.validate();
        let fields: Vec<_> = issues.iter().map(|i| i.field.as_str()).collect();
        assert_eq!(
            fields,
            vec![
                "evaluation.default_rubric",
                "evaluation.default_models",
                "evaluation.temperature",
                "evaluation.generation_timeout_secs",
                "judge.timeout_secs",
            ]
        );
        assert!(issues.iter().all(|i| i.severity == Severity::Warning));
    }

    #[test]
    fn test_validate_bad_bind_and_url_are_errors() {
        let mut config = FileConfig::default();
        config.server.bind = "localhost".to_string();
        config.gateway.base_url = "ftp://example.com".to_string();
        let issues = config.validate();
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.severity == Severity::Error));
    }

    #[test]
    fn test_redacted_masks_inline_key() {
        let mut config = FileConfig::default();
        config.gateway.api_key = Some("sk-secret".to_string());
        let shown = toml::to_string(&config.redacted()).unwrap();
        assert!(!shown.contains("sk-secret"));
        assert!(shown.contains("********"));
    }
}
