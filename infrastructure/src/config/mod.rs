//! Configuration file loading for model-arena
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `ARENA_<SECTION>__<KEY>`
//! 2. `--config <path>` specified file
//! 3. Project root: `./arena.toml` or `./.arena.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/model-arena/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_BIND, FileConfig,
    FileEvaluationConfig, FileGatewayConfig, FileJudgeConfig, FileServerConfig, Severity,
};
pub use loader::{ConfigLoadError, ConfigLoader, ENV_PREFIX};
