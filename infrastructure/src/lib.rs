//! Infrastructure layer for model-arena
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod gateway;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigLoadError, ConfigLoader, FileConfig, FileEvaluationConfig,
    FileGatewayConfig, FileJudgeConfig, FileServerConfig, Severity,
};
pub use gateway::{
    GatewaySettings, OpenAiCompatGateway, UnconfiguredGateway, build_gateway,
};
