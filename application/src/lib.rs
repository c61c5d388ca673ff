//! Application layer for model-arena
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{EvaluationParams, GenerationOptions, JudgeParams};
pub use ports::{
    llm_gateway::{Completion, GatewayError, GenerationRequest, LlmGateway, StreamHandle},
    progress::{NoProgress, ProgressNotifier},
};
pub use use_cases::invoke_model::ModelInvoker;
pub use use_cases::judge_response::ResponseJudge;
pub use use_cases::run_evaluation::{RunEvaluationError, RunEvaluationInput, RunEvaluationUseCase};
