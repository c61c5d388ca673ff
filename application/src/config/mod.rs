//! Application-level configuration.
//!
//! - [`EvaluationParams`]: pipeline control (generation options, judge, timeouts, defaults)

pub mod evaluation_params;

pub use evaluation_params::{EvaluationParams, GenerationOptions, JudgeParams};
