//! Domain layer for model-arena
//!
//! This crate contains the core types and pure logic of an evaluation.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Evaluation
//!
//! One prompt is fanned out to several models; each response is then scored
//! by a judge model against a rubric:
//!
//! - **Model Registry**: short model id → display name, provider, gateway id
//! - **Rubric Registry**: rubric id → ordered scoring criteria
//! - **Judge parsing**: free-text verdict → [`JudgeParse`]
//!
//! ## Degrade-to-mock
//!
//! Backend failures never fail a request. The [`evaluation::fallback`]
//! module synthesizes plausible data, tagged [`ResultSource::Fallback`].

pub mod core;
pub mod evaluation;
pub mod prompt;
pub mod registry;

// Re-export commonly used types
pub use core::{error::DomainError, prompt::Prompt};
pub use evaluation::{
    parsing::{JudgeParse, parse_judge_reply},
    stage::Stage,
    stream::{StreamEvent, TokenUsage, estimate_tokens},
    value_objects::{
        CriterionScore, EvaluationReport, Generation, GenerationMetrics, JudgeScore, MAX_RATING,
        MIN_RATING, ModelResult, ResultSource,
    },
};
pub use prompt::JudgePromptTemplate;
pub use registry::{
    models::{ModelDescriptor, ModelRegistry, UNKNOWN_PROVIDER},
    rubrics::{DEFAULT_RUBRIC_ID, RubricCriterion, RubricDefinition, RubricRegistry},
};
