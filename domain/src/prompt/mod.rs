//! Prompt domain
//!
//! Templates for the prompts sent to the judge model.

mod template;

pub use template::JudgePromptTemplate;
