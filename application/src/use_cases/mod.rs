//! Use cases for the evaluation pipeline

pub mod invoke_model;
pub mod judge_response;
pub mod run_evaluation;

#[cfg(test)]
pub(crate) mod test_support;
