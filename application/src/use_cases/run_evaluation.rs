//! Run Evaluation use case
//!
//! Orchestrates the full evaluation flow: every requested model answers the
//! prompt concurrently, then every response is judged concurrently, and the
//! two stages are zipped into an [`EvaluationReport`] in request order.
//!
//! Individual model or judge failures never fail the request; they degrade
//! to fallback data inside the invoker and judge. The only error is an
//! invalid prompt.

use crate::config::EvaluationParams;
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::use_cases::invoke_model::ModelInvoker;
use crate::use_cases::judge_response::ResponseJudge;
use arena_domain::{
    DomainError, EvaluationReport, Generation, JudgeScore, ModelDescriptor, ModelRegistry,
    ModelResult, Prompt, RubricDefinition, RubricRegistry, Stage,
};
use futures::future::join_all;
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can occur during an evaluation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RunEvaluationError {
    #[error("Invalid prompt: {0}")]
    InvalidPrompt(String),
}

impl From<DomainError> for RunEvaluationError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::InvalidPrompt(reason) => RunEvaluationError::InvalidPrompt(reason),
        }
    }
}

/// Input for the RunEvaluation use case
#[derive(Debug, Clone, Default)]
pub struct RunEvaluationInput {
    /// The prompt every model answers
    pub prompt: String,
    /// Models to evaluate; `None` means the configured defaults, while an
    /// explicit empty list evaluates nothing
    pub model_ids: Option<Vec<String>>,
    /// Rubric to judge against; unknown or absent ids use the default rubric
    pub rubric_id: Option<String>,
}

impl RunEvaluationInput {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model_ids: None,
            rubric_id: None,
        }
    }

    pub fn with_models(mut self, model_ids: Vec<String>) -> Self {
        self.model_ids = Some(model_ids);
        self
    }

    pub fn with_rubric(mut self, rubric_id: impl Into<String>) -> Self {
        self.rubric_id = Some(rubric_id.into());
        self
    }
}

/// Use case for running an evaluation
pub struct RunEvaluationUseCase {
    invoker: ModelInvoker,
    judge: ResponseJudge,
    params: EvaluationParams,
}

impl RunEvaluationUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>, params: EvaluationParams) -> Self {
        Self {
            invoker: ModelInvoker::new(Arc::clone(&gateway), params.generation_timeout),
            judge: ResponseJudge::new(gateway, params.judge.clone()),
            params,
        }
    }

    pub fn params(&self) -> &EvaluationParams {
        &self.params
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        input: RunEvaluationInput,
    ) -> Result<EvaluationReport, RunEvaluationError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: RunEvaluationInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<EvaluationReport, RunEvaluationError> {
        let prompt = Prompt::try_new(input.prompt)?;
        let rubric = RubricRegistry::resolve_with_default(
            input.rubric_id.as_deref(),
            &self.params.default_rubric,
        );
        let models: Vec<ModelDescriptor> = self
            .resolve_model_ids(input.model_ids)
            .iter()
            .map(|id| ModelRegistry::resolve(id))
            .collect();

        info!(
            models = models.len(),
            rubric = rubric.id,
            "Starting evaluation"
        );

        let generations = self.stage_generation(&prompt, &models, progress).await;
        let scores = self
            .stage_judging(&prompt, &models, &generations, rubric, progress)
            .await;

        let results: Vec<ModelResult> = models
            .into_iter()
            .zip(generations)
            .zip(scores)
            .map(|((model, generation), score)| ModelResult {
                model_id: model.id,
                model_name: model.display_name,
                provider: model.provider,
                response_text: generation.response_text,
                source: generation.source,
                metrics: generation.metrics,
                score,
            })
            .collect();

        let report = EvaluationReport::new(rubric.id, results);
        info!(
            results = report.results.len(),
            degraded = report.degraded_count(),
            "Evaluation complete"
        );
        Ok(report)
    }

    /// Normalize requested model ids.
    ///
    /// Ids are trimmed, blanks dropped, and duplicates removed keeping the
    /// first occurrence. `None` falls back to the configured defaults.
    pub fn resolve_model_ids(&self, requested: Option<Vec<String>>) -> Vec<String> {
        let requested = requested.unwrap_or_else(|| self.params.default_models.clone());
        let mut seen = HashSet::new();
        requested
            .iter()
            .map(|id| id.trim())
            .filter(|id| !id.is_empty())
            .filter(|id| seen.insert(id.to_string()))
            .map(str::to_string)
            .collect()
    }

    /// Stage 1: every model answers concurrently
    async fn stage_generation(
        &self,
        prompt: &Prompt,
        models: &[ModelDescriptor],
        progress: &dyn ProgressNotifier,
    ) -> Vec<Generation> {
        info!("Stage 1: Generation");
        progress.on_stage_start(Stage::Generation, models.len());

        let generations = join_all(models.iter().map(|model| async move {
            let generation = self
                .invoker
                .invoke_descriptor(model, prompt.content(), &self.params.generation)
                .await;
            progress.on_model_complete(Stage::Generation, &model.display_name, generation.source);
            generation
        }))
        .await;

        progress.on_stage_complete(Stage::Generation);
        generations
    }

    /// Stage 2: every response is judged concurrently
    async fn stage_judging(
        &self,
        prompt: &Prompt,
        models: &[ModelDescriptor],
        generations: &[Generation],
        rubric: &RubricDefinition,
        progress: &dyn ProgressNotifier,
    ) -> Vec<JudgeScore> {
        info!("Stage 2: Judging");
        progress.on_stage_start(Stage::Judging, models.len());

        let scores = join_all(models.iter().zip(generations).map(|(model, generation)| async move {
            let score = self
                .judge
                .score(
                    prompt.content(),
                    &generation.response_text,
                    &model.display_name,
                    Some(rubric),
                )
                .await;
            progress.on_model_complete(Stage::Judging, &model.display_name, score.source);
            score
        }))
        .await;

        progress.on_stage_complete(Stage::Judging);
        scores
    }
}
