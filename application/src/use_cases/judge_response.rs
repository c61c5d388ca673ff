//! Judge
//!
//! Asks the judge model to score one response, optionally against a rubric.
//! An unavailable judge or an unreadable reply degrades to a synthesized
//! score drawn from the mock rating pool.

use crate::config::JudgeParams;
use crate::ports::llm_gateway::{GatewayError, GenerationRequest, LlmGateway};
use arena_domain::evaluation::fallback;
use arena_domain::{JudgeParse, JudgePromptTemplate, JudgeScore, RubricDefinition, parse_judge_reply};
use std::sync::Arc;
use tracing::{debug, warn};

/// Scores responses with the judge model and never fails
pub struct ResponseJudge {
    gateway: Arc<dyn LlmGateway>,
    params: JudgeParams,
}

impl ResponseJudge {
    pub fn new(gateway: Arc<dyn LlmGateway>, params: JudgeParams) -> Self {
        Self { gateway, params }
    }

    pub fn params(&self) -> &JudgeParams {
        &self.params
    }

    /// Score `response_text` as an answer to `prompt`.
    ///
    /// With a rubric the judge is asked for per-criterion scores as well;
    /// without one it rates on generic axes and `per_criterion` stays empty.
    pub async fn score(
        &self,
        prompt: &str,
        response_text: &str,
        model_label: &str,
        rubric: Option<&RubricDefinition>,
    ) -> JudgeScore {
        match self.request_verdict(prompt, response_text, model_label, rubric).await {
            Ok(JudgeParse::Parsed {
                rating,
                reasoning,
                criteria,
            }) => {
                debug!(model = %model_label, rating, "Judge verdict parsed");
                JudgeScore::live(rating, reasoning, criteria)
            }
            Ok(JudgeParse::Unparseable) => {
                warn!(model = %model_label, "Judge reply had no rating, using fallback score");
                fallback::mock_score(model_label, &mut rand::thread_rng())
            }
            Err(e) => {
                warn!(
                    model = %model_label,
                    judge = %self.params.backend_id,
                    error = %e,
                    "Judge call failed, using fallback score"
                );
                fallback::mock_score(model_label, &mut rand::thread_rng())
            }
        }
    }

    async fn request_verdict(
        &self,
        prompt: &str,
        response_text: &str,
        model_label: &str,
        rubric: Option<&RubricDefinition>,
    ) -> Result<JudgeParse, GatewayError> {
        let request = GenerationRequest::new(
            &self.params.backend_id,
            JudgePromptTemplate::judge_prompt(prompt, model_label, response_text, rubric),
            self.params.max_output_tokens,
        )
        .with_system_prompt(JudgePromptTemplate::judge_system());

        let completion = tokio::time::timeout(self.params.timeout, self.gateway.complete(&request))
            .await
            .map_err(|_| GatewayError::Timeout)??;

        let keys = rubric.map(RubricDefinition::criterion_keys).unwrap_or_default();
        Ok(parse_judge_reply(&completion.text, &keys))
    }
}
