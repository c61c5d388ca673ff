//! Evaluation value objects - immutable result types for one evaluation.
//!
//! - [`GenerationMetrics`] - latency and throughput of one model call
//! - [`Generation`] - a model's response text plus its metrics
//! - [`JudgeScore`] - the judge's rating of one response
//! - [`ModelResult`] - one model's generation joined with its score
//! - [`EvaluationReport`] - the full result set for a request

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Lowest rating the judge can award
pub const MIN_RATING: f64 = 0.0;
/// Highest rating the judge can award
pub const MAX_RATING: f64 = 5.0;

/// Clamp a rating into `[MIN_RATING, MAX_RATING]`; NaN maps to the minimum.
pub fn clamp_rating(rating: f64) -> f64 {
    if rating.is_nan() {
        MIN_RATING
    } else {
        rating.clamp(MIN_RATING, MAX_RATING)
    }
}

/// Where a generation or score came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultSource {
    /// Produced by the inference backend
    Live,
    /// Synthesized by the degrade-to-mock path
    Fallback,
}

impl ResultSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultSource::Live => "live",
            ResultSource::Fallback => "fallback",
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, ResultSource::Fallback)
    }
}

impl std::fmt::Display for ResultSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Timing and size of one generation.
///
/// `total_generation_time_ms >= time_to_first_token_ms` holds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationMetrics {
    #[serde(rename = "timeToFirstToken")]
    time_to_first_token_ms: u64,
    #[serde(rename = "totalGenerationTime")]
    total_generation_time_ms: u64,
    #[serde(rename = "tokenCount")]
    token_count: u64,
}

impl GenerationMetrics {
    /// Build metrics, raising the total to the TTFT if it is smaller
    pub fn new(time_to_first_token_ms: u64, total_generation_time_ms: u64, token_count: u64) -> Self {
        Self {
            time_to_first_token_ms,
            total_generation_time_ms: total_generation_time_ms.max(time_to_first_token_ms),
            token_count,
        }
    }

    pub fn time_to_first_token_ms(&self) -> u64 {
        self.time_to_first_token_ms
    }

    pub fn total_generation_time_ms(&self) -> u64 {
        self.total_generation_time_ms
    }

    pub fn token_count(&self) -> u64 {
        self.token_count
    }

    /// Output tokens per second over the whole generation
    pub fn tokens_per_second(&self) -> f64 {
        if self.total_generation_time_ms == 0 {
            return 0.0;
        }
        self.token_count as f64 * 1000.0 / self.total_generation_time_ms as f64
    }
}

/// A model's response and how it was produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Generation {
    pub response_text: String,
    pub metrics: GenerationMetrics,
    pub source: ResultSource,
}

impl Generation {
    pub fn live(response_text: impl Into<String>, metrics: GenerationMetrics) -> Self {
        Self {
            response_text: response_text.into(),
            metrics,
            source: ResultSource::Live,
        }
    }

    pub fn fallback(response_text: impl Into<String>, metrics: GenerationMetrics) -> Self {
        Self {
            response_text: response_text.into(),
            metrics,
            source: ResultSource::Fallback,
        }
    }
}

/// Score for a single rubric criterion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionScore {
    pub score: f64,
    pub reasoning: String,
}

impl CriterionScore {
    pub fn new(score: f64, reasoning: impl Into<String>) -> Self {
        Self {
            score: clamp_rating(score),
            reasoning: reasoning.into(),
        }
    }
}

/// The judge's verdict on one response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JudgeScore {
    #[serde(rename = "rating")]
    pub overall_rating: f64,
    pub reasoning: String,
    /// Per-criterion breakdown, keyed by rubric criterion key
    #[serde(rename = "criteria", default, skip_serializing_if = "Option::is_none")]
    pub per_criterion: Option<BTreeMap<String, CriterionScore>>,
    pub source: ResultSource,
}

impl JudgeScore {
    pub fn live(
        overall_rating: f64,
        reasoning: impl Into<String>,
        per_criterion: Option<BTreeMap<String, CriterionScore>>,
    ) -> Self {
        Self {
            overall_rating: clamp_rating(overall_rating),
            reasoning: reasoning.into(),
            per_criterion,
            source: ResultSource::Live,
        }
    }

    pub fn fallback(overall_rating: f64, reasoning: impl Into<String>) -> Self {
        Self {
            overall_rating: clamp_rating(overall_rating),
            reasoning: reasoning.into(),
            per_criterion: None,
            source: ResultSource::Fallback,
        }
    }
}

/// One model's entry in the result set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelResult {
    pub model_id: String,
    pub model_name: String,
    pub provider: String,
    #[serde(rename = "response")]
    pub response_text: String,
    /// Whether the response text came from the backend or the fallback
    pub source: ResultSource,
    pub metrics: GenerationMetrics,
    pub score: JudgeScore,
}

impl ModelResult {
    /// `true` if either the generation or the score is synthesized
    pub fn is_degraded(&self) -> bool {
        self.source.is_fallback() || self.score.source.is_fallback()
    }
}

/// Complete result set for one evaluation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationReport {
    /// Identifier of the rubric the judge applied
    pub rubric: String,
    pub evaluated_at: DateTime<Utc>,
    pub results: Vec<ModelResult>,
}

impl EvaluationReport {
    pub fn new(rubric: impl Into<String>, results: Vec<ModelResult>) -> Self {
        Self {
            rubric: rubric.into(),
            evaluated_at: Utc::now(),
            results,
        }
    }

    /// Number of entries that used any fallback data
    pub fn degraded_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_degraded()).count()
    }
}
