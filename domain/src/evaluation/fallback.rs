//! Degrade-to-mock synthesis.
//!
//! When a backend call fails the pipeline substitutes plausible synthetic
//! data instead of failing the request. Everything produced here is tagged
//! [`ResultSource::Fallback`](super::value_objects::ResultSource::Fallback).

use super::value_objects::{Generation, GenerationMetrics, JudgeScore};
use crate::core::string::prefix_chars;
use crate::registry::models::ModelDescriptor;
use rand::Rng;
use rand::seq::SliceRandom;
use std::ops::RangeInclusive;

/// Ratings the fallback judge draws from
pub const MOCK_RATING_POOL: [f64; 7] = [3.2, 3.8, 4.1, 4.5, 2.9, 3.7, 4.3];

/// Range for synthesized total generation time (ms)
pub const MOCK_TOTAL_TIME_MS: RangeInclusive<u64> = 1000..=4000;

/// Range for synthesized token counts
pub const MOCK_TOKEN_COUNT: RangeInclusive<u64> = 100..=400;

/// TTFT range (ms) used for models without a specific profile
pub const DEFAULT_MOCK_TTFT_MS: RangeInclusive<u64> = 100..=400;

/// Characters of the prompt echoed in mock responses
const PROMPT_PREVIEW_CHARS: usize = 50;

/// Per-model TTFT range (ms) for synthesized metrics
pub fn mock_ttft_range(model_id: &str) -> RangeInclusive<u64> {
    match model_id {
        "gpt-4o" => 150..=350,
        "gpt-4o-mini" => 100..=250,
        "gpt-5" => 200..=500,
        "claude-3-7-sonnet" | "claude-3-5-sonnet-20241022" => 200..=450,
        "claude-3-5-haiku" => 50..=150,
        "llama-3.1-8b" => 100..=250,
        "gemini-2.5-flash" => 80..=200,
        _ => DEFAULT_MOCK_TTFT_MS,
    }
}

/// Build a deterministic mock response from the model and prompt
pub fn mock_response(model: &ModelDescriptor, prompt: &str) -> String {
    let preview = prefix_chars(prompt, PROMPT_PREVIEW_CHARS);
    match model.provider.as_str() {
        "OpenAI" => format!(
            "Here's a comprehensive solution for \"{preview}...\":\n\n\
             I'll approach this systematically by breaking down the requirements and implementing \
             a robust solution, starting with the core functionality and then adding error handling.\n\n\
             [Fallback response - {} was unavailable]",
            model.display_name
        ),
        "Anthropic" => format!(
            "I'd be happy to help with \"{preview}...\"!\n\n\
             Let me think through this step by step:\n\n\
             1. First, I'll analyze the key requirements\n\
             2. Then I'll design an efficient approach\n\
             3. Finally, I'll implement with best practices\n\n\
             [Fallback response - {} was unavailable]",
            model.display_name
        ),
        "Meta" => format!(
            "For the task \"{preview}...\", here's my approach:\n\n\
             I'll provide a clear, practical solution that focuses on efficiency and readability, \
             broken down into manageable steps.\n\n\
             [Fallback response - {} was unavailable]",
            model.display_name
        ),
        _ => format!("Mock response for {}: {preview}...", model.id),
    }
}

/// Synthesize metrics in the documented mock ranges
pub fn mock_metrics<R: Rng + ?Sized>(model_id: &str, rng: &mut R) -> GenerationMetrics {
    GenerationMetrics::new(
        rng.gen_range(mock_ttft_range(model_id)),
        rng.gen_range(MOCK_TOTAL_TIME_MS),
        rng.gen_range(MOCK_TOKEN_COUNT),
    )
}

/// Full fallback generation for a model
pub fn mock_generation<R: Rng + ?Sized>(
    model: &ModelDescriptor,
    prompt: &str,
    rng: &mut R,
) -> Generation {
    Generation::fallback(mock_response(model, prompt), mock_metrics(&model.id, rng))
}

/// Reasoning text whose wording tracks the rating band
pub fn mock_reasoning(model_label: &str, rating: f64) -> String {
    let (quality, coverage) = if rating > 4.0 {
        ("excellent", "comprehensive coverage")
    } else if rating > 3.5 {
        ("good", "adequate coverage")
    } else {
        ("adequate", "basic coverage")
    };
    format!(
        "Fallback judge score for {model_label}. Response shows {quality} quality with clear \
         {coverage} of the prompt requirements. [The judge model was unavailable or its reply \
         could not be parsed]"
    )
}

/// Draw a fallback score from [`MOCK_RATING_POOL`]
pub fn mock_score<R: Rng + ?Sized>(model_label: &str, rng: &mut R) -> JudgeScore {
    let rating = *MOCK_RATING_POOL.choose(rng).unwrap_or(&MOCK_RATING_POOL[0]);
    JudgeScore::fallback(rating, mock_reasoning(model_label, rating))
}
