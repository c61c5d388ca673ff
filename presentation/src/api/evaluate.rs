//! POST /api/evaluate
//!
//! Request body: `{prompt, models?, rubricType?}`. The prompt is checked
//! before anything else so a missing or non-string prompt is always a 400;
//! any other malformed body is a 500 with a generic message.

use arena_application::RunEvaluationInput;
use arena_domain::EvaluationReport;
use axum::{Json, body::Bytes, extract::State};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::api::{ApiError, AppState};

pub const PROMPT_REQUIRED_MESSAGE: &str = "Prompt is required";

/// Optional fields of the request body
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EvaluateOptions {
    #[serde(default)]
    models: Option<Vec<String>>,
    #[serde(default)]
    rubric_type: Option<String>,
}

/// Decode and validate the raw request body
pub fn parse_request(body: &[u8]) -> Result<RunEvaluationInput, ApiError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| ApiError::Internal(format!("invalid JSON body: {e}")))?;

    let Value::Object(mut fields) = value else {
        return Err(ApiError::Internal("request body is not a JSON object".to_string()));
    };

    let prompt = match fields.remove("prompt") {
        Some(Value::String(prompt)) if !prompt.trim().is_empty() => prompt,
        _ => return Err(ApiError::BadRequest(PROMPT_REQUIRED_MESSAGE.to_string())),
    };

    let options: EvaluateOptions = serde_json::from_value(Value::Object(fields))
        .map_err(|e| ApiError::Internal(format!("invalid request fields: {e}")))?;

    Ok(RunEvaluationInput {
        prompt,
        model_ids: options.models,
        rubric_id: options.rubric_type,
    })
}

/// POST /api/evaluate
pub async fn evaluate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<EvaluationReport>, ApiError> {
    let input = parse_request(&body)?;
    info!(
        models = ?input.model_ids,
        rubric = ?input.rubric_id,
        "Evaluation requested"
    );

    let report = state.evaluation.execute(input).await?;
    Ok(Json(report))
}
