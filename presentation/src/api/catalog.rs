//! Registry listings for model and rubric selectors

use axum::{Json, extract::State};
use arena_domain::{ModelDescriptor, ModelRegistry, RubricDefinition, RubricRegistry};
use serde::Serialize;

use crate::api::AppState;

#[derive(Debug, Serialize)]
pub struct ModelsResponse {
    pub models: Vec<ModelDescriptor>,
    /// Models evaluated when a request omits `models`
    pub defaults: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RubricsResponse {
    pub rubrics: &'static [RubricDefinition],
    pub default: String,
}

/// GET /api/models
pub async fn list_models(State(state): State<AppState>) -> Json<ModelsResponse> {
    Json(ModelsResponse {
        models: ModelRegistry::list_available(),
        defaults: state.evaluation.params().default_models.clone(),
    })
}

/// GET /api/rubrics
pub async fn list_rubrics(State(state): State<AppState>) -> Json<RubricsResponse> {
    Json(RubricsResponse {
        rubrics: RubricRegistry::list_available(),
        default: RubricRegistry::resolve(Some(&state.evaluation.params().default_rubric))
            .id
            .to_string(),
    })
}

#[cfg(test)]
mod tests {
    use crate::api::test_support::{app, get, send};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_list_models() {
        let (status, body) = send(app(), get("/api/models")).await;
        assert_eq!(status, StatusCode::OK);

        let models = body["models"].as_array().unwrap();
        assert_eq!(models.len(), 8);
        assert_eq!(models[0]["id"], "gpt-4o");
        assert_eq!(models[0]["name"], "GPT-4o");
        assert_eq!(models[0]["gatewayId"], "openai/gpt-4o");
        assert_eq!(body["defaults"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_list_rubrics() {
        let (status, body) = send(app(), get("/api/rubrics")).await;
        assert_eq!(status, StatusCode::OK);

        let rubrics = body["rubrics"].as_array().unwrap();
        let ids: Vec<_> = rubrics.iter().map(|r| r["id"].as_str().unwrap()).collect();
        assert_eq!(ids, vec!["code-generation", "summarization", "creative-writing"]);
        assert_eq!(rubrics[0]["criteria"][0]["key"], "syntacticCorrectness");
        assert_eq!(body["default"], "code-generation");
    }
}
