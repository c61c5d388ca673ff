//! Model registry
//!
//! Static table of the models the arena knows how to route, keyed by the
//! short identifier clients send (`gpt-4o`, `claude-3-5-haiku`, ...).

use serde::{Deserialize, Serialize};

/// Provider label used for identifiers missing from the registry
pub const UNKNOWN_PROVIDER: &str = "Unknown";

/// Describes one model and how to reach it through the gateway (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDescriptor {
    /// Short identifier used in requests
    pub id: String,
    /// Human-readable name
    #[serde(rename = "name")]
    pub display_name: String,
    /// Provider label (OpenAI, Anthropic, ...)
    pub provider: String,
    /// `provider/model` identifier understood by the gateway
    #[serde(rename = "gatewayId")]
    pub backend_id: String,
}

impl ModelDescriptor {
    fn from_entry(entry: &ModelEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            display_name: entry.display_name.to_string(),
            provider: entry.provider.to_string(),
            backend_id: entry.backend_id.to_string(),
        }
    }

    /// Descriptor synthesized for an identifier the registry does not know
    pub fn unknown(id: &str) -> Self {
        Self {
            id: id.to_string(),
            display_name: id.to_string(),
            provider: UNKNOWN_PROVIDER.to_string(),
            backend_id: id.to_string(),
        }
    }

    /// Returns `true` if this descriptor came from the static table
    pub fn is_known(&self) -> bool {
        ModelRegistry::find(&self.id).is_some()
    }
}

struct ModelEntry {
    id: &'static str,
    display_name: &'static str,
    provider: &'static str,
    backend_id: &'static str,
}

const KNOWN_MODELS: &[ModelEntry] = &[
    ModelEntry {
        id: "gpt-4o",
        display_name: "GPT-4o",
        provider: "OpenAI",
        backend_id: "openai/gpt-4o",
    },
    ModelEntry {
        id: "gpt-4o-mini",
        display_name: "GPT-4o Mini",
        provider: "OpenAI",
        backend_id: "openai/gpt-4o-mini",
    },
    ModelEntry {
        id: "gpt-5",
        display_name: "GPT-5",
        provider: "OpenAI",
        backend_id: "openai/gpt-5",
    },
    ModelEntry {
        id: "claude-3-7-sonnet",
        display_name: "Claude 3.7 Sonnet",
        provider: "Anthropic",
        backend_id: "anthropic/claude-3-7-sonnet",
    },
    ModelEntry {
        id: "claude-3-5-sonnet-20241022",
        display_name: "Claude 3.5 Sonnet",
        provider: "Anthropic",
        backend_id: "anthropic/claude-3-5-sonnet-20241022",
    },
    ModelEntry {
        id: "claude-3-5-haiku",
        display_name: "Claude 3.5 Haiku",
        provider: "Anthropic",
        backend_id: "anthropic/claude-3-5-haiku",
    },
    ModelEntry {
        id: "llama-3.1-8b",
        display_name: "Llama 3.1 8B",
        provider: "Meta",
        backend_id: "meta/llama-3.1-8b",
    },
    ModelEntry {
        id: "gemini-2.5-flash",
        display_name: "Gemini 2.5 Flash",
        provider: "Google",
        backend_id: "google/gemini-2.5-flash",
    },
];

const DEFAULT_MODEL_IDS: &[&str] = &["gpt-4o", "claude-3-7-sonnet", "claude-3-5-haiku"];

/// Read-only lookup over the static model table
pub struct ModelRegistry;

impl ModelRegistry {
    /// Resolve an identifier to its descriptor.
    ///
    /// Unknown identifiers never fail: they resolve to a descriptor with
    /// `provider == "Unknown"` that routes the raw id to the gateway.
    pub fn resolve(id: &str) -> ModelDescriptor {
        Self::find(id).unwrap_or_else(|| ModelDescriptor::unknown(id))
    }

    /// Look up a registered model without synthesizing a fallback
    pub fn find(id: &str) -> Option<ModelDescriptor> {
        KNOWN_MODELS
            .iter()
            .find(|entry| entry.id == id)
            .map(ModelDescriptor::from_entry)
    }

    /// All registered models, in registration order
    pub fn list_available() -> Vec<ModelDescriptor> {
        KNOWN_MODELS.iter().map(ModelDescriptor::from_entry).collect()
    }

    /// Models evaluated when a request does not name any
    pub fn default_model_ids() -> Vec<String> {
        DEFAULT_MODEL_IDS.iter().map(|s| s.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_model() {
        let model = ModelRegistry::resolve("gpt-4o");
        assert_eq!(model.display_name, "GPT-4o");
        assert_eq!(model.provider, "OpenAI");
        assert_eq!(model.backend_id, "openai/gpt-4o");
        assert!(model.is_known());
    }

    #[test]
    fn test_resolve_unknown_model() {
        let model = ModelRegistry::resolve("mistral/mistral-large");
        assert_eq!(model.display_name, "mistral/mistral-large");
        assert_eq!(model.provider, UNKNOWN_PROVIDER);
        assert_eq!(model.backend_id, "mistral/mistral-large");
        assert!(!model.is_known());
    }

    #[test]
    fn test_list_available_is_stable() {
        let first = ModelRegistry::list_available();
        let second = ModelRegistry::list_available();
        assert_eq!(first, second);
        assert_eq!(first.len(), 8);
        assert_eq!(first[0].id, "gpt-4o");
    }

    #[test]
    fn test_ids_are_unique() {
        let models = ModelRegistry::list_available();
        let mut ids: Vec<_> = models.iter().map(|m| m.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), models.len());
    }

    #[test]
    fn test_default_models_are_registered() {
        let defaults = ModelRegistry::default_model_ids();
        assert_eq!(defaults.len(), 3);
        for id in defaults {
            assert!(ModelRegistry::find(&id).is_some(), "{id} is not registered");
        }
    }

    #[test]
    fn test_descriptor_serializes_for_selector() {
        let json = serde_json::to_value(ModelRegistry::resolve("claude-3-5-haiku")).unwrap();
        assert_eq!(json["name"], "Claude 3.5 Haiku");
        assert_eq!(json["gatewayId"], "anthropic/claude-3-5-haiku");
    }
}
