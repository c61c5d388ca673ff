//! Rubric registry
//!
//! Each rubric is a named, ordered set of criteria the judge scores a
//! response against. Lookups never fail: absent or unknown identifiers fall
//! back to a default rubric.

use serde::Serialize;

/// Rubric used when a request names none (or an unknown one)
pub const DEFAULT_RUBRIC_ID: &str = "code-generation";

/// One scoring criterion within a rubric
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RubricCriterion {
    /// Stable key used in judge replies and result payloads
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Guidance embedded in the judge prompt for this criterion
    #[serde(rename = "prompt")]
    pub judge_prompt_fragment: &'static str,
}

/// A named set of criteria
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RubricDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub criteria: &'static [RubricCriterion],
}

impl RubricDefinition {
    /// Criterion keys in rubric order
    pub fn criterion_keys(&self) -> Vec<&'static str> {
        self.criteria.iter().map(|c| c.key).collect()
    }

    /// Look up a criterion by key
    pub fn criterion(&self, key: &str) -> Option<&RubricCriterion> {
        self.criteria.iter().find(|c| c.key == key)
    }
}

const CODE_GENERATION: RubricDefinition = RubricDefinition {
    id: "code-generation",
    name: "Code Generation",
    description: "Uses syntactic correctness (# of compile errors), style, completeness, and conciseness as grading criteria.",
    criteria: &[
        RubricCriterion {
            key: "syntacticCorrectness",
            name: "Syntactic Correctness",
            description: "Does the code appear syntactically valid and free of obvious compile errors like mismatched brackets or typos?",
            judge_prompt_fragment: "Analyze the code. On a scale of 1-5, how likely is it to be syntactically correct and compile without errors?",
        },
        RubricCriterion {
            key: "readabilityAndStyle",
            name: "Readability & Style",
            description: "Does the code adhere to community best practices? Is it well-structured, properly named, and easy for another developer to understand?",
            judge_prompt_fragment: "Evaluate the code's readability and adherence to idiomatic style for its language. Is it clean and maintainable?",
        },
        RubricCriterion {
            key: "completenessAndAccuracy",
            name: "Completeness & Accuracy",
            description: "Does the generated code fully implement the logic requested in the prompt? Does it handle potential edge cases mentioned or implied?",
            judge_prompt_fragment: "Compare the code against the original prompt. Does it successfully solve the entire problem requested, or are parts missing or incorrect?",
        },
        RubricCriterion {
            key: "efficiencyAndConciseness",
            name: "Efficiency & Conciseness",
            description: "Does the code use efficient algorithms and data structures for the task? Is it concise without being obscure?",
            judge_prompt_fragment: "Evaluate the code's efficiency and conciseness. Does it use appropriate algorithms and avoid unnecessary complexity?",
        },
    ],
};

const SUMMARIZATION: RubricDefinition = RubricDefinition {
    id: "summarization",
    name: "Summarization / Data Extraction",
    description: "Uses factual fidelity, coverage, and brevity as grading criteria.",
    criteria: &[
        RubricCriterion {
            key: "factualFidelity",
            name: "Factual Fidelity",
            description: "Does the summary accurately reflect the source document without adding fabricated information (hallucinations)?",
            judge_prompt_fragment: "Compare the summary to the source text. Does the summary contain any information that is not present in the original? Rate its factual fidelity.",
        },
        RubricCriterion {
            key: "coverage",
            name: "Coverage",
            description: "Does the summary include all the key points and critical information from the source?",
            judge_prompt_fragment: "Did the summary successfully extract all the most important concepts from the source text, or did it miss something critical?",
        },
        RubricCriterion {
            key: "brevity",
            name: "Brevity",
            description: "Is the summary appropriately concise and free of redundant phrasing?",
            judge_prompt_fragment: "Evaluate the conciseness of the summary. Is it succinct and to the point?",
        },
    ],
};

const CREATIVE_WRITING: RubricDefinition = RubricDefinition {
    id: "creative-writing",
    name: "Creative Writing",
    description: "Uses instruction adherence, coherence, and creativity as grading criteria.",
    criteria: &[
        RubricCriterion {
            key: "instructionAdherence",
            name: "Instruction Adherence",
            description: "Did the model follow all constraints like tone, style, format, and keywords? This is the most important criterion for creative tasks.",
            judge_prompt_fragment: "Review the prompt's constraints (tone, style, keywords). How well did the generated text adhere to every single instruction?",
        },
        RubricCriterion {
            key: "coherenceAndFlow",
            name: "Coherence & Flow",
            description: "Is the text well-structured and easy to read? Do the sentences and paragraphs flow logically?",
            judge_prompt_fragment: "Assess the logical flow and coherence of the text. Is it well-organized and easy to follow?",
        },
        RubricCriterion {
            key: "engagementAndCreativity",
            name: "Engagement & Creativity",
            description: "Is the output generic and boring, or is it interesting, novel, and engaging for a human reader?",
            judge_prompt_fragment: "Rate the creativity and engagement level of this text. Is it more than just a generic response?",
        },
    ],
};

static RUBRICS: &[RubricDefinition] = &[CODE_GENERATION, SUMMARIZATION, CREATIVE_WRITING];

/// Read-only lookup over the static rubric table
pub struct RubricRegistry;

impl RubricRegistry {
    /// Resolve a rubric, falling back to [`DEFAULT_RUBRIC_ID`]
    pub fn resolve(id: Option<&str>) -> &'static RubricDefinition {
        Self::resolve_with_default(id, DEFAULT_RUBRIC_ID)
    }

    /// Resolve a rubric, falling back to `default_id` and then to the
    /// built-in default when `default_id` is itself unknown.
    pub fn resolve_with_default(id: Option<&str>, default_id: &str) -> &'static RubricDefinition {
        id.and_then(Self::find)
            .or_else(|| Self::find(default_id))
            .unwrap_or(&RUBRICS[0])
    }

    /// Look up a rubric without falling back
    pub fn find(id: &str) -> Option<&'static RubricDefinition> {
        RUBRICS.iter().find(|r| r.id == id)
    }

    /// All rubrics, in registration order
    pub fn list_available() -> &'static [RubricDefinition] {
        RUBRICS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_rubric() {
        let rubric = RubricRegistry::resolve(Some("summarization"));
        assert_eq!(rubric.id, "summarization");
        assert_eq!(rubric.criteria.len(), 3);
    }

    #[test]
    fn test_resolve_missing_or_unknown_falls_back() {
        assert_eq!(RubricRegistry::resolve(None).id, DEFAULT_RUBRIC_ID);
        assert_eq!(RubricRegistry::resolve(Some("poetry")).id, DEFAULT_RUBRIC_ID);
        assert_eq!(RubricRegistry::resolve(Some("")).id, DEFAULT_RUBRIC_ID);
    }

    #[test]
    fn test_resolve_with_configured_default() {
        let rubric = RubricRegistry::resolve_with_default(Some("nope"), "creative-writing");
        assert_eq!(rubric.id, "creative-writing");

        // Unknown configured default still lands on the built-in default
        let rubric = RubricRegistry::resolve_with_default(None, "also-nope");
        assert_eq!(rubric.id, DEFAULT_RUBRIC_ID);
    }

    #[test]
    fn test_code_generation_keys() {
        let rubric = RubricRegistry::resolve(Some("code-generation"));
        assert_eq!(
            rubric.criterion_keys(),
            vec![
                "syntacticCorrectness",
                "readabilityAndStyle",
                "completenessAndAccuracy",
                "efficiencyAndConciseness",
            ]
        );
    }

    #[test]
    fn test_criterion_keys_unique_per_rubric() {
        for rubric in RubricRegistry::list_available() {
            let mut keys = rubric.criterion_keys();
            keys.sort();
            keys.dedup();
            assert_eq!(keys.len(), rubric.criteria.len(), "{}", rubric.id);
        }
    }

    #[test]
    fn test_list_available_order() {
        let ids: Vec<_> = RubricRegistry::list_available().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["code-generation", "summarization", "creative-writing"]);
    }
}
