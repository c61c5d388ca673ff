//! Evaluation stages

use serde::{Deserialize, Serialize};

/// A stage of the evaluation pipeline
///
/// Stages run strictly in order: judging starts only after every
/// generation has finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Every selected model answers the prompt
    Generation,
    /// The judge scores every response
    Judging,
}

impl Stage {
    pub fn as_str(&self) -> &str {
        match self {
            Stage::Generation => "generation",
            Stage::Judging => "judging",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Stage::Generation => "Generation",
            Stage::Judging => "Judging",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_names() {
        assert_eq!(Stage::Generation.as_str(), "generation");
        assert_eq!(Stage::Judging.to_string(), "Judging");
    }
}
