//! Prompt templates for the judge

use crate::registry::rubrics::RubricDefinition;

/// Axes used when no rubric is supplied
const GENERIC_AXES: &[&str] = &[
    "Instruction following (did it answer what was asked?)",
    "Quality and accuracy of the response",
    "Clarity and usefulness",
    "Completeness",
];

/// Templates for generating judge prompts
pub struct JudgePromptTemplate;

impl JudgePromptTemplate {
    /// System prompt for the judge model
    pub fn judge_system() -> &'static str {
        r#"You are an expert AI evaluator. You grade responses written by other AI models.
Be fair, specific, and consistent. Always answer in the exact format requested."#
    }

    /// User prompt asking the judge to score one response
    pub fn judge_prompt(
        prompt: &str,
        model_label: &str,
        response: &str,
        rubric: Option<&RubricDefinition>,
    ) -> String {
        let mut out = String::new();

        match rubric {
            Some(rubric) => {
                out.push_str(&format!(
                    "Rate the following response on a scale of 0-5 using the \"{}\" rubric ({}).\n\nCriteria:\n",
                    rubric.name, rubric.description
                ));
                for criterion in rubric.criteria {
                    out.push_str(&format!(
                        "- {} ({}): {} {}\n",
                        criterion.key,
                        criterion.name,
                        criterion.description,
                        criterion.judge_prompt_fragment
                    ));
                }
            }
            None => {
                out.push_str("Rate the following response on a scale of 0-5 based on:\n");
                for axis in GENERIC_AXES {
                    out.push_str(&format!("- {}\n", axis));
                }
            }
        }

        out.push_str(&format!(
            r#"
Original Prompt: "{}"

Model: {}
Response: "{}"

Reply using exactly this format:
Rating: X.X
Reasoning: <one or two sentences>
"#,
            prompt, model_label, response
        ));

        if let Some(rubric) = rubric {
            for criterion in rubric.criteria {
                out.push_str(&format!("{}: X.X | <short reasoning>\n", criterion.key));
            }
        }

        out
    }
}
