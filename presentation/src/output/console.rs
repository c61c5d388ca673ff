//! Console output formatter for evaluation results

use arena_domain::{
    EvaluationReport, ModelDescriptor, ModelResult, RubricDefinition, RubricRegistry,
};
use colored::Colorize;

/// Formats evaluation results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete report: every response with metrics and score
    pub fn format(report: &EvaluationReport) -> String {
        let mut output = String::new();
        let rubric = RubricRegistry::find(&report.rubric);

        output.push_str(&Self::header("Model Arena Results"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n",
            "Rubric:".cyan().bold(),
            rubric.map(|r| r.name).unwrap_or(report.rubric.as_str())
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Evaluated:".cyan().bold(),
            report.evaluated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        if report.results.is_empty() {
            output.push_str("\nNo models were evaluated.\n");
        }

        for result in &report.results {
            output.push_str(&Self::result_section(result, rubric));
        }

        if report.degraded_count() > 0 {
            output.push_str(&format!(
                "\n{} {} of {} results include fallback data\n",
                "Note:".yellow().bold(),
                report.degraded_count(),
                report.results.len()
            ));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format as JSON (the HTTP response body)
    pub fn format_json(report: &EvaluationReport) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(report)
    }

    /// One line per model, best rating first
    pub fn format_summary(report: &EvaluationReport) -> String {
        let mut ranked: Vec<&ModelResult> = report.results.iter().collect();
        ranked.sort_by(|a, b| b.score.overall_rating.total_cmp(&a.score.overall_rating));

        let mut output = format!("{}\n", "=== Model Arena Ranking ===".cyan().bold());
        for (rank, result) in ranked.iter().enumerate() {
            output.push_str(&format!(
                "{:>2}. {:<28} {:>3.1}/5  TTFT {:>5} ms  total {:>6} ms  {:>5} tok{}\n",
                rank + 1,
                result.model_name,
                result.score.overall_rating,
                result.metrics.time_to_first_token_ms(),
                result.metrics.total_generation_time_ms(),
                result.metrics.token_count(),
                if result.is_degraded() { "  [fallback]" } else { "" }
            ));
        }
        output
    }

    /// Registry listing for the `models` command
    pub fn format_models(models: &[ModelDescriptor], defaults: &[String]) -> String {
        let mut output = format!("{}\n", "Available models".cyan().bold());
        for model in models {
            let marker = if defaults.contains(&model.id) { "*" } else { " " };
            output.push_str(&format!(
                " {} {:<28} {:<20} {:<10} {}\n",
                marker, model.id, model.display_name, model.provider, model.backend_id
            ));
        }
        output.push_str(&format!("\n{}\n", "* evaluated by default".dimmed()));
        output
    }

    /// Registry listing for the `rubrics` command
    pub fn format_rubrics(rubrics: &[RubricDefinition], default_id: &str) -> String {
        let mut output = String::new();
        for rubric in rubrics {
            let marker = if rubric.id == default_id { " (default)" } else { "" };
            output.push_str(&format!(
                "{}{}\n  {}\n",
                rubric.id.yellow().bold(),
                marker,
                rubric.description
            ));
            for criterion in rubric.criteria {
                output.push_str(&format!(
                    "    - {:<26} {}\n",
                    criterion.key, criterion.description
                ));
            }
            output.push('\n');
        }
        output
    }

    fn result_section(result: &ModelResult, rubric: Option<&RubricDefinition>) -> String {
        let mut output = String::new();

        let title = format!("── {} ({}) ──", result.model_name, result.provider);
        let title = if result.source.is_fallback() {
            format!("{} {}", title.red().bold(), "[fallback response]".red())
        } else {
            title.yellow().bold().to_string()
        };
        output.push_str(&format!("\n{}\n", title));

        output.push_str(&format!(
            "{} {} ms to first token, {} ms total, {} tokens ({:.1} tok/s)\n",
            "Metrics:".dimmed(),
            result.metrics.time_to_first_token_ms(),
            result.metrics.total_generation_time_ms(),
            result.metrics.token_count(),
            result.metrics.tokens_per_second()
        ));

        output.push_str(&format!(
            "{} {:.1}/5{}\n  {}\n",
            "Score:".green().bold(),
            result.score.overall_rating,
            if result.score.source.is_fallback() {
                " [fallback score]"
            } else {
                ""
            },
            result.score.reasoning
        ));

        if let Some(criteria) = &result.score.per_criterion {
            for (key, criterion) in criteria {
                let name = rubric
                    .and_then(|r| r.criterion(key))
                    .map(|c| c.name)
                    .unwrap_or(key.as_str());
                output.push_str(&format!(
                    "  - {}: {:.1}/5 {}\n",
                    name, criterion.score, criterion.reasoning
                ));
            }
        }

        output.push_str(&format!("\n{}\n", Self::indent(&result.response_text, "  ")));
        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_domain::{CriterionScore, Generation, GenerationMetrics, JudgeScore, ModelRegistry};
    use std::collections::BTreeMap;

    fn result(id: &str, rating: f64, fallback: bool) -> ModelResult {
        let model = ModelRegistry::resolve(id);
        let metrics = GenerationMetrics::new(120, 1500, 300);
        let generation = if fallback {
            Generation::fallback("mock text", metrics)
        } else {
            Generation::live("fn add(a: i32, b: i32) -> i32 {\n    a + b\n}", metrics)
        };
        let mut criteria = BTreeMap::new();
        criteria.insert(
            "syntacticCorrectness".to_string(),
            CriterionScore::new(4.5, "Compiles"),
        );
        ModelResult {
            model_id: model.id,
            model_name: model.display_name,
            provider: model.provider,
            response_text: generation.response_text,
            source: generation.source,
            metrics: generation.metrics,
            score: JudgeScore::live(rating, "Solid answer", Some(criteria)),
        }
    }

    fn report() -> EvaluationReport {
        EvaluationReport::new(
            "code-generation",
            vec![result("claude-3-5-haiku", 3.8, true), result("gpt-4o", 4.5, false)],
        )
    }

    #[test]
    fn test_format_full() {
        colored::control::set_override(false);
        let output = ConsoleFormatter::format(&report());
        assert!(output.contains("Rubric: Code Generation"));
        assert!(output.contains("── GPT-4o (OpenAI) ──"));
        assert!(output.contains("[fallback response]"));
        assert!(output.contains("120 ms to first token, 1500 ms total, 300 tokens"));
        assert!(output.contains("Syntactic Correctness: 4.5/5 Compiles"));
        assert!(output.contains("  fn add(a: i32, b: i32) -> i32 {"));
        assert!(output.contains("1 of 2 results include fallback data"));
    }

    #[test]
    fn test_format_summary_ranks_by_rating() {
        colored::control::set_override(false);
        let output = ConsoleFormatter::format_summary(&report());
        let gpt = output.find("GPT-4o").unwrap();
        let haiku = output.find("Claude 3.5 Haiku").unwrap();
        assert!(gpt < haiku);
        assert!(output.contains("[fallback]"));
    }

    #[test]
    fn test_format_json_uses_wire_names() {
        let json: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_json(&report()).unwrap()).unwrap();
        assert_eq!(json["results"][1]["modelId"], "gpt-4o");
        assert_eq!(json["results"][1]["metrics"]["timeToFirstToken"], 120);
    }

    #[test]
    fn test_format_empty_report() {
        colored::control::set_override(false);
        let output = ConsoleFormatter::format(&EvaluationReport::new("summarization", vec![]));
        assert!(output.contains("No models were evaluated."));
    }

    #[test]
    fn test_format_registries() {
        colored::control::set_override(false);
        let models =
            ConsoleFormatter::format_models(&ModelRegistry::list_available(), &["gpt-4o".to_string()]);
        assert!(models.contains("* gpt-4o"));
        assert!(models.contains("anthropic/claude-3-5-haiku"));

        let rubrics =
            ConsoleFormatter::format_rubrics(RubricRegistry::list_available(), "summarization");
        assert!(rubrics.contains("summarization (default)"));
        assert!(rubrics.contains("syntacticCorrectness"));
    }

    #[test]
    fn test_indent() {
        assert_eq!(ConsoleFormatter::indent("a\nb", "> "), "> a\n> b");
    }
}
