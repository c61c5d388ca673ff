//! Judge reply parsing.
//!
//! Extracts a structured verdict from the judge model's free-text reply.
//! Pure domain logic: no I/O, just pattern matching.
//!
//! | Line | Pattern | Required |
//! |------|---------|----------|
//! | Overall rating | `Rating: X.X` (0-5) | yes |
//! | Reasoning | `Reasoning: ...` | no |
//! | Criterion | `<criterionKey>: X.X \| ...` | no |
//!
//! A reply without an overall rating is [`JudgeParse::Unparseable`]; callers
//! route it into the same fallback path as a backend failure.

use super::value_objects::{CriterionScore, clamp_rating};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Reasoning used when the judge gave a rating but no reasoning line
pub const MISSING_REASONING: &str = "Unable to parse judge reasoning";

// The number must not run on into more digits: "Rating: 10" is not a 1.
static RATING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Rating:\s*([0-5](?:\.[0-9])?)(?:$|[^0-9.]|\.(?:$|[^0-9]))")
        .expect("valid rating regex")
});

static REASONING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Reasoning:\s*(.+)").expect("valid reasoning regex"));

static CRITERION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)^[\s\-*]*\**([A-Za-z][A-Za-z0-9_]*)\**\s*:\s*\**\s*([0-5](?:\.[0-9])?)(?:\.?[^0-9.|\n][^|\n]*|\.)?(?:\|\s*([^\n]*))?$",
    )
    .expect("valid criterion regex")
});

/// Result of parsing a judge reply
#[derive(Debug, Clone, PartialEq)]
pub enum JudgeParse {
    Parsed {
        rating: f64,
        reasoning: String,
        /// Present only when at least one known criterion line was found
        criteria: Option<BTreeMap<String, CriterionScore>>,
    },
    Unparseable,
}

/// Parse a judge reply.
///
/// Only criterion lines whose key appears in `criterion_keys` are kept, so
/// the resulting keys are always a subset of the active rubric.
///
/// # Examples
///
/// ```
/// use arena_domain::evaluation::parsing::{JudgeParse, parse_judge_reply};
///
/// let parsed = parse_judge_reply("Rating: 4.2 | Reasoning: Clear and correct", &[]);
/// match parsed {
///     JudgeParse::Parsed { rating, reasoning, .. } => {
///         assert_eq!(rating, 4.2);
///         assert_eq!(reasoning, "Clear and correct");
///     }
///     JudgeParse::Unparseable => unreachable!(),
/// }
///
/// assert_eq!(parse_judge_reply("I liked it", &[]), JudgeParse::Unparseable);
/// ```
pub fn parse_judge_reply(reply: &str, criterion_keys: &[&str]) -> JudgeParse {
    let Some(rating) = RATING_RE
        .captures(reply)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
    else {
        return JudgeParse::Unparseable;
    };

    let reasoning = REASONING_RE
        .captures(reply)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| MISSING_REASONING.to_string());

    JudgeParse::Parsed {
        rating: clamp_rating(rating),
        reasoning,
        criteria: parse_criteria(reply, criterion_keys),
    }
}

fn parse_criteria(reply: &str, criterion_keys: &[&str]) -> Option<BTreeMap<String, CriterionScore>> {
    if criterion_keys.is_empty() {
        return None;
    }

    let mut criteria = BTreeMap::new();
    for caps in CRITERION_RE.captures_iter(reply) {
        let key = &caps[1];
        if !criterion_keys.contains(&key) || criteria.contains_key(key) {
            continue;
        }
        let Ok(score) = caps[2].parse::<f64>() else {
            continue;
        };
        let reasoning = caps
            .get(3)
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default();
        criteria.insert(key.to_string(), CriterionScore::new(score, reasoning));
    }

    if criteria.is_empty() {
        None
    } else {
        Some(criteria)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CODE_KEYS: &[&str] = &[
        "syntacticCorrectness",
        "readabilityAndStyle",
        "completenessAndAccuracy",
        "efficiencyAndConciseness",
    ];

    fn unwrap_parsed(parse: JudgeParse) -> (f64, String, Option<BTreeMap<String, CriterionScore>>) {
        match parse {
            JudgeParse::Parsed {
                rating,
                reasoning,
                criteria,
            } => (rating, reasoning, criteria),
            JudgeParse::Unparseable => panic!("expected a parsed reply"),
        }
    }

    #[test]
    fn test_single_line_format() {
        let (rating, reasoning, criteria) =
            unwrap_parsed(parse_judge_reply("Rating: 3.8 | Reasoning: Mostly right.", CODE_KEYS));
        assert_eq!(rating, 3.8);
        assert_eq!(reasoning, "Mostly right.");
        assert!(criteria.is_none());
    }

    #[test]
    fn test_multi_line_with_criteria() {
        let reply = "\
Rating: 4.5
Reasoning: Correct and idiomatic implementation.
Criteria:
syntacticCorrectness: 5 | Compiles cleanly
- readabilityAndStyle: 4.5 | Good names
**completenessAndAccuracy**: 4.0 | Misses overflow handling
efficiencyAndConciseness: 4.5/5 | Minimal
";
        let (rating, reasoning, criteria) = unwrap_parsed(parse_judge_reply(reply, CODE_KEYS));
        assert_eq!(rating, 4.5);
        assert_eq!(reasoning, "Correct and idiomatic implementation.");

        let criteria = criteria.unwrap();
        assert_eq!(criteria.len(), 4);
        assert_eq!(criteria["syntacticCorrectness"].score, 5.0);
        assert_eq!(criteria["syntacticCorrectness"].reasoning, "Compiles cleanly");
        assert_eq!(criteria["readabilityAndStyle"].score, 4.5);
        assert_eq!(criteria["completenessAndAccuracy"].score, 4.0);
        assert_eq!(criteria["efficiencyAndConciseness"].score, 4.5);
    }

    #[test]
    fn test_unknown_criterion_keys_are_dropped() {
        let reply = "Rating: 4\nReasoning: ok\ncoverage: 3 | not in this rubric\nsyntacticCorrectness: 2";
        let (_, _, criteria) = unwrap_parsed(parse_judge_reply(reply, CODE_KEYS));
        let criteria = criteria.unwrap();
        assert_eq!(criteria.len(), 1);
        assert!(criteria.contains_key("syntacticCorrectness"));
        assert_eq!(criteria["syntacticCorrectness"].reasoning, "");
    }

    #[test]
    fn test_rating_and_reasoning_lines_are_not_criteria() {
        let (_, _, criteria) = unwrap_parsed(parse_judge_reply("Rating: 4\nReasoning: fine", CODE_KEYS));
        assert!(criteria.is_none());
    }

    #[test]
    fn test_missing_rating_is_unparseable() {
        assert_eq!(parse_judge_reply("", CODE_KEYS), JudgeParse::Unparseable);
        assert_eq!(
            parse_judge_reply("Reasoning: great work, 5 stars", CODE_KEYS),
            JudgeParse::Unparseable
        );
        assert_eq!(parse_judge_reply("Rating: excellent", CODE_KEYS), JudgeParse::Unparseable);
        assert_eq!(parse_judge_reply("Rating: 9", CODE_KEYS), JudgeParse::Unparseable);
    }

    #[test]
    fn test_missing_reasoning_uses_placeholder() {
        let (rating, reasoning, _) = unwrap_parsed(parse_judge_reply("Rating: 2.9", &[]));
        assert_eq!(rating, 2.9);
        assert_eq!(reasoning, MISSING_REASONING);
    }

    #[test]
    fn test_rating_that_runs_on_is_unparseable() {
        for reply in ["Rating: 10", "Rating: 10/10\nReasoning: flawless", "Rating: 3.14159", "Rating: 4.55"] {
            assert_eq!(parse_judge_reply(reply, &[]), JudgeParse::Unparseable, "{reply}");
        }
    }

    #[test]
    fn test_rating_followed_by_punctuation() {
        let (rating, reasoning, _) = unwrap_parsed(parse_judge_reply("Rating: 4.
Reasoning: good", &[]));
        assert_eq!(rating, 4.0);
        assert_eq!(reasoning, "good");
        let (rating, _, _) = unwrap_parsed(parse_judge_reply("Rating: 3.5.", &[]));
        assert_eq!(rating, 3.5);
    }

    #[test]
    fn test_criterion_score_that_runs_on_is_dropped() {
        let keys = &["factualFidelity", "coverage", "brevity"];
        let reply = "Rating: 4\nReasoning: ok\ncoverage: 12 | great\nbrevity: 4.55 | tight\nfactualFidelity: 4. | faithful";
        let (_, _, criteria) = unwrap_parsed(parse_judge_reply(reply, keys));
        let criteria = criteria.unwrap();
        assert_eq!(criteria.len(), 1);
        assert_eq!(criteria["factualFidelity"].score, 4.0);
        assert_eq!(criteria["factualFidelity"].reasoning, "faithful");
    }

    #[test]
    fn test_first_rating_wins() {
        let (rating, _, _) = unwrap_parsed(parse_judge_reply("Rating: 1.5\nRating: 4.5", &[]));
        assert_eq!(rating, 1.5);
    }

    #[test]
    fn test_rating_always_in_range() {
        for reply in ["Rating: 0", "Rating: 5.9", "Rating: 4.5/5"] {
            let (rating, _, _) = unwrap_parsed(parse_judge_reply(reply, &[]));
            assert!((0.0..=5.0).contains(&rating), "{reply} -> {rating}");
        }
    }
}
