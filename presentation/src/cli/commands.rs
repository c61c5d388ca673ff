//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for evaluation results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Every response with its metrics and score
    Full,
    /// One ranked line per model
    Summary,
    /// The same JSON the HTTP API returns
    Json,
}

/// CLI arguments for model-arena
#[derive(Parser, Debug)]
#[command(name = "model-arena")]
#[command(author, version, about = "Side-by-side LLM evaluation with an LLM judge")]
#[command(long_about = r#"
Model Arena sends one prompt to several models, measures how fast each one
answers, and asks a judge model to score every response against a rubric.

The process has two stages:
1. Generation: All selected models stream a response in parallel
2. Judging: The judge model scores each response, optionally per criterion

Backends that fail or time out are replaced by clearly marked fallback data,
so a result set is always complete.

Configuration files are loaded from (in priority order):
1. ARENA_<SECTION>__<KEY> environment variables
2. --config <path>     Explicit config file
3. ./arena.toml        Project-level config
4. ~/.config/model-arena/config.toml   Global config

Example:
  model-arena serve --bind 0.0.0.0:3000
  model-arena evaluate "Write a function to add two numbers"
  model-arena evaluate -m gpt-4o -m claude-3-5-haiku -r summarization "Summarize ..."
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration sources and the effective configuration, then exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP API server
    Serve {
        /// Socket address to listen on (overrides [server] bind)
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,
    },

    /// Evaluate one prompt and print the results
    Evaluate {
        /// The prompt every model answers
        prompt: String,

        /// Models to evaluate (can be specified multiple times)
        #[arg(short, long, value_name = "MODEL")]
        model: Vec<String>,

        /// Rubric the judge applies
        #[arg(short, long, value_name = "RUBRIC")]
        rubric: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "full")]
        output: OutputFormat,

        /// Suppress progress indicators
        #[arg(short, long)]
        quiet: bool,
    },

    /// List the models the registry knows
    Models,

    /// List the available rubrics
    Rubrics,
}
