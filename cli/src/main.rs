//! CLI entrypoint for Model Arena
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use arena_application::{RunEvaluationInput, RunEvaluationUseCase};
use arena_domain::{ModelRegistry, RubricRegistry};
use arena_infrastructure::{ConfigLoader, FileConfig, Severity, build_gateway};
use arena_presentation::{
    AppState, Cli, Command, ConsoleFormatter, OutputFormat, ProgressReporter, SimpleProgress,
    router,
};
use clap::{CommandFactory, Parser};
use std::io::IsTerminal;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting Model Arena");

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        println!();
        println!("{}", toml::to_string_pretty(&config.redacted())?);
        return Ok(());
    }

    report_config_issues(&config);

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    // Listings need no gateway
    let params = config.to_evaluation_params();
    match &command {
        Command::Models => {
            print!(
                "{}",
                ConsoleFormatter::format_models(&ModelRegistry::list_available(), &params.default_models)
            );
            return Ok(());
        }
        Command::Rubrics => {
            let default = RubricRegistry::resolve_with_default(None, &params.default_rubric);
            print!(
                "{}",
                ConsoleFormatter::format_rubrics(RubricRegistry::list_available(), default.id)
            );
            return Ok(());
        }
        _ => {}
    }

    // === Dependency Injection ===
    let gateway = build_gateway(&config.gateway.to_settings());
    let gateway_configured = gateway.is_configured();
    let use_case = Arc::new(RunEvaluationUseCase::new(gateway, params));

    match command {
        Command::Serve { bind } => {
            let bind = bind.unwrap_or_else(|| config.server.bind.clone());
            let listener = tokio::net::TcpListener::bind(&bind)
                .await
                .with_context(|| format!("Failed to bind {bind}"))?;

            info!(address = %bind, gateway_configured, "HTTP server listening");
            println!("Model Arena listening on http://{bind}");

            let app = router(AppState::new(use_case, gateway_configured));
            axum::serve(listener, app)
                .with_graceful_shutdown(shutdown_signal())
                .await
                .context("HTTP server failed")?;

            info!("Server stopped");
        }
        Command::Evaluate {
            prompt,
            model,
            rubric,
            output,
            quiet,
        } => {
            let mut input = RunEvaluationInput::new(prompt);
            if !model.is_empty() {
                input = input.with_models(model);
            }
            if let Some(rubric) = rubric {
                input = input.with_rubric(rubric);
            }

            if !gateway_configured && !quiet {
                eprintln!("No gateway API key found, results will use fallback data.");
            }

            // Progress bars only on a terminal; plain lines when redirected
            let report = if quiet {
                use_case.execute(input).await?
            } else if std::io::stderr().is_terminal() {
                let progress = ProgressReporter::new();
                use_case.execute_with_progress(input, &progress).await?
            } else {
                use_case.execute_with_progress(input, &SimpleProgress).await?
            };

            let rendered = match output {
                OutputFormat::Full => ConsoleFormatter::format(&report),
                OutputFormat::Summary => ConsoleFormatter::format_summary(&report),
                OutputFormat::Json => ConsoleFormatter::format_json(&report)?,
            };
            println!("{}", rendered);
        }
        Command::Models | Command::Rubrics => {}
    }

    Ok(())
}

/// Log every validation issue; none of them stop startup
fn report_config_issues(config: &FileConfig) {
    for issue in config.validate() {
        match issue.severity {
            Severity::Error => error!(field = %issue.field, "{}", issue.message),
            Severity::Warning => warn!(field = %issue.field, "{}", issue.message),
        }
    }
}

/// Resolve on Ctrl-C
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
