//! CLI entrypoint for Interior Studio
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use studio_application::{
    ConversationLogger, NoConversationLogger, NoProgress, RunPlanUseCase, SessionPlanStore,
    StudioSession,
};
use studio_domain::{ConfigIssue, Severity};
use studio_infrastructure::{
    ApiKey, ConfigLoader, FileConfig, JsonlConversationLogger, OpenAiClient, StudioConfigError,
};
use studio_presentation::{
    BriefFields, Cli, ConsoleFormatter, OutputConfig, PlanExporter, ProgressReporter, ReplConfig,
    StudioRepl,
};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(&cli)?;

    info!("Starting Interior Studio");

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).map_err(StudioConfigError::from)?
    };

    let (params, issues) = config.to_plan_params();
    report_issues(&issues)?;

    // === Dependency Injection ===
    let api_key = ApiKey::from_env()?;
    let client = Arc::new(OpenAiClient::new(api_key, config.api.base_url.as_str()));
    info!("Using endpoint {}", client.base_url());

    let run_plan = RunPlanUseCase::new(client, params).with_logger(transcript_logger(&cli, &config));
    let session = StudioSession::new(run_plan, Arc::new(SessionPlanStore::new()));

    let output = OutputConfig::resolve(
        config.output.format,
        cli.output.map(Into::into),
        config.output.color,
        cli.out_dir
            .clone()
            .or_else(|| config.output.out_dir.as_ref().map(PathBuf::from)),
    );
    if !output.color {
        colored::control::set_override(false);
    }

    // Interactive mode
    if cli.interactive {
        let repl_config = ReplConfig {
            show_progress: !cli.quiet,
            want_images: !cli.no_visuals,
            currency: config.brief.currency.clone(),
            ..Default::default()
        };
        let mut repl = StudioRepl::new(session, repl_config, output);
        repl.run().await?;
        return Ok(());
    }

    // One-shot mode - description is required
    let Some(description) = cli.description.as_deref() else {
        bail!("A room description is required. Use --description or --interactive.");
    };

    let fields = BriefFields {
        description,
        style: &cli.style,
        purpose: &cli.purpose,
        budget: cli.budget,
        photo: cli.photo.as_deref(),
    };
    let draft = fields
        .into_draft(&config.brief.currency)
        .context("Failed to read reference photo")?;

    let want_images = !cli.no_visuals;
    let plan = if cli.quiet {
        session
            .submit_with_progress(draft, want_images, &NoProgress)
            .await?
    } else {
        let progress = ProgressReporter::new();
        session
            .submit_with_progress(draft, want_images, &progress)
            .await?
    };

    println!("{}", ConsoleFormatter::render(&plan, output.format));

    if let Some(dir) = &output.out_dir {
        let summary = PlanExporter::new(dir)
            .export(&plan)
            .with_context(|| format!("Failed to export plan to {}", dir.display()))?;
        if !cli.quiet {
            eprintln!(
                "Saved {} and {} image(s)",
                summary.markdown.display(),
                summary.images.len()
            );
        }
    }

    Ok(())
}

/// Console logs by verbosity, plus an optional non-blocking log file
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let console = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let (file_layer, guard) = match &cli.log_file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| std::path::Path::new("."));
            let file_name = path
                .file_name()
                .context("--log-file must name a file")?;
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file_layer)
        .init();

    Ok(guard)
}

/// Print config issues; errors stop startup.
fn report_issues(issues: &[ConfigIssue]) -> Result<(), StudioConfigError> {
    for issue in issues {
        match issue.severity {
            Severity::Warning => warn!("{}", issue.message),
            Severity::Error => eprintln!("Config error: {}", issue.message),
        }
    }

    if ConfigIssue::has_errors(issues) {
        let messages = issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .map(|i| format!("  - {}", i.message))
            .collect::<Vec<_>>()
            .join("\n");
        return Err(StudioConfigError::Invalid(messages));
    }
    Ok(())
}

/// Transcript from `--transcript` or `[logging] transcript`, if any
fn transcript_logger(cli: &Cli, config: &FileConfig) -> Arc<dyn ConversationLogger> {
    let path = cli
        .transcript
        .clone()
        .or_else(|| config.logging.transcript.as_ref().map(PathBuf::from));

    match path.and_then(JsonlConversationLogger::open_or_warn) {
        Some(logger) => {
            info!("Writing transcript to {}", logger.path().display());
            Arc::new(logger)
        }
        None => Arc::new(NoConversationLogger),
    }
}
