//! eventdesk - event planning assistant client
//!
//! CLI entry point for inspecting facts and generating event summaries.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use colored::Colorize;
use eyre::{Context, Result};
use serde::Serialize;
use tracing::info;

use eventdesk::api::{EventBackend, HttpBackend};
use eventdesk::cli::{Cli, Command, OutputFormat, get_log_path};
use eventdesk::config::Config;
use eventdesk::domain::Fact;
use eventdesk::facts::{FactStore, load_facts_file};
use eventdesk::summary::{Checklist, Phase, RunOutcome, SummaryWorkflow, WorkflowState, format_markdown};

fn setup_logging(verbose: bool) -> Result<()> {
    let log_path = get_log_path();
    if let Some(log_dir) = log_path.parent() {
        fs::create_dir_all(log_dir).context("Failed to create log directory")?;
    }

    // Setup tracing subscriber - write to log file, not stdout/stderr
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    let log_file = fs::File::create(&log_path).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (verbose: {})", verbose);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    info!(
        "eventdesk loaded config: backend={}, venue_delay_ms={}",
        config.backend.base_url, config.workflow.venue_delay_ms
    );

    match cli.command {
        Some(Command::Facts { format }) => cmd_facts(&config, format).await,
        Some(Command::Save { fact_id }) => cmd_save(&config, &fact_id).await,
        Some(Command::Discard { fact_id }) => cmd_discard(&config, &fact_id).await,
        Some(Command::Markdown { facts_file }) => cmd_markdown(&config, facts_file.as_deref()).await,
        Some(Command::Summarize {
            facts_file,
            delay_ms,
            format,
            rules_out,
        }) => cmd_summarize(config, facts_file.as_deref(), delay_ms, format, rules_out.as_deref()).await,
        Some(Command::Health) => cmd_health(&config).await,
        None => {
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
            Ok(())
        }
    }
}

fn backend(config: &Config) -> Result<Arc<dyn EventBackend>> {
    let backend = HttpBackend::from_config(&config.backend).context("Failed to create backend client")?;
    Ok(Arc::new(backend))
}

/// Facts from a file when given, otherwise from the backend
async fn load_facts(config: &Config, facts_file: Option<&Path>) -> Result<Vec<Fact>> {
    match facts_file {
        Some(path) => load_facts_file(path),
        None => {
            let store = FactStore::new(backend(config)?);
            store.refresh().await.context("Failed to fetch facts")?;
            Ok(store.facts().await)
        }
    }
}

/// List recorded facts
async fn cmd_facts(config: &Config, format: OutputFormat) -> Result<()> {
    let facts = load_facts(config, None).await?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&serde_json::json!({ "facts": facts }))?);
        }
        OutputFormat::Text => {
            if facts.is_empty() {
                println!("No event details recorded yet.");
                return Ok(());
            }
            println!("Event Details");
            println!("-------------");
            for (i, fact) in facts.iter().enumerate() {
                println!("{:>3}. {}  {}", i + 1, fact.text, format!("({})", fact.id).dimmed());
            }
        }
    }

    Ok(())
}

/// Save a pending fact
async fn cmd_save(config: &Config, fact_id: &str) -> Result<()> {
    let fact = backend(config)?
        .save_fact(fact_id)
        .await
        .map_err(|e| fact_error(e, fact_id))?;
    println!("{} Saved {}: {}", "✓".green(), fact.id, fact.text);
    Ok(())
}

/// Discard a fact
async fn cmd_discard(config: &Config, fact_id: &str) -> Result<()> {
    let fact = backend(config)?
        .discard_fact(fact_id)
        .await
        .map_err(|e| fact_error(e, fact_id))?;
    println!("{} Discarded {}: {}", "✓".green(), fact.id, fact.text);
    Ok(())
}

fn fact_error(e: eventdesk::api::ApiError, fact_id: &str) -> eyre::Report {
    if e.is_not_found() {
        eyre::eyre!("Fact not found: {}", fact_id)
    } else {
        eyre::Report::new(e)
    }
}

/// Print the markdown document
async fn cmd_markdown(config: &Config, facts_file: Option<&Path>) -> Result<()> {
    let facts = load_facts(config, facts_file).await?;
    println!("{}", format_markdown(&facts));
    Ok(())
}

/// Check backend health
async fn cmd_health(config: &Config) -> Result<()> {
    let health = backend(config)?
        .health()
        .await
        .context(format!("Backend not reachable at {}", config.backend.base_url))?;

    if health.is_healthy() {
        println!("{} Backend at {} is {}", "✓".green(), config.backend.base_url, health.status);
    } else {
        println!("{} Backend at {} reports: {}", "✗".red(), config.backend.base_url, health.status);
        std::process::exit(1);
    }
    Ok(())
}

/// Prints checklist steps as they flip
#[derive(Default)]
struct ProgressPrinter {
    phase: Phase,
    shown: Checklist,
}

impl ProgressPrinter {
    fn update(&mut self, state: &WorkflowState) {
        if state.phase == self.phase {
            return;
        }
        let checklist = state.checklist();

        if state.phase == Phase::ContactingVenues {
            println!("  {} Contacting venues...", "…".dimmed());
        }
        if checklist.venues_contacted && !self.shown.venues_contacted {
            println!("  {} Venues contacted", "✓".green());
            if state.phase == Phase::Summarizing {
                println!("  {} Generating summary, poster and rules...", "…".dimmed());
            }
        }
        if checklist.poster_generated && !self.shown.poster_generated {
            println!("  {} Summary and poster generated", "✓".green());
        }
        if checklist.rules_generated && !self.shown.rules_generated {
            println!("  {} Rules generated", "✓".green());
        }
        if state.phase == Phase::Done && !checklist.all_done() {
            println!("  {} No rules generated", "-".dimmed());
        }

        self.phase = state.phase;
        self.shown = checklist;
    }
}

/// Run the summary workflow and render its progress
async fn cmd_summarize(
    mut config: Config,
    facts_file: Option<&Path>,
    delay_ms: Option<u64>,
    format: OutputFormat,
    rules_out: Option<&Path>,
) -> Result<()> {
    if let Some(delay_ms) = delay_ms {
        config.workflow.venue_delay_ms = delay_ms;
    }

    let facts = load_facts(&config, facts_file).await?;
    if facts.is_empty() {
        println!("No event details recorded yet. Nothing to summarize.");
        return Ok(());
    }

    let workflow = SummaryWorkflow::from_config(backend(&config)?, &config.workflow);
    let mut rx = workflow.subscribe();
    let text = matches!(format, OutputFormat::Text);
    let mut printer = ProgressPrinter::default();

    if text {
        println!(
            "Generating event summary from {} facts (venue delay {} ms)",
            facts.len(),
            workflow.venue_delay().as_millis()
        );
    }

    let run = workflow.run(&facts);
    tokio::pin!(run);
    let result = loop {
        tokio::select! {
            result = &mut run => break result,
            changed = rx.changed() => {
                if changed.is_err() {
                    break (&mut run).await;
                }
                let state = rx.borrow_and_update().clone();
                if text {
                    printer.update(&state);
                }
            }
        }
    };

    let state = workflow.state();
    if text {
        printer.update(&state);
    }

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&SummaryReport::new(&state))?),
        OutputFormat::Text => print_summary(&state),
    }

    match result {
        Ok(RunOutcome::Completed(summary)) => {
            if let (Some(path), Some(rules)) = (rules_out, summary.rules.as_deref()) {
                write_rules(path, rules)?;
                if text {
                    println!("Rules written to {}", path.display());
                }
            }
            Ok(())
        }
        Ok(RunOutcome::Skipped) => Ok(()),
        Err(e) => {
            if text {
                println!("\n{} {}", "✗".red(), state.error.unwrap_or_else(|| e.to_string()));
                if e.is_retryable() {
                    println!("Run `eventdesk summarize` again to retry.");
                }
            }
            std::process::exit(1);
        }
    }
}

/// JSON shape of `summarize --format json`: the state plus its checklist
#[derive(Serialize)]
struct SummaryReport<'a> {
    #[serde(flatten)]
    state: &'a WorkflowState,
    checklist: Checklist,
    complete: bool,
}

impl<'a> SummaryReport<'a> {
    fn new(state: &'a WorkflowState) -> Self {
        Self {
            state,
            checklist: state.checklist(),
            complete: state.phase.is_terminal(),
        }
    }
}

fn print_summary(state: &WorkflowState) {
    let Some(summary) = &state.summary else {
        return;
    };

    println!();
    if let Some(name) = &summary.event_name {
        println!("{}", name.bold());
        println!();
    }
    println!("{}", summary.summary);
    if let Some(url) = &summary.poster_url {
        println!();
        println!("Poster: {}", url.cyan());
    }
    if let Some(rules) = &summary.rules {
        println!();
        println!("{}", rules);
    }
}

fn write_rules(path: &Path, rules: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).context("Failed to create rules output directory")?;
    }
    fs::write(path, rules).context(format!("Failed to write rules to {}", path.display()))
}
