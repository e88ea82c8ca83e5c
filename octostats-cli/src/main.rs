//! Octostats CLI - repository statistics for a GitHub account
//!
//! Thin presentation layer over `octostats-client`: parses arguments, runs
//! one search, and renders the resulting `SearchState` as a table with a
//! bar chart, or as JSON. All fetch and classification logic lives in the
//! client crate; this binary only reads the state it is handed.

use clap::{Parser, ValueEnum};
use octostats_client::SearchSession;
use octostats_core::{init_logging, LoggingConfig, SearchState};
use tracing::debug;

mod render;

#[derive(Parser)]
#[command(name = "octostats")]
#[command(about = "Look up a GitHub account and chart its repository statistics")]
#[command(version = "0.1.0")]
struct Cli {
    /// GitHub username to look up
    username: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Profile card, repository table, and bar chart
    Table,
    /// The raw search state as JSON
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let logging = if cli.verbose {
        LoggingConfig::verbose()
    } else {
        LoggingConfig::default()
    };
    init_logging(&logging).map_err(|e| anyhow::anyhow!("failed to initialize logging: {}", e))?;

    let session = SearchSession::github()?;
    let state = session.search(&cli.username).await;

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&state)?),
        OutputFormat::Table => render_table(&cli.username, &state),
    }

    if !state.is_success() {
        debug!("Exiting with failure status");
        std::process::exit(1);
    }

    Ok(())
}

fn render_table(username: &str, state: &SearchState) {
    if let Some(error) = &state.error {
        eprintln!("error: {}", error);
        return;
    }

    if let Some(profile) = &state.profile {
        println!("== {} ==", username.trim());
        print!("{}", render::render_profile(profile));
        println!();
    }

    print!("{}", render::render_repo_table(&state.repos));
    println!();
    print!("{}", render::render_chart(&state.repos));
}
