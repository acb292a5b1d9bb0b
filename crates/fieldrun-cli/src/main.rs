//! fieldrun CLI - single-shot GraphQL field resolver dispatcher.

use clap::{Parser, Subcommand};
use tracing_subscriber::fmt::format::FmtSpan;

use fieldrun_config::{load_config, LogFormat};

mod boundary;
mod commands;
mod demo;
mod output;

/// fieldrun - resolve one GraphQL field from a mounted request document.
#[derive(Debug, Parser)]
#[command(name = "fieldrun", version, about)]
struct Cli {
    /// Configuration file path.
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Verbosity level (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Log output format: plain or json (overrides logging.format).
    #[arg(long, global = true, value_parser = ["plain", "json"])]
    log_format: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Handle one invocation with the built-in resolvers.
    Serve(commands::serve::ServeArgs),
    /// Write a request document (host side).
    Request(commands::request::RequestArgs),
    /// Check a request document without dispatching it.
    Validate(commands::validate::ValidateArgs),
    /// List the built-in resolvers.
    List(commands::list::ListArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    // Initialize tracing. Logs go to stderr; stdout may carry a document.
    let filter = match cli.verbose {
        0 => config.logging.level.clone(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    };
    let format = match cli.log_format.as_deref() {
        Some("json") => LogFormat::Json,
        Some(_) => LogFormat::Plain,
        None => config.logging.format,
    };
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Json => subscriber
            .json()
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .init(),
        LogFormat::Plain => subscriber.init(),
    };

    tracing::debug!(config_file = ?cli.config, "fieldrun starting");

    match &cli.command {
        Commands::Serve(args) => commands::serve::execute(args, &config).await,
        Commands::Request(args) => commands::request::execute(args, &config).await,
        Commands::Validate(args) => commands::validate::execute(args, &config).await,
        Commands::List(args) => commands::list::execute(args),
    }
}
