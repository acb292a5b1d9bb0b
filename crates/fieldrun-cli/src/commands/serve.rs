//! `fieldrun serve` command.
//!
//! Handles exactly one invocation: reads the request document, dispatches
//! it to the built-in resolvers, writes the result document. Any failure
//! exits non-zero and leaves the output untouched.

use clap::Args;

use fieldrun_config::FieldrunConfig;
use fieldrun_runtime::{Dispatcher, ResolverServer};

use crate::{boundary, demo, output};

/// Handle one invocation with the built-in resolvers.
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Request document path ("-" for stdin). Defaults to io.input_path.
    #[arg(short, long)]
    pub input: Option<String>,
    /// Result document path ("-" for stdout). Defaults to io.output_path.
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Executes the serve command.
pub async fn execute(args: &ServeArgs, config: &FieldrunConfig) -> anyhow::Result<()> {
    let input = args.input.as_deref().unwrap_or(&config.io.input_path);
    let output_path = args.output.as_deref().unwrap_or(&config.io.output_path);

    let registry = demo::registry().map_err(|e| {
        output::print_diagnostic(&e);
        anyhow::anyhow!("registry error: {e}")
    })?;
    tracing::info!(
        input,
        output = output_path,
        resolvers = registry.len(),
        "serving one invocation"
    );

    let mut server = ResolverServer::new(
        boundary::open_source(input),
        boundary::open_sink(output_path),
        Dispatcher::new(registry),
    );

    let result = server.run().await.map_err(|e| {
        output::print_diagnostic(&e);
        anyhow::anyhow!("invocation failed: {e}")
    })?;

    tracing::debug!(result = %result.as_value(), "result written");
    Ok(())
}
