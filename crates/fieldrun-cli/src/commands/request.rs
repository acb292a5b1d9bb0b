//! `fieldrun request` command.
//!
//! Host side of the protocol: builds the request document for one field
//! and writes it where the resolver process will read it.

use clap::Args;
use serde_json::{Map, Value};

use fieldrun_config::FieldrunConfig;
use fieldrun_protocol::InvocationRequest;
use fieldrun_runtime::ResultSink;
use fieldrun_types::ResolverKey;

use crate::{boundary, output};

/// Write a request document.
#[derive(Debug, Args)]
pub struct RequestArgs {
    /// Resolver to invoke, in Type.field notation (e.g. Query.hello).
    pub resolver: String,
    /// Field arguments as a JSON object.
    #[arg(short, long, default_value = "{}")]
    pub args: String,
    /// Parent object value as JSON.
    #[arg(short, long)]
    pub parent: Option<String>,
    /// Destination ("-" for stdout). Defaults to io.input_path.
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Builds the request described by the arguments.
pub fn build_request(args: &RequestArgs) -> anyhow::Result<InvocationRequest> {
    let key = ResolverKey::parse(&args.resolver)
        .map_err(|e| anyhow::anyhow!("invalid resolver name: {e}"))?;

    let field_args: Map<String, Value> = match serde_json::from_str(&args.args) {
        Ok(Value::Object(map)) => map,
        Ok(_) => anyhow::bail!("--args must be a JSON object"),
        Err(e) => anyhow::bail!("invalid JSON in --args: {e}"),
    };

    let parent = args
        .parent
        .as_deref()
        .map(serde_json::from_str::<Value>)
        .transpose()
        .map_err(|e| anyhow::anyhow!("invalid JSON in --parent: {e}"))?;

    Ok(InvocationRequest::new(key, field_args, parent))
}

/// Executes the request command.
pub async fn execute(args: &RequestArgs, config: &FieldrunConfig) -> anyhow::Result<()> {
    let request = build_request(args)?;
    let destination = args.output.as_deref().unwrap_or(&config.io.input_path);

    let document = request.to_vec()?;
    boundary::open_sink(destination)
        .write_result(&document)
        .await
        .map_err(|e| anyhow::anyhow!("failed to write request: {e}"))?;

    tracing::info!(resolver = %request.key(), destination, "request written");
    if destination != boundary::STDIO {
        output::print_success(&format!("{} -> {destination}", request.key()));
    }
    Ok(())
}
