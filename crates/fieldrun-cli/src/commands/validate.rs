//! `fieldrun validate` command.
//!
//! Decodes a request document with the same rules `serve` applies, without
//! invoking anything.

use clap::Args;

use fieldrun_config::FieldrunConfig;
use fieldrun_protocol::InvocationRequest;
use fieldrun_runtime::{DispatchError, RequestSource, ResolverRegistry};

use crate::{boundary, demo, output};

/// Check a request document without dispatching it.
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Request document path ("-" for stdin). Defaults to io.input_path.
    pub path: Option<String>,
}

/// Summary of a decoded request.
#[derive(Debug, PartialEq, Eq)]
pub struct Report {
    pub resolver: String,
    pub arg_count: usize,
    pub has_parent: bool,
    pub registered: bool,
}

/// Decodes `bytes` and checks the key against `registry`.
pub fn inspect(bytes: &[u8], registry: &ResolverRegistry) -> Result<Report, DispatchError> {
    let request = InvocationRequest::from_slice(bytes)?;
    let registered = registry.lookup(request.key()).is_some();
    Ok(Report {
        resolver: request.key().to_string(),
        arg_count: request.args().len(),
        has_parent: request.parent().is_some(),
        registered,
    })
}

/// Executes the validate command.
pub async fn execute(args: &ValidateArgs, config: &FieldrunConfig) -> anyhow::Result<()> {
    let path = args.path.as_deref().unwrap_or(&config.io.input_path);
    let registry = demo::registry()?;

    let report = async {
        let bytes = boundary::open_source(path).read_request().await?;
        inspect(&bytes, &registry)
    }
    .await
    .map_err(|e: DispatchError| {
        output::print_diagnostic(&e);
        anyhow::anyhow!("invalid request: {e}")
    })?;

    output::print_success(&format!(
        "{} ({} args, parent: {}, built-in: {})",
        report.resolver,
        report.arg_count,
        if report.has_parent { "yes" } else { "no" },
        if report.registered { "yes" } else { "no" },
    ));
    Ok(())
}
