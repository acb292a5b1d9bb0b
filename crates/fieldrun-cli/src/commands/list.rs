//! `fieldrun list` command.

use clap::Args;

use crate::demo;

/// List the built-in resolvers.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Print one `Type.field` per line without the header.
    #[arg(short, long)]
    pub quiet: bool,
}

/// Executes the list command.
pub fn execute(args: &ListArgs) -> anyhow::Result<()> {
    let registry = demo::registry()?;
    let keys = registry.keys();

    if !args.quiet {
        println!("{} resolvers:", keys.len());
    }
    for key in keys {
        if args.quiet {
            println!("{key}");
        } else {
            println!("  {:<12} {}", key.type_name(), key.field_name());
        }
    }
    Ok(())
}
