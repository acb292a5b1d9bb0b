//! CLI subcommands.

pub mod list;
pub mod request;
pub mod serve;
pub mod validate;
