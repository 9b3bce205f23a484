//! CLI subcommand implementations for the rickdex binary.

pub mod list_cmd;
pub mod login_cmd;
pub mod output;
pub mod register_cmd;
pub mod stats_cmd;
