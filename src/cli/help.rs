//! CLI help: command identity contract for routing and logging.

use crate::cli::parse::{Cli, Commands};
use crate::command::CommandId;

/// Command identity for a parsed subcommand.
pub fn command_id(command: &Commands) -> CommandId {
    match command {
        Commands::Lid { .. } => CommandId::Lid,
        Commands::Open => CommandId::Open,
        Commands::Close => CommandId::Close,
        Commands::Status { .. } => CommandId::Status,
        Commands::Errors { .. } => CommandId::Errors,
        Commands::Reports { .. } => CommandId::Reports,
        Commands::Protocols { .. } => CommandId::Protocols,
        Commands::Run { .. } => CommandId::Run,
        Commands::Stop => CommandId::Stop,
        Commands::Skip => CommandId::Skip,
        Commands::Pause => CommandId::Pause,
        Commands::Resume => CommandId::Resume,
        Commands::Config => CommandId::Config,
        Commands::License => CommandId::License,
        Commands::Version => CommandId::Version,
    }
}

/// Every command selected on the command line (empty when none).
pub fn selected_commands(cli: &Cli) -> Vec<CommandId> {
    cli.command.iter().map(command_id).collect()
}
