//! Command identity: the single operation selected for one invocation.

use crate::error::TempoError;
use std::fmt;

/// One variant per supported command. "No command" is represented by `None` at the
/// call sites that resolve a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    Lid,
    Open,
    Close,
    Status,
    Errors,
    Reports,
    Protocols,
    Run,
    Stop,
    Skip,
    Pause,
    Resume,
    Config,
    License,
    Version,
}

impl CommandId {
    pub fn name(self) -> &'static str {
        match self {
            CommandId::Lid => "lid",
            CommandId::Open => "open",
            CommandId::Close => "close",
            CommandId::Status => "status",
            CommandId::Errors => "errors",
            CommandId::Reports => "reports",
            CommandId::Protocols => "protocols",
            CommandId::Run => "run",
            CommandId::Stop => "stop",
            CommandId::Skip => "skip",
            CommandId::Pause => "pause",
            CommandId::Resume => "resume",
            CommandId::Config => "config",
            CommandId::License => "license",
            CommandId::Version => "version",
        }
    }

    /// The single active command, `None` when nothing was selected.
    pub fn resolve(selected: &[CommandId]) -> Result<Option<CommandId>, TempoError> {
        match selected {
            [] => Ok(None),
            [only] => Ok(Some(*only)),
            _ => Err(TempoError::InvalidOptions(
                "No more than one command".to_string(),
            )),
        }
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
