//! Command routing and batch processing errors.

use std::path::PathBuf;

use crate::errors::CfgTreeError;
use crate::expand::ExpandError;
use crate::node::NodeError;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("No such delegate '{name}'")]
    NoSuchDelegate { name: String },

    #[error("No such setting '{name}'")]
    NoSuchSetting { name: String },

    #[error("Malformed {directive} directive: expected {expected} argument(s), got {found}")]
    MalformedDirective {
        directive: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Unknown delegate type '{type_name}'")]
    UnknownDelegateType { type_name: String },

    #[error("Delegate '{name}' already exists")]
    DelegateExists { name: String },

    #[error("Broadcast failed for {}", describe_failures(.failures))]
    Broadcast { failures: Vec<(String, CommandError)> },

    #[error("Cannot open file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{origin}:{line}: {source}")]
    LineFailed {
        origin: String,
        line: usize,
        #[source]
        source: Box<CommandError>,
    },

    #[error("include() nesting exceeds {limit} level(s) at '{}'", .path.display())]
    IncludeDepthExceeded { path: PathBuf, limit: usize },

    #[error(transparent)]
    Expand(#[from] ExpandError),

    #[error(transparent)]
    Node(NodeError),
}

fn describe_failures(failures: &[(String, CommandError)]) -> String {
    failures
        .iter()
        .map(|(name, error)| format!("'{}' ({})", name, error))
        .collect::<Vec<_>>()
        .join(", ")
}

impl CommandError {
    /// The innermost error, looking through batch line wrappers.
    pub fn root_cause(&self) -> &CommandError {
        match self {
            CommandError::LineFailed { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

impl From<NodeError> for CommandError {
    fn from(error: NodeError) -> Self {
        match error {
            NodeError::UnknownValue { name } => CommandError::NoSuchSetting { name },
            NodeError::UnknownDelegate { name } => CommandError::NoSuchDelegate { name },
            NodeError::DelegateAlreadyRegistered { name } => CommandError::DelegateExists { name },
            other => CommandError::Node(other),
        }
    }
}

impl CfgTreeError for CommandError {
    fn error_code(&self) -> &'static str {
        match self {
            CommandError::NoSuchDelegate { .. } => "NO_SUCH_DELEGATE",
            CommandError::NoSuchSetting { .. } => "NO_SUCH_SETTING",
            CommandError::MalformedDirective { .. } => "MALFORMED_DIRECTIVE",
            CommandError::UnknownDelegateType { .. } => "UNKNOWN_DELEGATE_TYPE",
            CommandError::DelegateExists { .. } => "DELEGATE_EXISTS",
            CommandError::Broadcast { .. } => "BROADCAST_FAILED",
            CommandError::Io { .. } => "COMMAND_IO_ERROR",
            CommandError::LineFailed { source, .. } => source.error_code(),
            CommandError::IncludeDepthExceeded { .. } => "INCLUDE_DEPTH_EXCEEDED",
            CommandError::Expand(e) => e.error_code(),
            CommandError::Node(e) => e.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            CommandError::Io { .. } => false,
            CommandError::LineFailed { source, .. } => source.is_user_error(),
            CommandError::Expand(e) => e.is_user_error(),
            CommandError::Node(e) => e.is_user_error(),
            _ => true,
        }
    }
}
