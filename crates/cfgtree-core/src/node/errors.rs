//! Node-level error types: schema violations and value parsing failures.

use crate::errors::CfgTreeError;

#[derive(Debug, thiserror::Error)]
pub enum NodeError {
    #[error("Value '{name}' is already registered")]
    ValueAlreadyRegistered { name: String },

    #[error("Delegate '{name}' is already registered")]
    DelegateAlreadyRegistered { name: String },

    #[error("No such setting '{name}'")]
    UnknownValue { name: String },

    #[error("No such delegate '{name}'")]
    UnknownDelegate { name: String },

    #[error("Value '{name}' holds {found} token(s), expected {expected}")]
    ArityMismatch {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("Value '{name}' contains non-numeric token '{token}'")]
    NotNumeric { name: String, token: String },

    #[error("Failed to initialise '{node}': {message}")]
    InitFailed { node: String, message: String },
}

impl NodeError {
    pub fn init_failed(node: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self::InitFailed {
            node: node.into(),
            message: message.to_string(),
        }
    }
}

impl CfgTreeError for NodeError {
    fn error_code(&self) -> &'static str {
        match self {
            NodeError::ValueAlreadyRegistered { .. } => "VALUE_ALREADY_REGISTERED",
            NodeError::DelegateAlreadyRegistered { .. } => "DELEGATE_ALREADY_REGISTERED",
            NodeError::UnknownValue { .. } => "UNKNOWN_VALUE",
            NodeError::UnknownDelegate { .. } => "UNKNOWN_DELEGATE",
            NodeError::ArityMismatch { .. } => "VALUE_ARITY_MISMATCH",
            NodeError::NotNumeric { .. } => "VALUE_NOT_NUMERIC",
            NodeError::InitFailed { .. } => "NODE_INIT_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        // Double registration is a programming error in the collaborator
        !matches!(
            self,
            NodeError::ValueAlreadyRegistered { .. } | NodeError::DelegateAlreadyRegistered { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity_mismatch_display() {
        let error = NodeError::ArityMismatch {
            name: "diamond_xyz".to_string(),
            expected: 3,
            found: 2,
        };
        assert_eq!(
            error.to_string(),
            "Value 'diamond_xyz' holds 2 token(s), expected 3"
        );
        assert_eq!(error.error_code(), "VALUE_ARITY_MISMATCH");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_double_registration_is_not_user_error() {
        let error = NodeError::ValueAlreadyRegistered {
            name: "status".to_string(),
        };
        assert!(!error.is_user_error());
    }
}
