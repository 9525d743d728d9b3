//! Factory registration errors.

use crate::errors::CfgTreeError;

#[derive(Debug, thiserror::Error)]
pub enum FactoryError {
    #[error("Delegate type '{type_name}' is already registered")]
    AlreadyRegistered { type_name: String },

    #[error("Invalid delegate type name '{type_name}'")]
    InvalidTypeName { type_name: String },
}

impl CfgTreeError for FactoryError {
    fn error_code(&self) -> &'static str {
        match self {
            FactoryError::AlreadyRegistered { .. } => "FACTORY_ALREADY_REGISTERED",
            FactoryError::InvalidTypeName { .. } => "FACTORY_INVALID_TYPE_NAME",
        }
    }
}
