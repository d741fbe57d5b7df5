// File: src/error.rs
// Purpose: Errors that abort validation (as opposed to violations, which are data)

use crate::accessor::BoxError;
use thiserror::Error;

/// A constraint declaration that cannot work on the validated type
///
/// These are programmer mistakes. They are never reported as violations.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("constraint on {type_name} declares an empty property name")]
    EmptyPropertyName { type_name: String },

    #[error("property `{property}` is not readable on {type_name}")]
    UnknownProperty { property: String, type_name: String },

    #[error("properties `{from}` ({from_kind}) and `{to}` ({to_kind}) cannot be compared")]
    Incomparable {
        from: String,
        to: String,
        from_kind: &'static str,
        to_kind: &'static str,
    },

    #[error("model `{0}` is not declared")]
    UnknownModel(String),
}

/// A property getter failed while a constraint was being evaluated
#[derive(Debug, Error)]
#[error("reading property `{property}` on {type_name} failed")]
pub struct InvocationError {
    pub property: String,
    pub type_name: String,
    #[source]
    pub source: BoxError,
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Invocation(#[from] InvocationError),
}

impl ValidationError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    pub fn is_invocation(&self) -> bool {
        matches!(self, Self::Invocation(_))
    }
}
