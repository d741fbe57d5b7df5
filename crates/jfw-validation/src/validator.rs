// File: src/validator.rs
// Purpose: Validator host - runs every registered constraint against an instance

use crate::accessor::PropertyMap;
use crate::constraints::Constraint;
use crate::error::{ConfigurationError, ValidationError};
use crate::record::record_properties;
use crate::violation::Violation;
use jfw_core::{MessageCatalog, MessageInterpolator, MessageSource, ModelConfig};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Registered constraints for one type
///
/// Holds no per-call state; share it behind an `Arc` and call
/// [`Validator::validate`] from any number of threads.
pub struct Validator<T> {
    properties: PropertyMap<T>,
    constraints: Vec<Constraint>,
    messages: Arc<dyn MessageSource>,
}

/// Builder for [`Validator`]; property names are checked as constraints are added
pub struct ValidatorBuilder<T> {
    properties: PropertyMap<T>,
    constraints: Vec<Constraint>,
    messages: Arc<dyn MessageSource>,
}

impl<T: 'static> Validator<T> {
    pub fn builder(properties: PropertyMap<T>) -> ValidatorBuilder<T> {
        ValidatorBuilder {
            properties,
            constraints: Vec::new(),
            messages: Arc::new(MessageCatalog::with_defaults()),
        }
    }

    /// Run every constraint against `instance`
    ///
    /// Violations are collected in registration order; one failing constraint
    /// never hides another. A configuration or invocation error aborts the
    /// call.
    pub fn validate(&self, instance: &T) -> Result<Vec<Violation>, ValidationError> {
        let interpolator = MessageInterpolator::new(self.messages.as_ref());
        let mut violations = Vec::new();

        for constraint in &self.constraints {
            match constraint.validate(instance, &self.properties, &interpolator) {
                Ok(Some(violation)) => violations.push(violation),
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!(
                        type_name = self.properties.type_name(),
                        kind = constraint.kind(),
                        error = %e,
                        "constraint evaluation aborted"
                    );
                    return Err(e);
                }
            }
        }

        Ok(violations)
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn properties(&self) -> &PropertyMap<T> {
        &self.properties
    }
}

impl Validator<Value> {
    /// Build a validator for JSON records from a declared model
    pub fn from_model(
        model: &ModelConfig,
        messages: Arc<dyn MessageSource>,
    ) -> Result<Self, ConfigurationError> {
        let builder = Validator::builder(record_properties(&model.name, &model.properties))
            .with_messages(messages)
            .constrain_all(model.constraints.iter().map(Constraint::from))?;
        Ok(builder.build())
    }
}

impl<T: 'static> ValidatorBuilder<T> {
    /// Register one constraint
    pub fn constrain(mut self, constraint: impl Into<Constraint>) -> Result<Self, ConfigurationError> {
        let constraint = constraint.into();
        constraint.check(&self.properties)?;
        self.constraints.push(constraint);
        Ok(self)
    }

    /// Register a list of constraints, evaluated independently
    pub fn constrain_all<I>(self, constraints: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator,
        I::Item: Into<Constraint>,
    {
        constraints
            .into_iter()
            .try_fold(self, |builder, constraint| builder.constrain(constraint))
    }

    /// Catalog used to resolve `{key}` placeholders in messages
    pub fn with_messages(mut self, messages: Arc<dyn MessageSource>) -> Self {
        self.messages = messages;
        self
    }

    pub fn build(self) -> Validator<T> {
        tracing::debug!(
            type_name = self.properties.type_name(),
            constraints = self.constraints.len(),
            "validator built"
        );
        Validator {
            properties: self.properties,
            constraints: self.constraints,
            messages: self.messages,
        }
    }
}

impl<T> fmt::Debug for Validator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("properties", &self.properties)
            .field("constraints", &self.constraints)
            .finish()
    }
}

impl<T> fmt::Debug for ValidatorBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorBuilder")
            .field("properties", &self.properties)
            .field("constraints", &self.constraints)
            .finish()
    }
}
