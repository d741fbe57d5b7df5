// File: src/constraints/mod.rs
// Purpose: Constraint declarations the validator host can evaluate

use crate::accessor::PropertyMap;
use crate::error::{ConfigurationError, ValidationError};
use crate::violation::Violation;
use jfw_core::{ConstraintConfig, MessageInterpolator};

pub mod less_than;
pub mod required;

use less_than::LessThan;
use required::Required;

/// Any constraint that can be registered on a validator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    LessThan(LessThan),
    Required(Required),
}

impl Constraint {
    /// Constraint kind name, e.g. `LessThan`
    pub fn kind(&self) -> &'static str {
        match self {
            Self::LessThan(_) => less_than::KIND,
            Self::Required(_) => required::KIND,
        }
    }

    /// Verify every referenced property exists on the map
    pub fn check<T: 'static>(&self, properties: &PropertyMap<T>) -> Result<(), ConfigurationError> {
        match self {
            Self::LessThan(c) => {
                properties.check(&c.from)?;
                properties.check(&c.to)
            }
            Self::Required(c) => properties.check(&c.property),
        }
    }

    /// Evaluate against one instance; `Ok(None)` when satisfied
    pub fn validate<T: 'static>(
        &self,
        instance: &T,
        properties: &PropertyMap<T>,
        interpolator: &MessageInterpolator<'_>,
    ) -> Result<Option<Violation>, ValidationError> {
        match self {
            Self::LessThan(c) => c.validate(instance, properties, interpolator),
            Self::Required(c) => c.validate(instance, properties, interpolator),
        }
    }
}

impl From<LessThan> for Constraint {
    fn from(constraint: LessThan) -> Self {
        Self::LessThan(constraint)
    }
}

impl From<Required> for Constraint {
    fn from(constraint: Required) -> Self {
        Self::Required(constraint)
    }
}

impl From<&ConstraintConfig> for Constraint {
    fn from(config: &ConstraintConfig) -> Self {
        match config {
            ConstraintConfig::LessThan {
                from,
                to,
                message,
                allow_same,
                report_on,
            } => LessThan::new(from.clone(), to.clone())
                .message(message.clone())
                .allow_same(*allow_same)
                .report_on(*report_on)
                .into(),
            ConstraintConfig::Required { property, message } => {
                Required::new(property.clone()).message(message.clone()).into()
            }
        }
    }
}
