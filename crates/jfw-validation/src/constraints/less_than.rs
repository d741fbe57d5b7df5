// File: src/constraints/less_than.rs
// Purpose: `from < to` comparison between two properties of one instance

use crate::accessor::PropertyMap;
use crate::error::{ConfigurationError, ValidationError};
use crate::violation::Violation;
use jfw_core::resource::LESS_THAN_MESSAGE_KEY;
use jfw_core::{MessageAttributes, MessageInterpolator, ReportOn};
use std::cmp::Ordering;

pub const KIND: &str = "LessThan";

/// Declares that property `from` must be smaller than property `to`
///
/// With `allow_same` the two may also be equal. When either value is null
/// the constraint does not apply; presence is `Required`'s job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessThan {
    pub from: String,
    pub to: String,
    /// Message template; empty selects the catalog default
    pub message: String,
    pub allow_same: bool,
    pub report_on: ReportOn,
}

/// Outcome of a single comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Valid,
    Invalid,
}

impl Comparison {
    pub fn is_valid(self) -> bool {
        self == Self::Valid
    }
}

impl LessThan {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            message: String::new(),
            allow_same: false,
            report_on: ReportOn::default(),
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn allow_same(mut self, allow_same: bool) -> Self {
        self.allow_same = allow_same;
        self
    }

    pub fn report_on(mut self, report_on: ReportOn) -> Self {
        self.report_on = report_on;
        self
    }

    /// Property a violation is attributed to
    pub fn property_path(&self) -> &str {
        match self.report_on {
            ReportOn::From => &self.from,
            ReportOn::To => &self.to,
        }
    }

    /// Message template, falling back to the catalog default
    pub fn template(&self) -> String {
        if self.message.is_empty() {
            format!("{{{}}}", LESS_THAN_MESSAGE_KEY)
        } else {
            self.message.clone()
        }
    }

    fn attributes(&self) -> MessageAttributes {
        let mut attributes = MessageAttributes::new();
        attributes.insert("from".to_string(), self.from.clone());
        attributes.insert("to".to_string(), self.to.clone());
        attributes.insert("allow_same".to_string(), self.allow_same.to_string());
        attributes
    }

    pub fn validate<T: 'static>(
        &self,
        instance: &T,
        properties: &PropertyMap<T>,
        interpolator: &MessageInterpolator<'_>,
    ) -> Result<Option<Violation>, ValidationError> {
        let comparison = evaluate(instance, properties, &self.from, &self.to, self.allow_same)?;
        tracing::debug!(
            from = %self.from,
            to = %self.to,
            allow_same = self.allow_same,
            valid = comparison.is_valid(),
            "evaluated LessThan"
        );

        if comparison.is_valid() {
            return Ok(None);
        }

        let template = self.template();
        Ok(Some(Violation {
            property_path: self.property_path().to_string(),
            message: interpolator.interpolate(&template, &self.attributes()),
            message_template: template,
            constraint_kind: KIND,
        }))
    }
}

/// Compare properties `from` and `to` of `instance`
///
/// Both getters are always read, so a failing getter is reported even when
/// the other side is null.
pub fn evaluate<T: 'static>(
    instance: &T,
    properties: &PropertyMap<T>,
    from: &str,
    to: &str,
    allow_same: bool,
) -> Result<Comparison, ValidationError> {
    properties.check(from)?;
    properties.check(to)?;

    let lhs = properties.get(instance, from)?;
    let rhs = properties.get(instance, to)?;

    let (Some(lhs), Some(rhs)) = (lhs, rhs) else {
        return Ok(Comparison::Valid);
    };

    match lhs.compare(&rhs) {
        Some(Ordering::Less) => Ok(Comparison::Valid),
        Some(Ordering::Equal) if allow_same => Ok(Comparison::Valid),
        Some(_) => Ok(Comparison::Invalid),
        // NaN
        None if lhs.is_comparable_with(&rhs) => Ok(Comparison::Invalid),
        None => Err(ConfigurationError::Incomparable {
            from: from.to_string(),
            to: to.to_string(),
            from_kind: lhs.kind(),
            to_kind: rhs.kind(),
        }
        .into()),
    }
}
