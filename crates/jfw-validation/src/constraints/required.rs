// File: src/constraints/required.rs
// Purpose: Presence check for a single property

use crate::accessor::PropertyMap;
use crate::error::ValidationError;
use crate::violation::Violation;
use jfw_core::resource::REQUIRED_MESSAGE_KEY;
use jfw_core::{MessageAttributes, MessageInterpolator};

pub const KIND: &str = "Required";

/// Declares that `property` must not be null
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Required {
    pub property: String,
    pub message: String,
}

impl Required {
    pub fn new(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            message: String::new(),
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn template(&self) -> String {
        if self.message.is_empty() {
            format!("{{{}}}", REQUIRED_MESSAGE_KEY)
        } else {
            self.message.clone()
        }
    }

    pub fn validate<T: 'static>(
        &self,
        instance: &T,
        properties: &PropertyMap<T>,
        interpolator: &MessageInterpolator<'_>,
    ) -> Result<Option<Violation>, ValidationError> {
        if properties.get(instance, &self.property)?.is_some() {
            return Ok(None);
        }

        let mut attributes = MessageAttributes::new();
        attributes.insert("property".to_string(), self.property.clone());

        let template = self.template();
        Ok(Some(Violation {
            property_path: self.property.clone(),
            message: interpolator.interpolate(&template, &attributes),
            message_template: template,
            constraint_kind: KIND,
        }))
    }
}
